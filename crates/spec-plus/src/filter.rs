use regex::Regex;
use serde::Deserialize;

/// One warning matcher as it appears in the configuration file: a bare
/// string (substring match) or `{ "pattern": "<regex>" }`. Anything else is
/// captured as-is and rejected when the filter is evaluated.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FilterSpec {
    Substring(String),
    Pattern { pattern: String },
    Unsupported(serde_json::Value),
}

impl FilterSpec {
    fn compile(&self) -> Result<Matcher, FilterError> {
        match self {
            FilterSpec::Substring(needle) => Ok(Matcher::Substring(needle.clone())),
            FilterSpec::Pattern { pattern } => Ok(Matcher::Pattern(Regex::new(pattern)?)),
            FilterSpec::Unsupported(value) => Err(FilterError::Unsupported(value.clone())),
        }
    }
}

enum Matcher {
    Substring(String),
    Pattern(Regex),
}

impl Matcher {
    fn suppresses(&self, message: &str) -> bool {
        match self {
            Matcher::Substring(needle) => message.contains(needle.as_str()),
            Matcher::Pattern(pattern) => pattern.is_match(message),
        }
    }
}

/// Narrows `warnings` to those no matcher hits. An empty filter list keeps
/// everything. Fails on the first unsupported or invalid matcher.
pub(crate) fn apply_filter(
    specs: &[FilterSpec],
    warnings: &[String],
) -> Result<Vec<String>, FilterError> {
    if specs.is_empty() {
        return Ok(warnings.to_vec());
    }

    let matchers = specs
        .iter()
        .map(FilterSpec::compile)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(warnings
        .iter()
        .filter(|message| matchers.iter().all(|matcher| !matcher.suppresses(message)))
        .cloned()
        .collect())
}

#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("unsupported warning filter entry: {0}")]
    Unsupported(serde_json::Value),
    #[error("invalid warning filter pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}
