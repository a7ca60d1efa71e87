use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::filter::FilterSpec;

/// Reporter entry name this crate answers to in the runner configuration.
pub const REPORTER_NAME: &str = "spec-plus";

/// Candidate configuration files, highest priority first.
const CONFIG_CANDIDATES: &[&str] = &[".e2erc.json", "e2erc.json"];

/// Options resolved once before the run starts; immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct ReporterOptions {
    pub show_progress: bool,
    pub show_duration: bool,
    pub filter: Vec<FilterSpec>,
}

#[derive(Debug, Deserialize)]
struct RunnerConfig {
    #[serde(default)]
    reporter: Vec<ReporterEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReporterEntry {
    name: String,
    #[serde(default)]
    filter: Vec<FilterSpec>,
    #[serde(default)]
    show_progress: bool,
    #[serde(default)]
    show_duration: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Returns the first existing candidate under `dir`, or `None`.
fn resolve_config_path(dir: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|candidate| dir.join(candidate))
        .find(|path| path.exists())
}

/// Loads the options for the `spec-plus` reporter entry from the runner
/// configuration in `dir`.
///
/// A missing configuration file is not an error: one diagnostic is logged
/// and defaults are returned. A present entry list without a `spec-plus`
/// entry silently yields defaults as well.
pub fn load_options(dir: &Path) -> Result<ReporterOptions, ConfigError> {
    let Some(path) = resolve_config_path(dir) else {
        tracing::warn!(
            "no {} found in {}, using default reporter options",
            CONFIG_CANDIDATES.join(" or "),
            dir.display()
        );
        return Ok(ReporterOptions::default());
    };

    let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config: RunnerConfig =
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })?;

    let mut options = ReporterOptions::default();
    if let Some(entry) = config.reporter.into_iter().find(|e| e.name == REPORTER_NAME) {
        options.filter = entry.filter;
        options.show_progress = entry.show_progress;
        options.show_duration = entry.show_duration;
    }

    tracing::debug!(?options, "resolved reporter options");
    Ok(options)
}
