pub use self::{
    config::{ConfigError, REPORTER_NAME, ReporterOptions, load_options},
    filter::{FilterError, FilterSpec},
    reporter::{Reporter, spec::SpecReporter},
    writer::ReportWriter,
};

mod config;
mod duration;
mod filter;
mod reporter;
mod writer;

use std::collections::HashMap;

/// Opaque host-supplied metadata attached to fixtures and tests.
pub type Meta = serde_json::Map<String, serde_json::Value>;

/// One browser that participated in a test run.
#[derive(Debug, Clone)]
pub struct BrowserRun {
    pub test_run_id: String,
    pub pretty_user_agent: String,
}

/// Everything the host knows about a finished test.
///
/// All collection fields may be empty; the reporter renders nothing for the
/// corresponding sub-section in that case. `errs` entries arrive already
/// formatted by the host's error formatter.
#[derive(Debug, Clone, Default)]
pub struct TestRunInfo {
    pub skipped: bool,
    pub errs: Vec<String>,
    pub duration_ms: i64,
    pub unstable: bool,
    pub screenshot_path: Option<String>,
    /// Report-data lines keyed by `test_run_id`.
    pub report_data: HashMap<String, Vec<String>>,
    pub browsers: Vec<BrowserRun>,
}

/// Host-computed run summary handed to `on_run_done`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunResult {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report output: {0}")]
    Io(#[from] std::io::Error),
    #[error("warning filter failed: {0}")]
    Filter(#[from] FilterError),
}
