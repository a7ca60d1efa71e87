use std::{fmt, path::Path, time::SystemTime};

pub(super) mod spec;

use crate::{Meta, ReportError, RunResult, TestRunInfo};

/// Lifecycle callbacks invoked by the host runner, in a fixed order per run:
/// one `on_run_start`, then fixture starts interleaved with test completions,
/// then exactly one `on_run_done`.
pub trait Reporter {
    fn name(&self) -> &'static str;
    fn on_run_start(
        &mut self,
        start_time: SystemTime,
        user_agents: &[String],
        test_count: usize,
    ) -> Result<(), ReportError>;
    fn on_fixture_start(
        &mut self,
        name: &str,
        file_path: &Path,
        meta: &Meta,
    ) -> Result<(), ReportError>;
    fn on_test_done(
        &mut self,
        name: &str,
        info: &TestRunInfo,
        meta: &Meta,
    ) -> Result<(), ReportError>;
    fn on_run_done(
        &mut self,
        end_time: SystemTime,
        passed: usize,
        warnings: &[String],
        result: &RunResult,
    ) -> Result<(), ReportError>;
}

impl fmt::Debug for dyn Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reporter: {}", self.name())
    }
}
