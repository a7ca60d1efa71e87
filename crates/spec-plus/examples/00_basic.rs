use std::{
    path::Path,
    time::{Duration, SystemTime},
};

use spec_plus::{
    Meta, Reporter, ReporterOptions, RunResult, SpecReporter, TestRunInfo, load_options,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let options = load_options(Path::new(".")).unwrap_or_else(|err| {
        tracing::warn!("{err}, using default reporter options");
        ReporterOptions::default()
    });
    let mut reporter = SpecReporter::stdout(options);

    let start = SystemTime::now();
    reporter.on_run_start(start, &["Chromium 120.0 / Linux".to_string()], 3)?;

    reporter.on_fixture_start("Login form", Path::new("login.rs"), &Meta::new())?;
    reporter.on_test_done(
        "accepts valid credentials",
        &TestRunInfo {
            duration_ms: 1_200,
            ..TestRunInfo::default()
        },
        &Meta::new(),
    )?;
    reporter.on_test_done(
        "rejects a wrong password",
        &TestRunInfo {
            errs: vec!["Assertion failed: expected the error banner to be visible".to_string()],
            duration_ms: 900,
            ..TestRunInfo::default()
        },
        &Meta::new(),
    )?;

    reporter.on_fixture_start("Password reset", Path::new("reset.rs"), &Meta::new())?;
    reporter.on_test_done(
        "sends the reset email",
        &TestRunInfo {
            skipped: true,
            ..TestRunInfo::default()
        },
        &Meta::new(),
    )?;

    reporter.on_run_done(
        start + Duration::from_secs(7),
        1,
        &["The '--no-sandbox' flag is set".to_string()],
        &RunResult {
            passed: 1,
            failed: 1,
            skipped: 1,
        },
    )?;

    Ok(())
}
