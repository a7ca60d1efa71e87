use std::{
    path::Path,
    time::{Duration, SystemTime},
};

use spec_plus::{
    FilterSpec, Meta, Reporter, ReporterOptions, RunResult, SpecReporter, TestRunInfo,
};

fn run_start() -> SystemTime {
    SystemTime::UNIX_EPOCH
}

fn end_after(seconds: u64) -> SystemTime {
    run_start() + Duration::from_secs(seconds)
}

fn agents(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn failing(messages: &[&str]) -> TestRunInfo {
    TestRunInfo {
        errs: messages.iter().map(|m| m.to_string()).collect(),
        ..TestRunInfo::default()
    }
}

fn skipped() -> TestRunInfo {
    TestRunInfo {
        skipped: true,
        ..TestRunInfo::default()
    }
}

#[test]
fn renders_a_failing_run() {
    let mut buf = Vec::new();
    {
        let mut reporter = SpecReporter::with_writer(&mut buf, ReporterOptions::default(), false);
        reporter
            .on_run_start(run_start(), &agents(&["Chrome 118.0 / macOS 14"]), 2)
            .unwrap();
        reporter
            .on_fixture_start("Authentication", Path::new("auth.rs"), &Meta::new())
            .unwrap();
        reporter
            .on_test_done("logs in", &TestRunInfo::default(), &Meta::new())
            .unwrap();
        reporter
            .on_test_done(
                "rejects bad password",
                &failing(&["Assertion failed: expected 403"]),
                &Meta::new(),
            )
            .unwrap();
        reporter
            .on_run_done(end_after(65), 1, &[], &RunResult::default())
            .unwrap();
    }

    let expected = "\
 Running tests in:
 - Chrome 118.0 / macOS 14

 Authentication
 \u{2713} logs in
 \u{2716} rejects bad password

   1) Assertion failed: expected 403



 1/2 failed (0h 01m 05s)
";
    assert_eq!(String::from_utf8(buf).unwrap(), expected);
}

#[test]
fn renders_an_all_passed_run_with_a_skipped_test() {
    let mut buf = Vec::new();
    {
        let mut reporter = SpecReporter::with_writer(&mut buf, ReporterOptions::default(), false);
        reporter
            .on_run_start(run_start(), &agents(&["Firefox 119 / Linux"]), 3)
            .unwrap();
        reporter
            .on_fixture_start("Checkout", Path::new("checkout.rs"), &Meta::new())
            .unwrap();
        reporter
            .on_test_done("adds to cart", &TestRunInfo::default(), &Meta::new())
            .unwrap();
        reporter
            .on_test_done("pays", &TestRunInfo::default(), &Meta::new())
            .unwrap();
        reporter
            .on_test_done("emails receipt", &skipped(), &Meta::new())
            .unwrap();
        reporter
            .on_run_done(end_after(5), 3, &[], &RunResult::default())
            .unwrap();
    }

    let expected = "\
 Running tests in:
 - Firefox 119 / Linux

 Checkout
 \u{2713} adds to cart
 \u{2713} pays
 - emails receipt


 3 passed (0h 00m 05s)
 1 skipped
";
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(out, expected);
    assert!(!out.contains("Warnings"));
}

#[test]
fn renders_filtered_warnings_with_the_original_count() {
    let mut buf = Vec::new();
    {
        let options = ReporterOptions {
            filter: vec![FilterSpec::Substring("deprecated".into())],
            ..ReporterOptions::default()
        };
        let mut reporter = SpecReporter::with_writer(&mut buf, options, false);
        reporter
            .on_run_start(run_start(), &agents(&["Chrome 118.0 / macOS 14"]), 1)
            .unwrap();
        reporter
            .on_fixture_start("Payments", Path::new("payments.rs"), &Meta::new())
            .unwrap();
        reporter
            .on_test_done("charges the card", &TestRunInfo::default(), &Meta::new())
            .unwrap();
        reporter
            .on_run_done(
                run_start(),
                1,
                &[
                    "warn a".to_string(),
                    "warn b is deprecated".to_string(),
                    "warn c".to_string(),
                ],
                &RunResult::default(),
            )
            .unwrap();
    }

    let expected = "\
 Running tests in:
 - Chrome 118.0 / macOS 14

 Payments
 \u{2713} charges the card


 1 passed (0h 00m 00s)

 Warnings (2):
 --
  warn a
 --
  warn c

 Non filtered warnings count: 3
";
    assert_eq!(String::from_utf8(buf).unwrap(), expected);
}

#[test]
fn unfiltered_warnings_omit_the_original_count_note() {
    let mut buf = Vec::new();
    {
        let mut reporter = SpecReporter::with_writer(&mut buf, ReporterOptions::default(), false);
        reporter
            .on_run_start(run_start(), &agents(&["Chrome 118.0 / macOS 14"]), 1)
            .unwrap();
        reporter
            .on_fixture_start("Payments", Path::new("payments.rs"), &Meta::new())
            .unwrap();
        reporter
            .on_test_done("charges the card", &TestRunInfo::default(), &Meta::new())
            .unwrap();
        reporter
            .on_run_done(
                run_start(),
                1,
                &["only warning".to_string()],
                &RunResult::default(),
            )
            .unwrap();
    }

    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains(" Warnings (1):\n --\n  only warning\n"));
    assert!(!out.contains("Non filtered warnings count"));
}

#[test]
fn progress_counters_track_finished_tests_and_error_blocks() {
    let mut buf = Vec::new();
    {
        let options = ReporterOptions {
            show_progress: true,
            ..ReporterOptions::default()
        };
        let mut reporter = SpecReporter::with_writer(&mut buf, options, false);
        reporter
            .on_run_start(run_start(), &agents(&["A"]), 4)
            .unwrap();
        reporter
            .on_fixture_start("F1", Path::new("f1.rs"), &Meta::new())
            .unwrap();
        reporter
            .on_test_done("a", &TestRunInfo::default(), &Meta::new())
            .unwrap();
        reporter.on_test_done("b", &skipped(), &Meta::new()).unwrap();
        reporter
            .on_fixture_start("F2", Path::new("f2.rs"), &Meta::new())
            .unwrap();
        reporter
            .on_test_done("c", &failing(&["boom"]), &Meta::new())
            .unwrap();
        reporter
            .on_fixture_start("F3", Path::new("f3.rs"), &Meta::new())
            .unwrap();
        reporter
            .on_test_done("d", &TestRunInfo::default(), &Meta::new())
            .unwrap();
        reporter
            .on_run_done(end_after(10), 2, &[], &RunResult::default())
            .unwrap();
    }

    let expected = "\
 Running tests in:
 - A

 F1
 \u{2713} a
 - b

 Completed tests: 1/4

 F2
 \u{2716} c

   1) boom



 Completed tests: 2/4

 F3
 \u{2713} d


 2/4 failed (0h 00m 10s)
 1 skipped
";
    assert_eq!(String::from_utf8(buf).unwrap(), expected);
}
