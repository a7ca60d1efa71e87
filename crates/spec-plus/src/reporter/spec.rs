use std::{io, path::Path, time::SystemTime};

use console::{Style, Term, measure_text_width};

use crate::{
    Meta, ReportError, RunResult, TestRunInfo,
    config::{REPORTER_NAME, ReporterOptions},
    duration::{self, DurationSeverity},
    filter,
    reporter::Reporter,
    writer::ReportWriter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TestStatus {
    Skipped,
    Failed,
    Passed,
}

impl TestStatus {
    fn classify(info: &TestRunInfo) -> Self {
        if info.skipped {
            TestStatus::Skipped
        } else if !info.errs.is_empty() {
            TestStatus::Failed
        } else {
            TestStatus::Passed
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            TestStatus::Skipped => "-",
            TestStatus::Failed => "\u{2716}",
            TestStatus::Passed => "\u{2713}",
        }
    }

    fn symbol_style(self) -> Style {
        match self {
            TestStatus::Skipped => Style::new().cyan(),
            TestStatus::Failed => Style::new().red().bold(),
            TestStatus::Passed => Style::new().green(),
        }
    }

    fn name_style(self) -> Style {
        match self {
            TestStatus::Skipped => Style::new().cyan(),
            TestStatus::Failed => Style::new().red().bold(),
            TestStatus::Passed => Style::new().black().bright(),
        }
    }
}

fn severity_style(severity: DurationSeverity) -> Style {
    match severity {
        DurationSeverity::Plain => Style::new(),
        DurationSeverity::Caution => Style::new().yellow(),
        // closest ANSI approximation of orange
        DurationSeverity::Warning => Style::new().color256(214),
        DurationSeverity::Severe => Style::new().red(),
        DurationSeverity::Critical => Style::new().red().bold(),
    }
}

/// Style gate: with colors disabled every application is the identity, so
/// recorded output stays byte-stable.
#[derive(Debug, Clone, Copy)]
struct Palette {
    colors: bool,
}

impl Palette {
    fn apply(&self, style: Style, text: impl std::fmt::Display) -> String {
        if self.colors {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Prefixes the first line of `message` with `prefix` and aligns the
/// remaining lines under it.
fn format_error(message: &str, prefix: &str) -> String {
    let align = " ".repeat(measure_text_width(prefix));
    let mut out = String::new();
    for (index, line) in message.lines().enumerate() {
        if index == 0 {
            out.push_str(prefix);
        } else {
            out.push('\n');
            out.push_str(&align);
        }
        out.push_str(line);
    }
    out
}

/// Spec-style console reporter. One instance per run; the host drives it
/// through the [`Reporter`] callbacks strictly sequentially.
#[derive(Debug)]
pub struct SpecReporter<W> {
    writer: ReportWriter<W>,
    palette: Palette,
    options: ReporterOptions,
    start_time: Option<SystemTime>,
    test_count: usize,
    tests_finished: usize,
    skipped: usize,
    after_error_list: bool,
}

impl SpecReporter<Term> {
    pub fn stdout(options: ReporterOptions) -> Self {
        Self::with_writer(Term::stdout(), options, console::colors_enabled())
    }
}

impl Default for SpecReporter<Term> {
    fn default() -> Self {
        SpecReporter::stdout(ReporterOptions::default())
    }
}

impl<W: io::Write> SpecReporter<W> {
    pub fn with_writer(out: W, options: ReporterOptions, colors: bool) -> Self {
        SpecReporter {
            writer: ReportWriter::new(out),
            palette: Palette { colors },
            options,
            start_time: None,
            test_count: 0,
            tests_finished: 0,
            skipped: 0,
            after_error_list: false,
        }
    }

    fn duration_suffix(&self, duration_ms: i64) -> String {
        let human = duration::humanize_ms(duration_ms);
        let style = severity_style(DurationSeverity::classify(duration_ms));
        format!(" ({})", self.palette.apply(style, human))
    }

    fn render_progress(&mut self) -> io::Result<()> {
        if self.options.show_progress && self.tests_finished > 0 {
            self.writer
                .newline()?
                .set_indent(1)
                .write(&format!(
                    "Completed tests: {}/{}",
                    self.tests_finished, self.test_count
                ))?
                .newline()?;
            if self.after_error_list {
                self.writer.newline()?;
            }
        }
        Ok(())
    }

    fn render_report_data(&mut self, info: &TestRunInfo) -> io::Result<()> {
        if info.report_data.values().all(|lines| lines.is_empty()) {
            return Ok(());
        }

        let render_browser_name = info.browsers.len() > 1;
        let data_indent = if render_browser_name { 3 } else { 2 };

        self.writer.newline()?.set_indent(1).write("Report data:")?;

        for browser in &info.browsers {
            let Some(lines) = info.report_data.get(&browser.test_run_id) else {
                continue;
            };

            if render_browser_name {
                self.writer
                    .set_indent(2)
                    .newline()?
                    .write(&browser.pretty_user_agent)?;
            }

            for line in lines {
                self.writer
                    .set_indent(data_indent)
                    .newline()?
                    .write(&format!("- {line}"))?;
            }
        }
        Ok(())
    }

    fn render_errors(&mut self, errs: &[String]) -> io::Result<()> {
        self.writer.set_indent(3).newline()?;

        for (index, err) in errs.iter().enumerate() {
            let prefix = self
                .palette
                .apply(Style::new().red(), format!("{}) ", index + 1));
            self.writer
                .newline()?
                .write(&format_error(err, &prefix))?
                .newline()?
                .newline()?;
        }
        Ok(())
    }

    fn render_warnings(&mut self, warnings: &[String]) -> Result<(), ReportError> {
        let kept = filter::apply_filter(&self.options.filter, warnings)?;

        let header = self.palette.apply(
            Style::new().bold().yellow(),
            format!("Warnings ({}):", kept.len()),
        );
        self.writer.newline()?.set_indent(1).write(&header)?.newline()?;

        for message in &kept {
            let separator = self.palette.apply(Style::new().bold().yellow(), "--");
            self.writer
                .set_indent(1)
                .write(&separator)?
                .newline()?
                .set_indent(2)
                .write(message)?
                .newline()?;
        }

        if !self.options.filter.is_empty() && kept.len() != warnings.len() {
            self.writer
                .newline()?
                .set_indent(1)
                .write(&format!("Non filtered warnings count: {}", warnings.len()))?
                .newline()?;
        }
        Ok(())
    }
}

impl<W: io::Write> Reporter for SpecReporter<W> {
    fn name(&self) -> &'static str {
        REPORTER_NAME
    }

    fn on_run_start(
        &mut self,
        start_time: SystemTime,
        user_agents: &[String],
        test_count: usize,
    ) -> Result<(), ReportError> {
        self.start_time = Some(start_time);
        self.test_count = test_count;

        let header = self.palette.apply(Style::new().bold(), "Running tests in:");
        self.writer
            .set_indent(1)
            .use_word_wrap(true)
            .write(&header)?
            .newline()?;

        for user_agent in user_agents {
            let line = format!("- {}", self.palette.apply(Style::new().blue(), user_agent));
            self.writer.write(&line)?.newline()?;
        }
        Ok(())
    }

    fn on_fixture_start(
        &mut self,
        name: &str,
        _file_path: &Path,
        _meta: &Meta,
    ) -> Result<(), ReportError> {
        self.render_progress()?;

        self.writer.set_indent(1).use_word_wrap(true);

        if self.after_error_list {
            self.after_error_list = false;
        } else {
            self.writer.newline()?;
        }

        self.writer.write(name)?.newline()?;
        Ok(())
    }

    fn on_test_done(
        &mut self,
        name: &str,
        info: &TestRunInfo,
        _meta: &Meta,
    ) -> Result<(), ReportError> {
        if !info.skipped {
            self.tests_finished += 1;
        }

        let status = TestStatus::classify(info);
        if status == TestStatus::Skipped {
            self.skipped += 1;
        }
        debug_assert!(self.tests_finished + self.skipped <= self.test_count);

        let mut title = format!(
            "{} {}",
            self.palette.apply(status.symbol_style(), status.symbol()),
            self.palette.apply(status.name_style(), name)
        );

        self.writer.set_indent(1).use_word_wrap(true);

        if self.options.show_duration && info.duration_ms > 0 {
            title.push_str(&self.duration_suffix(info.duration_ms));
        }

        if info.unstable {
            title.push_str(&self.palette.apply(Style::new().yellow(), " (unstable)"));
        }

        if let Some(path) = &info.screenshot_path {
            title.push_str(&format!(
                " (screenshots: {})",
                self.palette
                    .apply(Style::new().underlined().black().bright(), path)
            ));
        }

        self.writer.write(&title)?;

        self.render_report_data(info)?;

        let has_errors = !info.errs.is_empty();
        if has_errors {
            self.render_errors(&info.errs)?;
        }
        self.after_error_list = has_errors;

        self.writer.newline()?;
        Ok(())
    }

    fn on_run_done(
        &mut self,
        end_time: SystemTime,
        passed: usize,
        warnings: &[String],
        _result: &RunResult,
    ) -> Result<(), ReportError> {
        let duration_ms = self
            .start_time
            .and_then(|start| end_time.duration_since(start).ok())
            .map_or(0, |elapsed| elapsed.as_millis() as i64);
        let elapsed = duration::format_elapsed(duration_ms);

        let mut footer = if passed == self.test_count {
            self.palette.apply(
                Style::new().bold().green(),
                format!("{} passed", self.test_count),
            )
        } else {
            self.palette.apply(
                Style::new().bold().red(),
                format!(
                    "{}/{} failed",
                    self.test_count.saturating_sub(passed),
                    self.test_count
                ),
            )
        };
        footer.push_str(
            &self
                .palette
                .apply(Style::new().black().bright(), format!(" ({elapsed})")),
        );

        if !self.after_error_list {
            self.writer.newline()?;
        }

        self.writer.set_indent(1).use_word_wrap(true);
        self.writer.newline()?.write(&footer)?.newline()?;

        if self.skipped > 0 {
            let line = self
                .palette
                .apply(Style::new().cyan(), format!("{} skipped", self.skipped));
            self.writer.write(&line)?.newline()?;
        }

        if !warnings.is_empty() {
            self.render_warnings(warnings)?;
        }
        Ok(())
    }
}
