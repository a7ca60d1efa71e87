use std::io;

use console::measure_text_width;

const DEFAULT_WRAP_WIDTH: usize = 80;

/// Line-oriented writer with indentation and optional word wrap.
///
/// `write` only appends to the pending line; `newline` is the single point
/// where bytes reach the sink. A `newline` with nothing pending emits a bare
/// blank line. The indent active when a line receives its first fragment
/// sticks for that whole line, wrap continuations included.
#[derive(Debug)]
pub struct ReportWriter<W> {
    out: W,
    indent: usize,
    word_wrap: bool,
    wrap_width: usize,
    pending: String,
    pending_indent: usize,
}

impl<W: io::Write> ReportWriter<W> {
    pub fn new(out: W) -> Self {
        ReportWriter {
            out,
            indent: 0,
            word_wrap: false,
            wrap_width: DEFAULT_WRAP_WIDTH,
            pending: String::new(),
            pending_indent: 0,
        }
    }

    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    /// Sets the indentation level (one space per level) for lines started
    /// after this call.
    pub fn set_indent(&mut self, level: usize) -> &mut Self {
        self.indent = level;
        self
    }

    pub fn use_word_wrap(&mut self, enabled: bool) -> &mut Self {
        self.word_wrap = enabled;
        self
    }

    /// Appends text to the pending line. Embedded newlines flush the
    /// intermediate lines immediately.
    pub fn write(&mut self, text: &str) -> io::Result<&mut Self> {
        let mut segments = text.split('\n');
        if let Some(first) = segments.next() {
            self.push(first);
        }
        for segment in segments {
            self.flush_pending()?;
            self.push(segment);
        }
        Ok(self)
    }

    /// Ends the pending line, or emits a blank line if nothing is pending.
    pub fn newline(&mut self) -> io::Result<&mut Self> {
        self.flush_pending()?;
        Ok(self)
    }

    fn push(&mut self, text: &str) {
        if self.pending.is_empty() {
            self.pending_indent = self.indent;
        }
        self.pending.push_str(text);
    }

    fn flush_pending(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            self.out.write_all(b"\n")?;
            return Ok(());
        }

        let indent = " ".repeat(self.pending_indent);
        if self.word_wrap {
            let width = self.wrap_width.saturating_sub(self.pending_indent).max(1);
            for chunk in wrap_line(&self.pending, width) {
                writeln!(self.out, "{indent}{chunk}")?;
            }
        } else {
            writeln!(self.out, "{indent}{}", self.pending)?;
        }
        self.pending.clear();
        Ok(())
    }
}

/// Greedy space-separated wrap; widths are measured ANSI-aware so styled
/// text does not count its escape codes. A single word longer than the
/// width stays on its own line.
fn wrap_line(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        if measure_text_width(&current) + 1 + measure_text_width(word) <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
