//! Duration formatting helpers for test titles and the run footer.

/// Escalating severity buckets for per-test duration annotations.
///
/// The thresholds (60s / 180s / 600s / 1000s) are deliberate literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DurationSeverity {
    Plain,
    Caution,
    Warning,
    Severe,
    Critical,
}

impl DurationSeverity {
    pub(crate) fn classify(duration_ms: i64) -> Self {
        if duration_ms < 60_000 {
            DurationSeverity::Plain
        } else if duration_ms < 180_000 {
            DurationSeverity::Caution
        } else if duration_ms < 600_000 {
            DurationSeverity::Warning
        } else if duration_ms < 1_000_000 {
            DurationSeverity::Severe
        } else {
            DurationSeverity::Critical
        }
    }
}

/// Converts a millisecond count into a compact human-readable phrase, e.g.
/// `1 day 3 hours 2 m 5 s`. Zero fields are omitted; only days and hours
/// get a singular/plural suffix.
pub(crate) fn humanize_ms(duration_ms: i64) -> String {
    if duration_ms <= 0 {
        return format!("Invalid duration value: {duration_ms}ms");
    }

    let total_seconds = duration_ms / 1000;
    let days = total_seconds / 86_400;
    let hours = total_seconds % 86_400 / 3600;
    let minutes = total_seconds % 3600 / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::new();

    if days > 0 {
        parts.push(format!("{days} day{}", if days > 1 { "s" } else { "" }));
    }
    if hours > 0 {
        parts.push(format!("{hours} hour{}", if hours > 1 { "s" } else { "" }));
    }
    if minutes > 0 {
        parts.push(format!("{minutes} m"));
    }
    if seconds > 0 {
        parts.push(format!("{seconds} s"));
    }

    parts.join(" ")
}

/// Formats a whole-run duration for the summary footer, e.g. `0h 01m 05s`.
pub(crate) fn format_elapsed(duration_ms: i64) -> String {
    let total_seconds = duration_ms.max(0) / 1000;
    let hours = total_seconds / 3600;
    let minutes = total_seconds % 3600 / 60;
    let seconds = total_seconds % 60;

    format!("{hours}h {minutes:02}m {seconds:02}s")
}
