//! Compact human-readable rendering of elapsed seconds.

/// Seconds in a day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Seconds in an hour.
pub const SECONDS_PER_HOUR: i64 = 3_600;

/// Seconds in a minute.
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Placeholder rendered when there is no value (e.g. an aggregate over no rows).
pub const NO_DURATION: &str = "-";

/// Maximum number of unit components included in the output.
const MAX_COMPONENTS: usize = 2;

/// Format a count of seconds as at most two non-zero unit components.
///
/// Components are taken in `d`, `h`, `m`, `s` order and zero-valued ones are
/// dropped wherever they occur, so `23d 0h 4m 6s` renders as `"23d 4m"`.
/// A zero duration renders as `"0s"` and `None` as `"-"`.
pub fn format_duration(total_seconds: Option<i64>) -> String {
    let Some(total) = total_seconds else {
        return NO_DURATION.to_string();
    };

    let days = total / SECONDS_PER_DAY;
    let rem = total % SECONDS_PER_DAY;
    let hours = rem / SECONDS_PER_HOUR;
    let rem = rem % SECONDS_PER_HOUR;
    let minutes = rem / SECONDS_PER_MINUTE;
    let seconds = rem % SECONDS_PER_MINUTE;

    let parts: Vec<String> = [(days, 'd'), (hours, 'h'), (minutes, 'm'), (seconds, 's')]
        .into_iter()
        .filter(|(value, _)| *value != 0)
        .take(MAX_COMPONENTS)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect();

    if parts.is_empty() {
        return "0s".to_string();
    }
    parts.join(" ")
}
