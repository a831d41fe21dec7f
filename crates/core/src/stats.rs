//! Resolution statistics shown above the admin issue list.

use serde::Serialize;

use crate::duration::format_duration;

/// Raw `resolution_duration` aggregates over closed issues.
///
/// Every field is `None` when there are no closed issues.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DurationAggregates {
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub avg: Option<f64>,
}

/// Display-ready statistics block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueStats {
    pub open_issues: i64,
    pub resolved_issues: i64,
    pub fastest_resolution: String,
    pub longest_resolution: String,
    pub average_resolution: String,
}

impl IssueStats {
    /// Combine state counts and duration aggregates into formatted statistics.
    ///
    /// The average is truncated to whole seconds before formatting.
    pub fn from_parts(open_issues: i64, resolved_issues: i64, durations: DurationAggregates) -> Self {
        Self {
            open_issues,
            resolved_issues,
            fastest_resolution: format_duration(durations.min),
            longest_resolution: format_duration(durations.max),
            average_resolution: format_duration(durations.avg.map(|avg| avg.trunc() as i64)),
        }
    }
}
