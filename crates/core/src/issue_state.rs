//! Open/closed state of an issue.
//!
//! States are persisted as fixed three-character codes (`OPN`, `CLS`) and
//! rendered to API clients by their human label.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Persisted code for [`IssueState::Open`].
pub const STATE_OPEN: &str = "OPN";

/// Persisted code for [`IssueState::Closed`].
pub const STATE_CLOSED: &str = "CLS";

/// Lifecycle state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IssueState {
    #[default]
    #[serde(rename = "OPN")]
    Open,
    #[serde(rename = "CLS")]
    Closed,
}

impl IssueState {
    /// The three-character code stored in the database.
    pub fn code(self) -> &'static str {
        match self {
            IssueState::Open => STATE_OPEN,
            IssueState::Closed => STATE_CLOSED,
        }
    }

    /// The label shown to API clients.
    pub fn label(self) -> &'static str {
        match self {
            IssueState::Open => "Open",
            IssueState::Closed => "Closed",
        }
    }

    /// Parse a stored state code.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code {
            STATE_OPEN => Ok(IssueState::Open),
            STATE_CLOSED => Ok(IssueState::Closed),
            other => Err(CoreError::UnknownState(other.to_string())),
        }
    }
}

impl TryFrom<String> for IssueState {
    type Error = CoreError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        IssueState::from_code(&code)
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for state in [IssueState::Open, IssueState::Closed] {
            assert_eq!(IssueState::from_code(state.code()).unwrap(), state);
        }
    }

    #[test]
    fn test_codes_are_three_chars() {
        assert_eq!(IssueState::Open.code().len(), 3);
        assert_eq!(IssueState::Closed.code().len(), 3);
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_matches!(
            IssueState::from_code("NEW"),
            Err(CoreError::UnknownState(code)) if code == "NEW"
        );
    }

    #[test]
    fn test_label_is_not_code() {
        assert_eq!(IssueState::Open.label(), "Open");
        assert_eq!(IssueState::Closed.label(), "Closed");
        assert_eq!(IssueState::Closed.to_string(), "Closed");
    }

    #[test]
    fn test_default_is_open() {
        assert_eq!(IssueState::default(), IssueState::Open);
    }
}
