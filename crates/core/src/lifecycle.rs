//! Issue lifecycle rule.
//!
//! Every save of an issue passes through [`apply_transition`] before the row
//! is written. The rule compares the requested `state` against the state
//! recorded at the previous save and keeps `opened_at` and the accumulated
//! `resolution_duration` consistent with the transition:
//!
//! - open -> closed adds the time spent open (whole seconds) to the duration.
//! - closed -> open restarts the open clock.
//! - no change leaves both untouched.

use crate::issue_state::IssueState;
use crate::types::Timestamp;

/// The fields of an issue that the lifecycle rule reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueLifecycle {
    /// The state requested by this save.
    pub state: IssueState,
    /// The state as of the end of the previous save.
    pub previous_state: IssueState,
    /// When the issue last entered the open state. `None` until first saved.
    pub opened_at: Option<Timestamp>,
    /// Cumulative whole seconds spent open across all closings.
    pub resolution_duration: i64,
}

impl IssueLifecycle {
    /// Lifecycle of an issue that has never been saved.
    ///
    /// New issues behave as if their previous state was open, so creating an
    /// issue directly in the closed state counts as a transition with no open
    /// interval behind it.
    pub fn unsaved(state: IssueState) -> Self {
        Self {
            state,
            previous_state: IssueState::Open,
            opened_at: None,
            resolution_duration: 0,
        }
    }

    /// Whether this save changes the state.
    pub fn is_transition(&self) -> bool {
        self.state != self.previous_state
    }
}

/// Apply the lifecycle rule for a save happening at `now`.
///
/// After the call `previous_state == state` and, for a first save,
/// `opened_at` is set to `now` if nothing else set it.
pub fn apply_transition(mut lifecycle: IssueLifecycle, now: Timestamp) -> IssueLifecycle {
    if lifecycle.is_transition() {
        match lifecycle.state {
            IssueState::Closed => {
                if let Some(opened_at) = lifecycle.opened_at {
                    let open_secs = (now - opened_at).num_seconds().max(0);
                    lifecycle.resolution_duration += open_secs;
                }
            }
            IssueState::Open => {
                lifecycle.opened_at = Some(now);
            }
        }
    }

    lifecycle.previous_state = lifecycle.state;
    lifecycle.opened_at.get_or_insert(now);
    lifecycle
}
