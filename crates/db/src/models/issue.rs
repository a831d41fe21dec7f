//! Issue entity model, DTOs and read projections.

use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;
use tracker_core::issue_state::IssueState;
use tracker_core::lifecycle::IssueLifecycle;
use tracker_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// Full row from the `issues` table.
///
/// `state` and `previous_state` serialize as their stored codes.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Issue {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub submitter_id: DbId,
    pub assignee_id: DbId,
    pub category_id: DbId,
    #[sqlx(try_from = "String")]
    pub state: IssueState,
    #[sqlx(try_from = "String")]
    pub previous_state: IssueState,
    pub opened_at: Timestamp,
    /// Whole seconds spent open across all closings.
    pub resolution_duration: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Issue {
    /// The lifecycle fields as of the last save.
    pub fn lifecycle(&self) -> IssueLifecycle {
        IssueLifecycle {
            state: self.state,
            previous_state: self.previous_state,
            opened_at: Some(self.opened_at),
            resolution_duration: self.resolution_duration,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating an issue.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateIssue {
    pub title: String,
    pub description: String,
    pub submitter_id: DbId,
    pub assignee_id: DbId,
    pub category_id: DbId,
    #[serde(default)]
    pub state: IssueState,
}

/// DTO for updating an issue. All fields are optional.
///
/// `previous_state`, `opened_at` and `resolution_duration` are owned by the
/// lifecycle rule and cannot be set here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateIssue {
    pub title: Option<String>,
    pub description: Option<String>,
    pub submitter_id: Option<DbId>,
    pub assignee_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub state: Option<IssueState>,
}

// ---------------------------------------------------------------------------
// Read projections
// ---------------------------------------------------------------------------

/// Summary row for issue listings, with users and category by display name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct IssueSummary {
    pub id: DbId,
    pub title: String,
    pub submitter: String,
    pub assignee: String,
    #[sqlx(try_from = "String")]
    #[serde(serialize_with = "serialize_state_label")]
    pub state: IssueState,
    pub category: String,
    pub opened_at: Timestamp,
}

/// Detail row: the summary fields plus the description.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct IssueDetail {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub submitter: String,
    pub assignee: String,
    #[sqlx(try_from = "String")]
    #[serde(serialize_with = "serialize_state_label")]
    pub state: IssueState,
    pub category: String,
    pub opened_at: Timestamp,
}

/// Render a state by its human label rather than its stored code.
fn serialize_state_label<S: Serializer>(state: &IssueState, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(state.label())
}
