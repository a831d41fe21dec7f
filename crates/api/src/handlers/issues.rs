//! Handlers for the public read-only `/issues` resource.

use axum::extract::{Path, State};
use axum::Json;
use tracker_core::types::DbId;
use tracker_db::models::issue::{IssueDetail, IssueSummary};
use tracker_db::repositories::IssueRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /issues
///
/// Every issue as a summary (no description), in insertion order.
pub async fn list_issues(State(state): State<AppState>) -> AppResult<Json<Vec<IssueSummary>>> {
    let issues = IssueRepo::list_summaries(&state.pool).await?;
    Ok(Json(issues))
}

/// GET /issues/{id}
pub async fn issue_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<IssueDetail>> {
    let issue = IssueRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Issue", id))?;
    Ok(Json(issue))
}
