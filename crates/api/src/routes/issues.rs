//! Route definitions for the public `/issues` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::issues;
use crate::state::AppState;

/// Read-only issue routes, with and without the trailing slash.
///
/// ```text
/// GET /issues        -> list_issues
/// GET /issues/       -> list_issues
/// GET /issues/{id}   -> issue_detail
/// GET /issues/{id}/  -> issue_detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/issues", get(issues::list_issues))
        .route("/issues/", get(issues::list_issues))
        .route("/issues/{id}", get(issues::issue_detail))
        .route("/issues/{id}/", get(issues::issue_detail))
}
