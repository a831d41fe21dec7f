//! Route definitions for the `/admin` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`.
///
/// Privileges are enforced by handler extractors.
///
/// ```text
/// GET    /issues            -> issue_changelist
/// POST   /issues            -> create_issue
/// GET    /issues/{id}       -> get_issue
/// PUT    /issues/{id}       -> update_issue
/// DELETE /issues/{id}       -> delete_issue
/// GET    /categories        -> list_categories
/// POST   /categories        -> create_category
/// GET    /users             -> list_users
/// POST   /users             -> create_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/issues",
            get(admin::issue_changelist).post(admin::create_issue),
        )
        .route(
            "/issues/{id}",
            get(admin::get_issue)
                .put(admin::update_issue)
                .delete(admin::delete_issue),
        )
        .route(
            "/categories",
            get(admin::list_categories).post(admin::create_category),
        )
        .route("/users", get(admin::list_users).post(admin::create_user))
}
