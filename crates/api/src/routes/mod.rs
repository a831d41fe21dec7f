pub mod admin;
pub mod auth;
pub mod health;
pub mod issues;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (health is merged separately).
///
/// Route hierarchy:
///
/// ```text
/// /issues, /issues/                          list (public)
/// /issues/{id}, /issues/{id}/                detail (public)
///
/// /api-auth/login                            login (public)
///
/// /admin/issues                              changelist, create (staff)
/// /admin/issues/{id}                         get (staff), update, delete (superuser)
/// /admin/categories                          list (staff), create (superuser)
/// /admin/users                               list, create (superuser)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(issues::router())
        .nest("/api-auth", auth::router())
        .nest("/admin", admin::router())
}
