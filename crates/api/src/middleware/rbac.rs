//! Privilege extractors for the admin surface.
//!
//! Each extractor wraps [`AuthUser`] and rejects with 403 unless the
//! matching `tracker_core::permissions` predicate holds.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tracker_core::permissions::{can_manage_reference_data, can_view_issues};

use super::auth::{ensure_permitted, AuthUser};
use crate::error::AppError;
use crate::state::AppState;

/// Requires a staff (or superuser) account.
///
/// ```ignore
/// async fn changelist(RequireStaff(user): RequireStaff) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireStaff(pub AuthUser);

impl FromRequestParts<AppState> for RequireStaff {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        ensure_permitted(can_view_issues(&user.principal), "Staff account required")?;
        Ok(RequireStaff(user))
    }
}

/// Requires a superuser account.
pub struct RequireSuperuser(pub AuthUser);

impl FromRequestParts<AppState> for RequireSuperuser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        ensure_permitted(
            can_manage_reference_data(&user.principal),
            "Superuser account required",
        )?;
        Ok(RequireSuperuser(user))
    }
}
