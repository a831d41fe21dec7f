//! Startup creation of the configured superuser account.

use tracker_core::error::CoreError;
use tracker_core::validation::{validate_password_strength, validate_required_text, MAX_USERNAME_LEN};
use tracker_db::models::user::CreateUser;
use tracker_db::repositories::UserRepo;
use tracker_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::BootstrapAdmin;
use crate::error::{AppError, AppResult};

/// Create the bootstrap superuser unless an account with that username exists.
///
/// Returns `true` if a new account was created. The username and password
/// are held to the same rules as accounts created through the admin API.
pub async fn ensure_superuser(pool: &DbPool, admin: &BootstrapAdmin) -> AppResult<bool> {
    validate_required_text("ADMIN_USERNAME", &admin.username, Some(MAX_USERNAME_LEN))
        .and_then(|()| validate_password_strength(&admin.password))
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    if UserRepo::find_by_username(pool, &admin.username)
        .await?
        .is_some()
    {
        tracing::debug!(username = %admin.username, "Bootstrap superuser already exists");
        return Ok(false);
    }

    let password_hash = hash_password(&admin.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: admin.username.clone(),
            email: admin.email.clone(),
            password_hash,
            is_staff: true,
            is_superuser: true,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Bootstrap superuser created");
    Ok(true)
}
