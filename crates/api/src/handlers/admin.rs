//! Handlers for the `/admin` resource: tracked issues, categories and users.
//!
//! Viewing and creating issues requires a staff account via
//! [`RequireStaff`]; changing or deleting them, and managing categories and
//! users, requires a superuser via [`RequireSuperuser`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracker_core::duration::format_duration;
use tracker_core::error::CoreError;
use tracker_core::issue_state::IssueState;
use tracker_core::permissions::{can_change_issues, can_create_issues, can_delete_issues};
use tracker_core::stats::IssueStats;
use tracker_core::types::{DbId, Timestamp};
use tracker_core::validation::{
    validate_category_name, validate_description, validate_password_strength,
    validate_required_text, validate_title, MAX_USERNAME_LEN,
};
use tracker_db::models::category::{Category, CreateCategory};
use tracker_db::models::issue::{CreateIssue, Issue, IssueSummary, UpdateIssue};
use tracker_db::models::user::{CreateUser, UserResponse};
use tracker_db::repositories::{CategoryRepo, IssueRepo, UserRepo};

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::ensure_permitted;
use crate::middleware::rbac::{RequireStaff, RequireSuperuser};
use crate::state::AppState;

/// Heading shown above the admin issue list.
pub const CHANGELIST_TITLE: &str = "Tracked Issues";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /admin/issues`.
///
/// `submitter_id` defaults to the acting user.
#[derive(Debug, Deserialize)]
pub struct CreateIssueRequest {
    pub title: String,
    pub description: String,
    pub submitter_id: Option<DbId>,
    pub assignee_id: DbId,
    pub category_id: DbId,
    #[serde(default)]
    pub state: IssueState,
}

/// Request body for `POST /admin/categories`.
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
}

/// Request body for `POST /admin/users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    #[serde(default)]
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default)]
    pub is_superuser: bool,
}

/// One row of the admin issue list.
#[derive(Debug, Serialize)]
pub struct ChangelistRow {
    pub id: DbId,
    pub title: String,
    /// Human label, e.g. `"Open"`.
    pub state: &'static str,
    pub assignee: String,
    pub opened_at: Timestamp,
}

impl From<IssueSummary> for ChangelistRow {
    fn from(summary: IssueSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            state: summary.state.label(),
            assignee: summary.assignee,
            opened_at: summary.opened_at,
        }
    }
}

/// Response body for `GET /admin/issues`.
#[derive(Debug, Serialize)]
pub struct ChangelistResponse {
    pub title: &'static str,
    pub stats: IssueStats,
    pub issues: Vec<ChangelistRow>,
}

/// Full admin record of an issue, with the resolution duration formatted.
#[derive(Debug, Serialize)]
pub struct AdminIssueResponse {
    #[serde(flatten)]
    pub issue: Issue,
    pub resolution_duration_display: String,
}

impl From<Issue> for AdminIssueResponse {
    fn from(issue: Issue) -> Self {
        let resolution_duration_display = format_duration(Some(issue.resolution_duration));
        Self {
            issue,
            resolution_duration_display,
        }
    }
}

fn validation(msg: String) -> AppError {
    AppError::Core(CoreError::Validation(msg))
}

// ---------------------------------------------------------------------------
// Issues
// ---------------------------------------------------------------------------

/// GET /admin/issues
///
/// The issue list headed by resolution statistics over closed issues.
pub async fn issue_changelist(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
) -> AppResult<Json<ChangelistResponse>> {
    let open = IssueRepo::count_by_state(&state.pool, IssueState::Open).await?;
    let resolved = IssueRepo::count_by_state(&state.pool, IssueState::Closed).await?;
    let durations = IssueRepo::closed_duration_stats(&state.pool).await?;
    let issues = IssueRepo::list_summaries(&state.pool).await?;

    Ok(Json(ChangelistResponse {
        title: CHANGELIST_TITLE,
        stats: IssueStats::from_parts(open, resolved, durations),
        issues: issues.into_iter().map(ChangelistRow::from).collect(),
    }))
}

/// POST /admin/issues
pub async fn create_issue(
    State(state): State<AppState>,
    RequireStaff(user): RequireStaff,
    Json(input): Json<CreateIssueRequest>,
) -> AppResult<(StatusCode, Json<AdminIssueResponse>)> {
    ensure_permitted(
        can_create_issues(&user.principal),
        "Not allowed to create issues",
    )?;
    validate_title(&input.title).map_err(validation)?;
    validate_description(&input.description).map_err(validation)?;

    let dto = CreateIssue {
        title: input.title,
        description: input.description,
        submitter_id: input.submitter_id.unwrap_or(user.principal.user_id),
        assignee_id: input.assignee_id,
        category_id: input.category_id,
        state: input.state,
    };
    let issue = IssueRepo::create(&state.pool, &dto, Utc::now()).await?;

    tracing::info!(issue_id = issue.id, actor = %user.username, "Issue created via admin");
    Ok((StatusCode::CREATED, Json(issue.into())))
}

/// GET /admin/issues/{id}
pub async fn get_issue(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<Json<AdminIssueResponse>> {
    let issue = IssueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Issue", id))?;
    Ok(Json(issue.into()))
}

/// PUT /admin/issues/{id}
///
/// Partial update. A state change runs the lifecycle rule on save.
pub async fn update_issue(
    State(state): State<AppState>,
    RequireStaff(user): RequireStaff,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateIssue>,
) -> AppResult<Json<AdminIssueResponse>> {
    ensure_permitted(
        can_change_issues(&user.principal),
        "Only superusers may change issues",
    )?;
    if let Some(title) = &input.title {
        validate_title(title).map_err(validation)?;
    }
    if let Some(description) = &input.description {
        validate_description(description).map_err(validation)?;
    }

    let issue = IssueRepo::update(&state.pool, id, &input, Utc::now())
        .await?
        .ok_or_else(|| AppError::not_found("Issue", id))?;

    tracing::info!(issue_id = id, actor = %user.username, "Issue updated via admin");
    Ok(Json(issue.into()))
}

/// DELETE /admin/issues/{id}
pub async fn delete_issue(
    State(state): State<AppState>,
    RequireStaff(user): RequireStaff,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    ensure_permitted(
        can_delete_issues(&user.principal),
        "Only superusers may delete issues",
    )?;

    if !IssueRepo::delete(&state.pool, id).await? {
        return Err(AppError::not_found("Issue", id));
    }

    tracing::info!(issue_id = id, actor = %user.username, "Issue deleted via admin");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// GET /admin/categories
pub async fn list_categories(
    State(state): State<AppState>,
    RequireStaff(_user): RequireStaff,
) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list(&state.pool).await?;
    Ok(Json(categories))
}

/// POST /admin/categories
///
/// A duplicate name surfaces as 409 from the unique constraint.
pub async fn create_category(
    State(state): State<AppState>,
    RequireSuperuser(_admin): RequireSuperuser,
    Json(input): Json<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<Category>)> {
    validate_category_name(&input.name).map_err(validation)?;

    let category = CategoryRepo::create(&state.pool, &CreateCategory { name: input.name }).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// GET /admin/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireSuperuser(_admin): RequireSuperuser,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /admin/users
///
/// Validates the username and password, hashes the password and returns the
/// created account with 201.
pub async fn create_user(
    State(state): State<AppState>,
    RequireSuperuser(admin): RequireSuperuser,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    validate_required_text("username", &input.username, Some(MAX_USERNAME_LEN))
        .map_err(validation)?;
    validate_password_strength(&input.password).map_err(validation)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let dto = CreateUser {
        username: input.username,
        email: input.email,
        password_hash,
        is_staff: input.is_staff,
        is_superuser: input.is_superuser,
    };
    let user = UserRepo::create(&state.pool, &dto).await?;

    tracing::info!(user_id = user.id, actor = %admin.username, "User created");
    Ok((StatusCode::CREATED, Json(user.into())))
}
