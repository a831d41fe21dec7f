//! Fixtures shared by the database integration tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use sqlx::PgPool;
use tracker_core::issue_state::IssueState;
use tracker_core::types::Timestamp;
use tracker_db::models::category::CreateCategory;
use tracker_db::models::issue::{CreateIssue, Issue};
use tracker_db::models::user::{CreateUser, User};
use tracker_db::repositories::{CategoryRepo, IssueRepo, UserRepo};

/// Fixed reference instant for lifecycle tests.
pub fn t0() -> Timestamp {
    Utc.with_ymd_and_hms(2022, 11, 18, 0, 0, 0).unwrap()
}

/// Insert a staff user with a placeholder hash.
pub async fn create_user(pool: &PgPool, username: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@testing"),
            password_hash: "not-a-real-hash".to_string(),
            is_staff: true,
            is_superuser: false,
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Create an issue together with its own submitter, assignee and category,
/// all named after `title`, saved at `now`.
pub async fn create_issue(pool: &PgPool, state: IssueState, title: &str, now: Timestamp) -> Issue {
    let submitter = create_user(pool, &format!("{title}-submitter")).await;
    let assignee = create_user(pool, &format!("{title}-assignee")).await;
    let category = CategoryRepo::create(
        pool,
        &CreateCategory {
            name: format!("{title}-cat"),
        },
    )
    .await
    .expect("category creation should succeed");

    IssueRepo::create(
        pool,
        &CreateIssue {
            title: title.to_string(),
            description: "Test description".to_string(),
            submitter_id: submitter.id,
            assignee_id: assignee.id,
            category_id: category.id,
            state,
        },
        now,
    )
    .await
    .expect("issue creation should succeed")
}
