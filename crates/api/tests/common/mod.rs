#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use tracker_api::auth::jwt::{generate_access_token, JwtConfig};
use tracker_api::auth::password::hash_password;
use tracker_api::config::ServerConfig;
use tracker_api::router::build_app_router;
use tracker_api::state::AppState;
use tracker_core::issue_state::IssueState;
use tracker_db::models::issue::{CreateIssue, Issue};
use tracker_db::models::user::{CreateUser, User};
use tracker_db::repositories::{CategoryRepo, IssueRepo, UserRepo};

/// Password given to every account created by [`create_user`].
pub const TEST_PASSWORD: &str = "test-password-123";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 5,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            access_token_expiry_mins: 15,
        },
        bootstrap_admin: None,
    }
}

/// Build the application router with the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create an account with [`TEST_PASSWORD`].
pub async fn create_user(pool: &PgPool, username: &str, is_staff: bool, is_superuser: bool) -> User {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        is_staff,
        is_superuser,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Mint an access token for `user` signed with the test secret.
pub fn token_for(user: &User) -> String {
    generate_access_token(user.id, &user.username, &user.principal(), &test_config().jwt)
        .expect("token generation should succeed")
}

/// Create an issue filed by `submitter` and assigned to `assignee` in the
/// seeded `bug` category.
pub async fn create_issue(
    pool: &PgPool,
    title: &str,
    submitter: &User,
    assignee: &User,
    state: IssueState,
    now: DateTime<Utc>,
) -> Issue {
    let category = CategoryRepo::find_by_name(pool, "bug")
        .await
        .unwrap()
        .expect("seed category 'bug' should exist");
    let input = CreateIssue {
        title: title.to_string(),
        description: format!("{title} description"),
        submitter_id: submitter.id,
        assignee_id: assignee.id,
        category_id: category.id,
        state,
    };
    IssueRepo::create(pool, &input, now)
        .await
        .expect("issue creation should succeed")
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
