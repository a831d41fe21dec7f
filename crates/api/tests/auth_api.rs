//! HTTP-level tests for login and bearer-token authentication.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use common::{body_json, create_user, get, get_auth, post_json, token_for, TEST_PASSWORD};
use sqlx::PgPool;
use tracker_api::bootstrap::ensure_superuser;
use tracker_api::config::BootstrapAdmin;
use tracker_api::error::AppError;
use tracker_core::error::CoreError;
use tracker_db::repositories::UserRepo;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let user = create_user(&pool, "staffer", true, false).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "staffer", "password": TEST_PASSWORD });
    let response = post_json(app, "/api-auth/login", body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["expires_in"], 15 * 60);
    assert_eq!(json["user"]["id"], user.id);
    assert_eq!(json["user"]["username"], "staffer");
    assert_eq!(json["user"]["is_staff"], true);
    assert_eq!(json["user"]["is_superuser"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_token_opens_admin_surface(pool: PgPool) {
    create_user(&pool, "staffer", true, false).await;

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({ "username": "staffer", "password": TEST_PASSWORD });
    let json = body_json(post_json(app, "/api-auth/login", body).await).await;
    let token = json["access_token"].as_str().unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/admin/issues", token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    create_user(&pool, "staffer", true, false).await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "staffer", "password": "not-the-password" });
    let response = post_json(app, "/api-auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_user(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "ghost", "password": "whatever-123" });
    let response = post_json(app, "/api-auth/login", body).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_inactive_account(pool: PgPool) {
    let user = create_user(&pool, "retired", true, false).await;
    sqlx::query("UPDATE users SET is_active = false WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "retired", "password": TEST_PASSWORD });
    let response = post_json(app, "/api-auth/login", body).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_garbage_token_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/admin/issues", "not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_token_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/admin/issues").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(body_json(response).await["error"].is_string());
}

// ---------------------------------------------------------------------------
// Account changes after the token was issued
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_token_of_deactivated_account_is_forbidden(pool: PgPool) {
    let user = create_user(&pool, "staffer", true, false).await;
    let token = token_for(&user);

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/admin/issues", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    sqlx::query("UPDATE users SET is_active = false WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/admin/issues", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_token_of_demoted_staff_is_forbidden(pool: PgPool) {
    let user = create_user(&pool, "staffer", true, false).await;
    let token = token_for(&user);

    sqlx::query("UPDATE users SET is_staff = false WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/admin/issues", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_token_of_demoted_superuser_cannot_manage_users(pool: PgPool) {
    let user = create_user(&pool, "root", true, true).await;
    let token = token_for(&user);

    sqlx::query("UPDATE users SET is_superuser = false WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/admin/users", &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Still staff, so the issue list stays visible.
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/admin/issues", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_token_of_deleted_account_is_unauthorized(pool: PgPool) {
    let user = create_user(&pool, "staffer", true, false).await;
    let token = token_for(&user);

    assert!(UserRepo::delete(&pool, user.id).await.unwrap());

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/admin/issues", &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_promoted_account_gains_access_without_new_token(pool: PgPool) {
    let user = create_user(&pool, "member", false, false).await;
    let token = token_for(&user);

    sqlx::query("UPDATE users SET is_staff = true WHERE id = $1")
        .bind(user.id)
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/admin/issues", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bootstrap_superuser_is_created_once(pool: PgPool) {
    let admin = BootstrapAdmin {
        username: "root".to_string(),
        email: "root@example.com".to_string(),
        password: "bootstrap-pass".to_string(),
    };

    assert!(ensure_superuser(&pool, &admin).await.unwrap());
    assert!(!ensure_superuser(&pool, &admin).await.unwrap());

    let user = UserRepo::find_by_username(&pool, "root")
        .await
        .unwrap()
        .expect("bootstrap user should exist");
    assert!(user.is_staff);
    assert!(user.is_superuser);
    assert_eq!(UserRepo::list(&pool).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_bootstrap_superuser_rejects_weak_password(pool: PgPool) {
    let admin = BootstrapAdmin {
        username: "root".to_string(),
        email: String::new(),
        password: "abc".to_string(),
    };

    let err = ensure_superuser(&pool, &admin).await.unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
    assert!(UserRepo::find_by_username(&pool, "root")
        .await
        .unwrap()
        .is_none());
}
