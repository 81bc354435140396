//! Integration tests for login, `/api/currentUser`, and admin user management.

mod common;

use axum::http::StatusCode;
use campus_api::auth::jwt::validate_token;
use campus_api::auth::password::hash_password;
use campus_core::roles::{ROLE_ADMIN, ROLE_USER};
use campus_db::models::user::CreateUser;
use campus_db::repositories::UserRepository;
use common::{body_json, TestApp};
use serde_json::json;

async fn seed_user(app: &TestApp, username: &str, password: &str, is_admin: bool) {
    app.repos
        .users
        .create(&CreateUser {
            username: username.to_string(),
            email: format!("{username}@ucsb.edu"),
            password_hash: hash_password(password).unwrap(),
            is_admin,
        })
        .await
        .unwrap();
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_login_returns_user_token() {
    let app = TestApp::new();
    seed_user(&app, "gaucho", "correct-horse", false).await;

    let response = app
        .post_json(
            "/api/auth/login",
            None,
            json!({ "username": "gaucho", "password": "correct-horse" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["expires_in"], 300);
    assert_eq!(body["user"]["username"], "gaucho");
    assert_eq!(body["user"]["roles"], json!([ROLE_USER]));

    let token = body["access_token"].as_str().unwrap();
    let claims = validate_token(token, &app.config.jwt).unwrap();
    assert_eq!(claims.username, "gaucho");
    assert_eq!(claims.roles, vec![ROLE_USER.to_string()]);
}

#[tokio::test]
async fn test_login_grants_admin_to_admin_accounts() {
    let app = TestApp::new();
    seed_user(&app, "boss", "correct-horse", true).await;

    let response = app
        .post_json(
            "/api/auth/login",
            None,
            json!({ "username": "boss", "password": "correct-horse" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["user"]["roles"],
        json!([ROLE_USER, ROLE_ADMIN])
    );
}

#[tokio::test]
async fn test_login_grants_admin_to_listed_usernames() {
    let app = TestApp::new();
    seed_user(&app, "listed-admin", "correct-horse", false).await;

    let response = app
        .post_json(
            "/api/auth/login",
            None,
            json!({ "username": "listed-admin", "password": "correct-horse" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["user"]["roles"],
        json!([ROLE_USER, ROLE_ADMIN])
    );
}

#[tokio::test]
async fn test_login_with_wrong_password_is_401() {
    let app = TestApp::new();
    seed_user(&app, "gaucho", "correct-horse", false).await;

    let response = app
        .post_json(
            "/api/auth/login",
            None,
            json!({ "username": "gaucho", "password": "battery-staple" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({ "type": "BadCredentialsException", "message": "Invalid username or password" })
    );
}

#[tokio::test]
async fn test_login_with_unknown_user_is_401() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/api/auth/login",
            None,
            json!({ "username": "nobody", "password": "whatever1" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Current user
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_current_user_echoes_token_identity() {
    let app = TestApp::new();
    let token = app.admin_token();

    let response = app.get("/api/currentUser", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({ "id": 2, "username": "admin", "roles": [ROLE_USER, ROLE_ADMIN] })
    );
}

#[tokio::test]
async fn test_current_user_requires_token() {
    let app = TestApp::new();
    let response = app.get("/api/currentUser", None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Admin user management
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_admin_creates_user_who_can_log_in() {
    let app = TestApp::new();
    let token = app.admin_token();

    let response = app
        .post_json(
            "/api/admin/users",
            Some(&token),
            json!({
                "username": "newbie",
                "email": "newbie@ucsb.edu",
                "password": "long-enough"
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["username"], "newbie");
    assert_eq!(body["admin"], false);
    assert!(body.get("password_hash").is_none());

    let login = app
        .post_json(
            "/api/auth/login",
            None,
            json!({ "username": "newbie", "password": "long-enough" }),
        )
        .await;
    assert_eq!(login.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_duplicate_username_is_409() {
    let app = TestApp::new();
    seed_user(&app, "gaucho", "correct-horse", false).await;
    let token = app.admin_token();

    let response = app
        .post_json(
            "/api/admin/users",
            Some(&token),
            json!({
                "username": "gaucho",
                "email": "other@ucsb.edu",
                "password": "long-enough"
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["type"], "ConflictException");
}

#[tokio::test]
async fn test_short_password_is_400() {
    let app = TestApp::new();
    let token = app.admin_token();

    let response = app
        .post_json(
            "/api/admin/users",
            Some(&token),
            json!({
                "username": "newbie",
                "email": "newbie@ucsb.edu",
                "password": "short"
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(app.repos.users.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_user_cannot_manage_users() {
    let app = TestApp::new();
    let token = app.user_token();

    let list = app.get("/api/admin/users", Some(&token)).await;
    assert_eq!(list.status(), StatusCode::FORBIDDEN);

    let create = app
        .post_json(
            "/api/admin/users",
            Some(&token),
            json!({
                "username": "sneaky",
                "email": "sneaky@ucsb.edu",
                "password": "long-enough",
                "admin": true
            }),
        )
        .await;
    assert_eq!(create.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_lists_users() {
    let app = TestApp::new();
    seed_user(&app, "gaucho", "correct-horse", false).await;
    seed_user(&app, "boss", "correct-horse", true).await;
    let token = app.admin_token();

    let response = app.get("/api/admin/users", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["gaucho", "boss"]);
}
