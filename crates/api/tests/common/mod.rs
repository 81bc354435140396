//! Shared harness for API integration tests.
//!
//! Every test gets a fresh router over in-memory repositories, so tests can
//! seed rows and inspect repository call counts without a database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use campus_api::auth::jwt::{generate_access_token, JwtConfig};
use campus_api::config::ServerConfig;
use campus_api::router::build_app_router;
use campus_api::state::AppState;
use campus_core::roles::roles_for;
use campus_db::memory::MemoryRepositories;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        db_max_connections: 1,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hs256".to_string(),
            access_token_expiry_mins: 5,
        },
        admin_usernames: vec!["listed-admin".to_string()],
        password_min_length: 8,
        bootstrap_admin: None,
    }
}

/// A router plus direct handles on its backing repositories.
pub struct TestApp {
    pub router: Router,
    pub repos: MemoryRepositories,
    pub config: ServerConfig,
}

impl TestApp {
    pub fn new() -> Self {
        let config = test_config();
        let repos = MemoryRepositories::new();
        let state = AppState {
            pool: None,
            config: Arc::new(config.clone()),
            repos: repos.repositories(),
        };
        let router = build_app_router(state, &config);
        Self {
            router,
            repos,
            config,
        }
    }

    /// Bearer token carrying only `ROLE_USER`.
    pub fn user_token(&self) -> String {
        generate_access_token(1, "user", &roles_for(false), &self.config.jwt)
            .expect("token generation")
    }

    /// Bearer token carrying `ROLE_USER` and `ROLE_ADMIN`.
    pub fn admin_token(&self) -> String {
        generate_access_token(2, "admin", &roles_for(true), &self.config.jwt)
            .expect("token generation")
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible")
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        self.send(build_request(Method::GET, uri, token, None)).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>) -> Response<Body> {
        self.send(build_request(Method::POST, uri, token, None)).await
    }

    pub async fn post_json(&self, uri: &str, token: Option<&str>, body: Value) -> Response<Body> {
        self.send(build_request(Method::POST, uri, token, Some(body)))
            .await
    }

    pub async fn put_json(&self, uri: &str, token: Option<&str>, body: Value) -> Response<Body> {
        self.send(build_request(Method::PUT, uri, token, Some(body)))
            .await
    }
}

pub fn build_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .expect("valid request"),
        None => builder.body(Body::empty()).expect("valid request"),
    }
}

/// Collect the response body as a UTF-8 string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("readable body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let text = body_text(response).await;
    serde_json::from_str(&text).expect("JSON body")
}

/// Parse an ISO-8601 local date-time such as `2022-01-03T00:00:00`.
pub fn at(s: &str) -> chrono::NaiveDateTime {
    s.parse().expect("valid timestamp")
}
