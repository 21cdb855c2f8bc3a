//! Shared test helpers for integration tests.
//!
//! Every `TestApp` owns a fresh in-memory store seeded with one active
//! administrator, so tests never observe each other's data.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use expensehub_core::config::AppConfig;
use expensehub_core::config::seed::SeedAdmin;

/// Bootstrap administrator credentials.
pub const ADMIN_EMAIL: &str = "admin@test.com";
pub const ADMIN_PASSWORD: &str = "Admin12345";

/// Password used for every account created through [`TestApp::create_user`].
pub const USER_PASSWORD: &str = "password123";

/// Test application wrapper
pub struct TestApp {
    /// The Axum router
    pub router: Router,
    /// Configuration the router was built from
    pub config: AppConfig,
    /// Token of the seeded administrator
    pub admin_token: String,
}

/// A user created for a test.
#[derive(Debug, Clone)]
pub struct TestUser {
    /// Store id
    pub id: i64,
    /// Bearer token
    pub token: String,
}

impl TestApp {
    /// Create a new test application with default configuration.
    pub async fn new() -> Self {
        Self::with_config(AppConfig::default()).await
    }

    /// Create a test application from the given configuration, adding the
    /// bootstrap administrator.
    pub async fn with_config(mut config: AppConfig) -> Self {
        config.seed.admin = Some(SeedAdmin {
            email: ADMIN_EMAIL.to_string(),
            name: "Test Admin".to_string(),
            password: ADMIN_PASSWORD.to_string(),
        });

        let state =
            expensehub_api::build_state(config.clone()).expect("Failed to build app state");
        let router = expensehub_api::build_app(state).expect("Failed to build router");

        let mut app = Self {
            router,
            config,
            admin_token: String::new(),
        };
        app.admin_token = app.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        app
    }

    /// Register an account and return its id; the account stays pending.
    pub async fn register(&self, email: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/auth/register",
                Some(serde_json::json!({
                    "email": email,
                    "name": email.split('@').next().unwrap_or(email),
                    "password": USER_PASSWORD,
                })),
                None,
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );
        response.body["data"]["id"]
            .as_i64()
            .expect("No id in registration response")
    }

    /// Register, approve, and assign a role, then log in.
    pub async fn create_user(&self, email: &str, role: &str) -> TestUser {
        let id = self.register(email).await;

        let approved = self
            .request(
                "PUT",
                &format!("/api/admin/users/{id}/status"),
                Some(serde_json::json!({ "status": "active" })),
                Some(&self.admin_token),
            )
            .await;
        assert_eq!(approved.status, StatusCode::OK, "{:?}", approved.body);

        if role != "user" {
            let promoted = self
                .request(
                    "PUT",
                    &format!("/api/admin/users/{id}/role"),
                    Some(serde_json::json!({ "role": role })),
                    Some(&self.admin_token),
                )
                .await;
            assert_eq!(promoted.status, StatusCode::OK, "{:?}", promoted.body);
        }

        let token = self.login(email, USER_PASSWORD).await;
        TestUser { id, token }
    }

    /// Login and return JWT access token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let body = serde_json::json!({
            "email": email,
            "password": password,
        });
        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["access_token"]
            .as_str()
            .expect("No access_token in login response")
            .to_string()
    }

    /// Create a category as `token` and return its id.
    pub async fn create_category(&self, token: &str, name: &str) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/categories",
                Some(serde_json::json!({ "name": name })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["id"].as_i64().expect("No category id")
    }

    /// Record an expense as `token` and return its id.
    pub async fn create_expense(
        &self,
        token: &str,
        category_id: i64,
        amount_cents: i64,
        spent_on: &str,
    ) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/expenses",
                Some(serde_json::json!({
                    "category_id": category_id,
                    "amount_cents": amount_cents,
                    "description": "test expense",
                    "spent_on": spent_on,
                })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["id"].as_i64().expect("No expense id")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");
        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            text,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body text
    pub text: String,
    /// Parsed JSON body, `Null` when the body is not JSON
    pub body: Value,
}

impl TestResponse {
    /// Machine-readable error code of an error response.
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
