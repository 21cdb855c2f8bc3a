//! Integration tests for registration, login, and principal resolution.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_health_is_public() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_registered_user_is_pending_and_cannot_login() {
    let app = helpers::TestApp::new().await;
    app.register("pending@test.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "pending@test.com",
                "password": helpers::USER_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHENTICATED");
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let app = helpers::TestApp::new().await;
    app.register("twice@test.com").await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "TWICE@test.com",
                "name": "Twice",
                "password": helpers::USER_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_weak_password_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/register",
            Some(serde_json::json!({
                "email": "weak@test.com",
                "name": "Weak",
                "password": "short",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": helpers::ADMIN_EMAIL,
                "password": "wrong-password1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_me_returns_current_user() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice@test.com", "user").await;

    let response = app
        .request("GET", "/api/auth/me", None, Some(&alice.token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], alice.id);
    assert_eq!(response.body["data"]["role"], "user");
    assert_eq!(response.body["data"]["status"], "active");
    assert!(response.body["data"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_invalid_token_is_unauthenticated() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/auth/me", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_role_change_applies_to_existing_token() {
    let app = helpers::TestApp::new().await;
    let bob = app.create_user("bob@test.com", "user").await;

    let before = app
        .request("GET", "/api/reports/export", None, Some(&bob.token))
        .await;
    assert_eq!(before.status, StatusCode::FORBIDDEN);

    let promoted = app
        .request(
            "PUT",
            &format!("/api/admin/users/{}/role", bob.id),
            Some(serde_json::json!({ "role": "accountant" })),
            Some(&app.admin_token),
        )
        .await;
    assert_eq!(promoted.status, StatusCode::OK);

    let after = app
        .request("GET", "/api/reports/export", None, Some(&bob.token))
        .await;
    assert_eq!(after.status, StatusCode::OK);
}

#[tokio::test]
async fn test_rejected_account_token_stops_working() {
    let app = helpers::TestApp::new().await;
    let carol = app.create_user("carol@test.com", "user").await;

    let rejected = app
        .request(
            "PUT",
            &format!("/api/admin/users/{}/status", carol.id),
            Some(serde_json::json!({ "status": "rejected" })),
            Some(&app.admin_token),
        )
        .await;
    assert_eq!(rejected.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/expenses", None, Some(&carol.token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_deleted_account_token_stops_working() {
    let app = helpers::TestApp::new().await;
    let dave = app.create_user("dave@test.com", "user").await;

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/admin/users/{}", dave.id),
            None,
            Some(&app.admin_token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/auth/me", None, Some(&dave.token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_permissions_reflect_role() {
    let app = helpers::TestApp::new().await;
    let accountant = app.create_user("acct@test.com", "accountant").await;

    let response = app
        .request("GET", "/api/auth/permissions", None, Some(&accountant.token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let map = &response.body["data"];
    assert_eq!(map["view_all_expenses"], true);
    assert_eq!(map["export_reports"], true);
    assert_eq!(map["delete_all_expenses"], false);
    assert_eq!(map["manage_users"], false);
}
