//! Integration tests for the role hierarchy, ownership checks, and the
//! 401/403/404 mapping of denials.

mod helpers;

use axum::http::StatusCode;
use expensehub_api::middleware::rbac::{GATED_ROUTES, GatedRoute};
use expensehub_core::config::AppConfig;

/// Two plain users each with one expense in a shared category.
async fn two_owners(app: &helpers::TestApp) -> (helpers::TestUser, i64, helpers::TestUser, i64) {
    let owner = app.create_user("owner@test.com", "user").await;
    let other = app.create_user("other@test.com", "user").await;
    let category = app.create_category(&owner.token, "Travel").await;
    let owner_expense = app
        .create_expense(&owner.token, category, 1200, "2026-03-01")
        .await;
    let other_expense = app
        .create_expense(&other.token, category, 3400, "2026-03-02")
        .await;
    (owner, owner_expense, other, other_expense)
}

#[tokio::test]
async fn test_user_can_delete_own_expense() {
    let app = helpers::TestApp::new().await;
    let (owner, owner_expense, _, _) = two_owners(&app).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/expenses/{owner_expense}"),
            None,
            Some(&owner.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_user_cannot_delete_others_expense() {
    let app = helpers::TestApp::new().await;
    let (owner, _, _, other_expense) = two_owners(&app).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/expenses/{other_expense}"),
            None,
            Some(&owner.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "FORBIDDEN");
}

#[tokio::test]
async fn test_manager_can_delete_others_expense() {
    let app = helpers::TestApp::new().await;
    let (_, _, _, other_expense) = two_owners(&app).await;
    let manager = app.create_user("manager@test.com", "manager").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/expenses/{other_expense}"),
            None,
            Some(&manager.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

/// Concrete request for a gated route whose path, query, and body would
/// all fail extraction if they were parsed.
fn unparseable_request(route: &GatedRoute) -> (String, Option<serde_json::Value>) {
    let mut path = format!("/api{}", route.path.replace("{id}", "abc"));
    if route.method == "GET" {
        path.push_str("?from=garbage&format=xlsx");
    }
    let body = match route.method {
        "POST" | "PUT" => Some(serde_json::json!({ "role": "root", "amount_cents": "lots" })),
        _ => None,
    };
    (path, body)
}

#[tokio::test]
async fn test_anonymous_rejected_on_every_gated_route() {
    let app = helpers::TestApp::new().await;

    for route in GATED_ROUTES {
        let (path, body) = unparseable_request(route);
        let response = app.request(route.method, &path, body, None).await;
        assert_eq!(
            response.status,
            StatusCode::UNAUTHORIZED,
            "{} {path} should require authentication",
            route.method
        );
        assert_eq!(response.error_code(), "UNAUTHENTICATED");
        assert!(
            !response.text.contains("variant"),
            "{} {path} leaked request details",
            route.method
        );
    }

    let permissions = app
        .request("GET", "/api/auth/permissions", None, None)
        .await;
    assert_eq!(permissions.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_rejected_account_token_stops_working_before_parsing() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("revoked@test.com", "user").await;

    let revoked = app
        .request(
            "PUT",
            &format!("/api/admin/users/{}/status", user.id),
            Some(serde_json::json!({ "status": "rejected" })),
            Some(&app.admin_token),
        )
        .await;
    assert_eq!(revoked.status, StatusCode::OK);

    for route in GATED_ROUTES {
        let (path, body) = unparseable_request(route);
        let response = app
            .request(route.method, &path, body, Some(&user.token))
            .await;
        assert_eq!(
            response.status,
            StatusCode::UNAUTHORIZED,
            "{} {path} accepted a rejected account",
            route.method
        );
    }
}

#[tokio::test]
async fn test_public_routes_skip_authentication() {
    let app = helpers::TestApp::new().await;

    let health = app.request("GET", "/api/health", None, None).await;
    assert_eq!(health.status, StatusCode::OK);

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({ "email": "nobody@test.com", "password": "x" })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);

    let register = app.request("POST", "/api/auth/register", None, None).await;
    assert_eq!(register.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_expense_is_not_found_for_permitted_caller() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("lonely@test.com", "user").await;

    let response = app
        .request("GET", "/api/expenses/9999", None, Some(&user.token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_cannot_read_others_expense() {
    let app = helpers::TestApp::new().await;
    let (owner, _, _, other_expense) = two_owners(&app).await;

    let response = app
        .request(
            "GET",
            &format!("/api/expenses/{other_expense}"),
            None,
            Some(&owner.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_accountant_reads_and_edits_but_cannot_delete() {
    let app = helpers::TestApp::new().await;
    let (_, _, _, other_expense) = two_owners(&app).await;
    let accountant = app.create_user("acct@test.com", "accountant").await;
    let path = format!("/api/expenses/{other_expense}");

    let read = app
        .request("GET", &path, None, Some(&accountant.token))
        .await;
    assert_eq!(read.status, StatusCode::OK);

    let edit = app
        .request(
            "PUT",
            &path,
            Some(serde_json::json!({ "amount_cents": 5000 })),
            Some(&accountant.token),
        )
        .await;
    assert_eq!(edit.status, StatusCode::OK);
    assert_eq!(edit.body["data"]["amount_cents"], 5000);

    let delete = app
        .request("DELETE", &path, None, Some(&accountant.token))
        .await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_endpoints_require_admin() {
    let app = helpers::TestApp::new().await;
    let manager = app.create_user("mgr@test.com", "manager").await;

    let denied = app
        .request("GET", "/api/admin/users", None, Some(&manager.token))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let allowed = app
        .request("GET", "/api/admin/users", None, Some(&app.admin_token))
        .await;
    assert_eq!(allowed.status, StatusCode::OK);
    assert!(allowed.body["data"].as_array().is_some_and(|u| u.len() >= 2));
}

#[tokio::test]
async fn test_admin_lists_pending_users() {
    let app = helpers::TestApp::new().await;
    app.register("waiting@test.com").await;

    let response = app
        .request(
            "GET",
            "/api/admin/users?status=pending",
            None,
            Some(&app.admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let users = response.body["data"].as_array().expect("user list");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], "waiting@test.com");
}

#[tokio::test]
async fn test_unknown_role_rejected() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("plain@test.com", "user").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/users/{}/role", user.id),
            Some(serde_json::json!({ "role": "superuser" })),
            Some(&app.admin_token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_user_profile_visible_to_self_and_admin_only() {
    let app = helpers::TestApp::new().await;
    let (owner, _, other, _) = two_owners(&app).await;

    let own = app
        .request(
            "GET",
            &format!("/api/users/{}", owner.id),
            None,
            Some(&owner.token),
        )
        .await;
    assert_eq!(own.status, StatusCode::OK);

    let foreign = app
        .request(
            "GET",
            &format!("/api/users/{}", other.id),
            None,
            Some(&owner.token),
        )
        .await;
    assert_eq!(foreign.status, StatusCode::FORBIDDEN);

    let admin = app
        .request(
            "GET",
            &format!("/api/users/{}", other.id),
            None,
            Some(&app.admin_token),
        )
        .await;
    assert_eq!(admin.status, StatusCode::OK);
}

#[tokio::test]
async fn test_permission_matrix_lists_every_feature() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/admin/permissions", None, Some(&app.admin_token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let features = response.body["data"]["features"]
        .as_array()
        .expect("feature rows");
    assert_eq!(features.len(), 13);
    assert!(
        response.body["data"]["routes"]
            .as_array()
            .is_some_and(|r| !r.is_empty())
    );
}

#[tokio::test]
async fn test_config_override_lowers_requirement() {
    let mut config = AppConfig::default();
    config
        .rbac
        .overrides
        .insert("delete_all_expenses".to_string(), "accountant".to_string());
    let app = helpers::TestApp::with_config(config).await;
    let (_, _, _, other_expense) = two_owners(&app).await;
    let accountant = app.create_user("acct@test.com", "accountant").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/expenses/{other_expense}"),
            None,
            Some(&accountant.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}
