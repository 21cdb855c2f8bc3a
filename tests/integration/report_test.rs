//! Integration tests for summaries, exports, and the dashboard.

mod helpers;

use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};

#[tokio::test]
async fn test_summary_totals_own_expenses_for_user() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice@test.com", "user").await;
    let bob = app.create_user("bob@test.com", "user").await;
    let category = app.create_category(&alice.token, "Travel").await;
    app.create_expense(&alice.token, category, 1000, "2026-03-01")
        .await;
    app.create_expense(&alice.token, category, 250, "2026-04-02")
        .await;
    app.create_expense(&bob.token, category, 9999, "2026-03-03")
        .await;

    let response = app
        .request("GET", "/api/reports/summary", None, Some(&alice.token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let summary = &response.body["data"];
    assert_eq!(summary["scope"], "own");
    assert_eq!(summary["count"], 2);
    assert_eq!(summary["totals"]["USD"], 1250);
    assert_eq!(summary["by_month"].as_array().map(Vec::len), Some(2));
    assert_eq!(summary["by_category"][0]["category_name"], "Travel");
}

#[tokio::test]
async fn test_summary_for_manager_covers_everyone() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice@test.com", "user").await;
    let manager = app.create_user("mgr@test.com", "manager").await;
    let category = app.create_category(&alice.token, "Travel").await;
    app.create_expense(&alice.token, category, 1000, "2026-03-01")
        .await;
    app.create_expense(&manager.token, category, 500, "2026-03-02")
        .await;

    let response = app
        .request("GET", "/api/reports/summary", None, Some(&manager.token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["scope"], "all");
    assert_eq!(response.body["data"]["totals"]["USD"], 1500);
}

#[tokio::test]
async fn test_export_requires_accountant() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("user@test.com", "user").await;

    let response = app
        .request("GET", "/api/reports/export", None, Some(&user.token))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_csv_export() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("user@test.com", "user").await;
    let accountant = app.create_user("acct@test.com", "accountant").await;
    let category = app.create_category(&user.token, "Meals").await;
    app.create_expense(&user.token, category, 1200, "2026-03-01")
        .await;

    let response = app
        .request(
            "GET",
            "/api/reports/export?format=csv",
            None,
            Some(&accountant.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let content_type = response.headers[CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/csv"));
    let disposition = response.headers[CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.starts_with("attachment;"));
    assert!(disposition.contains(".csv"));

    let mut lines = response.text.lines();
    assert_eq!(
        lines.next(),
        Some("id,owner_id,category_id,category,amount,currency,description,spent_on")
    );
    let row = lines.next().expect("one data row");
    assert!(row.contains("Meals"));
    assert!(row.contains("12.00"));
    assert!(lines.next().is_none());
}

#[tokio::test]
async fn test_json_export() {
    let app = helpers::TestApp::new().await;
    let accountant = app.create_user("acct@test.com", "accountant").await;
    let category = app.create_category(&accountant.token, "Hotels").await;
    app.create_expense(&accountant.token, category, 45000, "2026-03-09")
        .await;

    let response = app
        .request(
            "GET",
            "/api/reports/export?format=json",
            None,
            Some(&accountant.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let rows = response.body.as_array().expect("JSON array body");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["amount"], "450.00");
    assert_eq!(rows[0]["category"], "Hotels");
}

#[tokio::test]
async fn test_unknown_export_format_rejected() {
    let app = helpers::TestApp::new().await;
    let accountant = app.create_user("acct@test.com", "accountant").await;

    let response = app
        .request(
            "GET",
            "/api/reports/export?format=xlsx",
            None,
            Some(&accountant.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_dashboard_pending_count_only_for_admin() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("user@test.com", "user").await;
    app.register("waiting@test.com").await;

    let own = app
        .request("GET", "/api/dashboard", None, Some(&user.token))
        .await;
    assert_eq!(own.status, StatusCode::OK);
    assert_eq!(own.body["data"]["scope"], "own");
    assert!(own.body["data"].get("pending_users").is_none());

    let admin = app
        .request("GET", "/api/dashboard", None, Some(&app.admin_token))
        .await;
    assert_eq!(admin.status, StatusCode::OK);
    assert_eq!(admin.body["data"]["scope"], "all");
    assert_eq!(admin.body["data"]["pending_users"], 1);
}
