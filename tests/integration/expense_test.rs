//! Integration tests for expense CRUD and list scoping.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_create_and_get_expense() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("spender@test.com", "user").await;
    let category = app.create_category(&user.token, "Meals").await;

    let response = app
        .request(
            "POST",
            "/api/expenses",
            Some(serde_json::json!({
                "category_id": category,
                "amount_cents": 1599,
                "currency": "eur",
                "description": "  Lunch  ",
                "spent_on": "2026-03-14",
            })),
            Some(&user.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let expense = &response.body["data"];
    assert_eq!(expense["owner_id"], user.id);
    assert_eq!(expense["currency"], "EUR");
    assert_eq!(expense["description"], "Lunch");

    let id = expense["id"].as_i64().expect("expense id");
    let fetched = app
        .request("GET", &format!("/api/expenses/{id}"), None, Some(&user.token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["data"]["amount_cents"], 1599);
}

#[tokio::test]
async fn test_create_expense_validation() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("invalid@test.com", "user").await;
    let category = app.create_category(&user.token, "Misc").await;

    let zero = app
        .request(
            "POST",
            "/api/expenses",
            Some(serde_json::json!({
                "category_id": category,
                "amount_cents": 0,
                "spent_on": "2026-03-14",
            })),
            Some(&user.token),
        )
        .await;
    assert_eq!(zero.status, StatusCode::BAD_REQUEST);

    let missing_category = app
        .request(
            "POST",
            "/api/expenses",
            Some(serde_json::json!({
                "category_id": 9999,
                "amount_cents": 100,
                "spent_on": "2026-03-14",
            })),
            Some(&user.token),
        )
        .await;
    assert_eq!(missing_category.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_list_is_scoped_to_own() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice@test.com", "user").await;
    let bob = app.create_user("bob@test.com", "user").await;
    let category = app.create_category(&alice.token, "Travel").await;
    app.create_expense(&alice.token, category, 100, "2026-03-01")
        .await;
    app.create_expense(&bob.token, category, 200, "2026-03-02")
        .await;
    app.create_expense(&bob.token, category, 300, "2026-03-03")
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/expenses?owner_id={}", bob.id),
            None,
            Some(&alice.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["scope"], "own");
    assert_eq!(response.body["data"]["count"], 1);
    assert_eq!(response.body["data"]["items"][0]["owner_id"], alice.id);
}

#[tokio::test]
async fn test_accountant_list_covers_everyone() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice@test.com", "user").await;
    let bob = app.create_user("bob@test.com", "user").await;
    let accountant = app.create_user("acct@test.com", "accountant").await;
    let category = app.create_category(&alice.token, "Travel").await;
    app.create_expense(&alice.token, category, 100, "2026-03-01")
        .await;
    app.create_expense(&bob.token, category, 200, "2026-03-02")
        .await;

    let all = app
        .request("GET", "/api/expenses", None, Some(&accountant.token))
        .await;
    assert_eq!(all.status, StatusCode::OK);
    assert_eq!(all.body["data"]["scope"], "all");
    assert_eq!(all.body["data"]["count"], 2);

    let filtered = app
        .request(
            "GET",
            &format!("/api/expenses?owner_id={}", bob.id),
            None,
            Some(&accountant.token),
        )
        .await;
    assert_eq!(filtered.body["data"]["count"], 1);
}

#[tokio::test]
async fn test_list_date_range() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("dates@test.com", "user").await;
    let category = app.create_category(&user.token, "Fuel").await;
    app.create_expense(&user.token, category, 100, "2026-02-28")
        .await;
    app.create_expense(&user.token, category, 200, "2026-03-01")
        .await;
    app.create_expense(&user.token, category, 300, "2026-03-31")
        .await;

    let march = app
        .request(
            "GET",
            "/api/expenses?from=2026-03-01&to=2026-03-31",
            None,
            Some(&user.token),
        )
        .await;
    assert_eq!(march.status, StatusCode::OK);
    assert_eq!(march.body["data"]["count"], 2);

    let inverted = app
        .request(
            "GET",
            "/api/expenses?from=2026-04-01&to=2026-03-01",
            None,
            Some(&user.token),
        )
        .await;
    assert_eq!(inverted.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_owner_updates_expense() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("editor@test.com", "user").await;
    let category = app.create_category(&user.token, "Office").await;
    let expense = app
        .create_expense(&user.token, category, 100, "2026-03-05")
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/expenses/{expense}"),
            Some(serde_json::json!({
                "description": "Printer paper",
                "spent_on": "2026-03-06",
            })),
            Some(&user.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["description"], "Printer paper");
    assert_eq!(response.body["data"]["spent_on"], "2026-03-06");
    assert_eq!(response.body["data"]["amount_cents"], 100);
}

#[tokio::test]
async fn test_deleted_expense_is_gone() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("deleter@test.com", "user").await;
    let category = app.create_category(&user.token, "Gifts").await;
    let expense = app
        .create_expense(&user.token, category, 100, "2026-03-05")
        .await;
    let path = format!("/api/expenses/{expense}");

    let deleted = app.request("DELETE", &path, None, Some(&user.token)).await;
    assert_eq!(deleted.status, StatusCode::OK);

    let again = app.request("DELETE", &path, None, Some(&user.token)).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_oversized_amount_rejected_and_summary_stays_up() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("big@test.com", "user").await;
    let category = app.create_category(&user.token, "Assets").await;

    let response = app
        .request(
            "POST",
            "/api/expenses",
            Some(serde_json::json!({
                "category_id": category,
                "amount_cents": i64::MAX,
                "spent_on": "2026-03-14",
            })),
            Some(&user.token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");

    app.create_expense(&user.token, category, 1_000_000_000_000, "2026-03-01")
        .await;
    app.create_expense(&user.token, category, 1_000_000_000_000, "2026-03-02")
        .await;

    let summary = app
        .request("GET", "/api/reports/summary", None, Some(&user.token))
        .await;
    assert_eq!(summary.status, StatusCode::OK);
    assert_eq!(summary.body["data"]["totals"]["USD"], 2_000_000_000_000_i64);
}

#[tokio::test]
async fn test_malformed_path_and_query_return_json_errors() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("typo@test.com", "user").await;

    for path in ["/api/expenses/abc", "/api/expenses?from=garbage"] {
        let response = app.request("GET", path, None, Some(&user.token)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(response.error_code(), "VALIDATION_ERROR", "{path}");
        assert!(response.body["message"].is_string(), "{path}");
    }
}
