//! Integration tests for category CRUD.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_categories_are_shared_for_reading() {
    let app = helpers::TestApp::new().await;
    let alice = app.create_user("alice@test.com", "user").await;
    let bob = app.create_user("bob@test.com", "user").await;
    let category = app.create_category(&alice.token, "Travel").await;

    let list = app
        .request("GET", "/api/categories", None, Some(&bob.token))
        .await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body["data"].as_array().map(Vec::len), Some(1));

    let single = app
        .request(
            "GET",
            &format!("/api/categories/{category}"),
            None,
            Some(&bob.token),
        )
        .await;
    assert_eq!(single.status, StatusCode::OK);
    assert_eq!(single.body["data"]["owner_id"], alice.id);
}

#[tokio::test]
async fn test_blank_category_name_rejected() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("blank@test.com", "user").await;

    let response = app
        .request(
            "POST",
            "/api/categories",
            Some(serde_json::json!({ "name": "   " })),
            Some(&user.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_owner_renames_category() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("owner@test.com", "user").await;
    let category = app.create_category(&user.token, "Food").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/categories/{category}"),
            Some(serde_json::json!({ "name": " Groceries " })),
            Some(&user.token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Groceries");
}

#[tokio::test]
async fn test_editing_others_category_needs_manager() {
    let app = helpers::TestApp::new().await;
    let owner = app.create_user("owner@test.com", "user").await;
    let accountant = app.create_user("acct@test.com", "accountant").await;
    let manager = app.create_user("mgr@test.com", "manager").await;
    let category = app.create_category(&owner.token, "Supplies").await;
    let path = format!("/api/categories/{category}");
    let body = serde_json::json!({ "description": "Office supplies" });

    let denied = app
        .request("PUT", &path, Some(body.clone()), Some(&accountant.token))
        .await;
    assert_eq!(denied.status, StatusCode::FORBIDDEN);

    let allowed = app
        .request("PUT", &path, Some(body), Some(&manager.token))
        .await;
    assert_eq!(allowed.status, StatusCode::OK);
    assert_eq!(allowed.body["data"]["description"], "Office supplies");
}

#[tokio::test]
async fn test_category_in_use_cannot_be_deleted() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("user@test.com", "user").await;
    let category = app.create_category(&user.token, "Rent").await;
    let expense = app
        .create_expense(&user.token, category, 90000, "2026-03-01")
        .await;
    let path = format!("/api/categories/{category}");

    let conflict = app.request("DELETE", &path, None, Some(&user.token)).await;
    assert_eq!(conflict.status, StatusCode::CONFLICT);

    app.request(
        "DELETE",
        &format!("/api/expenses/{expense}"),
        None,
        Some(&user.token),
    )
    .await;

    let deleted = app.request("DELETE", &path, None, Some(&user.token)).await;
    assert_eq!(deleted.status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_category_is_not_found() {
    let app = helpers::TestApp::new().await;
    let user = app.create_user("user@test.com", "user").await;

    let response = app
        .request("DELETE", "/api/categories/4242", None, Some(&user.token))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
