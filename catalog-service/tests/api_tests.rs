//! End-to-end API tests against a real server and database.
//!
//! These tests need a reachable Postgres instance (DATABASE_URL or
//! postgres:postgres@localhost:5432) and are ignored by default:
//! run them with `cargo test -- --ignored`.

mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_register_client_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/clients")
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "Ada");
    assert_eq!(body["data"]["email"], "ada@example.com");
    assert!(body["data"]["token"].is_string());
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_register_client_duplicate_email() {
    let app = TestApp::spawn().await;

    app.register("Ada", "ada@example.com", "pass_word!").await;

    let response = app
        .post("/api/clients")
        .json(&json!({
            "name": "Other Ada",
            "email": "ada@example.com",
            "password": "pass_word!2"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    app.register("Ada", "ada@example.com", "pass_word!").await;

    let response = app
        .post("/api/clients/login")
        .json(&json!({
            "email": "ada@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let token = body["data"]["token"].as_str().expect("Missing token");

    // The token is a verifiable access token for the identity claim.
    let claims = app.token_codec.verify(token).expect("Invalid token");
    assert_eq!(claims.email, "ada@example.com");
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_login_wrong_password() {
    let app = TestApp::spawn().await;

    app.register("Ada", "ada@example.com", "pass_word!").await;

    let response = app
        .post("/api/clients/login")
        .json(&json!({
            "email": "ada@example.com",
            "password": "wrong_password"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_get_current_client() {
    let app = TestApp::spawn().await;

    let token = app.register("Ada", "ada@example.com", "pass_word!").await;

    let response = app
        .get_authenticated("/api/client", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["email"], "ada@example.com");
    assert_eq!(body["data"]["token"], token);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_get_current_client_without_header() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/client")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_get_current_client_wrong_scheme() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/client")
        .header("Authorization", "Basic abc123")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_update_current_client() {
    let app = TestApp::spawn().await;

    let token = app.register("Ada", "ada@example.com", "pass_word!").await;

    let response = app
        .put_authenticated("/api/client", &token)
        .json(&json!({ "name": "Countess" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["name"], "Countess");
    assert_eq!(body["data"]["email"], "ada@example.com");
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_product_crud_and_favorites() {
    let app = TestApp::spawn().await;

    let token = app.register("Ada", "ada@example.com", "pass_word!").await;

    // Create
    let response = app
        .post_authenticated("/api/products", &token)
        .json(&json!({
            "title": "Blender Pro 3000",
            "brand": "Acme",
            "image": "https://img.example.com/b.png",
            "price": "349.00",
            "review_score": "4.8"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["slug"], "blender-pro-3000");

    // Duplicate slug is rejected
    let response = app
        .post_authenticated("/api/products", &token)
        .json(&json!({
            "title": "Blender Pro 3000",
            "brand": "Acme",
            "image": "https://img.example.com/b.png",
            "price": "349.00",
            "review_score": "4.8"
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Anonymous fetch sees favorited = false
    let response = app
        .get("/api/products/blender-pro-3000")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["favorited"], false);
    assert_eq!(body["data"]["favorites_count"], 0);

    // Favorite
    let response = app
        .post_authenticated("/api/products/blender-pro-3000/favorite", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["favorited"], true);
    assert_eq!(body["data"]["favorites_count"], 1);

    // Favoriting twice is a client error
    let response = app
        .post_authenticated("/api/products/blender-pro-3000/favorite", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Authenticated fetch reflects the favorite
    let response = app
        .get_authenticated("/api/products/blender-pro-3000", &token)
        .send()
        .await
        .expect("Failed to execute request");
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["favorited"], true);

    // Unfavorite
    let response = app
        .delete_authenticated("/api/products/blender-pro-3000/favorite", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["favorited"], false);

    // Delete
    let response = app
        .delete_authenticated("/api/products/blender-pro-3000", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .get("/api/products/blender-pro-3000")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_list_products_empty_catalog() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/api/products")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a running Postgres instance"]
async fn test_create_product_requires_authentication() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/api/products")
        .json(&json!({
            "title": "Blender",
            "brand": "Acme",
            "image": "https://img.example.com/b.png",
            "price": "349.00",
            "review_score": "4.8"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
