//! JSON API integration tests, run in-process against the real router.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;

use feedback_collector_integration_tests::{FailingStore, MemoryStore, TestApp};

#[tokio::test]
async fn root_returns_liveness_text() {
    let app = TestApp::new(MemoryStore::default());

    let response = app.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "Feedback Collector API is running");
}

#[tokio::test]
async fn submitting_valid_feedback_returns_stored_record() {
    let store = MemoryStore::default();
    let app = TestApp::new(store.clone());

    let response = app
        .post_json(
            "/api/submit-feedback",
            &json!({
                "fullName": "Ada Lovelace",
                "email": "ada@example.com",
                "message": "Great app!"
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);

    let body = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Feedback submitted successfully");
    assert_eq!(body["feedback"]["fullName"], "Ada Lovelace");
    assert_eq!(body["feedback"]["email"], "ada@example.com");
    assert_eq!(body["feedback"]["message"], "Great app!");
    // Assigned by the store
    assert!(body["feedback"]["id"].is_number());
    assert!(body["feedback"]["timestamp"].is_string());

    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn submitting_with_empty_field_is_rejected() {
    let app = TestApp::new(MemoryStore::default());

    let bodies = [
        json!({"fullName": "", "email": "ada@example.com", "message": "hi"}),
        json!({"fullName": "Ada", "email": "", "message": "hi"}),
        json!({"fullName": "Ada", "email": "ada@example.com", "message": ""}),
    ];

    for body in bodies {
        let response = app.post_json("/api/submit-feedback", &body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.json()["error"], "All fields are required");
    }
}

#[tokio::test]
async fn submitting_with_absent_field_is_rejected() {
    let store = MemoryStore::default();
    let app = TestApp::new(store.clone());

    let bodies = [
        json!({"fullName": "Ada", "email": "ada@example.com"}),
        json!({"fullName": "Ada", "email": "ada@example.com", "message": null}),
    ];

    for body in bodies {
        let response = app.post_json("/api/submit-feedback", &body).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.json()["error"], "All fields are required");
    }

    assert!(store.is_empty());
}

#[tokio::test]
async fn submitting_malformed_email_is_rejected() {
    let app = TestApp::new(MemoryStore::default());

    for email in ["not-an-email", "ada@localhost", "@example.com", "ada@"] {
        let response = app
            .post_json(
                "/api/submit-feedback",
                &json!({"fullName": "Ada", "email": email, "message": "hi"}),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "email: {email}");
        assert_eq!(response.json()["error"], "Invalid email format");
    }
}

#[tokio::test]
async fn minimal_well_formed_email_is_accepted() {
    let app = TestApp::new(MemoryStore::default());

    let response = app
        .post_json(
            "/api/submit-feedback",
            &json!({"fullName": "Ada", "email": "a@b.co", "message": "hi"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
}

#[tokio::test]
async fn feedbacks_are_listed_newest_first() {
    let app = TestApp::new(MemoryStore::default());

    for name in ["First", "Second", "Third"] {
        let response = app
            .post_json(
                "/api/submit-feedback",
                &json!({"fullName": name, "email": "user@example.com", "message": "hi"}),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app.get("/api/feedbacks").await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["fullName"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Third", "Second", "First"]);
}

#[tokio::test]
async fn empty_store_lists_as_empty_array() {
    let app = TestApp::new(MemoryStore::default());

    let response = app.get("/api/feedbacks").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!([]));
}

#[tokio::test]
async fn store_failure_on_submit_reports_server_error() {
    let app = TestApp::new(FailingStore);

    let response = app
        .post_json(
            "/api/submit-feedback",
            &json!({"fullName": "Ada", "email": "ada@example.com", "message": "hi"}),
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    // Internal detail must not leak to the caller
    assert_eq!(response.json()["error"], "Server error");
}

#[tokio::test]
async fn store_failure_on_listing_reports_server_error() {
    let app = TestApp::new(FailingStore);

    let response = app.get("/api/feedbacks").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json()["error"], "Server error");
}
