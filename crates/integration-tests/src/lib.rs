//! Integration test harness for the feedback collector.
//!
//! Drives the real router in-process through `tower::ServiceExt::oneshot`,
//! substituting the store implementation:
//!
//! - [`MemoryStore`] - append-only in-memory store (shared via `Arc`, so a
//!   clone kept by the test observes what the handlers wrote)
//! - [`FailingStore`] - every operation fails, for 500-path tests
//!
//! # Example
//!
//! ```rust,ignore
//! let app = TestApp::new(MemoryStore::default());
//! let response = app.get("/api/feedbacks").await;
//! assert_eq!(response.status, StatusCode::OK);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::Utc;
use secrecy::SecretString;
use tower::ServiceExt;

use feedback_collector_core::FeedbackId;
use feedback_collector_server::config::ServerConfig;
use feedback_collector_server::db::{FeedbackStore, RepositoryError};
use feedback_collector_server::models::{Feedback, NewFeedback};
use feedback_collector_server::routes;
use feedback_collector_server::state::AppState;

/// In-memory feedback store.
///
/// Assigns sequential ids and the current time on insert; listing reverses
/// insertion order, which matches timestamp-descending for an append-only
/// store even when timestamps collide.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryStoreInner>>,
}

#[derive(Default)]
struct MemoryStoreInner {
    next_id: i32,
    records: Vec<Feedback>,
}

impl MemoryStore {
    /// Number of records currently stored.
    ///
    /// # Panics
    ///
    /// Panics if the store lock is poisoned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().expect("memory store poisoned").records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FeedbackStore for MemoryStore {
    async fn insert(&self, feedback: NewFeedback) -> Result<Feedback, RepositoryError> {
        let mut inner = self.inner.lock().expect("memory store poisoned");
        inner.next_id += 1;

        let record = Feedback {
            id: FeedbackId::new(inner.next_id),
            full_name: feedback.full_name,
            email: feedback.email,
            message: feedback.message,
            timestamp: Utc::now(),
        };
        inner.records.push(record.clone());

        Ok(record)
    }

    async fn list_newest_first(&self) -> Result<Vec<Feedback>, RepositoryError> {
        let inner = self.inner.lock().expect("memory store poisoned");
        Ok(inner.records.iter().rev().cloned().collect())
    }
}

/// Store whose every operation fails with a connection-style error.
#[derive(Clone, Copy, Default)]
pub struct FailingStore;

impl FeedbackStore for FailingStore {
    async fn insert(&self, _feedback: NewFeedback) -> Result<Feedback, RepositoryError> {
        Err(RepositoryError::Database(sqlx::Error::PoolClosed))
    }

    async fn list_newest_first(&self) -> Result<Vec<Feedback>, RepositoryError> {
        Err(RepositoryError::Database(sqlx::Error::PoolClosed))
    }
}

/// Configuration used by the in-process test server.
#[must_use]
pub fn test_config() -> ServerConfig {
    ServerConfig {
        database_url: SecretString::from("postgres://localhost:5432/feedback_test"),
        host: std::net::IpAddr::from([127, 0, 0, 1]),
        port: 0,
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// A response captured from the in-process router.
pub struct TestResponse {
    pub status: StatusCode,
    body: Vec<u8>,
}

impl TestResponse {
    /// Parse the body as JSON.
    ///
    /// # Panics
    ///
    /// Panics if the body is not valid JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is not valid JSON")
    }

    /// The body as (lossy) UTF-8 text.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The real router wired to a test store.
pub struct TestApp {
    router: Router,
}

impl TestApp {
    /// Build the application router over the given store.
    #[must_use]
    pub fn new<S: FeedbackStore>(store: S) -> Self {
        let state = AppState::new(test_config(), store);
        Self {
            router: routes::routes().with_state(state),
        }
    }

    /// Send a GET request.
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("failed to build request");
        self.send(request).await
    }

    /// Send a POST request with a JSON body.
    pub async fn post_json(&self, uri: &str, body: &serde_json::Value) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("failed to build request");
        self.send(request).await
    }

    /// Send a POST request with a form-encoded body.
    pub async fn post_form(&self, uri: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_owned()))
            .expect("failed to build request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");

        TestResponse {
            status,
            body: bytes.to_vec(),
        }
    }
}
