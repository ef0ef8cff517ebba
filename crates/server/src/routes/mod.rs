//! HTTP route handlers for the feedback collector.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Liveness text
//!
//! # JSON API
//! POST /api/submit-feedback     - Validate and persist a submission
//! GET  /api/feedbacks           - All records, newest first
//!
//! # Web UI (HTMX fragments)
//! GET  /feedback                - Form + list page
//! POST /feedback/submit         - Submit form (returns form fragment)
//! GET  /feedback/list           - List fragment
//! ```

pub mod api;
pub mod feedback;

use axum::{
    Router,
    routing::{get, post},
};

use crate::db::FeedbackStore;
use crate::state::AppState;

/// Create the JSON API routes router.
pub fn api_routes<S: FeedbackStore>() -> Router<AppState<S>> {
    Router::new()
        .route("/submit-feedback", post(api::submit_feedback::<S>))
        .route("/feedbacks", get(api::list_feedbacks::<S>))
}

/// Create the web UI routes router.
pub fn feedback_routes<S: FeedbackStore>() -> Router<AppState<S>> {
    Router::new()
        .route("/", get(feedback::page))
        .route("/submit", post(feedback::submit::<S>))
        .route("/list", get(feedback::list::<S>))
}

/// Create all routes for the server.
pub fn routes<S: FeedbackStore>() -> Router<AppState<S>> {
    Router::new()
        // Liveness
        .route("/", get(root))
        // JSON API
        .nest("/api", api_routes())
        // Web UI
        .nest("/feedback", feedback_routes())
}

/// Liveness text endpoint.
///
/// Returns a static message if the server is running. Does not check
/// dependencies.
async fn root() -> &'static str {
    "Feedback Collector API is running"
}
