//! JSON API route handlers.
//!
//! The submission endpoint validates the three-field candidate record,
//! persists it, and returns the stored record; the listing endpoint returns
//! all records newest first. 201 on creation, 400 with a human-readable
//! message for client errors, 500 with a generic message for store failures.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::db::FeedbackStore;
use crate::error::Result;
use crate::models::{Feedback, NewFeedback};
use crate::state::AppState;

/// Candidate feedback submission.
///
/// Fields are optional at the wire level so that absent, null and empty
/// fields are all rejected the same way ("All fields are required").
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequest {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body for a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmitFeedbackResponse {
    pub success: bool,
    pub message: String,
    pub feedback: Feedback,
}

/// Validate and persist a feedback submission.
///
/// POST /api/submit-feedback
///
/// # Errors
///
/// Returns 400 for missing fields or a malformed email, 500 on store failure.
#[instrument(skip_all)]
pub async fn submit_feedback<S: FeedbackStore>(
    State(state): State<AppState<S>>,
    Json(request): Json<SubmitFeedbackRequest>,
) -> Result<(StatusCode, Json<SubmitFeedbackResponse>)> {
    let candidate = NewFeedback::parse(
        request.full_name.as_deref().unwrap_or(""),
        request.email.as_deref().unwrap_or(""),
        request.message.as_deref().unwrap_or(""),
    )?;

    let feedback = state.store().insert(candidate).await?;
    tracing::info!(id = %feedback.id, "Feedback stored");

    Ok((
        StatusCode::CREATED,
        Json(SubmitFeedbackResponse {
            success: true,
            message: "Feedback submitted successfully".to_owned(),
            feedback,
        }),
    ))
}

/// List all feedback records, newest first.
///
/// GET /api/feedbacks
///
/// # Errors
///
/// Returns 500 on store failure.
#[instrument(skip_all)]
pub async fn list_feedbacks<S: FeedbackStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Feedback>>> {
    let feedbacks = state.store().list_newest_first().await?;
    Ok(Json(feedbacks))
}
