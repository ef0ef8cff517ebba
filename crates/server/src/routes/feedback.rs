//! Web UI route handlers (HTMX fragments).
//!
//! The page holds a form box and a list box; submissions and refreshes swap
//! fragments into them. Fragments always render with status 200 so HTMX
//! performs the swap; the JSON API is where status codes carry the contract.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, response::IntoResponse, response::Response};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::instrument;

use crate::db::FeedbackStore;
use crate::models::{Feedback, NewFeedback};
use crate::state::AppState;

/// Timestamp presentation used on feedback cards, e.g. "Mar 5, 2026, 02:31 PM".
const CARD_TIMESTAMP_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// Feedback form data (HTMX form-encoded submission).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackFormData {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// One record prepared for card rendering.
pub struct FeedbackCard {
    pub full_name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
}

impl From<&Feedback> for FeedbackCard {
    fn from(feedback: &Feedback) -> Self {
        Self {
            full_name: feedback.full_name.clone(),
            email: feedback.email.to_string(),
            message: feedback.message.clone(),
            timestamp: format_card_timestamp(&feedback.timestamp),
        }
    }
}

fn format_card_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(CARD_TIMESTAMP_FORMAT).to_string()
}

/// Full feedback page (form + list).
#[derive(Template, WebTemplate)]
#[template(path = "feedback/page.html")]
pub struct PageTemplate {
    pub full_name_value: String,
    pub email_value: String,
    pub message_value: String,
}

/// Success fragment: banner plus a cleared form (replaces the form box).
#[derive(Template, WebTemplate)]
#[template(path = "feedback/submit_success.html")]
pub struct SubmitSuccessTemplate {
    pub full_name_value: String,
    pub email_value: String,
    pub message_value: String,
}

/// Error fragment: banner plus the form with entered values preserved.
#[derive(Template, WebTemplate)]
#[template(path = "feedback/submit_error.html")]
pub struct SubmitErrorTemplate {
    pub message: String,
    pub full_name_value: String,
    pub email_value: String,
    pub message_value: String,
}

/// List fragment: empty state or one card per record, newest first.
#[derive(Template, WebTemplate)]
#[template(path = "feedback/list.html")]
pub struct ListTemplate {
    pub feedbacks: Vec<FeedbackCard>,
}

/// List error fragment with a retry action.
#[derive(Template, WebTemplate)]
#[template(path = "feedback/list_error.html")]
pub struct ListErrorTemplate;

/// Render the feedback page.
///
/// GET /feedback
pub async fn page() -> PageTemplate {
    PageTemplate {
        full_name_value: String::new(),
        email_value: String::new(),
        message_value: String::new(),
    }
}

/// Submit feedback from the web form (HTMX).
///
/// Re-validates on the server even though the form enforces required fields
/// in the browser. On success the form box is replaced with a cleared form
/// and a banner that removes itself after five seconds; on failure the
/// entered values are preserved alongside the error message.
#[instrument(skip_all, fields(email = %form.email))]
pub async fn submit<S: FeedbackStore>(
    State(state): State<AppState<S>>,
    Form(form): Form<FeedbackFormData>,
) -> Response {
    let candidate = match NewFeedback::parse(&form.full_name, &form.email, &form.message) {
        Ok(candidate) => candidate,
        Err(e) => {
            return SubmitErrorTemplate {
                message: e.to_string(),
                full_name_value: form.full_name,
                email_value: form.email,
                message_value: form.message,
            }
            .into_response();
        }
    };

    match state.store().insert(candidate).await {
        Ok(feedback) => {
            tracing::info!(id = %feedback.id, "Feedback stored via web form");
            SubmitSuccessTemplate {
                full_name_value: String::new(),
                email_value: String::new(),
                message_value: String::new(),
            }
            .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to store feedback from web form");
            SubmitErrorTemplate {
                message: "Something went wrong. Please try again.".to_owned(),
                full_name_value: form.full_name,
                email_value: form.email,
                message_value: form.message,
            }
            .into_response()
        }
    }
}

/// Render the feedback list fragment (HTMX).
///
/// GET /feedback/list
#[instrument(skip_all)]
pub async fn list<S: FeedbackStore>(State(state): State<AppState<S>>) -> Response {
    match state.store().list_newest_first().await {
        Ok(records) => ListTemplate {
            feedbacks: records.iter().map(FeedbackCard::from).collect(),
        }
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load feedback list for web view");
            ListErrorTemplate.into_response()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_card_timestamp_format() {
        let timestamp = Utc.with_ymd_and_hms(2026, 3, 5, 14, 31, 0).unwrap();
        assert_eq!(format_card_timestamp(&timestamp), "Mar 5, 2026, 02:31 PM");
    }

    #[test]
    fn test_card_from_feedback() {
        let feedback = Feedback {
            id: feedback_collector_core::FeedbackId::new(1),
            full_name: "Ada Lovelace".to_owned(),
            email: feedback_collector_core::Email::parse("ada@example.com").unwrap(),
            message: "Great app!".to_owned(),
            timestamp: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        };

        let card = FeedbackCard::from(&feedback);
        assert_eq!(card.full_name, "Ada Lovelace");
        assert_eq!(card.email, "ada@example.com");
        assert_eq!(card.timestamp, "Jan 2, 2026, 03:04 AM");
    }
}
