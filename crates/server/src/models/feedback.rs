//! Feedback record model and submission validation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use feedback_collector_core::{Email, EmailError, FeedbackId};

/// A stored feedback record.
///
/// `id` and `timestamp` are assigned by the store on insert and never change;
/// records are append-only (no update or delete path exists).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: FeedbackId,
    pub full_name: String,
    pub email: Email,
    pub message: String,
    /// Creation time, the sole sort key for listing (descending).
    pub timestamp: DateTime<Utc>,
}

/// A validated feedback submission, ready to persist.
///
/// Construct via [`NewFeedback::parse`]; the store assigns the id and
/// timestamp on insert.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub full_name: String,
    pub email: Email,
    pub message: String,
}

/// Errors reported for invalid feedback submissions.
///
/// The `Display` strings are the exact messages returned to clients.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One of the three fields is missing or empty.
    #[error("All fields are required")]
    MissingField,

    /// The email does not match the `local@domain.tld` pattern.
    #[error("Invalid email format")]
    InvalidEmail(#[from] EmailError),
}

impl NewFeedback {
    /// Validate a candidate submission.
    ///
    /// Presence is checked first (any empty field rejects the whole
    /// submission), then the email pattern. Fields are taken as-is without
    /// trimming, matching the shallow validation contract.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` if any field is empty, or
    /// `ValidationError::InvalidEmail` if the email pattern fails.
    pub fn parse(full_name: &str, email: &str, message: &str) -> Result<Self, ValidationError> {
        if full_name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ValidationError::MissingField);
        }

        let email = Email::parse(email)?;

        Ok(Self {
            full_name: full_name.to_owned(),
            email,
            message: message.to_owned(),
        })
    }
}
