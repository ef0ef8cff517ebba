//! `PostgreSQL`-backed feedback store.
//!
//! Rows are validated on read: an email that no longer parses is surfaced as
//! `RepositoryError::DataCorruption` rather than silently passed through.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use feedback_collector_core::{Email, FeedbackId};

use super::{FeedbackStore, RepositoryError};
use crate::models::{Feedback, NewFeedback};

/// Raw database row for the `feedback` table.
#[derive(Debug, sqlx::FromRow)]
struct FeedbackRow {
    id: i32,
    full_name: String,
    email: String,
    message: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<FeedbackRow> for Feedback {
    type Error = RepositoryError;

    fn try_from(row: FeedbackRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: FeedbackId::new(row.id),
            full_name: row.full_name,
            email,
            message: row.message,
            timestamp: row.created_at,
        })
    }
}

/// Feedback store backed by a `PostgreSQL` connection pool.
#[derive(Debug, Clone)]
pub struct PgFeedbackStore {
    pool: PgPool,
}

impl PgFeedbackStore {
    /// Create a new store over an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl FeedbackStore for PgFeedbackStore {
    async fn insert(&self, feedback: NewFeedback) -> Result<Feedback, RepositoryError> {
        let row = sqlx::query_as::<_, FeedbackRow>(
            r"
            INSERT INTO feedback (full_name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, full_name, email, message, created_at
            ",
        )
        .bind(&feedback.full_name)
        .bind(feedback.email.as_str())
        .bind(&feedback.message)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn list_newest_first(&self) -> Result<Vec<Feedback>, RepositoryError> {
        let rows = sqlx::query_as::<_, FeedbackRow>(
            r"
            SELECT id, full_name, email, message, created_at
            FROM feedback
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Feedback::try_from).collect()
    }
}
