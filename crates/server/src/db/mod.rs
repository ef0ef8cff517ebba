//! Store interface and `PostgreSQL` access.
//!
//! # Database layout
//!
//! One append-only table:
//!
//! - `feedback` - Submitted feedback records (`created_at` assigned by the
//!   database, indexed descending for newest-first listing)
//!
//! Migrations are stored in `crates/server/migrations/` and run automatically
//! at startup via `sqlx::migrate!`.

pub mod feedback;

use std::future::Future;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use crate::models::{Feedback, NewFeedback};

pub use feedback::PgFeedbackStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Capability required by the feedback handlers.
///
/// Handlers are stateless functions over this interface; the production
/// implementation is [`PgFeedbackStore`], and tests substitute in-memory or
/// failing stores.
pub trait FeedbackStore: Clone + Send + Sync + 'static {
    /// Persist a validated submission, assigning its id and timestamp.
    fn insert(
        &self,
        feedback: NewFeedback,
    ) -> impl Future<Output = Result<Feedback, RepositoryError>> + Send;

    /// All stored records, ordered by timestamp descending (newest first).
    fn list_newest_first(
        &self,
    ) -> impl Future<Output = Result<Vec<Feedback>, RepositoryError>> + Send;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
