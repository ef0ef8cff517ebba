//! Domain models for the server.

pub mod feedback;

pub use feedback::{Feedback, NewFeedback, ValidationError};
