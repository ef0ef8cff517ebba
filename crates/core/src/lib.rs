//! Feedback Collector Core - Shared domain types.
//!
//! This crate provides the domain types used by the feedback collector:
//!
//! - `server` - HTTP API and web UI binary
//! - `integration-tests` - In-process API tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and validated emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
