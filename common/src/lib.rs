//! Shared leaf types for the dashboard client.
//!
//! This crate contains small, dependency-light types used across the
//! workspace. Nothing here performs I/O or holds business logic.
//!
//! ## Architecture
//!
//! - **common** (this crate): shared leaf types
//! - **client-core**: HTTP client, token storage, markdown rendering
//!
//! Keeping these types in a leaf crate avoids cyclic dependencies between
//! the client and any future host application crates.

pub mod error;
pub mod http_status;
pub mod redacted_token;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
pub use redacted_token::RedactedToken;
