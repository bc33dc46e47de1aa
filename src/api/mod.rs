//! REST client for the movie API.
//!
//! Handles URL construction, envelope unwrapping and normalization of
//! failures into [`ApiFailure`] records.

mod client;
mod envelope;
mod error;

pub use client::ApiClient;
pub use envelope::{envelope_message, is_envelope, unwrap_envelope, Unwrapped};
pub use error::{ApiError, ApiFailure};
