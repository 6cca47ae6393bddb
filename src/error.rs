#![deny(missing_docs)]

//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the crate.
//!
//! Validation entry points never surface these directly: they are folded into a
//! [`crate::validator::ValidationResult`] at the public boundary.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From, Clone, PartialEq, Eq)]
pub enum AppError {
    /// No registered template matched the request method and path.
    #[from(ignore)]
    #[display("Endpoint not found: {method} {path}")]
    EndpointNotFound {
        /// The request method as supplied by the caller.
        method: String,
        /// The concrete request path as supplied by the caller.
        path: String,
    },

    /// A field schema rejected the supplied value.
    #[from(ignore)]
    #[display("{_0}")]
    ValidationFailed(String),

    /// Strict registration found an existing endpoint with the same key.
    #[from(ignore)]
    #[display("Duplicate endpoint: {_0}")]
    DuplicateEndpoint(String),

    /// A method name outside the supported set (or with the wrong case).
    #[from(ignore)]
    #[display("Invalid HTTP method: {_0}")]
    InvalidMethod(String),

    /// A generated document could not be rendered.
    #[from(ignore)]
    #[display("Serialization Error: {_0}")]
    Serialization(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
