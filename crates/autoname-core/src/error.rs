//! Error types for the naming engine
//!
//! Every failure here is a contract violation by the caller. Nothing is
//! retried: naming is deterministic, so a second attempt fails the same way.

use thiserror::Error;

/// Result type alias for naming operations
pub type Result<T> = std::result::Result<T, NamingError>;

/// Errors raised while deriving a logical name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingError {
    #[error(
        "Malformed type descriptor `{descriptor}`: expected `pkg:module:type`, found {segments} segment(s)"
    )]
    MalformedTypeDescriptor { descriptor: String, segments: usize },

    #[error("Product code must not be empty")]
    EmptyProductCode,

    #[error("Environment name must not be empty")]
    EmptyEnvironmentName,

    #[error("No caller-supplied name for resource of type `{resource_type}`")]
    MissingName { resource_type: String },
}
