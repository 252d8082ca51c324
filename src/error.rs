//! Error types for the compensation decision engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during compensation evaluation.

use thiserror::Error;

/// The main error type for the compensation decision engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use compensation_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Policy file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Policy configuration file was not found at the specified path.
    #[error("Policy file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy configuration file could not be parsed.
    #[error("Failed to parse policy file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A loaded policy was structurally invalid.
    #[error("Invalid policy: {message}")]
    InvalidPolicy {
        /// A description of what made the policy invalid.
        message: String,
    },

    /// A caller supplied malformed numeric input.
    ///
    /// Surfaced immediately with no partial computation; the caller can
    /// always correct the input and retry.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The argument that was invalid.
        field: String,
        /// A description of what made the argument invalid.
        message: String,
    },

    /// No employee exists for the given identifier.
    ///
    /// Raised by store updates against unknown identifiers. A raise
    /// evaluation against a missing employee is *not* an error; it is
    /// reported as a `NotFound` result value.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The identifier that was not found.
        id: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
