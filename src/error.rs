//! Error types for setup verification.
//!
//! This module defines [`VerifierError`], the error type produced by checks
//! and configuration loading, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Checks return `VerifierError` and never propagate past the runner,
//!   which downgrades every error to a failed check
//! - Use `anyhow::Error` (via `VerifierError::Other`) for unexpected errors
//! - All errors should read as a diagnostic line for the operator

use thiserror::Error;

/// Core error type for setup verification.
#[derive(Debug, Error)]
pub enum VerifierError {
    /// Credential variable is unset, empty, or still holds the placeholder.
    #[error("{variable} not configured properly")]
    MissingCredential { variable: String },

    /// Request never produced a response (refused, timed out, DNS failure).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Response arrived with a status other than 200.
    #[error("{url} responded with status {status}")]
    UnexpectedStatus { url: String, status: u16 },

    /// Response body could not be read as JSON.
    #[error("invalid response body from {url}: {source}")]
    InvalidBody {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Service answered but reported an application-level failure.
    #[error("{message}")]
    Rejected { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for verifier operations.
pub type Result<T> = std::result::Result<T, VerifierError>;
