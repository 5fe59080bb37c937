//! Error types for Credence operations.
//!
//! This module defines the main error type [`CredenceError`]. Analysis itself
//! never fails: collaborator errors are caught inside the pipeline and turned
//! into neutral or simulated results. The variants below surface only from
//! the fetching helpers and from the collaborator implementations, whose
//! callers decide how to degrade.
//!
//! # Example
//!
//! ```rust
//! use credence_core::{CredenceError, Result};
//!
//! fn require_text(text: &str) -> Result<&str> {
//!     if text.trim().is_empty() {
//!         return Err(CredenceError::HtmlParseError("no text".to_string()));
//!     }
//!     Ok(text)
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fetching and collaborator operations.
#[derive(Error, Debug)]
pub enum CredenceError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and response decoding problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a URL cannot be parsed or has no host.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTML parsing errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// An external service answered with a non-success status.
    #[error("{service} returned status {status}")]
    ServiceStatus { service: &'static str, status: u16 },

    /// The unreliable-source dataset could not be read.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CredenceError.
pub type Result<T> = std::result::Result<T, CredenceError>;
