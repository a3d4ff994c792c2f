//! # Error Handling
//!
//! This module defines the centralized error handling mechanism for the
//! `repogen` application. It uses the `thiserror` library to create a
//! comprehensive `Error` enum that covers all anticipated failure modes,
//! providing clear and descriptive error messages.
//!
//! There is no recovery path for any variant: every error is fatal to the
//! run and surfaces to the operator through a non-zero exit. The failure
//! modes covered are:
//!
//! - Manifest validation errors (duplicate names, bad import paths).
//! - External query command failures.
//! - Unparsable query output.
//! - Exclusion patterns that match no discovered test target.
//! - Report generation ordered before suite generation.
//! - I/O and URL parsing errors.
//!
//! The `Result<T>` alias is used throughout the library to simplify
//! signatures and propagate errors with `?`.

use thiserror::Error;

/// Main error type for repogen operations
#[derive(Error, Debug)]
pub enum Error {
    /// The repository table is internally inconsistent.
    ///
    /// This error includes the specific problem and optionally a hint about
    /// how to fix the table entry.
    #[error("Manifest error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Manifest {
        message: String,
        /// Optional hint for how to fix the table entry
        hint: Option<String>,
    },

    /// The external build-graph query could not be run or exited non-zero.
    #[error("Query command failed for {repository}: {command} - {stderr}")]
    QueryCommand {
        command: String,
        repository: String,
        stderr: String,
    },

    /// The external build-graph query produced output that could not be decoded.
    #[error("Query output error for {repository}: {message}")]
    QueryOutput { repository: String, message: String },

    /// One or more configured exclusion patterns matched no discovered test
    /// target.
    ///
    /// Carries every offending pattern so stale exclusions can be fixed in
    /// one pass.
    #[error("Invalid excludes for {repository}: {}", patterns.join(", "))]
    InvalidExcludes {
        repository: String,
        patterns: Vec<String>,
    },

    /// A resolved test list was requested before the test-suite pass
    /// recorded it.
    #[error("No resolved tests recorded for {repository}; the test-suite file must be generated first")]
    UnresolvedRepository { repository: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A URL parsing error, wrapped from `url::ParseError`.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
