//! Error types for report-fetch
//!
//! This module provides the error taxonomy for the tool:
//! - Usage errors (malformed report identifier)
//! - Transport errors (connection/TLS failures, non-success HTTP responses)
//! - Data-shape errors (malformed or empty archive, unreadable entry)
//! - Local errors (destination file I/O)
//!
//! Each error maps onto a process exit code through [`ToExitCode`].

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for report-fetch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for report-fetch
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The settings key that caused the error (e.g., "host_address")
        key: Option<String>,
    },

    /// Settings file could not be found at the resolved location
    #[error("settings file not found at {path}")]
    SettingsNotFound {
        /// The settings path that was looked up
        path: PathBuf,
    },

    /// Report identifier is not a parseable UUID
    #[error("invalid report identifier {input:?}: {reason}")]
    InvalidReportId {
        /// The text that failed to parse
        input: String,
        /// Parser diagnostic
        reason: String,
    },

    /// Network error (DNS, connect, TLS, body read)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status
    #[error("service returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code of the response
        status: u16,
        /// Response body text, best effort
        body: String,
    },

    /// Report archive could not be decoded
    #[error("archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings (de)serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while decoding the archive returned by the service
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Response body is not a readable archive
    #[error("response body is not a valid archive: {0}")]
    Malformed(#[from] zip::result::ZipError),

    /// Reading or inflating the report entry failed (checksum, corrupt data)
    #[error("failed to read report entry: {0}")]
    Read(#[source] std::io::Error),

    /// Archive holds no entries, so there is no first entry to read
    #[error("archive contains no entries (index 0 out of bounds)")]
    Empty,

    /// The single-pass line sequence was already opened
    #[error("report lines were already consumed")]
    Consumed,
}

/// Broad class of a failure, used for exit codes and log fields
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad invocation
    Usage,
    /// Settings problems
    Config,
    /// Could not talk to the service, or it refused
    Transport,
    /// The service answered with something unreadable
    Data,
    /// Local filesystem failures
    Local,
}

/// Map errors to process exit codes
///
/// Usage errors map to 0: printing the usage line counts as a successful exit.
pub trait ToExitCode {
    /// Get the process exit code for this error
    fn exit_code(&self) -> u8;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl Error {
    /// Which part of the taxonomy this error belongs to
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidReportId { .. } => ErrorCategory::Usage,
            Error::Config { .. } | Error::SettingsNotFound { .. } | Error::Serialization(_) => {
                ErrorCategory::Config
            }
            Error::Network(_) | Error::Status { .. } => ErrorCategory::Transport,
            Error::Archive(_) => ErrorCategory::Data,
            Error::Io(_) => ErrorCategory::Local,
        }
    }
}

impl ToExitCode for Error {
    fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Usage => 0,
            ErrorCategory::Config => 2,
            ErrorCategory::Transport => 3,
            ErrorCategory::Data => 4,
            ErrorCategory::Local => 5,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Error::Config { .. } => "config_error",
            Error::SettingsNotFound { .. } => "settings_not_found",
            Error::InvalidReportId { .. } => "invalid_report_id",
            Error::Network(_) => "network_error",
            Error::Status { .. } => "http_status",
            Error::Archive(e) => match e {
                ArchiveError::Malformed(_) => "malformed_archive",
                ArchiveError::Read(_) => "entry_read_failed",
                ArchiveError::Empty => "empty_archive",
                ArchiveError::Consumed => "lines_consumed",
            },
            Error::Io(_) => "io_error",
            Error::Serialization(_) => "serialization_error",
        }
    }
}
