use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a usage mistake from a failure
/// reported by the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (API error, network error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while talking to the marketplace or preparing a product update.
///
/// Messages are single-line (except for a rejected update, which carries the
/// server's plain-text explanation on the following line) because they are
/// shown to the user verbatim.
#[derive(Debug, Error)]
pub enum MarketplaceError {
    #[error("product \"{slug}\" not found")]
    ProductNotFound { slug: String },

    #[error("product \"{slug}\" does not have a version {version}")]
    VersionNotFound { slug: String, version: String },

    /// Raised when the latest version is asked for but none exist yet
    #[error("product \"{slug}\" does not have any versions")]
    NoVersions { slug: String },

    /// Raised by commands that attach an artifact to a version
    #[error("product \"{slug}\" does not have a version {version}, please add it first")]
    VersionMustExist { slug: String, version: String },

    #[error("product \"{slug}\" already has version {version}")]
    VersionAlreadyExists { slug: String, version: String },

    /// The request never produced a response (DNS, connection, TLS, timeout)
    #[error("{action} failed: {details}")]
    RequestFailed { action: String, details: String },

    #[error("{action} failed: ({status})")]
    UnexpectedStatus { action: String, status: u16 },

    #[error("updating product \"{slug}\" failed: ({status})\n{body}")]
    UpdateRejected {
        slug: String,
        status: u16,
        body: String,
    },

    #[error("failed to read {subject}: {details}")]
    ReadFailed { subject: String, details: String },

    #[error("failed to parse {subject}: {details}")]
    ParseFailed { subject: String, details: String },

    #[error("listing products stopped after {max_pages} page(s): {fetched} of {expected} product(s) received")]
    PaginationLimitExceeded {
        max_pages: u32,
        fetched: usize,
        expected: usize,
    },

    #[error("Failed to upload file: {path}\nDetails: {details}")]
    UploadFailed { path: PathBuf, details: String },

    #[error("Failed to write output file: {path}\nDetails: {details}")]
    WriteFailed { path: PathBuf, details: String },

    /// Validation error for user supplied values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
