//! Error types and handling for Codehop
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Codehop operations
#[derive(Error, Diagnostic, Debug)]
pub enum CodehopError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(codehop::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(codehop::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}")]
    #[diagnostic(
        code(codehop::config::parse_failed),
        help("The configuration is YAML; see README for the recognized keys")
    )]
    ConfigParseFailed { path: String, reason: String },

    // History store errors
    #[error("Failed to read history file: {path}")]
    #[diagnostic(code(codehop::history::read_failed))]
    HistoryReadFailed { path: String, reason: String },

    #[error("Failed to parse history file: {path}")]
    #[diagnostic(
        code(codehop::history::parse_failed),
        help("The history file is JSON; delete it to start from an empty history")
    )]
    HistoryParseFailed { path: String, reason: String },

    #[error("Failed to write history file: {path}")]
    #[diagnostic(code(codehop::history::write_failed))]
    HistoryWriteFailed { path: String, reason: String },

    #[error("No workspace history recorded yet")]
    #[diagnostic(
        code(codehop::history::empty),
        help("Record a workspace with 'codehop add <path-or-uri>'")
    )]
    HistoryEmpty,

    #[error("No history entry matches '{query}'")]
    #[diagnostic(
        code(codehop::history::no_match),
        help("Run 'codehop list' to see the recorded workspaces")
    )]
    EntryNotFound { query: String },

    // Distribution enumeration errors (recovered by the validator, never fatal)
    #[error("Failed to enumerate WSL distributions: {reason}")]
    #[diagnostic(code(codehop::distro::query_failed))]
    DistroQueryFailed { reason: String },

    // Launch errors (the only class surfaced to the user)
    #[error("No editor command found")]
    #[diagnostic(
        code(codehop::launch::editor_not_found),
        help(
            "Install the 'code' command line launcher (or codium/code-oss), or set 'editor' in the configuration file"
        )
    )]
    EditorNotFound,

    #[error("Failed to open '{uri}' with '{editor}': {reason}")]
    #[diagnostic(
        code(codehop::launch::failed),
        help(
            "Verify that the matching remote extension (Remote - WSL, Remote - SSH, or Codespaces) is installed and that the target host or distribution is running"
        )
    )]
    LaunchFailed {
        editor: String,
        uri: String,
        reason: String,
    },

    #[error("IO error: {message}")]
    #[diagnostic(code(codehop::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for CodehopError {
    fn from(err: std::io::Error) -> Self {
        CodehopError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for CodehopError {
    fn from(err: serde_yaml::Error) -> Self {
        CodehopError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CodehopError {
    fn from(err: serde_json::Error) -> Self {
        CodehopError::HistoryParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for CodehopError {
    fn from(err: inquire::InquireError) -> Self {
        CodehopError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CodehopError>;
