//! Error types for tl
//!
//! Exit codes:
//! - 0: Success (including the silent no-ops: empty add text, unknown
//!   toggle id, unreadable store degrading to an empty list)
//! - 2: User error (bad args, invalid config)
//! - 4: Operation failed (io error, serialization error)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the tl CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for tl operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No store path available; pass --store or set TL_STORE")]
    NoStorePath,

    // Operation failures (exit code 4)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Store not writable: {0}")]
    StoreNotWritable(PathBuf),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidConfig(_) | Error::InvalidArgument(_) | Error::NoStorePath => {
                exit_codes::USER_ERROR
            }
            Error::Io(_) | Error::Json(_) | Error::StoreNotWritable(_) => {
                exit_codes::OPERATION_FAILED
            }
        }
    }
}

/// Result type alias for tl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: i32,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
            code: err.exit_code(),
        }
    }
}
