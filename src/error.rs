//! Error types for the library catalogue
//!
//! Expected outcomes (an invalid ISBN, a missing record) are not errors: the
//! service reports them as `false` or `None`. `AppError` covers faults in the
//! surrounding infrastructure and in store backends that can fail.

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
