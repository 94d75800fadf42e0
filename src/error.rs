use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for the application.
///
/// Consolidates all fatal failures: configuration problems, the missing base
/// container, and faults while writing the output artifact. Recoverable scan
/// faults (unreadable directories, missing roots) never surface here; the
/// scanner logs them and continues.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),
    /// The configured base container does not exist or is not a directory.
    #[error("Base folder '{base_dir}' was not found at '{expected}' - ensure it exists and contains the configured roots ({roots})", expected = .expected.display())]
    BaseDirMissing {
        /// The configured container folder name.
        base_dir: String,
        /// The resolved location that was expected to be a directory.
        expected: PathBuf,
        /// The configured root names, comma-separated.
        roots: String,
    },
    /// For errors related to I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The manifest could not be serialized.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    /// An exclude pattern did not parse as a glob.
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] globset::Error),
}

/// A type alias for `Result<T, AppError>`, used throughout the application.
pub type AppResult<T> = Result<T, AppError>;
