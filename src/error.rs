//! Error types for projgen
//!
//! Library code returns `ProjgenError`; the binary wraps it with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for projgen operations
pub type ProjgenResult<T> = Result<T, ProjgenError>;

/// Main error type for projgen operations
#[derive(Error, Debug)]
pub enum ProjgenError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File system port error
    #[error("{0}")]
    FileSystem(#[from] crate::domain::ports::FsError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// A dependency was declared with a malformed version range
    #[error("invalid version constraint '{constraint}' for '{package}': {reason}")]
    InvalidVersionConstraint {
        package: String,
        constraint: String,
        reason: String,
    },

    /// Two emitters were bound to the same output path
    #[error("file '{path}' is already registered by another component")]
    FileCollision { path: PathBuf },

    /// Existing file could not be merged (merge-preserve mode)
    #[error("cannot merge into existing {path}: {message}")]
    InvalidExistingFile { path: PathBuf, message: String },

    /// Output path is absolute or escapes the output directory
    #[error("path '{path}' escapes the output directory")]
    PathEscape { path: PathBuf },

    /// One or more emitters failed to render
    #[error("synthesis failed for {failed} file(s): {}", .paths.join(", "))]
    SynthFailed { failed: usize, paths: Vec<String> },
}
