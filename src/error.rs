//! Error types for pytest-mirror operations.
//!
//! This module defines [`MirrorError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Invalid input directories are reported immediately and never recovered
//! - Filesystem failures during generation are propagated unchanged as [`MirrorError::Io`]
//! - Use `anyhow::Error` (via `MirrorError::Other`) for validator plugin failures

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pytest-mirror operations.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// The package directory to mirror does not exist.
    #[error("Package directory does not exist: {path}")]
    PackageDirNotFound { path: PathBuf },

    /// The package directory exists but is not a directory.
    #[error("Package directory is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Failed to parse a project configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pytest-mirror operations.
pub type Result<T> = std::result::Result<T, MirrorError>;
