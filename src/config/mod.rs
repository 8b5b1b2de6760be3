//! Project configuration for the runner integration.
//!
//! This module handles:
//! - The `[tool.pytest-mirror]` table of `pyproject.toml` in [`pyproject`]
//! - Package and tests directory resolution in [`paths`]
//! - The assembled per-invocation [`CheckSettings`] in [`settings`]
//!
//! # Example
//!
//! ```
//! use pytest_mirror::config::auto_generate_enabled;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! assert!(auto_generate_enabled(temp.path()));
//!
//! fs::write(
//!     temp.path().join("pyproject.toml"),
//!     "[tool.pytest-mirror]\nauto-generate = false\n",
//! )
//! .unwrap();
//! assert!(!auto_generate_enabled(temp.path()));
//! ```
//!
//! # Resolution Order
//!
//! Directories are resolved from, in priority order:
//! 1. An explicit command-line option
//! 2. An environment variable (`PYTEST_MIRROR_PACKAGE_DIR`, `PYTEST_MIRROR_TESTS_DIR`)
//! 3. Auto-detection relative to the project root

pub mod paths;
pub mod pyproject;
pub mod settings;

pub use paths::{
    detect_package_dir, resolve_package_dir, resolve_tests_dir, PACKAGE_DIR_ENV, TESTS_DIR_ENV,
};
pub use pyproject::{
    auto_generate_enabled, load_pyproject, parse_auto_generate, MirrorSettings, PyProject,
    PYPROJECT_FILE,
};
pub use settings::CheckSettings;
