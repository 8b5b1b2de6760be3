//! Pluggable missing-test validation.
//!
//! The validation step is supplied by one or more [`Validator`]
//! implementations held in a [`ValidatorRegistry`]. Dispatching the registry
//! runs every validator against the same directories and concatenates their
//! results in registration order.
//!
//! # Example
//!
//! ```
//! use pytest_mirror::validator::ValidatorRegistry;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let pkg = temp.path().join("pkg");
//! fs::create_dir_all(&pkg).unwrap();
//! fs::write(pkg.join("foo.py"), "").unwrap();
//!
//! let registry = ValidatorRegistry::with_builtins();
//! let missing = registry.dispatch(&pkg, &temp.path().join("tests")).unwrap();
//! assert_eq!(missing.len(), 1);
//! ```

pub mod mirror;
pub mod registry;

pub use mirror::MirrorValidator;
pub use registry::ValidatorRegistry;

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Unique identifier for a validator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatorId(pub String);

impl ValidatorId {
    /// Create a new validator ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for ValidatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A component that reports missing test paths.
pub trait Validator {
    /// Identifier for this validator.
    fn id(&self) -> ValidatorId;

    /// Human-readable description of what this validator checks.
    fn description(&self) -> &str;

    /// Return the test paths that should exist but do not.
    fn validate(&self, package_dir: &Path, tests_dir: &Path) -> Result<Vec<PathBuf>>;
}
