//! pytest-mirror - Mirrored test structure enforcement.
//!
//! pytest-mirror mirrors a package's module tree into a parallel test tree,
//! reports which modules lack a test file, and can create failing
//! placeholder tests (plus `__init__.py` package markers) for them.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `pyproject.toml` settings and directory resolution
//! - [`error`] - Error types and result aliases
//! - [`mirror`] - Module scanning, test path mapping and placeholder generation
//! - [`ui`] - Console output
//! - [`validator`] - Pluggable missing-test validators and their registry
//!
//! # Example
//!
//! ```
//! use pytest_mirror::mirror::{find_missing_tests, generate_missing_tests};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let pkg = temp.path().join("pkg");
//! fs::create_dir_all(&pkg).unwrap();
//! fs::write(pkg.join("foo.py"), "").unwrap();
//! let tests = temp.path().join("tests");
//!
//! assert_eq!(find_missing_tests(&pkg, &tests).unwrap(), vec![tests.join("test_foo.py")]);
//!
//! let report = generate_missing_tests(&pkg, &tests).unwrap();
//! assert_eq!(report.created_count(), 1);
//! assert!(find_missing_tests(&pkg, &tests).unwrap().is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod mirror;
pub mod ui;
pub mod validator;

pub use error::{MirrorError, Result};
