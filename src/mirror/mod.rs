//! Mirroring a package's module tree into a parallel test tree.
//!
//! This module contains the core of pytest-mirror:
//! - [`MirrorLayout`] - The naming convention that ties a module to its test file
//! - [`scan`] - Recursive enumeration of module files
//! - [`resolver`] - Expected and missing test path computation
//! - [`generator`] - Placeholder creation for missing tests
//!
//! # Example
//!
//! ```
//! use pytest_mirror::mirror::find_missing_tests;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! let pkg = temp.path().join("pkg");
//! fs::create_dir_all(pkg.join("sub")).unwrap();
//! fs::write(pkg.join("sub").join("foo.py"), "# module\n").unwrap();
//! let tests = temp.path().join("tests");
//!
//! let missing = find_missing_tests(&pkg, &tests).unwrap();
//! assert_eq!(missing, vec![tests.join("sub").join("test_foo.py")]);
//! ```

pub mod generator;
pub mod resolver;
pub mod scan;

pub use generator::{generate_missing_tests, write_placeholders, GenerationReport};
pub use resolver::{expected_test_paths, find_missing_tests};
pub use scan::{ensure_package_dir, scan_modules};

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Body written into every generated test stub.
pub const PLACEHOLDER_TEST: &str = "import pytest\n\ndef test_placeholder():\n    assert False, 'This is a placeholder test. Please implement.'\n";

/// Naming convention shared by the resolver and the generator.
///
/// The defaults describe a regular Python package mirrored for pytest:
/// `pkg/sub/foo.py` is expected at `tests/sub/test_foo.py`, and
/// `__init__.py` files are never mirrored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorLayout {
    /// Extension of module files, without the dot.
    pub module_extension: String,
    /// File name marking a directory as a package.
    pub init_marker: String,
    /// Prefix prepended to a module's file name to form its test file name.
    pub test_prefix: String,
    /// Content written into generated test files.
    pub placeholder: String,
    /// Whether generated test directories receive an `init_marker` file.
    pub create_init_markers: bool,
}

impl Default for MirrorLayout {
    fn default() -> Self {
        Self::python()
    }
}

impl MirrorLayout {
    /// The pytest layout.
    pub fn python() -> Self {
        Self {
            module_extension: "py".to_string(),
            init_marker: "__init__.py".to_string(),
            test_prefix: "test_".to_string(),
            placeholder: PLACEHOLDER_TEST.to_string(),
            create_init_markers: true,
        }
    }

    /// Check whether a file path names a mirrored module.
    ///
    /// The package initializer is excluded unconditionally.
    pub fn is_module_file(&self, path: &Path) -> bool {
        if path.file_name() == Some(OsStr::new(&self.init_marker)) {
            return false;
        }
        path.extension() == Some(OsStr::new(&self.module_extension))
    }

    /// Map a module path relative to the package root onto its test path.
    ///
    /// The result differs from `relative` only by its root (`tests_dir`) and
    /// by the test prefix on the file name.
    pub fn expected_test_path(&self, tests_dir: &Path, relative: &Path) -> PathBuf {
        let parent = relative.parent().unwrap_or_else(|| Path::new(""));
        let mut file_name = std::ffi::OsString::from(&self.test_prefix);
        if let Some(name) = relative.file_name() {
            file_name.push(name);
        }
        tests_dir.join(parent).join(file_name)
    }
}
