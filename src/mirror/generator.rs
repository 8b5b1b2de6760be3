//! Placeholder generation for missing tests.
//!
//! Generation never overwrites: a file that exists at a computed path is left
//! untouched regardless of its content, so running the generator twice creates
//! files only the first time.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::MirrorLayout;
use crate::error::Result;

/// Files created by a generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Placeholder test files that were written.
    pub created: Vec<PathBuf>,
    /// Package marker files that were written.
    pub markers: Vec<PathBuf>,
}

impl GenerationReport {
    /// Number of placeholder tests created.
    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    /// Whether nothing needed to be created.
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.markers.is_empty()
    }
}

impl MirrorLayout {
    /// Create a placeholder test for every missing test of `package_dir`.
    ///
    /// Directories are created as needed, and each directory from `tests_dir`
    /// down to a new test receives a package marker when
    /// [`MirrorLayout::create_init_markers`] is set.
    ///
    /// # Errors
    ///
    /// Fails like [`MirrorLayout::missing_tests`] for an invalid package
    /// directory. Filesystem errors while creating directories or files are
    /// returned as-is.
    pub fn generate(&self, package_dir: &Path, tests_dir: &Path) -> Result<GenerationReport> {
        let missing = self.missing_tests(package_dir, tests_dir)?;
        let mut report = GenerationReport::default();

        for test_path in missing {
            let test_dir = test_path.parent().unwrap_or(tests_dir);
            fs::create_dir_all(test_dir)?;
            if self.create_init_markers {
                self.write_markers(tests_dir, test_dir, &mut report)?;
            }
            if write_new(&test_path, &self.placeholder)? {
                info!("Created {}", test_path.display());
                report.created.push(test_path);
            }
        }

        Ok(report)
    }

    /// Write a placeholder into each given path that does not exist yet.
    ///
    /// Parent directories are created; no package markers are written.
    /// Returns the paths that were actually created.
    pub fn write_placeholders(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut created = Vec::new();
        for path in paths {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            if write_new(path, &self.placeholder)? {
                info!("Created {}", path.display());
                created.push(path.clone());
            }
        }
        Ok(created)
    }

    fn write_markers(
        &self,
        tests_dir: &Path,
        test_dir: &Path,
        report: &mut GenerationReport,
    ) -> Result<()> {
        let relative = test_dir.strip_prefix(tests_dir).unwrap_or(Path::new(""));
        let mut current = tests_dir.to_path_buf();
        let mut dirs = vec![current.clone()];
        for component in relative.components() {
            current.push(component);
            dirs.push(current.clone());
        }

        for dir in dirs {
            let marker = dir.join(&self.init_marker);
            if write_new(&marker, "")? {
                debug!("Created package marker {}", marker.display());
                report.markers.push(marker);
            }
        }
        Ok(())
    }
}

/// Create `path` with `content` unless something already exists there.
///
/// Returns `false` when the path was already taken.
fn write_new(path: &Path, content: &str) -> io::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(content.as_bytes())?;
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e),
    }
}

/// Generate missing tests using the default pytest layout.
pub fn generate_missing_tests(package_dir: &Path, tests_dir: &Path) -> Result<GenerationReport> {
    MirrorLayout::python().generate(package_dir, tests_dir)
}

/// Write placeholders into `paths` using the default pytest layout.
pub fn write_placeholders(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    MirrorLayout::python().write_placeholders(paths)
}
