//! Recursive module enumeration.
//!
//! Walks a package directory and yields every module file relative to the
//! package root. Symlinks are followed, so a directory linked from two
//! places is listed under both. Only a link back into the current descent
//! path is cut.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::MirrorLayout;
use crate::error::{MirrorError, Result};

/// Check that `package_dir` exists and is a directory.
///
/// # Errors
///
/// Returns `PackageDirNotFound` if nothing exists at the path, and
/// `NotADirectory` if it exists but is not a directory.
pub fn ensure_package_dir(package_dir: &Path) -> Result<()> {
    if !package_dir.exists() {
        return Err(MirrorError::PackageDirNotFound {
            path: package_dir.to_path_buf(),
        });
    }
    if !package_dir.is_dir() {
        return Err(MirrorError::NotADirectory {
            path: package_dir.to_path_buf(),
        });
    }
    Ok(())
}

/// List every module file under `package_dir`, relative to it.
///
/// Entries are visited in name order, so the result is stable for a given
/// filesystem snapshot. Nested directories that cannot be read are skipped
/// with a warning.
pub fn scan_modules(package_dir: &Path, layout: &MirrorLayout) -> Result<Vec<PathBuf>> {
    ensure_package_dir(package_dir)?;

    let mut modules = Vec::new();
    let mut ancestors = Vec::new();
    walk(package_dir, package_dir, layout, &mut ancestors, &mut modules)?;
    debug!(
        "Found {} module(s) under {}",
        modules.len(),
        package_dir.display()
    );
    Ok(modules)
}

fn walk(
    root: &Path,
    dir: &Path,
    layout: &MirrorLayout,
    ancestors: &mut Vec<PathBuf>,
    modules: &mut Vec<PathBuf>,
) -> Result<()> {
    let canonical = fs::canonicalize(dir)?;
    if ancestors.contains(&canonical) {
        debug!("Skipping symlink cycle at {}", dir.display());
        return Ok(());
    }

    let listing = match fs::read_dir(dir) {
        Ok(listing) => listing,
        Err(e) if e.kind() == io::ErrorKind::PermissionDenied && !ancestors.is_empty() => {
            warn!("Skipping unreadable directory {}: {}", dir.display(), e);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    let mut entries = listing
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort();

    ancestors.push(canonical);
    for path in entries {
        // is_dir/is_file follow symlinks; dangling links are neither.
        if path.is_dir() {
            walk(root, &path, layout, ancestors, modules)?;
        } else if path.is_file() && layout.is_module_file(&path) {
            if let Ok(relative) = path.strip_prefix(root) {
                modules.push(relative.to_path_buf());
            }
        }
    }
    ancestors.pop();

    Ok(())
}
