//! Package and tests directory resolution.
//!
//! Each directory comes from the first source that provides one: an explicit
//! option, an environment variable, or auto-detection under the project root.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::pyproject::load_pyproject;

/// Environment variable naming the package directory.
pub const PACKAGE_DIR_ENV: &str = "PYTEST_MIRROR_PACKAGE_DIR";

/// Environment variable naming the tests directory.
pub const TESTS_DIR_ENV: &str = "PYTEST_MIRROR_TESTS_DIR";

/// Name of the conventional source layout directory.
const SRC_DIR: &str = "src";

/// Default tests directory name under the project root.
const TESTS_DIR: &str = "tests";

/// Resolve the package directory.
///
/// Empty values are ignored. Relative paths are taken relative to
/// `project_root`.
pub fn resolve_package_dir(
    option: Option<&Path>,
    env: Option<&str>,
    project_root: &Path,
) -> PathBuf {
    match first_set(option, env) {
        Some(path) => absolutize(project_root, &path),
        None => detect_package_dir(project_root),
    }
}

/// Resolve the tests directory, defaulting to `<root>/tests`.
pub fn resolve_tests_dir(option: Option<&Path>, env: Option<&str>, project_root: &Path) -> PathBuf {
    match first_set(option, env) {
        Some(path) => absolutize(project_root, &path),
        None => project_root.join(TESTS_DIR),
    }
}

/// Auto-detect the package directory under `project_root`.
///
/// Tries, in order:
/// 1. `src/<import name>` from `[project].name` in `pyproject.toml`
/// 2. `<import name>` at the root
/// 3. The first non-hidden directory in `src/`
/// 4. The first non-hidden directory at the root, other than `src/`
/// 5. The project root itself
pub fn detect_package_dir(project_root: &Path) -> PathBuf {
    let import_name = load_pyproject(project_root)
        .ok()
        .flatten()
        .and_then(|p| p.import_name());

    let src = project_root.join(SRC_DIR);
    let named = import_name
        .iter()
        .flat_map(|name| [src.join(name), project_root.join(name)])
        .find(|candidate| candidate.is_dir());

    let detected = named
        .or_else(|| first_subdir(&src, &[]))
        .or_else(|| first_subdir(project_root, &[SRC_DIR]))
        .unwrap_or_else(|| project_root.to_path_buf());

    debug!("Detected package directory {}", detected.display());
    detected
}

fn first_set(option: Option<&Path>, env: Option<&str>) -> Option<PathBuf> {
    option
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .or_else(|| {
            env.map(str::trim)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
}

fn absolutize(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

/// First non-hidden subdirectory of `dir` in name order.
fn first_subdir(dir: &Path, exclude: &[&str]) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;
    let mut subdirs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|name| !name.starts_with('.') && !exclude.contains(&name))
        })
        .collect();
    subdirs.sort();
    subdirs.into_iter().next()
}
