//! Settings for the runner startup check.

use std::path::{Path, PathBuf};

use super::paths::{resolve_package_dir, resolve_tests_dir, PACKAGE_DIR_ENV, TESTS_DIR_ENV};
use super::pyproject::auto_generate_enabled;

/// Everything the startup check needs, resolved once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckSettings {
    /// Package directory to mirror.
    pub package_dir: PathBuf,
    /// Tests directory to check and populate.
    pub tests_dir: PathBuf,
    /// `auto-generate` from `pyproject.toml`.
    pub auto_generate: bool,
    /// Generation disabled on the command line.
    pub no_generate: bool,
}

impl CheckSettings {
    /// Resolve settings from options, the process environment, and the
    /// project configuration.
    pub fn resolve(
        project_root: &Path,
        package_dir: Option<&Path>,
        tests_dir: Option<&Path>,
        no_generate: bool,
    ) -> Self {
        let package_env = std::env::var(PACKAGE_DIR_ENV).ok();
        let tests_env = std::env::var(TESTS_DIR_ENV).ok();
        Self {
            package_dir: resolve_package_dir(package_dir, package_env.as_deref(), project_root),
            tests_dir: resolve_tests_dir(tests_dir, tests_env.as_deref(), project_root),
            auto_generate: auto_generate_enabled(project_root),
            no_generate,
        }
    }

    /// Whether missing tests should be created rather than reported.
    pub fn should_generate(&self) -> bool {
        self.auto_generate && !self.no_generate
    }
}
