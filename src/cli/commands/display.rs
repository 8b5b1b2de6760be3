//! Shared display helpers for missing-test reports.

use std::path::{Path, PathBuf};

use crate::ui::UserInterface;

/// Print the resolved directories a command works on.
pub fn show_dirs(ui: &mut dyn UserInterface, package_dir: &Path, tests_dir: &Path) {
    ui.message(&format!("Using package_dir: {}", package_dir.display()));
    ui.message(&format!("Using tests_dir: {}", tests_dir.display()));
}

/// Print a header followed by one line per missing test.
pub fn show_missing(ui: &mut dyn UserInterface, header: &str, missing: &[PathBuf]) {
    ui.warning(header);
    for path in missing {
        ui.item(&path.display().to_string());
    }
}
