//! Generate command implementation.
//!
//! The `pytest-mirror generate` command creates a failing placeholder test
//! for every module that has no mirrored test yet.

use std::path::{Path, PathBuf};

use crate::cli::args::GenerateArgs;
use crate::config::{resolve_package_dir, resolve_tests_dir};
use crate::error::Result;
use crate::mirror::generate_missing_tests;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::show_dirs;

/// The generate command implementation.
pub struct GenerateCommand {
    project_root: PathBuf,
    args: GenerateArgs,
}

impl GenerateCommand {
    /// Create a new generate command.
    pub fn new(project_root: &Path, args: GenerateArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }
}

impl Command for GenerateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let package_dir =
            resolve_package_dir(self.args.package_dir.as_deref(), None, &self.project_root);
        let tests_dir = resolve_tests_dir(self.args.tests_dir.as_deref(), None, &self.project_root);
        show_dirs(ui, &package_dir, &tests_dir);

        let report = generate_missing_tests(&package_dir, &tests_dir)?;

        for path in &report.created {
            ui.success(&format!("Created: {}", path.display()));
        }
        if report.created.is_empty() {
            ui.success("All tests are in place");
        } else {
            ui.message(&format!(
                "Created {} placeholder test(s)",
                report.created_count()
            ));
        }

        Ok(CommandResult::success())
    }
}
