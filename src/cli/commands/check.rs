//! Check command implementation.
//!
//! The `pytest-mirror check` command is meant to run at test-runner startup.
//! Missing tests are either generated (when `auto-generate` is enabled and
//! `--mirror-no-generate` is not given) or reported, in which case the
//! command exits non-zero so the host run is aborted.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::CheckArgs;
use crate::config::CheckSettings;
use crate::error::Result;
use crate::mirror::write_placeholders;
use crate::ui::UserInterface;
use crate::validator::ValidatorRegistry;

use super::dispatcher::{Command, CommandResult};
use super::display::show_missing;

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
    registry: ValidatorRegistry,
}

impl CheckCommand {
    /// Create a new check command using the built-in validators.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self::with_registry(project_root, args, ValidatorRegistry::with_builtins())
    }

    /// Create a check command dispatching to a custom registry.
    pub fn with_registry(project_root: &Path, args: CheckArgs, registry: ValidatorRegistry) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            registry,
        }
    }

    /// Resolve settings for this invocation.
    pub fn settings(&self) -> CheckSettings {
        CheckSettings::resolve(
            &self.project_root,
            self.args.package_dir.as_deref(),
            self.args.tests_dir.as_deref(),
            self.args.no_generate,
        )
    }

    fn run(&self, settings: &CheckSettings, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let verbose = ui.output_mode().shows_debug();
        if let Ok(cwd) = std::env::current_dir() {
            ui.debug(&format!("CWD: {}", cwd.display()));
        }
        ui.debug(&format!("package_dir: {}", settings.package_dir.display()));
        ui.debug(&format!("tests_dir: {}", settings.tests_dir.display()));

        let missing = self
            .registry
            .dispatch(&settings.package_dir, &settings.tests_dir)?;
        ui.debug(&format!("missing_tests: {:?}", missing));

        if missing.is_empty() {
            if verbose {
                ui.success("Test structure validated successfully.");
            }
            return Ok(CommandResult::success());
        }

        if settings.should_generate() {
            let created = write_placeholders(&missing)?;
            debug!("Generated {} placeholder(s)", created.len());
            if verbose {
                for path in &created {
                    ui.success(&format!("Created: {}", path.display()));
                }
            }
            return Ok(CommandResult::success());
        }

        show_missing(
            ui,
            "Missing tests detected (auto-generate disabled):",
            &missing,
        );
        ui.error("Test structure validation failed");
        Ok(CommandResult::failure(1))
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let settings = self.settings();
        self.run(&settings, ui)
    }
}
