//! Validate command implementation.
//!
//! The `pytest-mirror validate` command reports missing tests without
//! creating anything. With `--json` it prints the missing paths as a JSON
//! array. It always exits successfully; failing the run is the job of
//! `check`.

use std::path::{Path, PathBuf};

use crate::cli::args::ValidateArgs;
use crate::config::{resolve_package_dir, resolve_tests_dir};
use crate::error::Result;
use crate::ui::UserInterface;
use crate::validator::ValidatorRegistry;

use super::dispatcher::{Command, CommandResult};
use super::display::{show_dirs, show_missing};

/// The validate command implementation.
pub struct ValidateCommand {
    project_root: PathBuf,
    args: ValidateArgs,
    registry: ValidatorRegistry,
}

impl ValidateCommand {
    /// Create a new validate command using the built-in validators.
    pub fn new(project_root: &Path, args: ValidateArgs) -> Self {
        Self::with_registry(project_root, args, ValidatorRegistry::with_builtins())
    }

    /// Create a validate command dispatching to a custom registry.
    pub fn with_registry(project_root: &Path, args: ValidateArgs, registry: ValidatorRegistry) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            registry,
        }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let package_dir =
            resolve_package_dir(self.args.package_dir.as_deref(), None, &self.project_root);
        let tests_dir = resolve_tests_dir(self.args.tests_dir.as_deref(), None, &self.project_root);
        if !self.args.json {
            show_dirs(ui, &package_dir, &tests_dir);
        }

        let missing = self.registry.dispatch(&package_dir, &tests_dir)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&missing).map_err(anyhow::Error::from)?;
            ui.raw(&json);
        } else if missing.is_empty() {
            ui.success("All tests are in place!");
        } else {
            show_missing(ui, "Missing tests detected:", &missing);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use crate::validator::{Validator, ValidatorId};
    use std::fs;
    use tempfile::TempDir;

    struct ExtraValidator;

    impl Validator for ExtraValidator {
        fn id(&self) -> ValidatorId {
            ValidatorId::new("extra")
        }
        fn description(&self) -> &str {
            "Always reports one path"
        }
        fn validate(&self, _package_dir: &Path, tests_dir: &Path) -> Result<Vec<PathBuf>> {
            Ok(vec![tests_dir.join("test_extra.py")])
        }
    }

    fn setup() -> (TempDir, PathBuf, PathBuf) {
        let temp = TempDir::new().unwrap();
        let pkg = temp.path().join("pkg");
        let tests = temp.path().join("tests");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("foo.py"), "# dummy\n").unwrap();
        (temp, pkg, tests)
    }

    fn args(pkg: &Path, tests: &Path, json: bool) -> ValidateArgs {
        ValidateArgs {
            package_dir: Some(pkg.to_path_buf()),
            tests_dir: Some(tests.to_path_buf()),
            json,
        }
    }

    #[test]
    fn reports_missing_tests() {
        let (temp, pkg, tests) = setup();
        let cmd = ValidateCommand::new(temp.path(), args(&pkg, &tests, false));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_warning("Missing tests detected"));
        assert_eq!(ui.items().len(), 1);
        assert!(ui.items()[0].ends_with("test_foo.py"));
        assert!(!tests.exists());
    }

    #[test]
    fn reports_all_in_place() {
        let (temp, pkg, tests) = setup();
        fs::create_dir_all(&tests).unwrap();
        fs::write(tests.join("test_foo.py"), "# test\n").unwrap();
        let cmd = ValidateCommand::new(temp.path(), args(&pkg, &tests, false));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_success("All tests are in place"));
        assert!(ui.items().is_empty());
    }

    #[test]
    fn json_output_lists_missing() {
        let (temp, pkg, tests) = setup();
        let cmd = ValidateCommand::new(temp.path(), args(&pkg, &tests, true));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.messages().is_empty());
        let value: serde_json::Value = serde_json::from_str(&ui.raw_output()[0]).unwrap();
        let missing = value.as_array().unwrap();
        assert_eq!(missing.len(), 1);
        assert!(missing[0].as_str().unwrap().ends_with("test_foo.py"));
    }

    #[test]
    fn json_output_is_empty_array_when_complete() {
        let (temp, pkg, tests) = setup();
        fs::create_dir_all(&tests).unwrap();
        fs::write(tests.join("test_foo.py"), "# test\n").unwrap();
        let cmd = ValidateCommand::new(temp.path(), args(&pkg, &tests, true));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.raw_output()[0]).unwrap();
        assert_eq!(value, serde_json::json!([]));
    }

    #[test]
    fn custom_registry_results_are_appended() {
        let (temp, pkg, tests) = setup();
        let mut registry = ValidatorRegistry::with_builtins();
        registry.register(Box::new(ExtraValidator));
        let cmd = ValidateCommand::with_registry(temp.path(), args(&pkg, &tests, false), registry);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert_eq!(ui.items().len(), 2);
        assert!(ui.items()[1].ends_with("test_extra.py"));
    }
}
