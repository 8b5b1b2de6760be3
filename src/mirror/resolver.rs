//! Expected and missing test path computation.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::scan::scan_modules;
use super::MirrorLayout;
use crate::error::Result;

impl MirrorLayout {
    /// Compute the expected test path for every module under `package_dir`,
    /// whether or not the test exists.
    pub fn expected_tests(&self, package_dir: &Path, tests_dir: &Path) -> Result<Vec<PathBuf>> {
        Ok(scan_modules(package_dir, self)?
            .iter()
            .map(|relative| self.expected_test_path(tests_dir, relative))
            .collect())
    }

    /// Compute the expected test paths that do not currently exist.
    ///
    /// A missing `tests_dir` is not an error: every expected path is then
    /// reported missing.
    pub fn missing_tests(&self, package_dir: &Path, tests_dir: &Path) -> Result<Vec<PathBuf>> {
        let missing: Vec<PathBuf> = self
            .expected_tests(package_dir, tests_dir)?
            .into_iter()
            .filter(|path| !path.exists())
            .collect();
        debug!(
            "{} missing test(s) for {}",
            missing.len(),
            package_dir.display()
        );
        Ok(missing)
    }
}

/// Return every expected test path for modules in `package_dir`.
pub fn expected_test_paths(package_dir: &Path, tests_dir: &Path) -> Result<Vec<PathBuf>> {
    MirrorLayout::python().expected_tests(package_dir, tests_dir)
}

/// Return the missing test file paths for all modules in `package_dir`.
pub fn find_missing_tests(package_dir: &Path, tests_dir: &Path) -> Result<Vec<PathBuf>> {
    MirrorLayout::python().missing_tests(package_dir, tests_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MirrorError;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn returns_missing_test_for_module() {
        let temp = TempDir::new().unwrap();
        let pkg = temp.path().join("pkg");
        let tests = temp.path().join("tests");
        write(&pkg.join("foo.py"), "# dummy\n");
        fs::create_dir_all(&tests).unwrap();

        let missing = find_missing_tests(&pkg, &tests).unwrap();
        assert_eq!(missing, vec![tests.join("test_foo.py")]);
    }

    #[test]
    fn returns_empty_when_all_present() {
        let temp = TempDir::new().unwrap();
        let pkg = temp.path().join("pkg");
        let tests = temp.path().join("tests");
        write(&pkg.join("foo.py"), "# dummy\n");
        write(&tests.join("test_foo.py"), "# test\n");

        assert!(find_missing_tests(&pkg, &tests).unwrap().is_empty());
    }

    #[test]
    fn nested_module_maps_to_nested_test() {
        let temp = TempDir::new().unwrap();
        let pkg = temp.path().join("pkg");
        let tests = temp.path().join("tests");
        write(&pkg.join("sub").join("foo.py"), "");

        let missing = find_missing_tests(&pkg, &tests).unwrap();
        assert_eq!(missing, vec![tests.join("sub").join("test_foo.py")]);
    }

    #[test]
    fn missing_tests_dir_reports_everything() {
        let temp = TempDir::new().unwrap();
        let pkg = temp.path().join("pkg");
        write(&pkg.join("a.py"), "");
        write(&pkg.join("b.py"), "");
        let tests = temp.path().join("does-not-exist");

        let missing = find_missing_tests(&pkg, &tests).unwrap();
        assert_eq!(missing.len(), 2);
        assert!(!tests.exists());
    }

    #[test]
    fn init_files_are_never_mapped() {
        let temp = TempDir::new().unwrap();
        let pkg = temp.path().join("pkg");
        let tests = temp.path().join("tests");
        write(&pkg.join("__init__.py"), "");
        write(&pkg.join("sub").join("__init__.py"), "");
        write(&pkg.join("sub").join("mod.py"), "");

        let expected = expected_test_paths(&pkg, &tests).unwrap();
        assert_eq!(expected, vec![tests.join("sub").join("test_mod.py")]);
    }

    #[test]
    fn missing_is_expected_minus_existing() {
        let temp = TempDir::new().unwrap();
        let pkg = temp.path().join("pkg");
        let tests = temp.path().join("tests");
        for module in ["a.py", "b.py", "x/c.py", "x/y/d.py"] {
            write(&pkg.join(module), "");
        }
        write(&tests.join("test_b.py"), "");
        write(&tests.join("x").join("y").join("test_d.py"), "");

        let expected: HashSet<_> = expected_test_paths(&pkg, &tests)
            .unwrap()
            .into_iter()
            .collect();
        let missing: HashSet<_> = find_missing_tests(&pkg, &tests)
            .unwrap()
            .into_iter()
            .collect();
        let existing: HashSet<_> = expected.iter().filter(|p| p.exists()).cloned().collect();

        assert_eq!(expected.len(), 4);
        assert_eq!(
            missing,
            expected.difference(&existing).cloned().collect::<HashSet<_>>()
        );
        assert!(missing.contains(&tests.join("test_a.py")));
        assert!(missing.contains(&tests.join("x").join("test_c.py")));
    }

    #[test]
    fn scan_does_not_touch_filesystem() {
        let temp = TempDir::new().unwrap();
        let pkg = temp.path().join("pkg");
        write(&pkg.join("foo.py"), "");
        let tests = temp.path().join("tests");

        find_missing_tests(&pkg, &tests).unwrap();
        expected_test_paths(&pkg, &tests).unwrap();
        assert!(!tests.exists());
    }

    #[test]
    fn invalid_package_dir_errors() {
        let temp = TempDir::new().unwrap();
        let tests = temp.path().join("tests");

        let err = find_missing_tests(&temp.path().join("not_a_real_dir"), &tests).unwrap_err();
        assert!(matches!(err, MirrorError::PackageDirNotFound { .. }));

        let file = temp.path().join("pkg.py");
        write(&file, "# dummy\n");
        let err = find_missing_tests(&file, &tests).unwrap_err();
        assert!(matches!(err, MirrorError::NotADirectory { .. }));
    }
}
