//! The built-in mirror validator.

use std::path::{Path, PathBuf};

use super::{Validator, ValidatorId};
use crate::error::Result;
use crate::mirror::MirrorLayout;

/// Reports modules whose mirrored test file does not exist.
#[derive(Debug, Clone, Default)]
pub struct MirrorValidator {
    layout: MirrorLayout,
}

impl MirrorValidator {
    /// Create a validator using the default pytest layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator using a custom layout.
    pub fn with_layout(layout: MirrorLayout) -> Self {
        Self { layout }
    }
}

impl Validator for MirrorValidator {
    fn id(&self) -> ValidatorId {
        ValidatorId::new("mirror")
    }

    fn description(&self) -> &str {
        "Every module has a test file at the mirrored path"
    }

    fn validate(&self, package_dir: &Path, tests_dir: &Path) -> Result<Vec<PathBuf>> {
        self.layout.missing_tests(package_dir, tests_dir)
    }
}
