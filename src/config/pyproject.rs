//! `pyproject.toml` loading.
//!
//! Only two things are read from the file: the project name (used to find
//! the package directory) and the `auto-generate` key of the
//! `[tool.pytest-mirror]` table.
//!
//! ```toml
//! [project]
//! name = "my-package"
//!
//! [tool.pytest-mirror]
//! auto-generate = false
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{MirrorError, Result};

/// Name of the project configuration file.
pub const PYPROJECT_FILE: &str = "pyproject.toml";

/// Values of `auto-generate` that disable generation (case-insensitive).
const DISABLED_VALUES: [&str; 3] = ["false", "0", "no"];

/// The parts of `pyproject.toml` this tool reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PyProject {
    /// The `[project]` table.
    #[serde(default)]
    pub project: Option<ProjectTable>,

    /// The `[tool]` table.
    #[serde(default)]
    pub tool: Option<ToolTable>,
}

/// The `[project]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectTable {
    /// Distribution name, e.g. `my-package`.
    #[serde(default)]
    pub name: Option<String>,
}

/// The `[tool]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolTable {
    /// The `[tool.pytest-mirror]` table.
    #[serde(rename = "pytest-mirror", default)]
    pub mirror: Option<MirrorSettings>,
}

/// The `[tool.pytest-mirror]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MirrorSettings {
    /// Raw `auto-generate` value; any TOML scalar is accepted.
    #[serde(rename = "auto-generate", default)]
    pub auto_generate: Option<toml::Value>,
}

impl PyProject {
    /// Parse `pyproject.toml` content.
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| MirrorError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The importable package name derived from `[project].name`.
    ///
    /// `my-package` and `my.package` both become `my_package`.
    pub fn import_name(&self) -> Option<String> {
        let name = self.project.as_ref()?.name.as_ref()?.trim();
        if name.is_empty() {
            return None;
        }
        Some(name.replace(['-', '.'], "_"))
    }

    /// The `auto-generate` value rendered as text, if set.
    pub fn auto_generate_raw(&self) -> Option<String> {
        let value = self.tool.as_ref()?.mirror.as_ref()?.auto_generate.as_ref()?;
        Some(match value {
            toml::Value::String(s) => s.clone(),
            toml::Value::Boolean(b) => b.to_string(),
            toml::Value::Integer(i) => i.to_string(),
            other => other.to_string(),
        })
    }

    /// Whether placeholder generation is enabled by this file.
    pub fn auto_generate(&self) -> bool {
        parse_auto_generate(self.auto_generate_raw().as_deref())
    }
}

/// Load `pyproject.toml` from the project root.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns `ConfigParseError` if the TOML is invalid or has unexpected types.
pub fn load_pyproject(project_root: &Path) -> Result<Option<PyProject>> {
    let path = project_root.join(PYPROJECT_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(MirrorError::Io(e)),
    };
    PyProject::parse(&content, &path).map(Some)
}

/// Interpret a raw `auto-generate` value.
///
/// Unset, or anything other than `false`, `0` or `no` (in any case), means
/// generation is enabled.
pub fn parse_auto_generate(raw: Option<&str>) -> bool {
    match raw {
        None => true,
        Some(value) => {
            let value = value.trim().to_lowercase();
            !DISABLED_VALUES.contains(&value.as_str())
        }
    }
}

/// Resolve the auto-generate setting for a project.
///
/// A configuration that cannot be read or parsed never blocks a run: it
/// resolves to enabled.
pub fn auto_generate_enabled(project_root: &Path) -> bool {
    match load_pyproject(project_root) {
        Ok(Some(pyproject)) => {
            let enabled = pyproject.auto_generate();
            debug!("auto-generate resolved to {}", enabled);
            enabled
        }
        Ok(None) => true,
        Err(e) => {
            warn!("Ignoring unreadable project config: {}", e);
            true
        }
    }
}
