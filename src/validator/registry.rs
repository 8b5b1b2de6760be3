//! Registry of validators.
//!
//! The [`ValidatorRegistry`] owns an ordered list of validators. Each
//! registry is an independent value: entry points construct their own and
//! nothing is shared between instances.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{MirrorValidator, Validator, ValidatorId};
use crate::error::Result;

/// Ordered collection of validators.
pub struct ValidatorRegistry {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidatorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Create a registry holding the built-in [`MirrorValidator`].
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(MirrorValidator::new()));
        registry
    }

    /// Register a validator after all previously registered ones.
    pub fn register(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    /// Iterate over validators in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Validator> {
        self.validators.iter().map(|v| v.as_ref())
    }

    /// Get the IDs of registered validators in registration order.
    pub fn ids(&self) -> Vec<ValidatorId> {
        self.iter().map(|v| v.id()).collect()
    }

    /// Get the number of registered validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Run every validator and concatenate their results.
    ///
    /// Results keep registration order and are not deduplicated. The first
    /// validator error aborts the dispatch.
    pub fn dispatch(&self, package_dir: &Path, tests_dir: &Path) -> Result<Vec<PathBuf>> {
        let mut missing = Vec::new();
        for validator in self.iter() {
            debug!("Running validator '{}': {}", validator.id(), validator.description());
            let found = validator.validate(package_dir, tests_dir)?;
            debug!("Validator '{}' reported {} path(s)", validator.id(), found.len());
            missing.extend(found);
        }
        Ok(missing)
    }
}

impl Default for ValidatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
