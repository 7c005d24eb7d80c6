//! The emitted extension plan.
//!
//! An ExtensionPlan is the engine's final product: the ordered target
//! list plus enough package metadata for the external build driver to
//! act without reading Slipway.toml itself. Plans serialize to JSON and
//! carry a content digest so unchanged trees are recognizable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::extension::ExtensionTarget;
use crate::core::platform::HostOs;
use crate::core::project::Project;
use crate::util::hash;

/// A fully resolved build configuration for one host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionPlan {
    /// Python package name
    pub package: String,

    /// Package version
    pub version: String,

    /// Host the plan was resolved for
    pub host: HostOs,

    /// Final target list: foundation first, then declared dependents,
    /// then discovered targets
    pub targets: Vec<ExtensionTarget>,
}

impl ExtensionPlan {
    pub fn new(project: &Project, host: HostOs, targets: Vec<ExtensionTarget>) -> Self {
        let manifest = project.manifest();
        ExtensionPlan {
            package: manifest.package.name.clone(),
            version: manifest.package.version.clone(),
            host,
            targets,
        }
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("failed to serialize extension plan")
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize extension plan")
    }

    /// Content digest of the plan.
    ///
    /// SHA-256 over the compact JSON encoding. Struct fields and map
    /// keys serialize in a fixed order, so equal plans digest equally.
    pub fn digest(&self) -> Result<String> {
        Ok(hash::sha256_str(&self.to_json()?))
    }

    pub fn targets(&self) -> &[ExtensionTarget] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
