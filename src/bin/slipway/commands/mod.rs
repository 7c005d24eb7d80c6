//! Command implementations

pub mod completions;
pub mod plan;
pub mod symbols;
pub mod targets;

use std::env;
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use slipway::core::project::{find_manifest, Project};
use slipway::util::diagnostic::suggestions;

/// Locate and load the project, honoring an explicit `--manifest-path`.
pub(crate) fn locate_project(manifest_path: Option<&Path>) -> Result<Project> {
    let manifest_path = match manifest_path {
        Some(path) => path.to_path_buf(),
        None => {
            let cwd = env::current_dir().context("failed to determine the current directory")?;
            find_manifest(&cwd).map_err(|err| anyhow!("{}\n{}", err, suggestions::NO_MANIFEST))?
        }
    };
    Project::load(&manifest_path)
}
