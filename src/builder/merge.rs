//! Merging declared and discovered targets.
//!
//! The final target list is the catalog in catalog order, then the
//! discovered targets in scan order. A hand-declared target shadows a
//! discovered one with the same name; any other collision is an error,
//! never a silent overwrite. The merged list holds each module name at
//! most once.

use std::collections::HashMap;

use anyhow::Result;

use crate::builder::catalog::TargetCatalog;
use crate::core::extension::{ExtensionTarget, TargetOrigin};
use crate::core::module_name::ModuleName;
use crate::util::diagnostic::DuplicateTargetError;

/// Merge the declared catalog with scanner output.
pub fn merge_targets(
    catalog: TargetCatalog,
    discovered: Vec<ExtensionTarget>,
) -> Result<Vec<ExtensionTarget>> {
    let mut merged: Vec<ExtensionTarget> = Vec::new();
    let mut index: HashMap<ModuleName, usize> = HashMap::new();

    for target in catalog.into_targets() {
        if let Some(&held) = index.get(&target.name) {
            return Err(duplicate(&merged[held], &target).into());
        }
        index.insert(target.name, merged.len());
        merged.push(target);
    }

    for target in discovered {
        match index.get(&target.name) {
            Some(&held) if merged[held].origin == TargetOrigin::Declared => {
                tracing::debug!(
                    "dropping discovered `{}`, shadowed by the declared target",
                    target.name
                );
            }
            Some(&held) => return Err(duplicate(&merged[held], &target).into()),
            None => {
                index.insert(target.name, merged.len());
                merged.push(target);
            }
        }
    }

    Ok(merged)
}

fn duplicate(existing: &ExtensionTarget, duplicate: &ExtensionTarget) -> DuplicateTargetError {
    DuplicateTargetError {
        module: existing.name.to_string(),
        existing: describe(existing),
        duplicate: describe(duplicate),
    }
}

fn describe(target: &ExtensionTarget) -> String {
    match target.origin {
        TargetOrigin::Declared => "declared in Slipway.toml".to_string(),
        TargetOrigin::Discovered => match target.sources.first() {
            Some(pattern) => format!("discovered from `{}`", pattern),
            None => "discovered".to_string(),
        },
    }
}
