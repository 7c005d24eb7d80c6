//! Lazy source-tree scanning.
//!
//! The scanner walks the package directory and reports every directory
//! that holds compilable sources. Directories appear parent before
//! child with siblings in name order, so two scans of the same tree
//! always agree, whatever the filesystem returns.

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::builder::catalog::DependentDefaults;
use crate::builder::profile::PlatformProfile;
use crate::core::extension::{ExtensionTarget, TargetOrigin};
use crate::core::module_name::ModuleName;
use crate::core::project::Project;
use crate::util::fs;

/// One directory containing compilable sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDirEntry {
    /// Directory path, relative to the project root
    pub dir: PathBuf,

    /// File names of the compilable sources directly inside the
    /// directory, in name order
    pub files: BTreeSet<PathBuf>,
}

/// Lazy iterator over source directories.
///
/// Nothing is read until the caller asks for the next entry; an
/// abandoned scan touches only the directories it actually visited.
pub struct ScanIter {
    root: PathBuf,
    pattern: String,
    walker: Option<walkdir::IntoIter>,
}

impl Iterator for ScanIter {
    type Item = Result<SourceDirEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        let walker = self.walker.as_mut()?;
        loop {
            let entry = match walker.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    return Some(Err(err).context("failed to walk the package source tree"))
                }
            };
            if !entry.file_type().is_dir() {
                continue;
            }

            // Subdirectories are traversed either way; only the emission
            // is conditional on this directory having sources of its own
            let files =
                match fs::glob_files(entry.path(), std::slice::from_ref(&self.pattern)) {
                    Ok(files) => files,
                    Err(err) => return Some(Err(err)),
                };
            if files.is_empty() {
                continue;
            }

            let dir = fs::relative_path(&self.root, entry.path());
            let files = files
                .into_iter()
                .filter_map(|path| path.file_name().map(PathBuf::from))
                .collect();
            return Some(Ok(SourceDirEntry { dir, files }));
        }
    }
}

/// Scan the project's package directory for source directories.
pub fn scan(project: &Project) -> ScanIter {
    let package_root = project.package_root();
    let walker = if package_root.is_dir() {
        Some(
            WalkDir::new(&package_root)
                .sort_by_file_name()
                .into_iter(),
        )
    } else {
        tracing::debug!(
            "package directory `{}` does not exist, nothing to scan",
            package_root.display()
        );
        None
    };

    ScanIter {
        root: project.root().to_path_buf(),
        pattern: format!("*.{}", project.manifest().package.source_extension),
        walker,
    }
}

/// Synthesize one wildcard target per source directory.
///
/// Each target compiles every source file in its directory as a unit,
/// using the same shared configuration as a hand-declared dependent.
pub fn discover_targets(
    project: &Project,
    profile: &PlatformProfile,
) -> Result<Vec<ExtensionTarget>> {
    let manifest = project.manifest();
    let defaults = DependentDefaults::new(manifest, profile);
    let extension = &manifest.package.source_extension;

    let mut targets = Vec::new();
    for entry in scan(project) {
        let entry = entry?;
        let name = ModuleName::from_dir_path(&entry.dir).with_context(|| {
            format!(
                "cannot derive a module name for source directory `{}`",
                entry.dir.display()
            )
        })?;
        let pattern = format!("{}/*.{}", entry.dir.display(), extension);

        tracing::debug!(
            "discovered `{}` ({} source files)",
            name,
            entry.files.len()
        );
        targets.push(defaults.build(name, vec![pattern], TargetOrigin::Discovered));
    }

    Ok(targets)
}
