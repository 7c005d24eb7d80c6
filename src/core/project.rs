//! Project handle - a loaded manifest plus its root directory.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use crate::core::manifest::ProjectManifest;

/// The canonical manifest file name.
pub const MANIFEST_NAME: &str = "Slipway.toml";

/// A binding project: the manifest and the directory it governs.
#[derive(Debug, Clone)]
pub struct Project {
    manifest: ProjectManifest,
    root: PathBuf,
}

impl Project {
    /// Load a project from a manifest path.
    pub fn load(manifest_path: &Path) -> Result<Self> {
        let manifest = ProjectManifest::load(manifest_path)?;
        let root = manifest_path
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf();

        Ok(Project { manifest, root })
    }

    /// Locate and load the project governing `start`.
    pub fn find(start: &Path) -> Result<Self> {
        let manifest_path = find_manifest(start)?;
        Self::load(&manifest_path)
    }

    /// The project root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The parsed manifest.
    pub fn manifest(&self) -> &ProjectManifest {
        &self.manifest
    }

    /// The Python package name.
    pub fn package_name(&self) -> &str {
        &self.manifest.package.name
    }

    /// The directory the scanner walks, rooted at the project root.
    pub fn package_root(&self) -> PathBuf {
        self.root.join(&self.manifest.package.name)
    }

    /// The support-code directory, rooted at the project root.
    pub fn support_dir(&self) -> PathBuf {
        self.root.join(&self.manifest.native.support_dir)
    }

    /// The symbol manifest, rooted at the project root.
    pub fn symbols_path(&self) -> PathBuf {
        self.root.join(&self.manifest.native.symbols)
    }
}

/// Find the manifest file starting from `start` and searching upward.
pub fn find_manifest(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(MANIFEST_NAME);
        if candidate.is_file() {
            return Ok(candidate);
        }
        if !current.pop() {
            bail!(
                "no {} found in `{}` or any parent directory",
                MANIFEST_NAME,
                start.display()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MANIFEST: &str = r#"
[package]
name = "quantor"
version = "0.2.0"

[native]
library = "Quantor"

[foundation]
module = "quantor.core"
"#;

    #[test]
    fn test_project_paths() {
        let tmp = TempDir::new().unwrap();
        let manifest_path = tmp.path().join(MANIFEST_NAME);
        std::fs::write(&manifest_path, MANIFEST).unwrap();

        let project = Project::load(&manifest_path).unwrap();
        assert_eq!(project.root(), tmp.path());
        assert_eq!(project.package_root(), tmp.path().join("quantor"));
        assert_eq!(project.support_dir(), tmp.path().join("support"));
        assert_eq!(
            project.symbols_path(),
            tmp.path().join("exported_symbols.txt")
        );
    }

    #[test]
    fn test_find_manifest_searches_upward() {
        let tmp = TempDir::new().unwrap();
        let manifest_path = tmp.path().join(MANIFEST_NAME);
        std::fs::write(&manifest_path, MANIFEST).unwrap();

        let nested = tmp.path().join("quantor").join("time");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_manifest(&nested).unwrap();
        assert_eq!(found, manifest_path);
    }

    #[test]
    fn test_find_manifest_reports_missing() {
        let tmp = TempDir::new().unwrap();
        let result = find_manifest(tmp.path());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("no Slipway.toml found"));
    }
}
