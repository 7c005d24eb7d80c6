//! Test fixtures for common test scenarios.
//!
//! This module provides a builder for binding-project trees so tests
//! can describe a project in a few lines and get a real directory the
//! engine can load, scan, and plan against.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::project::{Project, MANIFEST_NAME};

/// Fixture for a complete binding-project structure.
#[derive(Debug, Clone)]
pub struct ProjectFixture {
    /// Package name.
    pub name: String,
    /// Slipway.toml content.
    pub manifest: String,
    /// Files (path relative to project root -> content).
    pub files: BTreeMap<PathBuf, String>,
}

impl ProjectFixture {
    /// Create a fixture with a minimal manifest for `name`.
    ///
    /// The native library defaults to the capitalized package name, the
    /// foundation module to `<name>.core`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let manifest = manifests::minimal(&name);

        ProjectFixture {
            name,
            manifest,
            files: BTreeMap::new(),
        }
    }

    /// Replace the manifest content.
    pub fn with_manifest(mut self, manifest: impl Into<String>) -> Self {
        self.manifest = manifest.into();
        self
    }

    /// Add a file with explicit content.
    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Add a compilable module stub at the given relative path.
    pub fn with_module(self, path: impl Into<PathBuf>) -> Self {
        self.with_file(path, "# cython module\n")
    }

    /// Add an exported-symbol manifest with the given names.
    pub fn with_symbols(self, symbols: &[&str]) -> Self {
        let mut content = String::from("# exported symbols\n");
        for symbol in symbols {
            content.push_str(symbol);
            content.push('\n');
        }
        self.with_file("exported_symbols.txt", content)
    }

    /// Write this fixture into a real directory.
    pub fn write_to(&self, base_path: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(base_path)?;
        std::fs::write(base_path.join(MANIFEST_NAME), &self.manifest)?;

        for (rel_path, content) in &self.files {
            let full_path = base_path.join(rel_path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&full_path, content)?;
        }

        Ok(base_path.to_path_buf())
    }

    /// Write into a fresh temporary directory and load the project.
    ///
    /// The returned TempDir must stay alive for as long as the Project
    /// is used.
    pub fn build(&self) -> (TempDir, Project) {
        let temp = TempDir::new().expect("failed to create fixture directory");
        self.write_to(temp.path()).expect("failed to write fixture");
        let project =
            Project::load(&temp.path().join(MANIFEST_NAME)).expect("failed to load fixture");
        (temp, project)
    }
}

/// Common manifest templates.
pub mod manifests {
    /// A minimal manifest: package, native library, foundation module.
    pub fn minimal(name: &str) -> String {
        let library = capitalize(name);
        format!(
            r#"[package]
name = "{name}"
version = "0.1.0"

[native]
library = "{library}"

[foundation]
module = "{name}.core"
"#
        )
    }

    /// A manifest with a Windows library override and declared
    /// dependent extensions.
    pub fn with_extensions(name: &str, extensions: &[&str]) -> String {
        let library = capitalize(name);
        let mut manifest = format!(
            r#"[package]
name = "{name}"
version = "0.1.0"

[native]
library = "{library}"
windows-library = "{name}_c"

[foundation]
module = "{name}.core"
"#
        );

        for module in extensions {
            manifest.push_str(&format!("\n[extensions.\"{module}\"]\n"));
        }

        manifest
    }

    fn capitalize(name: &str) -> String {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_builds_loadable_project() {
        let fixture = ProjectFixture::new("quantor").with_module("quantor/core.pyx");

        let (_temp, project) = fixture.build();
        assert_eq!(project.package_name(), "quantor");
        assert_eq!(project.manifest().native.library, "Quantor");
        assert!(project.package_root().join("core.pyx").is_file());
    }

    #[test]
    fn test_fixture_symbols_file() {
        let fixture = ProjectFixture::new("quantor").with_symbols(&["init_quantor", "qt_version"]);

        let (_temp, project) = fixture.build();
        let content = std::fs::read_to_string(project.symbols_path()).unwrap();
        assert!(content.contains("init_quantor"));
        assert!(content.starts_with("# exported symbols"));
    }

    #[test]
    fn test_manifest_with_extensions_template() {
        let manifest = manifests::with_extensions("quantor", &["quantor.settings"]);
        assert!(manifest.contains("windows-library = \"quantor_c\""));
        assert!(manifest.contains("[extensions.\"quantor.settings\"]"));
    }
}
