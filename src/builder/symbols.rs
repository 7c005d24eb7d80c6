//! Exported-symbol manifests.
//!
//! On Windows the foundation extension must name every symbol it exports
//! so the linker can build the import library dependents link against.
//! The symbol list lives in a plain text file: one symbol per line, `#`
//! starts a comment line, blank lines are ignored.

use std::path::Path;

use anyhow::{Context, Result};

use crate::util::diagnostic::ManifestNotFoundError;

/// A parsed exported-symbol list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolManifest {
    symbols: Vec<String>,
}

impl SymbolManifest {
    /// Load and parse a symbol file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ManifestNotFoundError {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = crate::util::fs::read_to_string(path)
            .with_context(|| format!("failed to read symbol file `{}`", path.display()))?;

        let manifest = Self::parse(&content);
        tracing::debug!(
            "loaded {} exported symbols from `{}`",
            manifest.len(),
            path.display()
        );
        Ok(manifest)
    }

    /// Parse symbol file content.
    ///
    /// Lines are trimmed, comment lines (first non-blank character `#`)
    /// and blank lines are dropped, and everything else is kept verbatim
    /// in file order. Duplicates are preserved; deduplication is the
    /// author's job, not ours.
    pub fn parse(content: &str) -> Self {
        let symbols = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('#'))
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        SymbolManifest { symbols }
    }

    pub fn names(&self) -> &[String] {
        &self.symbols
    }

    pub fn into_names(self) -> Vec<String> {
        self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
