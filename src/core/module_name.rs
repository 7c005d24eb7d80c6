//! Dotted module names.
//!
//! Every build target is addressed by the Python module it produces
//! (`quantor.time.date`). Names are interned so the merge step can
//! compare thousands of them with pointer equality.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::{Deserialize, Deserializer, Serialize};

use crate::util::InternedString;

/// A validated, interned dotted module name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ModuleName(InternedString);

impl ModuleName {
    /// Parse a dotted module name, rejecting anything Python would not
    /// accept as an import path.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            bail!("module name must not be empty");
        }
        for segment in s.split('.') {
            if segment.is_empty() {
                bail!("module name `{}` has an empty segment", s);
            }
            let mut chars = segment.chars();
            let first = chars.next().unwrap();
            if !(first.is_ascii_alphabetic() || first == '_') {
                bail!(
                    "module name `{}`: segment `{}` must start with a letter or underscore",
                    s,
                    segment
                );
            }
            if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
                bail!(
                    "module name `{}`: segment `{}` contains invalid characters",
                    s,
                    segment
                );
            }
        }
        Ok(ModuleName(InternedString::new(s)))
    }

    /// Derive a module name from a package-relative directory path,
    /// mapping path separators to module separators.
    pub fn from_dir_path(dir: &Path) -> Result<Self> {
        let mut segments = Vec::new();
        for component in dir.components() {
            match component {
                std::path::Component::Normal(part) => {
                    segments.push(part.to_string_lossy().into_owned());
                }
                _ => bail!(
                    "cannot derive a module name from `{}`: not a plain relative path",
                    dir.display()
                ),
            }
        }
        if segments.is_empty() {
            bail!("cannot derive a module name from an empty path");
        }
        Self::parse(&segments.join("."))
    }

    /// The full dotted name.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        self.0.as_str()
    }

    /// The final segment (`date` for `quantor.time.date`).
    pub fn leaf(&self) -> &'static str {
        self.as_str().rsplit('.').next().unwrap()
    }

    /// The name as a relative filesystem path (dots become separators).
    pub fn rel_path(&self) -> PathBuf {
        PathBuf::from(self.as_str().replace('.', "/"))
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<'de> Deserialize<'de> for ModuleName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ModuleName::parse(&s).map_err(serde::de::Error::custom)
    }
}
