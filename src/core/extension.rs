//! Extension build targets.
//!
//! An ExtensionTarget is one compilation unit handed to the external
//! build driver: the sources, search paths, defines, flags, and link
//! inputs for a single Python extension module.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::module_name::ModuleName;

/// Where a target came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetOrigin {
    /// Hand-declared in the project manifest
    Declared,
    /// Synthesized by the source-tree scanner
    Discovered,
}

impl TargetOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetOrigin::Declared => "declared",
            TargetOrigin::Discovered => "discovered",
        }
    }
}

/// Source language of a target's generated translation units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceLanguage {
    C,
    #[serde(rename = "c++", alias = "cpp", alias = "cxx")]
    Cxx,
}

impl Default for SourceLanguage {
    fn default() -> Self {
        SourceLanguage::Cxx
    }
}

impl SourceLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceLanguage::C => "c",
            SourceLanguage::Cxx => "c++",
        }
    }
}

/// A preprocessor define.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Define {
    /// Simple flag: -DFOO
    Flag(String),
    /// Key-value: -DFOO=bar
    KeyValue { name: String, value: String },
}

impl Define {
    /// Create a simple flag define.
    pub fn flag(name: impl Into<String>) -> Self {
        Define::Flag(name.into())
    }

    /// Create a key-value define.
    pub fn key_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Define::KeyValue {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Get the define name.
    pub fn name(&self) -> &str {
        match self {
            Define::Flag(n) => n,
            Define::KeyValue { name, .. } => name,
        }
    }

    /// Convert to compiler flag format.
    pub fn to_flag(&self) -> String {
        match self {
            Define::Flag(name) => format!("-D{}", name),
            Define::KeyValue { name, value } => format!("-D{}={}", name, value),
        }
    }
}

/// A single extension module's build configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtensionTarget {
    /// Module the compiled artifact is imported as
    pub name: ModuleName,

    /// Source files or wildcard patterns, project-root-relative, in
    /// compilation order
    #[serde(default)]
    pub sources: Vec<String>,

    /// Libraries to link, in linker order
    #[serde(default)]
    pub libraries: Vec<String>,

    /// Include directories (-I)
    #[serde(default)]
    pub include_dirs: Vec<PathBuf>,

    /// Library search directories (-L)
    #[serde(default)]
    pub library_dirs: Vec<PathBuf>,

    /// Preprocessor defines (-D)
    #[serde(default)]
    pub defines: Vec<Define>,

    /// Extra compiler flags
    #[serde(default)]
    pub cflags: Vec<String>,

    /// Extra linker flags
    #[serde(default)]
    pub ldflags: Vec<String>,

    /// Symbols the module must export; populated only where the
    /// dynamic linker demands an explicit list
    #[serde(default)]
    pub export_symbols: Vec<String>,

    /// Source language of the generated translation units
    #[serde(default)]
    pub language: SourceLanguage,

    /// Code-generator directives applied when translating sources
    #[serde(default)]
    pub directives: BTreeMap<String, String>,

    /// Where this target came from
    pub origin: TargetOrigin,
}

impl ExtensionTarget {
    /// Create an empty target with the given name and origin.
    pub fn new(name: ModuleName, origin: TargetOrigin) -> Self {
        ExtensionTarget {
            name,
            sources: Vec::new(),
            libraries: Vec::new(),
            include_dirs: Vec::new(),
            library_dirs: Vec::new(),
            defines: Vec::new(),
            cflags: Vec::new(),
            ldflags: Vec::new(),
            export_symbols: Vec::new(),
            language: SourceLanguage::default(),
            directives: BTreeMap::new(),
            origin,
        }
    }

    /// Set source patterns.
    pub fn with_sources(mut self, sources: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.sources = sources.into_iter().map(|s| s.into()).collect();
        self
    }

    /// Set linked libraries.
    pub fn with_libraries(
        mut self,
        libraries: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.libraries = libraries.into_iter().map(|l| l.into()).collect();
        self
    }
}
