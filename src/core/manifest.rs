//! Slipway.toml manifest parsing and schema.
//!
//! The manifest is the central configuration file for a binding project:
//! the Python package being produced, the native library it wraps, the
//! hand-declared extension targets, and per-host path overlays.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::core::extension::SourceLanguage;
use crate::core::module_name::ModuleName;
use crate::core::platform::HostOs;

/// The parsed Slipway.toml manifest.
#[derive(Debug, Clone)]
pub struct ProjectManifest {
    /// Package metadata and code-generator settings
    pub package: PackageConfig,

    /// The native library being wrapped
    pub native: NativeConfig,

    /// Extra search paths layered onto the built-in host tables
    pub paths: PathConfig,

    /// The foundation target every other extension links against
    pub foundation: FoundationConfig,

    /// Hand-declared dependent extensions, keyed by module name
    pub extensions: BTreeMap<ModuleName, ExtensionConfig>,

    /// The directory containing this manifest
    pub manifest_dir: PathBuf,
}

/// Package metadata from the [package] section.
#[derive(Debug, Clone)]
pub struct PackageConfig {
    /// Python package name; also the directory the scanner walks
    pub name: String,

    /// Package version
    pub version: String,

    /// Package description
    pub description: Option<String>,

    /// Source language of generated translation units
    pub language: SourceLanguage,

    /// File extension of compilable sources (without the dot)
    pub source_extension: String,

    /// Code-generator directives applied to every target
    pub directives: BTreeMap<String, String>,
}

/// Native library settings from the [native] section.
#[derive(Debug, Clone)]
pub struct NativeConfig {
    /// Library name handed to the linker
    pub library: String,

    /// Library name on Windows, when it differs from `library`
    pub windows_library: Option<String>,

    /// Directory holding hand-written support code, added to the
    /// include path on every host
    pub support_dir: PathBuf,

    /// Symbol manifest listing the names the foundation module exports
    pub symbols: PathBuf,
}

impl NativeConfig {
    /// The library name to link on the given host.
    pub fn library_for(&self, host: HostOs) -> &str {
        match host {
            HostOs::Windows => self.windows_library.as_deref().unwrap_or(&self.library),
            _ => &self.library,
        }
    }
}

/// Extra include and library directories.
#[derive(Debug, Clone, Default)]
pub struct PathOverlay {
    pub include: Vec<PathBuf>,
    pub lib: Vec<PathBuf>,
}

impl PathOverlay {
    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.lib.is_empty()
    }
}

/// Search-path overlays from the [paths] section.
///
/// `common` applies on every host; the per-host overlays are appended
/// after it. Vendor roots that the built-in tables cannot know (boost
/// checkouts, prebuilt native libraries) belong here.
#[derive(Debug, Clone, Default)]
pub struct PathConfig {
    pub common: PathOverlay,
    pub linux: PathOverlay,
    pub mac: PathOverlay,
    pub windows: PathOverlay,
}

impl PathConfig {
    /// The overlay specific to one host.
    pub fn host_overlay(&self, host: HostOs) -> &PathOverlay {
        match host {
            HostOs::Linux => &self.linux,
            HostOs::MacOs => &self.mac,
            HostOs::Windows => &self.windows,
        }
    }
}

/// The [foundation] section.
#[derive(Debug, Clone)]
pub struct FoundationConfig {
    /// Module name of the foundation extension
    pub module: ModuleName,

    /// Source files, in compilation order
    pub sources: Vec<String>,
}

/// One [extensions.<module>] entry.
#[derive(Debug, Clone, Default)]
pub struct ExtensionConfig {
    /// Source files; defaults to the module path with the package
    /// source extension
    pub sources: Vec<String>,
}

/// Raw manifest as deserialized from TOML.
#[derive(Debug, Deserialize)]
struct RawManifest {
    package: RawPackage,

    native: RawNative,

    #[serde(default)]
    paths: RawPaths,

    foundation: RawFoundation,

    #[serde(default)]
    extensions: BTreeMap<String, RawExtension>,
}

#[derive(Debug, Deserialize)]
struct RawPackage {
    name: String,

    version: String,

    #[serde(default)]
    description: Option<String>,

    #[serde(default)]
    language: SourceLanguage,

    #[serde(default = "default_source_extension", rename = "source-extension")]
    source_extension: String,

    #[serde(default)]
    directives: BTreeMap<String, String>,
}

fn default_source_extension() -> String {
    "pyx".to_string()
}

#[derive(Debug, Deserialize)]
struct RawNative {
    library: String,

    #[serde(default, rename = "windows-library")]
    windows_library: Option<String>,

    #[serde(default = "default_support_dir", rename = "support-dir")]
    support_dir: PathBuf,

    #[serde(default = "default_symbols_path")]
    symbols: PathBuf,
}

fn default_support_dir() -> PathBuf {
    PathBuf::from("support")
}

fn default_symbols_path() -> PathBuf {
    PathBuf::from("exported_symbols.txt")
}

#[derive(Debug, Default, Deserialize)]
struct RawPaths {
    #[serde(default)]
    include: Vec<PathBuf>,

    #[serde(default)]
    lib: Vec<PathBuf>,

    #[serde(default)]
    linux: Option<RawPathOverlay>,

    #[serde(default)]
    mac: Option<RawPathOverlay>,

    #[serde(default)]
    windows: Option<RawPathOverlay>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPathOverlay {
    #[serde(default)]
    include: Vec<PathBuf>,

    #[serde(default)]
    lib: Vec<PathBuf>,
}

impl RawPathOverlay {
    fn into_overlay(self) -> PathOverlay {
        PathOverlay {
            include: self.include,
            lib: self.lib,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawFoundation {
    module: String,

    #[serde(default)]
    sources: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawExtension {
    #[serde(default)]
    sources: Vec<String>,
}

impl ProjectManifest {
    /// Load a manifest from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = crate::util::fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Parse manifest content.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let raw: RawManifest =
            toml::from_str(content).with_context(|| "failed to parse Slipway.toml")?;

        let manifest_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();

        let package = Self::convert_package(raw.package)?;
        let native = Self::convert_native(raw.native)?;
        let foundation = Self::convert_foundation(raw.foundation, &package)?;

        let mut extensions = BTreeMap::new();
        for (name, raw_ext) in raw.extensions {
            let module = ModuleName::parse(&name)
                .with_context(|| format!("invalid extension key `{}`", name))?;
            Self::check_in_package(module, &package.name)?;

            let sources = if raw_ext.sources.is_empty() {
                vec![default_sources_for(module, &package.source_extension)]
            } else {
                raw_ext.sources
            };
            extensions.insert(module, ExtensionConfig { sources });
        }

        Ok(ProjectManifest {
            package,
            native,
            paths: Self::convert_paths(raw.paths),
            foundation,
            extensions,
            manifest_dir,
        })
    }

    fn convert_package(raw: RawPackage) -> Result<PackageConfig> {
        if raw.name.contains('.') || ModuleName::parse(&raw.name).is_err() {
            bail!(
                "package name `{}` must be a single Python identifier",
                raw.name
            );
        }
        if raw.source_extension.is_empty() {
            bail!("source-extension must not be empty");
        }
        if raw.source_extension.starts_with('.') {
            bail!(
                "source-extension `{}` must not include the dot\n\
                 hint: write `{}`",
                raw.source_extension,
                raw.source_extension.trim_start_matches('.')
            );
        }

        Ok(PackageConfig {
            name: raw.name,
            version: raw.version,
            description: raw.description,
            language: raw.language,
            source_extension: raw.source_extension,
            directives: raw.directives,
        })
    }

    fn convert_native(raw: RawNative) -> Result<NativeConfig> {
        if raw.library.is_empty() {
            bail!("[native] library must not be empty");
        }

        Ok(NativeConfig {
            library: raw.library,
            windows_library: raw.windows_library,
            support_dir: raw.support_dir,
            symbols: raw.symbols,
        })
    }

    fn convert_foundation(raw: RawFoundation, package: &PackageConfig) -> Result<FoundationConfig> {
        let module = ModuleName::parse(&raw.module)
            .with_context(|| "invalid [foundation] module".to_string())?;
        Self::check_in_package(module, &package.name)?;

        let sources = if raw.sources.is_empty() {
            vec![default_sources_for(module, &package.source_extension)]
        } else {
            raw.sources
        };

        Ok(FoundationConfig { module, sources })
    }

    fn convert_paths(raw: RawPaths) -> PathConfig {
        PathConfig {
            common: PathOverlay {
                include: raw.include,
                lib: raw.lib,
            },
            linux: raw.linux.map(RawPathOverlay::into_overlay).unwrap_or_default(),
            mac: raw.mac.map(RawPathOverlay::into_overlay).unwrap_or_default(),
            windows: raw
                .windows
                .map(RawPathOverlay::into_overlay)
                .unwrap_or_default(),
        }
    }

    fn check_in_package(module: ModuleName, package: &str) -> Result<()> {
        let first = module.as_str().split('.').next().unwrap();
        if first != package {
            bail!(
                "module `{}` is outside the `{}` package\n\
                 hint: every declared module must start with the package name",
                module,
                package
            );
        }
        Ok(())
    }
}

/// The conventional source path for a module: its dotted name as a
/// relative path, with the package source extension.
fn default_sources_for(module: ModuleName, extension: &str) -> String {
    format!("{}.{}", module.rel_path().display(), extension)
}
