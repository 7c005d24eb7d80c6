//! The hand-declared target catalog.
//!
//! Assembly turns the manifest's declarations into concrete extension
//! targets: the foundation module first, then each dependent in name
//! order. Every target carries the full platform profile so the build
//! driver never has to consult the profile again.

use anyhow::Result;

use crate::builder::profile::PlatformProfile;
use crate::builder::symbols::SymbolManifest;
use crate::core::extension::{Define, ExtensionTarget, SourceLanguage, TargetOrigin};
use crate::core::manifest::ProjectManifest;
use crate::core::module_name::ModuleName;
use crate::core::project::Project;

/// Shared configuration stamped onto every dependent target.
///
/// Dependents differ only in name and sources; everything else comes
/// from here. The scanner reuses these defaults for discovered targets
/// so a module is configured identically whether it was declared or
/// found on disk.
#[derive(Debug, Clone)]
pub struct DependentDefaults {
    libraries: Vec<String>,
    include_dirs: Vec<std::path::PathBuf>,
    library_dirs: Vec<std::path::PathBuf>,
    defines: Vec<Define>,
    cflags: Vec<String>,
    ldflags: Vec<String>,
    language: SourceLanguage,
    directives: std::collections::BTreeMap<String, String>,
}

impl DependentDefaults {
    pub fn new(manifest: &ProjectManifest, profile: &PlatformProfile) -> Self {
        // On Windows dependents link the foundation's import library in
        // front of the native library; elsewhere the dynamic loader
        // resolves foundation symbols at import time
        let libraries = if profile.host.is_windows() {
            vec![
                manifest.foundation.module.leaf().to_string(),
                profile.native_lib.clone(),
            ]
        } else {
            vec![profile.native_lib.clone()]
        };

        DependentDefaults {
            libraries,
            include_dirs: profile.include_dirs.clone(),
            library_dirs: profile.library_dirs.clone(),
            defines: profile.defines.clone(),
            cflags: profile.cflags.clone(),
            ldflags: profile.ldflags.clone(),
            language: manifest.package.language,
            directives: manifest.package.directives.clone(),
        }
    }

    /// Build a dependent target from its name and sources.
    pub fn build(
        &self,
        name: ModuleName,
        sources: Vec<String>,
        origin: TargetOrigin,
    ) -> ExtensionTarget {
        ExtensionTarget {
            name,
            sources,
            libraries: self.libraries.clone(),
            include_dirs: self.include_dirs.clone(),
            library_dirs: self.library_dirs.clone(),
            defines: self.defines.clone(),
            cflags: self.cflags.clone(),
            ldflags: self.ldflags.clone(),
            export_symbols: Vec::new(),
            language: self.language,
            directives: self.directives.clone(),
            origin,
        }
    }
}

/// The assembled catalog of declared targets, foundation first.
#[derive(Debug, Clone)]
pub struct TargetCatalog {
    targets: Vec<ExtensionTarget>,
}

impl TargetCatalog {
    /// Assemble the catalog for a project under a resolved profile.
    ///
    /// The symbol manifest is read only when the host needs an export
    /// list; on other hosts a missing symbol file is not an error.
    pub fn assemble(project: &Project, profile: &PlatformProfile) -> Result<Self> {
        let manifest = project.manifest();

        let export_symbols = if profile.host.is_windows() {
            SymbolManifest::load(&project.symbols_path())?.into_names()
        } else {
            Vec::new()
        };

        let foundation = ExtensionTarget {
            name: manifest.foundation.module,
            sources: manifest.foundation.sources.clone(),
            libraries: vec![profile.native_lib.clone()],
            include_dirs: profile.include_dirs.clone(),
            library_dirs: profile.library_dirs.clone(),
            defines: profile.defines.clone(),
            cflags: profile.cflags.clone(),
            ldflags: profile.ldflags.clone(),
            export_symbols,
            language: manifest.package.language,
            directives: manifest.package.directives.clone(),
            origin: TargetOrigin::Declared,
        };

        let defaults = DependentDefaults::new(manifest, profile);
        let mut targets = vec![foundation];
        for (module, config) in &manifest.extensions {
            targets.push(defaults.build(*module, config.sources.clone(), TargetOrigin::Declared));
        }

        tracing::debug!(
            "assembled {} declared targets for {}",
            targets.len(),
            profile.host
        );

        Ok(TargetCatalog { targets })
    }

    /// The foundation target.
    pub fn foundation(&self) -> &ExtensionTarget {
        &self.targets[0]
    }

    pub fn targets(&self) -> &[ExtensionTarget] {
        &self.targets
    }

    pub fn into_targets(self) -> Vec<ExtensionTarget> {
        self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
