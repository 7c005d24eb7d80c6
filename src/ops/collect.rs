//! The one-shot configuration pass.
//!
//! Collection is the engine's whole lifecycle: resolve the host and its
//! profile, assemble the declared catalog, scan the package tree, merge,
//! and wrap the result in an ExtensionPlan for emission.

use anyhow::Result;

use crate::builder::profile::{MacOsVersion, PlatformProfile, ProfileOptions};
use crate::builder::{discover_targets, merge_targets, ExtensionPlan, TargetCatalog};
use crate::core::platform::HostOs;
use crate::core::project::Project;

/// Options for the collection pass.
#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    /// Host to resolve for (default: the running process host)
    pub host: Option<HostOs>,

    /// Build without debug information
    pub release: bool,

    /// Baseline compiler options inherited from the invoking toolchain
    /// wrapper
    pub inherited_cflags: Vec<String>,

    /// Host macOS version, when known
    pub macos_version: Option<MacOsVersion>,
}

/// Collect the final extension plan for a project.
pub fn collect_extensions(project: &Project, opts: &CollectOptions) -> Result<ExtensionPlan> {
    let host = match opts.host {
        Some(host) => host,
        None => HostOs::current()?,
    };
    tracing::info!(
        "collecting extensions for `{}` on {}",
        project.package_name(),
        host
    );

    let profile_options = ProfileOptions {
        debug: !opts.release,
        inherited_cflags: opts.inherited_cflags.clone(),
        macos_version: opts.macos_version,
    };
    let profile = PlatformProfile::resolve(host, project.manifest(), &profile_options);

    let catalog = TargetCatalog::assemble(project, &profile)?;
    let discovered = discover_targets(project, &profile)?;
    let targets = merge_targets(catalog, discovered)?;

    tracing::info!("collected {} targets", targets.len());
    Ok(ExtensionPlan::new(project, host, targets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::extension::TargetOrigin;
    use crate::test_support::{manifests, ProjectFixture};
    use crate::util::diagnostic::ManifestNotFoundError;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, Project) {
        ProjectFixture::new("quantor")
            .with_manifest(manifests::with_extensions(
                "quantor",
                &["quantor.settings"],
            ))
            .with_module("quantor/core.pyx")
            .with_module("quantor/settings/settings.pyx")
            .with_module("quantor/time/date.pyx")
            .with_symbols(&["init_quantor"])
            .build()
    }

    fn linux() -> CollectOptions {
        CollectOptions {
            host: Some(HostOs::Linux),
            ..Default::default()
        }
    }

    #[test]
    fn test_collect_orders_declared_before_discovered() {
        let (_temp, project) = fixture();

        let plan = collect_extensions(&project, &linux()).unwrap();
        let names: Vec<_> = plan.targets().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "quantor.core",
                "quantor.settings",
                "quantor",
                "quantor.time",
            ]
        );

        assert_eq!(plan.targets()[0].origin, TargetOrigin::Declared);
        assert_eq!(plan.targets()[1].origin, TargetOrigin::Declared);
        assert_eq!(plan.targets()[2].origin, TargetOrigin::Discovered);
        assert_eq!(plan.targets()[3].origin, TargetOrigin::Discovered);
    }

    #[test]
    fn test_collect_shadows_discovered_settings() {
        let (_temp, project) = fixture();

        let plan = collect_extensions(&project, &linux()).unwrap();
        let settings: Vec<_> = plan
            .targets()
            .iter()
            .filter(|t| t.name.as_str() == "quantor.settings")
            .collect();
        assert_eq!(settings.len(), 1);
        assert_eq!(settings[0].origin, TargetOrigin::Declared);
        // The declared entry keeps its conventional source path, not the
        // scanner's wildcard
        assert_eq!(settings[0].sources, vec!["quantor/settings.pyx"]);
    }

    #[test]
    fn test_collect_debug_is_the_default() {
        let (_temp, project) = fixture();

        let opts = CollectOptions {
            host: Some(HostOs::Windows),
            ..Default::default()
        };
        let plan = collect_extensions(&project, &opts).unwrap();
        assert!(plan.targets()[0].cflags.contains(&"/Z7".to_string()));

        let release = CollectOptions {
            host: Some(HostOs::Windows),
            release: true,
            ..Default::default()
        };
        let plan = collect_extensions(&project, &release).unwrap();
        assert!(!plan.targets()[0].cflags.contains(&"/Z7".to_string()));
    }

    #[test]
    fn test_collect_windows_exports_foundation_symbols() {
        let (_temp, project) = fixture();

        let opts = CollectOptions {
            host: Some(HostOs::Windows),
            ..Default::default()
        };
        let plan = collect_extensions(&project, &opts).unwrap();
        assert_eq!(plan.targets()[0].export_symbols, vec!["init_quantor"]);
        for dependent in &plan.targets()[1..] {
            assert!(dependent.export_symbols.is_empty());
            assert_eq!(dependent.libraries, vec!["core", "quantor_c"]);
        }
    }

    #[test]
    fn test_collect_missing_symbol_file_windows_only() {
        let (temp, project) = fixture();
        fs::remove_file(temp.path().join("exported_symbols.txt")).unwrap();

        assert!(collect_extensions(&project, &linux()).is_ok());

        let opts = CollectOptions {
            host: Some(HostOs::Windows),
            ..Default::default()
        };
        let err = collect_extensions(&project, &opts).unwrap_err();
        assert!(err.downcast_ref::<ManifestNotFoundError>().is_some());
    }

    #[test]
    fn test_collect_digest_is_reproducible() {
        let (_temp, project) = fixture();

        let first = collect_extensions(&project, &linux()).unwrap();
        let second = collect_extensions(&project, &linux()).unwrap();
        assert_eq!(first.digest().unwrap(), second.digest().unwrap());
    }
}
