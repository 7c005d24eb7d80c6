//! Build-configuration engine.
//!
//! This module turns a parsed project into the ordered target list the
//! external build driver consumes: resolve the platform profile,
//! assemble the declared catalog, scan the source tree, merge, and wrap
//! the result in an ExtensionPlan.

pub mod catalog;
pub mod merge;
pub mod plan;
pub mod profile;
pub mod scanner;
pub mod symbols;

pub use catalog::{DependentDefaults, TargetCatalog};
pub use merge::merge_targets;
pub use plan::ExtensionPlan;
pub use profile::{MacOsVersion, PlatformProfile, ProfileOptions};
pub use scanner::{discover_targets, scan, ScanIter, SourceDirEntry};
pub use symbols::SymbolManifest;
