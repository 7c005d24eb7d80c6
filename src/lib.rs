//! Slipway - a build-configuration engine for Python native-extension
//! packages
//!
//! This crate provides the core library functionality for Slipway:
//! platform profile resolution, extension discovery, and build-plan
//! assembly for packages wrapping a pre-built native library.

pub mod builder;
pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and fixtures for Slipway unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides fixture builders that write real project
/// trees into temporary directories.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    extension::ExtensionTarget, manifest::ProjectManifest, module_name::ModuleName,
    platform::HostOs, project::Project,
};

pub use crate::builder::{ExtensionPlan, PlatformProfile, SymbolManifest};
