//! Core data structures for slipway.
//!
//! This module contains the foundational types used throughout slipway:
//! - Interned module names
//! - Extension targets and their build configuration
//! - The closed set of supported host platforms
//! - The project manifest and project handle

pub mod extension;
pub mod manifest;
pub mod module_name;
pub mod platform;
pub mod project;

pub use extension::{Define, ExtensionTarget, SourceLanguage, TargetOrigin};
pub use manifest::ProjectManifest;
pub use module_name::ModuleName;
pub use platform::HostOs;
pub use project::{find_manifest, Project, MANIFEST_NAME};
