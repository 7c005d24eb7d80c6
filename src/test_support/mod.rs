//! Test utilities and fixtures for Slipway unit tests.
//!
//! This module provides the project-fixture builder used across the
//! engine's tests. Fixtures write real files into temporary
//! directories; the engine is exercised against an actual tree, not a
//! mock filesystem.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::test_support::ProjectFixture;
//!
//! #[test]
//! fn test_example() {
//!     let (_temp, project) = ProjectFixture::new("quantor")
//!         .with_module("quantor/core.pyx")
//!         .build();
//!
//!     // Exercise the engine against `project`...
//! }
//! ```

pub mod fixtures;

// Re-export fixtures for convenience
pub use fixtures::*;
