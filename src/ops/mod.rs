//! High-level operations.
//!
//! This module contains the implementation of Slipway commands.

pub mod collect;

pub use collect::{collect_extensions, CollectOptions};
