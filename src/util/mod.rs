//! Shared utilities

pub mod diagnostic;
pub mod fs;
pub mod hash;
pub mod interning;

pub use interning::InternedString;
