//! Typed diagnostics for configuration failures.
//!
//! Every fatal condition the engine can detect before compilation gets a
//! typed error here, with a stable code and a suggested fix. Callers
//! propagate these through `anyhow` and may `downcast_ref` to react to a
//! specific condition.

use std::path::PathBuf;

use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

/// Common suggestion messages for consistent error handling.
pub mod suggestions {
    /// Suggestion when no project manifest is found.
    pub const NO_MANIFEST: &str =
        "help: Run `slipway` from a directory containing Slipway.toml";

    /// Suggestion when the plan command fails early.
    pub const PLAN_FAILED: &str = "help: Run `slipway plan --verbose` for more details";
}

/// Host platform outside the supported set.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("unsupported host platform `{host}`")]
#[diagnostic(
    code(slipway::platform::unsupported),
    help("Supported hosts are `linux`, `mac`, and `windows`")
)]
pub struct UnsupportedPlatformError {
    pub host: String,
}

/// Missing symbol manifest.
///
/// Only fatal on hosts that consult the manifest; the engine never opens
/// it elsewhere.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("symbol manifest not found at `{path}`")]
#[diagnostic(
    code(slipway::symbols::not_found),
    help("Check the `symbols` path under [native] in Slipway.toml")
)]
pub struct ManifestNotFoundError {
    pub path: PathBuf,
}

/// Two targets claim the same module name.
#[derive(Debug, Error, MietteDiagnostic)]
#[error("duplicate target `{module}` ({existing} and {duplicate})")]
#[diagnostic(
    code(slipway::merge::duplicate_target),
    help("Rename one of the colliding modules so each target compiles once")
)]
pub struct DuplicateTargetError {
    pub module: String,
    pub existing: String,
    pub duplicate: String,
}
