//! Platform build profiles.
//!
//! A PlatformProfile is the resolved, host-specific configuration shared
//! by every extension target: include and library search paths,
//! preprocessor defines, compiler and linker flags, and the native
//! library name. Resolution is a pure function of its inputs; resolving
//! twice with equal inputs yields equal profiles.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::core::extension::Define;
use crate::core::manifest::ProjectManifest;
use crate::core::platform::HostOs;

/// cc1plus rejects this warning flag for C++ translation units, so it is
/// stripped from whatever baseline the toolchain wrapper hands us.
const STRICT_PROTOTYPES_FLAG: &str = "-Wstrict-prototypes";

/// Per-invocation inputs to profile resolution.
///
/// Everything the engine used to pick up from the process environment is
/// threaded through here instead, so resolution never reads or mutates
/// global state.
#[derive(Debug, Clone, Default)]
pub struct ProfileOptions {
    /// Build with debug information
    pub debug: bool,

    /// Baseline compiler options inherited from the invoking toolchain
    /// wrapper (ignored on Windows, which has its own fixed set)
    pub inherited_cflags: Vec<String>,

    /// Host macOS version, when known
    pub macos_version: Option<MacOsVersion>,
}

/// A macOS release number (`10.9`, `10.6.8`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacOsVersion {
    pub major: u32,
    pub minor: u32,
}

impl FromStr for MacOsVersion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split('.');
        let (Some(major), Some(minor)) = (parts.next(), parts.next()) else {
            bail!("invalid macOS version `{}`: expected `major.minor`", s);
        };
        // A trailing patch component is accepted and ignored
        Ok(MacOsVersion {
            major: major
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid macOS version `{}`", s))?,
            minor: minor
                .parse()
                .map_err(|_| anyhow::anyhow!("invalid macOS version `{}`", s))?,
        })
    }
}

impl fmt::Display for MacOsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Resolved host-specific build configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformProfile {
    /// The host this profile was resolved for
    pub host: HostOs,

    /// Include directories, in search order
    pub include_dirs: Vec<PathBuf>,

    /// Library search directories, in search order
    pub library_dirs: Vec<PathBuf>,

    /// Preprocessor defines applied to every target
    pub defines: Vec<Define>,

    /// Compiler flags applied to every target
    pub cflags: Vec<String>,

    /// Linker flags applied to every target
    pub ldflags: Vec<String>,

    /// The native library targets link against
    pub native_lib: String,
}

impl PlatformProfile {
    /// Resolve the profile for a host.
    ///
    /// Built-in tables come first, then the support directory, then the
    /// manifest's all-host extras, then its host-specific extras.
    pub fn resolve(host: HostOs, manifest: &ProjectManifest, options: &ProfileOptions) -> Self {
        let overlay = manifest.paths.host_overlay(host);

        let mut include_dirs = base_include_dirs(host);
        include_dirs.push(manifest.native.support_dir.clone());
        include_dirs.extend(manifest.paths.common.include.iter().cloned());
        include_dirs.extend(overlay.include.iter().cloned());

        let mut library_dirs = base_library_dirs(host);
        library_dirs.extend(manifest.paths.common.lib.iter().cloned());
        library_dirs.extend(overlay.lib.iter().cloned());

        let profile = PlatformProfile {
            host,
            include_dirs,
            library_dirs,
            defines: defines(host),
            cflags: compile_flags(host, options),
            ldflags: link_flags(host, options),
            native_lib: manifest.native.library_for(host).to_string(),
        };

        tracing::debug!(
            "resolved {} profile: {} include dirs, {} library dirs, native lib `{}`",
            host,
            profile.include_dirs.len(),
            profile.library_dirs.len(),
            profile.native_lib
        );

        profile
    }
}

fn base_include_dirs(host: HostOs) -> Vec<PathBuf> {
    let dirs: &[&str] = match host {
        HostOs::Linux => &["/usr/local/include", "/usr/include", "."],
        HostOs::MacOs => &["/usr/local/include", "."],
        HostOs::Windows => &["."],
    };
    dirs.iter().map(PathBuf::from).collect()
}

fn base_library_dirs(host: HostOs) -> Vec<PathBuf> {
    let dirs: &[&str] = match host {
        HostOs::Linux => &["/usr/local/lib", "/usr/lib"],
        HostOs::MacOs => &["/usr/local/lib"],
        HostOs::Windows => &["."],
    };
    dirs.iter().map(PathBuf::from).collect()
}

fn defines(host: HostOs) -> Vec<Define> {
    let mut defines = vec![Define::flag("HAVE_CONFIG_H")];

    if host.is_windows() {
        defines.extend(
            [
                "__WIN32__",
                "WIN32",
                "NDEBUG",
                "_WINDOWS",
                "NOMINMAX",
                "WINNT",
                "_WINDLL",
                "_SCL_SECURE_NO_DEPRECATE",
                "_CRT_SECURE_NO_DEPRECATE",
                "_SCL_SECURE_NO_WARNINGS",
            ]
            .into_iter()
            .map(Define::flag),
        );
    }

    defines
}

fn compile_flags(host: HostOs, options: &ProfileOptions) -> Vec<String> {
    if host.is_windows() {
        let mut flags: Vec<String> = ["/GR", "/FD", "/Zm250", "/EHsc"]
            .into_iter()
            .map(String::from)
            .collect();
        if options.debug {
            flags.push("/Z7".to_string());
        }
        return flags;
    }

    options
        .inherited_cflags
        .iter()
        .filter(|flag| flag.as_str() != STRICT_PROTOTYPES_FLAG)
        .cloned()
        .collect()
}

fn link_flags(host: HostOs, options: &ProfileOptions) -> Vec<String> {
    match host {
        HostOs::Windows => {
            // FORCE:MULTIPLE papers over symbols defined both in the
            // foundation import library and in the native library
            let mut flags: Vec<String> = ["/subsystem:windows", "/machine:I386", "/FORCE:MULTIPLE"]
                .into_iter()
                .map(String::from)
                .collect();
            if options.debug {
                flags.push("/DEBUG".to_string());
            }
            flags
        }
        HostOs::MacOs => match options.macos_version {
            // 10.9 dropped libstdc++ as the default C++ runtime
            Some(v) if v.major == 10 && v.minor >= 9 => {
                vec![
                    "-stdlib=libstdc++".to_string(),
                    "-mmacosx-version-min=10.6".to_string(),
                ]
            }
            _ => Vec::new(),
        },
        HostOs::Linux => Vec::new(),
    }
}
