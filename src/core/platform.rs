//! Host platform identification.
//!
//! The supported hosts form a closed set. Every platform branch in the
//! engine matches on `HostOs` exhaustively, so an unsupported host fails
//! once, here, instead of producing a half-configured plan.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::util::diagnostic::UnsupportedPlatformError;

/// A supported host operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostOs {
    Linux,
    #[serde(rename = "mac")]
    MacOs,
    Windows,
}

impl HostOs {
    /// Detect the host this process is running on.
    pub fn current() -> Result<Self, UnsupportedPlatformError> {
        std::env::consts::OS.parse()
    }

    /// Canonical identifier, as used in manifests and plan output.
    pub fn as_str(&self) -> &'static str {
        match self {
            HostOs::Linux => "linux",
            HostOs::MacOs => "mac",
            HostOs::Windows => "windows",
        }
    }

    /// Check if this is the Windows host.
    ///
    /// Windows is the one host with extra linking obligations (import
    /// libraries, explicit symbol exports), so it gets a named check.
    pub fn is_windows(&self) -> bool {
        matches!(self, HostOs::Windows)
    }
}

impl fmt::Display for HostOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostOs {
    type Err = UnsupportedPlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linux" => Ok(HostOs::Linux),
            "mac" | "macos" | "darwin" => Ok(HostOs::MacOs),
            "windows" | "win32" => Ok(HostOs::Windows),
            other => Err(UnsupportedPlatformError {
                host: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_canonical_names() {
        assert_eq!("linux".parse::<HostOs>().unwrap(), HostOs::Linux);
        assert_eq!("mac".parse::<HostOs>().unwrap(), HostOs::MacOs);
        assert_eq!("windows".parse::<HostOs>().unwrap(), HostOs::Windows);
    }

    #[test]
    fn test_from_str_platform_aliases() {
        assert_eq!("darwin".parse::<HostOs>().unwrap(), HostOs::MacOs);
        assert_eq!("macos".parse::<HostOs>().unwrap(), HostOs::MacOs);
        assert_eq!("win32".parse::<HostOs>().unwrap(), HostOs::Windows);
    }

    #[test]
    fn test_from_str_rejects_unknown_hosts() {
        let err = "solaris".parse::<HostOs>().unwrap_err();
        assert_eq!(err.host, "solaris");
    }

    #[test]
    fn test_display_round_trips() {
        for host in [HostOs::Linux, HostOs::MacOs, HostOs::Windows] {
            assert_eq!(host.to_string().parse::<HostOs>().unwrap(), host);
        }
    }
}
