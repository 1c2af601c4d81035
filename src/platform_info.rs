//! Platform detection and screen capture protection capabilities
//! This module provides runtime platform detection and what protection each OS offers
use crate::config;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Host operating system, used as the dispatch key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    Windows,
    MacOS,
    Linux,
    Other,
}

impl PlatformKind {
    /// Platform this process is running on
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an `std::env::consts::OS` style name to a platform kind
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => PlatformKind::Windows,
            "macos" => PlatformKind::MacOS,
            "linux" => PlatformKind::Linux,
            _ => PlatformKind::Other,
        }
    }

    /// Whether an exclusion primitive exists for this platform
    pub fn has_capture_exclusion(self) -> bool {
        matches!(self, PlatformKind::Windows | PlatformKind::MacOS)
    }
}

impl fmt::Display for PlatformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PlatformKind::Windows => "Windows",
            PlatformKind::MacOS => "macOS",
            PlatformKind::Linux => "Linux",
            PlatformKind::Other => "Other",
        };
        write!(f, "{}", value)
    }
}

/// How well the native primitive hides the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effectiveness {
    /// Honored by the compositor for every capture path
    High,
    /// Honored by most capture tools, some newer APIs ignore it
    Moderate,
    Unsupported,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformInfo {
    /// Operating system type: "windows", "macos", "linux", ...
    pub os_type: String,
    /// Operating system name
    pub os_name: String,
    /// OS version string
    pub os_version: String,
    /// Dispatch key
    pub platform: PlatformKind,
    /// What screen capture protection this platform offers
    pub capabilities: ProtectionCapabilities,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProtectionCapabilities {
    /// Can windows be excluded from capture at all?
    pub supports_capture_exclusion: bool,
    /// Native mechanism used
    pub mechanism: String,
    pub effectiveness: Effectiveness,
    /// Minimum OS requirement, if any
    pub requirement: Option<String>,
    /// Is the primitive deprecated by the OS vendor?
    pub deprecated_primitive: bool,
}

impl PlatformInfo {
    pub fn detect() -> Self {
        let mut info = Self::for_platform(PlatformKind::current());
        info.os_type = std::env::consts::OS.to_string();
        info.os_version = Self::get_os_version();
        info
    }

    /// Static report for a given platform (no OS queries)
    pub fn for_platform(platform: PlatformKind) -> Self {
        let os_type = match platform {
            PlatformKind::Windows => "windows",
            PlatformKind::MacOS => "macos",
            PlatformKind::Linux => "linux",
            PlatformKind::Other => "other",
        }
        .to_string();

        Self {
            os_type,
            os_name: platform.to_string(),
            os_version: "Unknown".to_string(),
            platform,
            capabilities: Self::get_protection_capabilities(platform),
        }
    }

    fn get_os_version() -> String {
        #[cfg(target_os = "linux")]
        {
            Self::get_linux_version()
        }
        #[cfg(not(target_os = "linux"))]
        {
            // Detailed version would need extra Win32 / Foundation bindings
            "Unknown".to_string()
        }
    }

    #[cfg(target_os = "linux")]
    fn get_linux_version() -> String {
        // Try to read from /etc/os-release
        if let Ok(contents) = std::fs::read_to_string("/etc/os-release") {
            for line in contents.lines() {
                if line.starts_with("PRETTY_NAME=") {
                    return line
                        .trim_start_matches("PRETTY_NAME=")
                        .trim_matches('"')
                        .to_string();
                }
            }
        }
        "Unknown".to_string()
    }

    fn get_protection_capabilities(platform: PlatformKind) -> ProtectionCapabilities {
        match platform {
            PlatformKind::Windows => ProtectionCapabilities {
                supports_capture_exclusion: true,
                mechanism: config::windows::SET_DISPLAY_AFFINITY.to_string(),
                effectiveness: Effectiveness::High,
                requirement: Some(config::windows::build_requirement(
                    config::windows::EXCLUDE_FROM_CAPTURE_MIN_BUILD,
                )),
                deprecated_primitive: false,
            },
            PlatformKind::MacOS => ProtectionCapabilities {
                supports_capture_exclusion: true,
                mechanism: "NSWindow.sharingType".to_string(),
                effectiveness: Effectiveness::Moderate,
                requirement: None,
                deprecated_primitive: true,
            },
            // Compositor dependent, nothing to call
            PlatformKind::Linux | PlatformKind::Other => ProtectionCapabilities {
                supports_capture_exclusion: false,
                mechanism: "none".to_string(),
                effectiveness: Effectiveness::Unsupported,
                requirement: None,
                deprecated_primitive: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_os_names() {
        assert_eq!(PlatformKind::from_os("windows"), PlatformKind::Windows);
        assert_eq!(PlatformKind::from_os("macos"), PlatformKind::MacOS);
        assert_eq!(PlatformKind::from_os("linux"), PlatformKind::Linux);
        assert_eq!(PlatformKind::from_os("freebsd"), PlatformKind::Other);
        assert_eq!(PlatformKind::from_os(""), PlatformKind::Other);
    }

    #[test]
    fn test_current_matches_target() {
        let expected = if cfg!(target_os = "windows") {
            PlatformKind::Windows
        } else if cfg!(target_os = "macos") {
            PlatformKind::MacOS
        } else if cfg!(target_os = "linux") {
            PlatformKind::Linux
        } else {
            PlatformKind::Other
        };
        assert_eq!(PlatformKind::current(), expected);
    }

    #[test]
    fn test_only_windows_and_macos_have_exclusion() {
        assert!(PlatformKind::Windows.has_capture_exclusion());
        assert!(PlatformKind::MacOS.has_capture_exclusion());
        assert!(!PlatformKind::Linux.has_capture_exclusion());
        assert!(!PlatformKind::Other.has_capture_exclusion());
    }
}
