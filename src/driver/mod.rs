//! Platform Capability Drivers
//!
//! One driver per OS, each wrapping exactly one native call. The flag mappings are
//! plain data so they can be checked on any host; the FFI is compiled per target.

use crate::config;
use crate::platform_info::PlatformKind;
use crate::traits::CapabilityDriver;

#[cfg(target_os = "windows")]
mod windows;
#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
pub use self::windows::DisplayAffinityDriver;
#[cfg(target_os = "macos")]
pub use self::macos::SharingTypeDriver;

/// Windows display affinity values we ever pass to `SetWindowDisplayAffinity`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum DisplayAffinity {
    /// WDA_NONE: capture allowed
    None = config::windows::WDA_NONE,
    /// WDA_EXCLUDEFROMCAPTURE: capture blocked, window still visible locally
    ExcludeFromCapture = config::windows::WDA_EXCLUDEFROMCAPTURE,
}

impl DisplayAffinity {
    pub const fn for_exclusion(exclude: bool) -> Self {
        if exclude {
            DisplayAffinity::ExcludeFromCapture
        } else {
            DisplayAffinity::None
        }
    }

    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Oldest Windows build that accepts this value
    pub const fn min_build(self) -> Option<u32> {
        match self {
            DisplayAffinity::None => None,
            DisplayAffinity::ExcludeFromCapture => {
                Some(config::windows::EXCLUDE_FROM_CAPTURE_MIN_BUILD)
            }
        }
    }
}

/// NSWindowSharingType values we ever pass to `setSharingType:`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u64)]
pub enum SharingType {
    /// NSWindowSharingNone: capture blocked
    None = config::macos::NS_WINDOW_SHARING_NONE,
    /// NSWindowSharingReadOnly: OS default, capture allowed
    ReadOnly = config::macos::NS_WINDOW_SHARING_READ_ONLY,
}

impl SharingType {
    pub const fn for_exclusion(exclude: bool) -> Self {
        if exclude {
            SharingType::None
        } else {
            SharingType::ReadOnly
        }
    }

    /// NSUInteger value
    pub const fn raw(self) -> u64 {
        self as u64
    }
}

/// Driver for the host OS, or `None` when the platform has no exclusion primitive
pub fn native_driver(platform: PlatformKind) -> Option<Box<dyn CapabilityDriver>> {
    match platform {
        #[cfg(target_os = "windows")]
        PlatformKind::Windows => Some(Box::new(DisplayAffinityDriver)),
        #[cfg(target_os = "macos")]
        PlatformKind::MacOS => Some(Box::new(SharingTypeDriver)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affinity_mapping_is_total() {
        assert_eq!(
            DisplayAffinity::for_exclusion(true),
            DisplayAffinity::ExcludeFromCapture
        );
        assert_eq!(DisplayAffinity::for_exclusion(false), DisplayAffinity::None);
        assert_eq!(DisplayAffinity::for_exclusion(true).bits(), 0x11);
        assert_eq!(DisplayAffinity::for_exclusion(false).bits(), 0x0);
    }

    #[test]
    fn test_only_exclusion_has_build_requirement() {
        assert_eq!(DisplayAffinity::ExcludeFromCapture.min_build(), Some(19041));
        assert_eq!(DisplayAffinity::None.min_build(), None);
    }

    #[test]
    fn test_sharing_type_mapping_is_total() {
        assert_eq!(SharingType::for_exclusion(true), SharingType::None);
        assert_eq!(SharingType::for_exclusion(false), SharingType::ReadOnly);
        assert_eq!(SharingType::for_exclusion(true).raw(), 0);
        assert_eq!(SharingType::for_exclusion(false).raw(), 1);
    }

    #[test]
    fn test_no_driver_for_unsupported_platforms() {
        assert!(native_driver(PlatformKind::Linux).is_none());
        assert!(native_driver(PlatformKind::Other).is_none());
    }

    #[test]
    fn test_driver_only_for_host_platform() {
        let windows = native_driver(PlatformKind::Windows);
        let macos = native_driver(PlatformKind::MacOS);
        assert_eq!(windows.is_some(), cfg!(target_os = "windows"));
        assert_eq!(macos.is_some(), cfg!(target_os = "macos"));
    }
}
