use screenshield::platform_info::{Effectiveness, PlatformInfo};
use screenshield::PlatformKind;

#[test]
fn windows_report_carries_build_requirement() {
    let info = PlatformInfo::for_platform(PlatformKind::Windows);
    assert!(info.capabilities.supports_capture_exclusion);
    assert_eq!(info.capabilities.effectiveness, Effectiveness::High);
    assert_eq!(info.capabilities.mechanism, "SetWindowDisplayAffinity");
    assert!(info
        .capabilities
        .requirement
        .as_deref()
        .unwrap()
        .contains("19041"));
    assert!(!info.capabilities.deprecated_primitive);
}

#[test]
fn macos_report_flags_deprecated_primitive() {
    let info = PlatformInfo::for_platform(PlatformKind::MacOS);
    assert!(info.capabilities.supports_capture_exclusion);
    assert_eq!(info.capabilities.effectiveness, Effectiveness::Moderate);
    assert!(info.capabilities.deprecated_primitive);
    assert_eq!(info.os_name, "macOS");
}

#[test]
fn linux_and_others_are_unsupported() {
    for platform in [PlatformKind::Linux, PlatformKind::Other] {
        let info = PlatformInfo::for_platform(platform);
        assert!(!info.capabilities.supports_capture_exclusion);
        assert_eq!(info.capabilities.effectiveness, Effectiveness::Unsupported);
        assert_eq!(info.capabilities.mechanism, "none");
    }
}

#[test]
fn detect_matches_current_platform() {
    let info = PlatformInfo::detect();
    assert_eq!(info.platform, PlatformKind::current());
    assert_eq!(info.os_type, std::env::consts::OS);
    assert!(!info.os_version.is_empty());
}

#[test]
fn report_serializes_platform_in_lowercase() {
    let value = serde_json::to_value(PlatformInfo::for_platform(PlatformKind::MacOS)).unwrap();
    assert_eq!(value["platform"], "macos");
    assert_eq!(value["capabilities"]["effectiveness"], "Moderate");
}
