//! Configuration Constants
//!
//! Native flag values, platform requirements, logging defaults and the debug
//! override, kept in one place so the drivers and the capability report agree.

/// Windows display affinity configuration
pub mod windows {
    /// Native call used by the Windows driver
    pub const SET_DISPLAY_AFFINITY: &str = "SetWindowDisplayAffinity";

    /// WDA_NONE: no capture restriction
    pub const WDA_NONE: u32 = 0x0000_0000;

    /// WDA_EXCLUDEFROMCAPTURE: window content is left out of capture
    pub const WDA_EXCLUDEFROMCAPTURE: u32 = 0x0000_0011;

    /// First Windows 10 build (2004) that honors WDA_EXCLUDEFROMCAPTURE
    pub const EXCLUDE_FROM_CAPTURE_MIN_BUILD: u32 = 19041;

    /// "Windows 10 build N+", as shown in warnings and the capability report
    pub fn build_requirement(build: u32) -> String {
        format!("Windows 10 build {}+", build)
    }
}

/// macOS window sharing configuration
pub mod macos {
    /// Selector sent to the NSWindow
    pub const SET_SHARING_TYPE_SELECTOR: &str = "setSharingType:";

    /// NSWindowSharingNone: window content is not shared (deprecated, still honored)
    pub const NS_WINDOW_SHARING_NONE: u64 = 0;

    /// NSWindowSharingReadOnly: default sharing behavior
    pub const NS_WINDOW_SHARING_READ_ONLY: u64 = 1;
}

/// Logging defaults
pub mod logging {
    /// Directory name under the platform logs location
    pub const LOG_DIR_NAME: &str = "ScreenShield";

    /// Rolling log file prefix
    pub const LOG_FILE_NAME: &str = "screenshield.log";

    /// Rolled files older than this are removed when file logging starts
    pub const LOG_RETENTION_DAYS: u32 = 7;
}

/// Debug and Advanced Features
pub mod debug {
    /// Environment variable name to let protected windows show up in screen capture
    /// tools (useful when recording demos of the host app):
    /// - Windows: `set SCREENSHIELD_ALLOW_SCREEN_CAPTURE=1`
    /// - macOS/Linux: `export SCREENSHIELD_ALLOW_SCREEN_CAPTURE=1`
    pub const ALLOW_SCREEN_CAPTURE_ENV: &str = "SCREENSHIELD_ALLOW_SCREEN_CAPTURE";

    /// Parse the override value: "1", "true", "yes" enable it, anything else does not
    pub fn parse_allow_flag(value: &str) -> bool {
        let value = value.trim();
        value == "1" || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes")
    }

    /// Whether the environment asks for protection to be bypassed
    pub fn should_allow_screen_capture() -> bool {
        match std::env::var(ALLOW_SCREEN_CAPTURE_ENV) {
            Ok(value) => {
                let allow = parse_allow_flag(&value);
                tracing::debug!(
                    env = ALLOW_SCREEN_CAPTURE_ENV,
                    value = %value,
                    allow,
                    "Screen capture override found in environment"
                );
                allow
            }
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::debug::parse_allow_flag;

    #[test]
    fn test_allow_flag_accepts_truthy_values() {
        assert!(parse_allow_flag("1"));
        assert!(parse_allow_flag("true"));
        assert!(parse_allow_flag("TRUE"));
        assert!(parse_allow_flag("Yes"));
        assert!(parse_allow_flag(" yes "));
    }

    #[test]
    fn test_allow_flag_rejects_everything_else() {
        assert!(!parse_allow_flag(""));
        assert!(!parse_allow_flag("0"));
        assert!(!parse_allow_flag("false"));
        assert!(!parse_allow_flag("on"));
    }

    #[test]
    fn test_build_requirement_text() {
        assert_eq!(
            super::windows::build_requirement(super::windows::EXCLUDE_FROM_CAPTURE_MIN_BUILD),
            "Windows 10 build 19041+"
        );
    }

    #[test]
    fn test_affinity_flags_are_distinct() {
        assert_ne!(super::windows::WDA_NONE, super::windows::WDA_EXCLUDEFROMCAPTURE);
        assert_ne!(
            super::macos::NS_WINDOW_SHARING_NONE,
            super::macos::NS_WINDOW_SHARING_READ_ONLY
        );
    }
}
