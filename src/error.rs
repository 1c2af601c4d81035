//! Error types for screen capture protection
//!
//! Every failure is recovered inside the dispatcher; these types exist so each
//! internal step returns an explicit `Result` and the dispatcher can pick the
//! right log severity in one place.

use crate::config;
use crate::platform_info::PlatformKind;
use std::fmt;
use thiserror::Error;
use tracing::Level;

/// Minimum OS build a native flag needs, rendered as a suffix on failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildRequirement(pub Option<u32>);

impl BuildRequirement {
    /// No build requirement; nothing is appended to the message
    pub const NONE: Self = BuildRequirement(None);

    pub const fn windows_build(build: u32) -> Self {
        BuildRequirement(Some(build))
    }
}

impl From<Option<u32>> for BuildRequirement {
    fn from(build: Option<u32>) -> Self {
        BuildRequirement(build)
    }
}

impl fmt::Display for BuildRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(build) => {
                write!(f, " ({} required)", config::windows::build_requirement(build))
            }
            None => Ok(()),
        }
    }
}

/// Why a window could not be turned into a native handle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandleUnavailable {
    /// Window exists but has no native peer yet (never shown)
    #[error("window has no realized native peer yet")]
    NotRealized,

    /// The toolkit handed out something we cannot use on this host
    #[error("{toolkit} handle is not usable on this platform: {reason}")]
    ToolkitIncompatible {
        toolkit: &'static str,
        reason: String,
    },
}

/// Failures while applying screen capture protection
#[derive(Error, Debug)]
pub enum ProtectionError {
    #[error("native window handle unavailable: {0}")]
    HandleUnavailable(#[from] HandleUnavailable),

    #[error("{call} failed with code {code:#010x}{requirement}")]
    NativeCallFailed {
        call: &'static str,
        code: i32,
        requirement: BuildRequirement,
    },

    #[error("screen capture protection is not supported on {0}")]
    UnsupportedPlatform(PlatformKind),

    #[error("unexpected failure: {0}")]
    UnexpectedFailure(String),
}

impl ProtectionError {
    /// Log severity the dispatcher reports this error with
    pub fn severity(&self) -> Level {
        match self {
            ProtectionError::UnsupportedPlatform(_) => Level::DEBUG,
            ProtectionError::HandleUnavailable(_) | ProtectionError::NativeCallFailed { .. } => {
                Level::WARN
            }
            ProtectionError::UnexpectedFailure(_) => Level::ERROR,
        }
    }

    /// Build an `UnexpectedFailure` from a caught panic payload
    pub(crate) fn from_panic(payload: Box<dyn std::any::Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "panic with non-string payload".to_string()
        };
        ProtectionError::UnexpectedFailure(message)
    }
}

/// Result type alias using ProtectionError
pub type ProtectionResult<T> = Result<T, ProtectionError>;
