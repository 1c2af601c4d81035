//! ScreenShield - Screen Capture Protection Library
//!
//! Excludes an application window from screenshots, screen recordings and
//! screen sharing while keeping it visible on the local desktop.
//!
//! - Windows: `SetWindowDisplayAffinity(WDA_EXCLUDEFROMCAPTURE)` (build 19041+)
//! - macOS: `NSWindow.sharingType = NSWindowSharingNone`
//! - Linux / others: no-op (compositor dependent, not supported)
//!
//! ```no_run
//! # fn demo(window: &impl raw_window_handle::HasWindowHandle) {
//! screenshield::set_protection(Some(window), true);
//! # }
//! ```
#![allow(unexpected_cfgs)]

// Configuration constants
pub mod config;

// Error taxonomy
pub mod error;

// Logging setup for host applications
pub mod logging;

// Platform detection and capability report
pub mod platform_info;

// Resolver / driver seams
pub mod traits;

// Native handle resolution per toolkit
pub mod handle;

// Per-OS capture exclusion primitives
pub mod driver;

// Public entry point
pub mod dispatcher;

#[cfg(feature = "app")]
pub mod commands;

// Re-export commonly used types
pub use dispatcher::{set_protection, ProtectionDispatcher, ProtectionOutcome};
pub use error::{BuildRequirement, HandleUnavailable, ProtectionError};
pub use handle::{NativeHandle, RawHandleResolver};
pub use platform_info::{PlatformInfo, PlatformKind};
pub use traits::{CapabilityDriver, NativeHandleResolver};

#[cfg(feature = "app")]
pub use handle::tauri_window::TauriWindowResolver;
