//! Native handle resolution
//!
//! Toolkit specific reach-through lives here and nowhere else:
//! - `RawHandleResolver`: any window implementing `raw_window_handle::HasWindowHandle`
//! - `tauri_window::TauriWindowResolver`: Tauri `WebviewWindow` (feature `app`)

use crate::error::HandleUnavailable;
use crate::traits::NativeHandleResolver;
use raw_window_handle::{HandleError, HasWindowHandle, RawWindowHandle};
use std::ffi::c_void;
use std::fmt;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(feature = "app")]
pub mod tauri_window;

/// OS-native window identifier (HWND on Windows, `NSWindow*` on macOS)
///
/// Only valid while the originating window is alive. Zero means unresolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct NativeHandle(isize);

impl NativeHandle {
    /// Sentinel for "no native window"
    pub const UNRESOLVED: NativeHandle = NativeHandle(0);

    pub fn from_raw(value: isize) -> Self {
        NativeHandle(value)
    }

    pub fn from_ptr(ptr: *mut c_void) -> Self {
        NativeHandle(ptr as isize)
    }

    pub fn as_raw(self) -> isize {
        self.0
    }

    pub fn as_ptr(self) -> *mut c_void {
        self.0 as *mut c_void
    }

    pub fn is_unresolved(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NativeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

const RAW_WINDOW_HANDLE: &str = "raw-window-handle";

/// Resolver for winit / tao / egui / tauri windows via `raw-window-handle` 0.6
#[derive(Debug, Clone, Copy, Default)]
pub struct RawHandleResolver;

impl<W: HasWindowHandle + ?Sized> NativeHandleResolver<W> for RawHandleResolver {
    fn toolkit(&self) -> &'static str {
        RAW_WINDOW_HANDLE
    }

    fn resolve(&self, window: &W) -> Result<NativeHandle, HandleUnavailable> {
        let handle = window.window_handle().map_err(classify_handle_error)?;

        match handle.as_raw() {
            RawWindowHandle::Win32(win32) => Ok(NativeHandle::from_raw(win32.hwnd.get())),
            RawWindowHandle::AppKit(appkit) => {
                #[cfg(target_os = "macos")]
                {
                    macos::ns_window_for_view(appkit.ns_view)
                }
                #[cfg(not(target_os = "macos"))]
                {
                    let _ = appkit;
                    Err(HandleUnavailable::ToolkitIncompatible {
                        toolkit: RAW_WINDOW_HANDLE,
                        reason: "AppKit handle outside macOS".to_string(),
                    })
                }
            }
            other => Err(HandleUnavailable::ToolkitIncompatible {
                toolkit: RAW_WINDOW_HANDLE,
                reason: format!("unsupported handle kind {:?}", other),
            }),
        }
    }
}

fn classify_handle_error(err: HandleError) -> HandleUnavailable {
    match err {
        // Window not created yet, or suspended (mobile)
        HandleError::Unavailable => HandleUnavailable::NotRealized,
        other => HandleUnavailable::ToolkitIncompatible {
            toolkit: RAW_WINDOW_HANDLE,
            reason: other.to_string(),
        },
    }
}
