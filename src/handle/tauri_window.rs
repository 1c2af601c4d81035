//! Tauri `WebviewWindow` resolver
//!
//! Tauri exposes the HWND / NSWindow directly, which saves the NSView hop
//! the raw-window-handle path needs on macOS.

use super::NativeHandle;
use crate::error::HandleUnavailable;
use crate::traits::NativeHandleResolver;
use tauri::{Runtime, WebviewWindow};

const TAURI: &str = "tauri";

#[derive(Debug, Clone, Copy, Default)]
pub struct TauriWindowResolver;

impl<R: Runtime> NativeHandleResolver<WebviewWindow<R>> for TauriWindowResolver {
    fn toolkit(&self) -> &'static str {
        TAURI
    }

    fn resolve(&self, window: &WebviewWindow<R>) -> Result<NativeHandle, HandleUnavailable> {
        #[cfg(target_os = "windows")]
        {
            window
                .hwnd()
                .map(|hwnd| NativeHandle::from_ptr(hwnd.0))
                .map_err(classify_tauri_error)
        }
        #[cfg(target_os = "macos")]
        {
            window
                .ns_window()
                .map(NativeHandle::from_ptr)
                .map_err(classify_tauri_error)
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            let _ = window;
            Err(HandleUnavailable::ToolkitIncompatible {
                toolkit: TAURI,
                reason: "no native window accessor on this platform".to_string(),
            })
        }
    }
}

#[cfg(any(target_os = "windows", target_os = "macos"))]
fn classify_tauri_error(err: tauri::Error) -> HandleUnavailable {
    match err {
        tauri::Error::WindowNotFound => HandleUnavailable::NotRealized,
        other => HandleUnavailable::ToolkitIncompatible {
            toolkit: TAURI,
            reason: other.to_string(),
        },
    }
}
