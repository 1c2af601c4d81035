//! Tauri commands
//!
//! Register with `.invoke_handler(screenshield::commands::handlers())` and call
//! `invoke("set_screen_capture_protection", { protect: true })` from the frontend.

use crate::dispatcher::ProtectionDispatcher;
use crate::handle::tauri_window::TauriWindowResolver;
use crate::platform_info::PlatformInfo;
use lazy_static::lazy_static;

lazy_static! {
    static ref TAURI_DISPATCHER: ProtectionDispatcher<TauriWindowResolver> =
        ProtectionDispatcher::for_current_platform(TauriWindowResolver);
}

/// Protect (or unprotect) the calling window; failures are logged, never returned
#[tauri::command]
pub fn set_screen_capture_protection(window: tauri::WebviewWindow, protect: bool) {
    TAURI_DISPATCHER.set_protection(Some(&window), protect);
}

#[tauri::command]
pub fn get_protection_support() -> PlatformInfo {
    PlatformInfo::detect()
}

pub fn handlers() -> impl Fn(tauri::ipc::Invoke<tauri::Wry>) -> bool + Send + Sync + 'static {
    tauri::generate_handler![set_screen_capture_protection, get_protection_support]
}
