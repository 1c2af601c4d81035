use super::DisplayAffinity;
use crate::config;
use crate::error::{HandleUnavailable, ProtectionError, ProtectionResult};
use crate::handle::NativeHandle;
use crate::traits::CapabilityDriver;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{SetWindowDisplayAffinity, WINDOW_DISPLAY_AFFINITY};

/// `SetWindowDisplayAffinity` driver
///
/// WDA_EXCLUDEFROMCAPTURE needs Windows 10 2004 (build 19041); older builds reject
/// it and we surface that as `NativeCallFailed` without retrying WDA_MONITOR.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayAffinityDriver;

impl CapabilityDriver for DisplayAffinityDriver {
    fn name(&self) -> &'static str {
        config::windows::SET_DISPLAY_AFFINITY
    }

    fn apply(&self, handle: NativeHandle, exclude: bool) -> ProtectionResult<()> {
        if handle.is_unresolved() {
            return Err(HandleUnavailable::NotRealized.into());
        }

        let affinity = DisplayAffinity::for_exclusion(exclude);
        tracing::trace!(hwnd = %handle, ?affinity, "Calling SetWindowDisplayAffinity");

        let result = unsafe {
            let hwnd = HWND(handle.as_ptr());
            SetWindowDisplayAffinity(hwnd, WINDOW_DISPLAY_AFFINITY(affinity.bits()))
        };
        result.map_err(|e| ProtectionError::NativeCallFailed {
            call: config::windows::SET_DISPLAY_AFFINITY,
            code: e.code().0,
            // Clearing the affinity has no build requirement
            requirement: affinity.min_build().into(),
        })
    }
}
