use super::SharingType;
use crate::config;
use crate::error::{HandleUnavailable, ProtectionResult};
use crate::handle::NativeHandle;
use crate::traits::CapabilityDriver;
use cocoa::base::id;
use objc::{msg_send, sel, sel_impl};

/// `-[NSWindow setSharingType:]` driver
///
/// NSWindowSharingNone is deprecated but still honored by CGWindowList based
/// capture; there is no replacement with the same behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct SharingTypeDriver;

impl CapabilityDriver for SharingTypeDriver {
    fn name(&self) -> &'static str {
        config::macos::SET_SHARING_TYPE_SELECTOR
    }

    fn apply(&self, handle: NativeHandle, exclude: bool) -> ProtectionResult<()> {
        if handle.is_unresolved() {
            return Err(HandleUnavailable::NotRealized.into());
        }

        let sharing_type = SharingType::for_exclusion(exclude);
        tracing::trace!(ns_window = %handle, ?sharing_type, "Sending setSharingType:");

        // No status to check, the setter returns void
        unsafe {
            let ns_window = handle.as_ptr() as id;
            let _: () = msg_send![ns_window, setSharingType: sharing_type.raw()];
        }
        Ok(())
    }
}
