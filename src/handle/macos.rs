use super::NativeHandle;
use crate::error::HandleUnavailable;
use cocoa::base::{id, nil};
use objc::{msg_send, sel, sel_impl};
use std::ffi::c_void;
use std::ptr::NonNull;

/// AppKit handles carry the NSView; the sharing type lives on its NSWindow
pub(super) fn ns_window_for_view(ns_view: NonNull<c_void>) -> Result<NativeHandle, HandleUnavailable> {
    let ns_view = ns_view.as_ptr() as id;
    let ns_window: id = unsafe { msg_send![ns_view, window] };

    // View not attached to a window yet
    if ns_window == nil {
        tracing::trace!("NSView has no window yet");
        return Err(HandleUnavailable::NotRealized);
    }

    Ok(NativeHandle::from_ptr(ns_window as *mut c_void))
}
