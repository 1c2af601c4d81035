//! Common traits for the cross-platform protection seams
//!
//! The dispatcher only talks to these two traits, so a toolkit upgrade touches one
//! resolver and an OS primitive change touches one driver.

use crate::error::{HandleUnavailable, ProtectionResult};
use crate::handle::NativeHandle;

/// Turns a toolkit window reference into the OS-native window identifier
///
/// - Windows: HWND
/// - macOS: `NSWindow*`
pub trait NativeHandleResolver<W: ?Sized> {
    /// Short toolkit name used in diagnostics
    fn toolkit(&self) -> &'static str;

    /// Resolve the native handle for `window`
    ///
    /// Returning `NativeHandle::UNRESOLVED` is treated the same as
    /// `HandleUnavailable::NotRealized`.
    fn resolve(&self, window: &W) -> Result<NativeHandle, HandleUnavailable>;
}

/// Wraps exactly one native capture exclusion primitive
pub trait CapabilityDriver: Send + Sync {
    /// Native call name, for logs
    fn name(&self) -> &'static str;

    /// Set (`exclude = true`) or clear capture exclusion for `handle`
    ///
    /// Must not call into the OS when `handle` is unresolved.
    fn apply(&self, handle: NativeHandle, exclude: bool) -> ProtectionResult<()>;
}
