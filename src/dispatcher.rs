//! Protection Dispatcher
//!
//! Single public entry point. Detects the host OS once, resolves the window to a
//! native handle, forwards to the matching driver and logs the outcome. Nothing
//! escapes `set_protection`: on any failure the window simply stays capturable.

use crate::config;
use crate::driver;
use crate::error::{HandleUnavailable, ProtectionError, ProtectionResult};
use crate::handle::RawHandleResolver;
use crate::platform_info::PlatformKind;
use crate::traits::{CapabilityDriver, NativeHandleResolver};
use lazy_static::lazy_static;
use raw_window_handle::HasWindowHandle;
use std::panic::{self, AssertUnwindSafe};
use tracing::Level;

lazy_static! {
    // Host OS never changes at runtime, so the driver is picked once per process
    static ref DEFAULT_DISPATCHER: ProtectionDispatcher<RawHandleResolver> =
        ProtectionDispatcher::for_current_platform(RawHandleResolver);
}

/// Apply or clear screen capture protection on any raw-window-handle window
///
/// `None` is accepted and ignored. Never panics, never returns an error; the
/// outcome is reported through `tracing`.
pub fn set_protection<W>(window: Option<&W>, exclude: bool)
where
    W: HasWindowHandle + ?Sized,
{
    DEFAULT_DISPATCHER.set_protection(window, exclude);
}

/// What a successful call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectionOutcome {
    /// No window was given, nothing to do
    NoWindow,
    /// The native primitive was invoked
    Applied {
        platform: PlatformKind,
        /// Requested state
        requested: bool,
        /// State actually sent to the OS (differs only under the debug override)
        applied: bool,
    },
}

/// Routes protection requests for one host platform to its capability driver
///
/// The platform and driver are fixed at construction. `R` turns the caller's
/// window type into a native handle; `set_protection` is generic over any window
/// type `R` can resolve.
pub struct ProtectionDispatcher<R> {
    platform: PlatformKind,
    driver: Option<Box<dyn CapabilityDriver>>,
    resolver: R,
    allow_capture_override: bool,
}

impl<R> ProtectionDispatcher<R> {
    /// Dispatcher for the running host, with the native driver and the
    /// `SCREENSHIELD_ALLOW_SCREEN_CAPTURE` override read from the environment
    pub fn for_current_platform(resolver: R) -> Self {
        let platform = PlatformKind::current();
        let driver = driver::native_driver(platform);
        let allow_capture_override = config::debug::should_allow_screen_capture();

        tracing::debug!(
            %platform,
            driver = driver.as_ref().map(|d| d.name()).unwrap_or("none"),
            allow_capture_override,
            "Screen capture protection dispatcher ready"
        );

        Self {
            platform,
            driver,
            resolver,
            allow_capture_override,
        }
    }

    /// Dispatcher with an explicit platform and driver (embedding, tests)
    pub fn with_driver(
        platform: PlatformKind,
        resolver: R,
        driver: Option<Box<dyn CapabilityDriver>>,
    ) -> Self {
        Self {
            platform,
            driver,
            resolver,
            allow_capture_override: false,
        }
    }

    /// Force every exclusion request to "allow capture"
    pub fn allow_capture_override(mut self, allow: bool) -> Self {
        self.allow_capture_override = allow;
        self
    }

    /// Platform this dispatcher was built for
    pub fn platform(&self) -> PlatformKind {
        self.platform
    }

    /// Apply protection, logging the outcome; never fails visibly
    pub fn set_protection<W>(&self, window: Option<&W>, exclude: bool)
    where
        W: ?Sized,
        R: NativeHandleResolver<W>,
    {
        match self.try_set_protection(window, exclude) {
            Ok(ProtectionOutcome::NoWindow) => {
                tracing::trace!("No window given, skipping screen capture protection");
            }
            Ok(ProtectionOutcome::Applied {
                platform, applied, ..
            }) => {
                tracing::info!(
                    %platform,
                    "{} screen capture protection {}",
                    platform,
                    if applied { "enabled" } else { "disabled" }
                );
            }
            Err(err) => self.report_failure(&err, exclude),
        }
    }

    /// Fallible core of `set_protection`; every failure comes back as a `ProtectionError`
    ///
    /// Panics in the resolver or driver are caught and returned as
    /// `UnexpectedFailure`. The process panic hook still runs first, so the default
    /// hook prints the panic message to stderr before the error is returned.
    pub fn try_set_protection<W>(
        &self,
        window: Option<&W>,
        exclude: bool,
    ) -> ProtectionResult<ProtectionOutcome>
    where
        W: ?Sized,
        R: NativeHandleResolver<W>,
    {
        let Some(window) = window else {
            return Ok(ProtectionOutcome::NoWindow);
        };

        let driver = match (self.platform.has_capture_exclusion(), self.driver.as_deref()) {
            (true, Some(driver)) => driver,
            _ => return Err(ProtectionError::UnsupportedPlatform(self.platform)),
        };

        let applied = exclude && !self.allow_capture_override;
        if exclude && !applied {
            tracing::info!(
                env = config::debug::ALLOW_SCREEN_CAPTURE_ENV,
                "Screen capture ALLOWED by override, not excluding window"
            );
        }

        // FFI and toolkit reach-through must not take the host app down
        panic::catch_unwind(AssertUnwindSafe(|| {
            let handle = self.resolver.resolve(window)?;
            if handle.is_unresolved() {
                return Err(HandleUnavailable::NotRealized.into());
            }

            tracing::debug!(
                toolkit = self.resolver.toolkit(),
                driver = driver.name(),
                %handle,
                exclude = applied,
                "Applying screen capture protection"
            );
            driver.apply(handle, applied)
        }))
        .map_err(ProtectionError::from_panic)??;

        Ok(ProtectionOutcome::Applied {
            platform: self.platform,
            requested: exclude,
            applied,
        })
    }

    fn report_failure(&self, err: &ProtectionError, exclude: bool) {
        let platform = self.platform;
        let severity = err.severity();

        if severity == Level::DEBUG {
            tracing::debug!(%platform, "Screen capture protection not supported on {}", platform);
        } else if severity == Level::WARN {
            tracing::warn!(%platform, exclude, error = %err, "Screen capture protection not applied");
        } else {
            tracing::error!(%platform, exclude, error = %err, "Failed to apply screen capture protection");
        }
    }
}
