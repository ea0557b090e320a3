// SPDX-License-Identifier: MIT
//
// Real Castar SDK binding for mobile targets.
//
// The vendor ships a closed-source binary (an xcframework on iOS, a
// prebuilt .so on Android) exposing a small C surface. Only the two
// operations the bridge consumes are declared here: instance creation
// and the start/stop toggle. Everything behind them (ad auction,
// network participation, device fingerprinting) is opaque.
//
// This module is cfg-gated to mobile targets and will not compile
// elsewhere; non-mobile builds use `mock::MockRuntime` instead.

#![cfg(any(target_os = "ios", target_os = "android"))]

use std::ffi::{CStr, CString, c_char, c_void};

use async_trait::async_trait;
use tracing::debug;

use castar_core::CastarError;
use castar_core::error::Result;

use crate::traits::{SdkRuntime, SdkSession};

#[cfg_attr(target_os = "ios", link(name = "CastarSDK", kind = "framework"))]
#[cfg_attr(target_os = "android", link(name = "castar"))]
unsafe extern "C" {
    /// Create an SDK instance for the given developer key.
    ///
    /// Returns an opaque handle, or null with `error_out` set to a
    /// vendor-allocated message (free with `CastarStringFree`).
    fn CastarCreateInstance(dev_key: *const c_char, error_out: *mut *mut c_char) -> *mut c_void;

    /// Resume network participation. No failure surface.
    fn CastarInstanceStart(handle: *mut c_void);

    /// Pause network participation. No failure surface.
    fn CastarInstanceStop(handle: *mut c_void);

    /// Release a handle obtained from `CastarCreateInstance`.
    fn CastarInstanceRelease(handle: *mut c_void);

    /// Free a string allocated by the SDK.
    fn CastarStringFree(s: *mut c_char);
}

/// The real vendor runtime. Stateless; all state lives behind the
/// opaque instance handles.
pub struct VendorRuntime;

impl VendorRuntime {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VendorRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SdkRuntime for VendorRuntime {
    async fn create_session(&self, dev_key: &str) -> Result<Box<dyn SdkSession>> {
        let c_key = CString::new(dev_key)
            .map_err(|_| CastarError::InvalidArguments("developer key contains NUL".into()))?;

        let mut error_out: *mut c_char = std::ptr::null_mut();
        let handle = unsafe { CastarCreateInstance(c_key.as_ptr(), &mut error_out) };

        if handle.is_null() {
            let message = if error_out.is_null() {
                "unknown Castar SDK error".to_string()
            } else {
                let message = unsafe { CStr::from_ptr(error_out) }
                    .to_string_lossy()
                    .into_owned();
                unsafe { CastarStringFree(error_out) };
                message
            };
            return Err(CastarError::Init(message));
        }

        debug!(dev_key, "Castar instance created");
        Ok(Box::new(VendorSession {
            handle,
            dev_key: dev_key.to_string(),
        }))
    }

    async fn show_ad(&self, _client_id: &str) -> Result<()> {
        // The shipped vendor binary exposes no ad-rendering entry point.
        Err(CastarError::not_implemented("showAd"))
    }

    fn name(&self) -> &str {
        "CastarSDK"
    }
}

/// Owning wrapper around a vendor instance handle.
pub struct VendorSession {
    handle: *mut c_void,
    dev_key: String,
}

// The vendor documents instance handles as safe to use from any thread.
unsafe impl Send for VendorSession {}
unsafe impl Sync for VendorSession {}

#[async_trait]
impl SdkSession for VendorSession {
    async fn start(&self) {
        unsafe { CastarInstanceStart(self.handle) };
        debug!(dev_key = %self.dev_key, "Castar session started");
    }

    async fn stop(&self) {
        unsafe { CastarInstanceStop(self.handle) };
        debug!(dev_key = %self.dev_key, "Castar session stopped");
    }

    fn dev_key(&self) -> &str {
        &self.dev_key
    }
}

impl Drop for VendorSession {
    fn drop(&mut self) {
        unsafe { CastarInstanceRelease(self.handle) };
    }
}
