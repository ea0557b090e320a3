// SPDX-License-Identifier: MIT
//
// Castar bridge — vendor SDK runtime abstractions.
//
// This crate defines the narrow capability surface the bridge consumes
// from the closed-source Castar binary, plus the two implementations:
// the real vendor binding (mobile targets only) and a mock that fakes
// the ad call for environments where the binary is unavailable.

pub mod mock;
pub mod traits;

#[cfg(any(target_os = "ios", target_os = "android"))]
pub mod vendor;

use std::time::Duration;

use castar_core::BridgeConfig;

/// Select the SDK runtime for the current target.
///
/// Mobile builds link the real CastarSDK binary; everything else
/// (desktop, CI, simulators) gets the mock runtime.
pub fn default_runtime(config: &BridgeConfig) -> Box<dyn traits::SdkRuntime> {
    #[cfg(any(target_os = "ios", target_os = "android"))]
    {
        let _ = config;
        Box::new(vendor::VendorRuntime::new())
    }
    #[cfg(not(any(target_os = "ios", target_os = "android")))]
    {
        Box::new(mock::MockRuntime::new(Duration::from_millis(
            config.mock_ad_delay_ms,
        )))
    }
}
