// SPDX-License-Identifier: MIT
//
// Capability traits for the vendor SDK.
//
// The Castar binary is closed source; these traits pin down the two
// operations the bridge actually consumes (instance creation and the
// start/stop toggle) so the dispatcher can be tested against a fake
// implementation instead of the real binary.

use async_trait::async_trait;

use castar_core::error::Result;

/// Entry point into a Castar SDK build.
///
/// Implementations: `vendor::VendorRuntime` (mobile targets),
/// `mock::MockRuntime` (everything else), and test fakes.
#[async_trait]
pub trait SdkRuntime: Send + Sync {
    /// Create a session for the given developer key.
    ///
    /// Maps onto the vendor's `createInstance(devKey)`. On failure the
    /// vendor's message is carried through verbatim in
    /// `CastarError::Init`.
    async fn create_session(&self, dev_key: &str) -> Result<Box<dyn SdkSession>>;

    /// Render an ad for the given client id.
    ///
    /// Only the mock runtime supports this today; the vendor runtime
    /// returns `CastarError::NotImplemented`.
    async fn show_ad(&self, client_id: &str) -> Result<()>;

    /// Human-readable runtime name (e.g. "CastarSDK", "mock").
    fn name(&self) -> &str;
}

/// A live vendor SDK session.
///
/// `start` and `stop` are fire-and-forget onto the vendor handle; the
/// vendor documents no failure surface for either.
#[async_trait]
pub trait SdkSession: Send + Sync {
    /// Resume network participation.
    async fn start(&self);

    /// Pause network participation.
    async fn stop(&self);

    /// The developer key this session was created with, for logging.
    fn dev_key(&self) -> &str;
}
