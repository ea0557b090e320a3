// SPDX-License-Identifier: MIT
//
// The bridge dispatcher.
//
// Owns the one optional vendor session per bridge instance and
// translates named method calls from the application layer into calls
// on the injected SDK runtime. Every failure path produces a
// structured reply; nothing on this path panics or retries.

use tracing::{info, instrument, warn};

use castar_core::error::Result;
use castar_core::{BridgeConfig, CastarError, MethodCall, MethodReply, SessionState};
use castar_sdk::traits::{SdkRuntime, SdkSession};

use crate::channel::{ARG_CLIENT_ID, Operation};

/// Method-channel dispatcher for the Castar SDK.
///
/// The runtime is injected at composition time (`castar_sdk::default_runtime`
/// in production, a fake in tests), so the lifecycle below is testable
/// without the vendor binary:
///
/// Uninitialized → (initialize ok) Running ⇄ (stop / start) Stopped
///
/// The session handle lives for the dispatcher's lifetime; there is no
/// terminal state.
pub struct Dispatcher {
    config: BridgeConfig,
    runtime: Box<dyn SdkRuntime>,
    session: Option<Box<dyn SdkSession>>,
    state: SessionState,
}

impl Dispatcher {
    pub fn new(config: BridgeConfig, runtime: Box<dyn SdkRuntime>) -> Self {
        Self {
            config,
            runtime,
            session: None,
            state: SessionState::Uninitialized,
        }
    }

    /// Current lifecycle state, for logging and tests.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Name of the injected runtime ("CastarSDK", "mock", ...).
    pub fn runtime_name(&self) -> &str {
        self.runtime.name()
    }

    /// Handle one invocation from the application layer.
    ///
    /// Calls are processed in the order the host delivers them; each
    /// returns exactly one reply.
    #[instrument(skip_all, fields(method = %call.method, state = %self.state))]
    pub async fn handle(&mut self, call: MethodCall) -> MethodReply {
        let Some(op) = Operation::resolve(&call.method, self.config.accept_legacy_methods) else {
            warn!("unrecognized method");
            return MethodReply::NotImplemented;
        };

        let outcome = match op {
            Operation::Initialize => self.initialize(&call).await,
            Operation::Start => self.start().await,
            Operation::Stop => self.stop().await,
            Operation::ShowAd => self.show_ad(&call).await,
        };

        match outcome {
            Ok(()) => MethodReply::ok(),
            Err(err) => {
                warn!(code = err.code(), "method failed: {err}");
                MethodReply::from(err)
            }
        }
    }

    /// Create a session for the configured or caller-supplied key and
    /// start it immediately.
    ///
    /// An already-initialized bridge is re-initialized: the fresh
    /// session is created first, then the old one is stopped and
    /// dropped, so a vendor failure leaves the existing session intact.
    async fn initialize(&mut self, call: &MethodCall) -> Result<()> {
        let dev_key = self.resolve_client_key(call)?.to_string();

        let session = self.runtime.create_session(&dev_key).await?;

        if let Some(previous) = self.session.take() {
            warn!(
                dev_key = %previous.dev_key(),
                "re-initializing: stopping previous session"
            );
            previous.stop().await;
        }

        session.start().await;
        self.session = Some(session);
        self.state = SessionState::Running;
        info!(runtime = self.runtime.name(), "Castar SDK initialized and running");
        Ok(())
    }

    async fn start(&mut self) -> Result<()> {
        let session = self.session.as_ref().ok_or(CastarError::NotInitialized)?;
        session.start().await;
        self.state = SessionState::Running;
        Ok(())
    }

    async fn stop(&mut self) -> Result<()> {
        let session = self.session.as_ref().ok_or(CastarError::NotInitialized)?;
        session.stop().await;
        self.state = SessionState::Stopped;
        Ok(())
    }

    /// Ad rendering is a runtime capability: the mock supports it, the
    /// vendor binary does not (its error surfaces as not-implemented).
    async fn show_ad(&self, call: &MethodCall) -> Result<()> {
        let client_id = self.resolve_client_key(call)?.to_string();
        self.runtime.show_ad(&client_id).await
    }

    /// The configured fixed key wins; otherwise the caller must supply
    /// a non-empty `clientId` argument.
    fn resolve_client_key<'a>(&'a self, call: &'a MethodCall) -> Result<&'a str> {
        if let Some(key) = self.config.client_key.as_deref() {
            return Ok(key);
        }
        match call.string_arg(ARG_CLIENT_ID) {
            Some(id) if !id.is_empty() => Ok(id),
            _ => Err(CastarError::InvalidArguments("Client ID is required".into())),
        }
    }
}
