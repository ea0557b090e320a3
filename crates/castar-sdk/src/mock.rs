// SPDX-License-Identifier: MIT
//
// Mock SDK runtime for desktop/CI builds where the Castar binary is
// unavailable.
//
// Sessions succeed for any non-empty developer key and only log their
// start/stop transitions. `show_ad` resolves after a fixed simulated
// delay, matching the behavior of the simulator builds this replaces.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use castar_core::CastarError;
use castar_core::error::Result;

use crate::traits::{SdkRuntime, SdkSession};

/// Fake Castar runtime. Construction takes the simulated ad delay.
pub struct MockRuntime {
    ad_delay: Duration,
}

impl MockRuntime {
    pub fn new(ad_delay: Duration) -> Self {
        Self { ad_delay }
    }
}

#[async_trait]
impl SdkRuntime for MockRuntime {
    async fn create_session(&self, dev_key: &str) -> Result<Box<dyn SdkSession>> {
        if dev_key.is_empty() {
            return Err(CastarError::Init("empty developer key".into()));
        }
        info!(dev_key, "mock Castar instance created");
        Ok(Box::new(MockSession {
            dev_key: dev_key.to_string(),
            running: AtomicBool::new(false),
        }))
    }

    async fn show_ad(&self, client_id: &str) -> Result<()> {
        info!(client_id, "showing mock ad");
        tokio::time::sleep(self.ad_delay).await;
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Session backed by nothing; keeps a running flag so tests can observe
/// the start/stop toggle.
pub struct MockSession {
    dev_key: String,
    running: AtomicBool,
}

impl MockSession {
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl SdkSession for MockSession {
    async fn start(&self) {
        self.running.store(true, Ordering::Relaxed);
        info!(dev_key = %self.dev_key, "mock Castar session started");
    }

    async fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
        info!(dev_key = %self.dev_key, "mock Castar session stopped");
    }

    fn dev_key(&self) -> &str {
        &self.dev_key
    }
}
