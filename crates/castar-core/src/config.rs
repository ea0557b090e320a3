// SPDX-License-Identifier: MIT
//
// Bridge configuration.

use serde::{Deserialize, Serialize};

/// Default channel name, shared with the application layer.
pub const DEFAULT_CHANNEL: &str = "com.castar.sdk/bridge";

/// Composition-time settings for the bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Name of the method channel the host registers the bridge under.
    pub channel_name: String,
    /// Fixed developer key baked into the app identity. When set,
    /// `initialize` uses this key and ignores any caller-supplied
    /// `clientId`; when unset, the caller must provide one.
    pub client_key: Option<String>,
    /// Accept the historical `initializeCastar`/`startCastar`/`stopCastar`
    /// method spellings alongside the canonical short names.
    pub accept_legacy_methods: bool,
    /// Delay before the mock runtime reports a shown ad, in milliseconds.
    pub mock_ad_delay_ms: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            channel_name: DEFAULT_CHANNEL.to_string(),
            client_key: None,
            accept_legacy_methods: true,
            mock_ad_delay_ms: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_wire_contract() {
        let config = BridgeConfig::default();
        assert_eq!(config.channel_name, "com.castar.sdk/bridge");
        assert!(config.client_key.is_none());
        assert!(config.accept_legacy_methods);
        assert_eq!(config.mock_ad_delay_ms, 1000);
    }

    #[test]
    fn partial_json_fills_in_nothing_silently() {
        // Config files are explicit: a file must carry every field.
        let err = serde_json::from_str::<BridgeConfig>(r#"{"channel_name":"x"}"#);
        assert!(err.is_err());
    }
}
