// SPDX-License-Identifier: MIT
//
// Wire-level method names for the bridge channel.
//
// The canonical contract is the short spellings. Earlier builds used
// `*Castar` suffixed names on the device channel; those are kept as
// aliases so existing application code keeps working during migration.

/// Canonical method names.
pub const METHOD_INITIALIZE: &str = "initialize";
pub const METHOD_START: &str = "start";
pub const METHOD_STOP: &str = "stop";
pub const METHOD_SHOW_AD: &str = "showAd";

/// Legacy spellings from the original device channel.
pub const LEGACY_INITIALIZE: &str = "initializeCastar";
pub const LEGACY_START: &str = "startCastar";
pub const LEGACY_STOP: &str = "stopCastar";

/// Argument key carrying the developer/client key.
pub const ARG_CLIENT_ID: &str = "clientId";

/// The four operations the bridge understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Initialize,
    Start,
    Stop,
    ShowAd,
}

impl Operation {
    /// Resolve a wire method name, optionally honoring legacy aliases.
    /// Returns `None` for unrecognized names.
    pub fn resolve(method: &str, accept_legacy: bool) -> Option<Self> {
        match method {
            METHOD_INITIALIZE => Some(Self::Initialize),
            METHOD_START => Some(Self::Start),
            METHOD_STOP => Some(Self::Stop),
            METHOD_SHOW_AD => Some(Self::ShowAd),
            LEGACY_INITIALIZE if accept_legacy => Some(Self::Initialize),
            LEGACY_START if accept_legacy => Some(Self::Start),
            LEGACY_STOP if accept_legacy => Some(Self::Stop),
            _ => None,
        }
    }
}
