// SPDX-License-Identifier: MIT
//
// Unified error types for the Castar bridge.

use thiserror::Error;

/// Top-level error type for all bridge operations.
#[derive(Debug, Error)]
pub enum CastarError {
    // -- Caller-input errors --
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    // -- Precondition errors --
    #[error("Castar SDK not initialized")]
    NotInitialized,

    // -- Vendor-reported errors --
    /// SDK instance creation failed. The vendor's message is carried
    /// through verbatim.
    #[error("{0}")]
    Init(String),

    /// Any other failure reported by the vendor binary.
    #[error("Castar SDK error: {0}")]
    Vendor(String),

    // -- Unknown-operation errors --
    #[error("method not implemented: {0}")]
    NotImplemented(String),

    // -- Ambient --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used across every crate in the workspace.
pub type Result<T> = std::result::Result<T, CastarError>;

impl CastarError {
    /// Stable error code surfaced over the method channel.
    ///
    /// These strings are part of the wire contract with the application
    /// layer and must not change between releases.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArguments(_) => "INVALID_ARGUMENTS",
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::Init(_) => "INIT_ERROR",
            Self::Vendor(_) => "SDK_ERROR",
            Self::NotImplemented(_) => "NOT_IMPLEMENTED",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) | Self::Serialization(_) => "INTERNAL_ERROR",
        }
    }

    /// Shorthand for the unknown-method case.
    pub fn not_implemented(method: impl Into<String>) -> Self {
        Self::NotImplemented(method.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(
            CastarError::InvalidArguments("x".into()).code(),
            "INVALID_ARGUMENTS"
        );
        assert_eq!(CastarError::NotInitialized.code(), "NOT_INITIALIZED");
        assert_eq!(CastarError::Init("boom".into()).code(), "INIT_ERROR");
        assert_eq!(CastarError::not_implemented("frobnicate").code(), "NOT_IMPLEMENTED");
    }

    #[test]
    fn init_error_carries_vendor_message_verbatim() {
        let err = CastarError::Init("dev key rejected by auction server".into());
        assert_eq!(err.to_string(), "dev key rejected by auction server");
    }
}
