// SPDX-License-Identifier: MIT
//
// Method-channel vocabulary and session lifecycle types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CastarError;

/// A single invocation arriving over the method channel: a method name
/// plus an optional string-keyed argument map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Map<String, Value>>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: None,
        }
    }

    /// Builder-style argument attachment, used heavily in tests.
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// Look up a string argument. Returns `None` when the key is absent
    /// or holds a non-string value.
    pub fn string_arg(&self, key: &str) -> Option<&str> {
        self.arguments.as_ref()?.get(key)?.as_str()
    }
}

/// Outcome of a dispatched call, mirroring the channel's built-in
/// result vocabulary: a success payload, a structured error, or the
/// channel's not-implemented signal for unrecognized methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MethodReply {
    Success {
        value: Value,
    },
    Error {
        code: String,
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        details: Option<Value>,
    },
    NotImplemented,
}

impl MethodReply {
    /// The boolean-true success reply every recognized method returns.
    pub fn ok() -> Self {
        Self::Success {
            value: Value::Bool(true),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Error code of an `Error` reply, if this is one.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            Self::Error { code, .. } => Some(code),
            _ => None,
        }
    }
}

impl From<CastarError> for MethodReply {
    fn from(err: CastarError) -> Self {
        match err {
            // Unknown methods map onto the channel's built-in signal
            // rather than a structured error.
            CastarError::NotImplemented(_) => Self::NotImplemented,
            other => Self::Error {
                code: other.code().to_string(),
                message: other.to_string(),
                details: None,
            },
        }
    }
}

/// Lifecycle states of the single vendor SDK session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// No session handle exists yet; only `initialize` is meaningful.
    Uninitialized,
    /// Session created and participating in the vendor network.
    Running,
    /// Session exists but has been stopped; `start` resumes it.
    Stopped,
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Uninitialized => "uninitialized",
            Self::Running => "running",
            Self::Stopped => "stopped",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_arg_lookup() {
        let call = MethodCall::new("initialize").with_arg("clientId", "abc");
        assert_eq!(call.string_arg("clientId"), Some("abc"));
        assert_eq!(call.string_arg("missing"), None);

        let call = MethodCall::new("initialize").with_arg("clientId", 42);
        assert_eq!(call.string_arg("clientId"), None);
    }

    #[test]
    fn reply_from_error_preserves_code_and_message() {
        let reply = MethodReply::from(CastarError::NotInitialized);
        assert_eq!(reply.error_code(), Some("NOT_INITIALIZED"));

        let reply = MethodReply::from(CastarError::not_implemented("frobnicate"));
        assert_eq!(reply, MethodReply::NotImplemented);
    }

    #[test]
    fn call_round_trips_through_json() {
        let call = MethodCall::new("showAd").with_arg("clientId", "abc");
        let json = serde_json::to_string(&call).expect("serialize");
        let back: MethodCall = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.method, "showAd");
        assert_eq!(back.string_arg("clientId"), Some("abc"));
    }
}
