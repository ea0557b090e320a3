// SPDX-License-Identifier: MIT
//
// Castar bridge — Core types and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::BridgeConfig;
pub use error::CastarError;
pub use types::*;
