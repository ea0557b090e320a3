// SPDX-License-Identifier: MIT
//
// Castar bridge — method-channel contract and dispatcher.

pub mod channel;
pub mod dispatcher;

pub use dispatcher::Dispatcher;
