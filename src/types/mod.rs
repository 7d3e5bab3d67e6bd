//! Common types used across the Cryptowatch client library.

pub mod common;
pub mod serde_helpers;

pub use common::*;
