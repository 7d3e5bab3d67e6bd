//! # Cryptowatch Client
//!
//! An async Rust client library for the Cryptowatch public market-data REST API.
//!
//! ## Features
//!
//! - One method per REST endpoint: assets, pairs, exchanges, markets,
//!   prices, summaries, trades, order books and OHLC candles
//! - Uniform handling of the `{"result": ...}` / `{"error": ...}` envelope
//! - Strong typing for all response types
//! - Distinct errors for transport, decoding, rate limiting and API failures
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cryptowatch_api_client::rest::CryptowatchRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CryptowatchRestClient::new();
//!     let summary = client.get_market_summary("kraken", "btcusd").await?;
//!     println!("Last: {} (24h volume {})", summary.price.last, summary.volume);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, CryptowatchError};
pub use rest::{CryptowatchClient, CryptowatchRestClient};
pub use types::{MarketKey, OhlcPeriod};

/// Result type alias using CryptowatchError
pub type Result<T> = std::result::Result<T, CryptowatchError>;
