//! Cryptowatch REST API client.
//!
//! Provides access to every Cryptowatch market-data REST endpoint.
//!
//! # Trait-based API
//!
//! The [`CryptowatchClient`] trait abstracts all REST API operations, enabling:
//! - Mock implementations for testing
//! - Decorators around the HTTP client
//! - Alternative implementations
//!
//! ```rust,ignore
//! use cryptowatch_api_client::rest::{CryptowatchClient, CryptowatchRestClient};
//!
//! async fn use_client<C: CryptowatchClient>(client: &C) -> Result<(), cryptowatch_api_client::CryptowatchError> {
//!     let price = client.get_market_price("kraken", "btcusd").await?;
//!     println!("Last price: {}", price);
//!     Ok(())
//! }
//! ```

mod client;
pub mod endpoints;
pub mod public;
mod traits;

pub use client::{CryptowatchRestClient, CryptowatchRestClientBuilder};
pub use endpoints::CRYPTOWATCH_BASE_URL;
pub use traits::CryptowatchClient;
