//! Trait definition for the Cryptowatch REST API client.
//!
//! [`CryptowatchClient`] abstracts every market-data operation. This enables:
//! - Mock implementations for testing
//! - Decorators (e.g., caching or retrying wrappers)
//! - Alternative implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use cryptowatch_api_client::rest::{CryptowatchClient, CryptowatchRestClient};
//!
//! async fn spread<C: CryptowatchClient>(client: &C) -> Result<f64, cryptowatch_api_client::CryptowatchError> {
//!     let book = client.get_order_book("kraken", "btcusd").await?;
//!     let ask = book.best_ask().map(|e| e.price).unwrap_or_default();
//!     let bid = book.best_bid().map(|e| e.price).unwrap_or_default();
//!     Ok(ask - bid)
//! }
//! ```

use std::future::Future;

use crate::error::CryptowatchError;
use crate::rest::CryptowatchRestClient;
use crate::rest::public::{
    AggregatePrices, AggregateSummaries, Asset, DetailedAsset, DetailedExchange, DetailedMarket,
    Exchange, Market, Ohlc, OrderBook, Pair, PairMarkets, Summary, Trade,
};

/// Trait defining all Cryptowatch REST API operations.
///
/// All methods are async and return `Result<T, CryptowatchError>`.
pub trait CryptowatchClient: Send + Sync {
    /// Get all assets.
    fn get_assets(&self) -> impl Future<Output = Result<Vec<Asset>, CryptowatchError>> + Send;

    /// Get an asset with its markets.
    fn get_asset_markets(
        &self,
        asset: &str,
    ) -> impl Future<Output = Result<DetailedAsset, CryptowatchError>> + Send;

    /// Get all pairs.
    fn get_pairs(&self) -> impl Future<Output = Result<Vec<Pair>, CryptowatchError>> + Send;

    /// Get a pair with its markets.
    fn get_pair_markets(
        &self,
        pair: &str,
    ) -> impl Future<Output = Result<PairMarkets, CryptowatchError>> + Send;

    /// Get all exchanges.
    fn get_exchanges(&self) -> impl Future<Output = Result<Vec<Exchange>, CryptowatchError>> + Send;

    /// Get a single exchange.
    fn get_exchange(
        &self,
        exchange: &str,
    ) -> impl Future<Output = Result<DetailedExchange, CryptowatchError>> + Send;

    /// Get all markets.
    fn get_markets(&self) -> impl Future<Output = Result<Vec<Market>, CryptowatchError>> + Send;

    /// Get a single market.
    fn get_market(
        &self,
        exchange: &str,
        pair: &str,
    ) -> impl Future<Output = Result<DetailedMarket, CryptowatchError>> + Send;

    /// Get a market's last price.
    fn get_market_price(
        &self,
        exchange: &str,
        pair: &str,
    ) -> impl Future<Output = Result<f64, CryptowatchError>> + Send;

    /// Get a market's 24h summary.
    fn get_market_summary(
        &self,
        exchange: &str,
        pair: &str,
    ) -> impl Future<Output = Result<Summary, CryptowatchError>> + Send;

    /// Get a market's recent trades.
    fn get_trades(
        &self,
        exchange: &str,
        pair: &str,
    ) -> impl Future<Output = Result<Vec<Trade>, CryptowatchError>> + Send;

    /// Get a market's order book.
    fn get_order_book(
        &self,
        exchange: &str,
        pair: &str,
    ) -> impl Future<Output = Result<OrderBook, CryptowatchError>> + Send;

    /// Get a market's OHLC candles.
    fn get_ohlc(
        &self,
        exchange: &str,
        pair: &str,
    ) -> impl Future<Output = Result<Ohlc, CryptowatchError>> + Send;

    /// Get the last price of every market.
    fn get_aggregate_prices(
        &self,
    ) -> impl Future<Output = Result<AggregatePrices, CryptowatchError>> + Send;

    /// Get the summary of every market.
    fn get_aggregate_summaries(
        &self,
    ) -> impl Future<Output = Result<AggregateSummaries, CryptowatchError>> + Send;
}

impl CryptowatchClient for CryptowatchRestClient {
    async fn get_assets(&self) -> Result<Vec<Asset>, CryptowatchError> {
        CryptowatchRestClient::get_assets(self).await
    }

    async fn get_asset_markets(&self, asset: &str) -> Result<DetailedAsset, CryptowatchError> {
        CryptowatchRestClient::get_asset_markets(self, asset).await
    }

    async fn get_pairs(&self) -> Result<Vec<Pair>, CryptowatchError> {
        CryptowatchRestClient::get_pairs(self).await
    }

    async fn get_pair_markets(&self, pair: &str) -> Result<PairMarkets, CryptowatchError> {
        CryptowatchRestClient::get_pair_markets(self, pair).await
    }

    async fn get_exchanges(&self) -> Result<Vec<Exchange>, CryptowatchError> {
        CryptowatchRestClient::get_exchanges(self).await
    }

    async fn get_exchange(&self, exchange: &str) -> Result<DetailedExchange, CryptowatchError> {
        CryptowatchRestClient::get_exchange(self, exchange).await
    }

    async fn get_markets(&self) -> Result<Vec<Market>, CryptowatchError> {
        CryptowatchRestClient::get_markets(self).await
    }

    async fn get_market(&self, exchange: &str, pair: &str) -> Result<DetailedMarket, CryptowatchError> {
        CryptowatchRestClient::get_market(self, exchange, pair).await
    }

    async fn get_market_price(&self, exchange: &str, pair: &str) -> Result<f64, CryptowatchError> {
        CryptowatchRestClient::get_market_price(self, exchange, pair).await
    }

    async fn get_market_summary(&self, exchange: &str, pair: &str) -> Result<Summary, CryptowatchError> {
        CryptowatchRestClient::get_market_summary(self, exchange, pair).await
    }

    async fn get_trades(&self, exchange: &str, pair: &str) -> Result<Vec<Trade>, CryptowatchError> {
        CryptowatchRestClient::get_trades(self, exchange, pair).await
    }

    async fn get_order_book(&self, exchange: &str, pair: &str) -> Result<OrderBook, CryptowatchError> {
        CryptowatchRestClient::get_order_book(self, exchange, pair).await
    }

    async fn get_ohlc(&self, exchange: &str, pair: &str) -> Result<Ohlc, CryptowatchError> {
        CryptowatchRestClient::get_ohlc(self, exchange, pair).await
    }

    async fn get_aggregate_prices(&self) -> Result<AggregatePrices, CryptowatchError> {
        CryptowatchRestClient::get_aggregate_prices(self).await
    }

    async fn get_aggregate_summaries(&self) -> Result<AggregateSummaries, CryptowatchError> {
        CryptowatchRestClient::get_aggregate_summaries(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::rest::public::OrderBookEntry;

    /// Serves a fixed order book and fails everything else.
    struct FixedBook(OrderBook);

    fn unavailable<T>() -> Result<T, CryptowatchError> {
        Err(CryptowatchError::Api(ApiError::new(404, "not mocked")))
    }

    impl CryptowatchClient for FixedBook {
        async fn get_assets(&self) -> Result<Vec<Asset>, CryptowatchError> {
            unavailable()
        }
        async fn get_asset_markets(&self, _: &str) -> Result<DetailedAsset, CryptowatchError> {
            unavailable()
        }
        async fn get_pairs(&self) -> Result<Vec<Pair>, CryptowatchError> {
            unavailable()
        }
        async fn get_pair_markets(&self, _: &str) -> Result<PairMarkets, CryptowatchError> {
            unavailable()
        }
        async fn get_exchanges(&self) -> Result<Vec<Exchange>, CryptowatchError> {
            unavailable()
        }
        async fn get_exchange(&self, _: &str) -> Result<DetailedExchange, CryptowatchError> {
            unavailable()
        }
        async fn get_markets(&self) -> Result<Vec<Market>, CryptowatchError> {
            unavailable()
        }
        async fn get_market(&self, _: &str, _: &str) -> Result<DetailedMarket, CryptowatchError> {
            unavailable()
        }
        async fn get_market_price(&self, _: &str, _: &str) -> Result<f64, CryptowatchError> {
            unavailable()
        }
        async fn get_market_summary(&self, _: &str, _: &str) -> Result<Summary, CryptowatchError> {
            unavailable()
        }
        async fn get_trades(&self, _: &str, _: &str) -> Result<Vec<Trade>, CryptowatchError> {
            unavailable()
        }
        async fn get_order_book(&self, _: &str, _: &str) -> Result<OrderBook, CryptowatchError> {
            Ok(self.0.clone())
        }
        async fn get_ohlc(&self, _: &str, _: &str) -> Result<Ohlc, CryptowatchError> {
            unavailable()
        }
        async fn get_aggregate_prices(&self) -> Result<AggregatePrices, CryptowatchError> {
            unavailable()
        }
        async fn get_aggregate_summaries(&self) -> Result<AggregateSummaries, CryptowatchError> {
            unavailable()
        }
    }

    async fn spread<C: CryptowatchClient>(client: &C) -> Result<f64, CryptowatchError> {
        let book = client.get_order_book("kraken", "btcusd").await?;
        let ask = book.best_ask().map(|e| e.price).unwrap_or_default();
        let bid = book.best_bid().map(|e| e.price).unwrap_or_default();
        Ok(ask - bid)
    }

    #[tokio::test]
    async fn test_generic_over_mock_client() {
        let client = FixedBook(OrderBook {
            asks: vec![OrderBookEntry {
                price: 6325.0,
                amount: 1.2,
            }],
            bids: vec![OrderBookEntry {
                price: 6310.0,
                amount: 0.8,
            }],
            seq_num: 0,
        });
        assert_eq!(spread(&client).await.unwrap(), 15.0);

        let err = client.get_assets().await.unwrap_err();
        assert!(err.is_api());
    }
}
