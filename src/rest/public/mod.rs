//! Market-data REST endpoints.
//!
//! The Cryptowatch REST API is public, so every endpoint lives here.

mod types;

pub use types::*;

use crate::error::CryptowatchError;
use crate::rest::CryptowatchRestClient;
use crate::rest::endpoints;

impl CryptowatchRestClient {
    /// Get all assets, in no particular order.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use cryptowatch_api_client::rest::CryptowatchRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CryptowatchRestClient::new();
    ///     for asset in client.get_assets().await? {
    ///         println!("{} ({})", asset.symbol, asset.name);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_assets(&self) -> Result<Vec<Asset>, CryptowatchError> {
        self.public_get(endpoints::ASSETS).await
    }

    /// Get an asset with every market that has it as base or quote.
    ///
    /// # Arguments
    ///
    /// * `asset` - Asset symbol (e.g., "btc").
    pub async fn get_asset_markets(&self, asset: &str) -> Result<DetailedAsset, CryptowatchError> {
        self.public_get(&endpoints::asset(asset)).await
    }

    /// Get all pairs, in no particular order.
    pub async fn get_pairs(&self) -> Result<Vec<Pair>, CryptowatchError> {
        self.public_get(endpoints::PAIRS).await
    }

    /// Get a pair with every market it trades on.
    ///
    /// # Arguments
    ///
    /// * `pair` - Pair symbol (e.g., "btcusd").
    pub async fn get_pair_markets(&self, pair: &str) -> Result<PairMarkets, CryptowatchError> {
        self.public_get(&endpoints::pair(pair)).await
    }

    /// Get all supported exchanges.
    pub async fn get_exchanges(&self) -> Result<Vec<Exchange>, CryptowatchError> {
        self.public_get(endpoints::EXCHANGES).await
    }

    /// Get a single exchange with its routes.
    ///
    /// # Arguments
    ///
    /// * `exchange` - Exchange symbol (e.g., "kraken").
    pub async fn get_exchange(&self, exchange: &str) -> Result<DetailedExchange, CryptowatchError> {
        self.public_get(&endpoints::exchange(exchange)).await
    }

    /// Get all supported markets.
    pub async fn get_markets(&self) -> Result<Vec<Market>, CryptowatchError> {
        self.public_get(endpoints::MARKETS).await
    }

    /// Get a single market with its routes.
    ///
    /// # Arguments
    ///
    /// * `exchange` - Exchange symbol (e.g., "gdax").
    /// * `pair` - Pair symbol (e.g., "ethbtc").
    pub async fn get_market(
        &self,
        exchange: &str,
        pair: &str,
    ) -> Result<DetailedMarket, CryptowatchError> {
        self.public_get(&endpoints::market(exchange, pair)).await
    }

    /// Get a market's last price.
    pub async fn get_market_price(&self, exchange: &str, pair: &str) -> Result<f64, CryptowatchError> {
        let response: types::MarketPrice = self
            .public_get(&endpoints::market_price(exchange, pair))
            .await?;
        Ok(response.price)
    }

    /// Get a market's last price and statistics over a 24 hour sliding window.
    pub async fn get_market_summary(
        &self,
        exchange: &str,
        pair: &str,
    ) -> Result<Summary, CryptowatchError> {
        self.public_get(&endpoints::market_summary(exchange, pair))
            .await
    }

    /// Get a market's most recent trades, oldest first.
    pub async fn get_trades(&self, exchange: &str, pair: &str) -> Result<Vec<Trade>, CryptowatchError> {
        self.public_get(&endpoints::market_trades(exchange, pair))
            .await
    }

    /// Get a market's order book.
    pub async fn get_order_book(
        &self,
        exchange: &str,
        pair: &str,
    ) -> Result<OrderBook, CryptowatchError> {
        self.public_get(&endpoints::market_order_book(exchange, pair))
            .await
    }

    /// Get a market's OHLC candlestick data for every period.
    pub async fn get_ohlc(&self, exchange: &str, pair: &str) -> Result<Ohlc, CryptowatchError> {
        self.public_get(&endpoints::market_ohlc(exchange, pair))
            .await
    }

    /// Get the last price of every supported market.
    ///
    /// Some values may be a few seconds out of date.
    pub async fn get_aggregate_prices(&self) -> Result<AggregatePrices, CryptowatchError> {
        self.public_get(endpoints::AGGREGATE_PRICES).await
    }

    /// Get the summary of every supported market.
    ///
    /// Some values may be a few seconds out of date.
    pub async fn get_aggregate_summaries(&self) -> Result<AggregateSummaries, CryptowatchError> {
        self.public_get(endpoints::AGGREGATE_SUMMARIES).await
    }
}
