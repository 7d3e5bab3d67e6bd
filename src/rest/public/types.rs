//! Types for the Cryptowatch market-data endpoints.
//!
//! Every struct tolerates missing fields (they default to zero values) and
//! ignores fields it does not know about.

use std::collections::HashMap;

use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};
use time::OffsetDateTime;

use crate::types::serde_helpers::numeric_row;
use crate::types::{MarketKey, OhlcPeriod};

/// A tradable currency or token.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Asset {
    /// Asset symbol (e.g. "btc").
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Whether this is a fiat currency.
    pub fiat: bool,
    /// Link to the asset resource.
    pub route: String,
}

/// A market an asset trades on.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetMarket {
    /// Exchange symbol.
    pub exchange: String,
    /// Pair symbol.
    pub pair: String,
    /// Whether the market is currently active.
    pub active: bool,
    /// Link to the market resource.
    pub route: String,
}

/// Markets of an asset, split by the side the asset is on.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetMarkets {
    /// Markets with this asset as base.
    pub base: Vec<AssetMarket>,
    /// Markets with this asset as quote.
    pub quote: Vec<AssetMarket>,
}

/// An asset with the markets it trades on.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DetailedAsset {
    /// Asset ID.
    pub id: u64,
    /// Asset symbol.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Whether this is a fiat currency.
    pub fiat: bool,
    /// Markets by side.
    pub markets: AssetMarkets,
}

/// Base or quote side of a pair.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PairData {
    /// Asset symbol.
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Whether this is a fiat currency.
    #[serde(rename = "isFiat", alias = "fiat")]
    pub is_fiat: bool,
    /// Link to the asset resource.
    pub route: String,
}

/// A tradable base/quote combination.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Pair {
    /// Pair symbol (e.g. "btcusd").
    pub symbol: String,
    /// Pair ID.
    pub id: u64,
    /// Base asset.
    pub base: PairData,
    /// Quote asset.
    pub quote: PairData,
    /// Link to the pair resource.
    pub route: String,
}

/// A pair with the markets it trades on.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PairMarkets {
    /// Pair symbol.
    pub symbol: String,
    /// Pair ID.
    pub id: u64,
    /// Base asset.
    pub base: PairData,
    /// Quote asset.
    pub quote: PairData,
    /// Link to the pair resource.
    pub route: String,
    /// Markets listing this pair.
    pub markets: Vec<AssetMarket>,
}

/// A supported exchange.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Exchange {
    /// Exchange symbol (e.g. "kraken").
    pub symbol: String,
    /// Display name.
    pub name: String,
    /// Whether the exchange is currently active.
    pub active: bool,
    /// Link to the exchange resource.
    pub route: String,
}

/// Sub-resources of an exchange.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExchangeRoutes {
    /// Link to the exchange's markets.
    pub markets: String,
}

/// An exchange with its routes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DetailedExchange {
    /// Exchange ID.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Whether the exchange is currently active.
    pub active: bool,
    /// Exchange routes.
    pub routes: ExchangeRoutes,
}

/// A pair listed on an exchange.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Market {
    /// Exchange symbol.
    pub exchange: String,
    /// Pair symbol.
    pub pair: String,
    /// Whether the market is currently active.
    pub active: bool,
    /// Link to the market resource.
    pub route: String,
}

impl Market {
    /// The aggregate key of this market.
    pub fn key(&self) -> MarketKey {
        MarketKey::new(&self.exchange, &self.pair)
    }
}

/// Sub-resources of a market.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarketRoutes {
    /// Link to the last price.
    pub price: String,
    /// Link to the 24h summary.
    pub summary: String,
    /// Link to the order book.
    pub orderbook: String,
    /// Link to recent trades.
    pub trades: String,
    /// Link to OHLC candles.
    pub ohlc: String,
}

/// A market with its routes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DetailedMarket {
    /// Exchange symbol.
    pub exchange: String,
    /// Pair symbol.
    pub pair: String,
    /// Whether the market is currently active.
    pub active: bool,
    /// Market routes.
    pub routes: MarketRoutes,
}

/// Payload of the market price endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct MarketPrice {
    pub(crate) price: f64,
}

/// Price change over the summary window.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PriceChange {
    /// Relative change (0.01 is 1%).
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub percentage: f64,
    /// Absolute change in quote currency.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub absolute: f64,
}

/// Price statistics over the summary window.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SummaryPrice {
    /// Last traded price.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub last: f64,
    /// Highest price.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub high: f64,
    /// Lowest price.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub low: f64,
    /// Change since the window start.
    pub change: PriceChange,
}

/// Market statistics over a 24 hour sliding window.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Summary {
    /// Price statistics.
    pub price: SummaryPrice,
    /// Traded volume in base currency.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub volume: f64,
    /// Traded volume in quote currency.
    #[serde(rename = "volumeQuote")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub volume_quote: f64,
}

/// A single executed trade.
/// Format: [id, timestamp, price, amount]
///
/// Every column is read as a JSON number, integral or not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trade {
    /// Trade ID. Fractional parts are truncated, negative values become 0.
    pub id: u64,
    /// Unix timestamp in seconds, truncated toward zero.
    pub timestamp: i64,
    /// Trade price.
    pub price: f64,
    /// Traded amount in base currency.
    pub amount: f64,
}

impl Trade {
    /// Trade time, if the timestamp is in range.
    pub fn time(&self) -> Option<OffsetDateTime> {
        OffsetDateTime::from_unix_timestamp(self.timestamp).ok()
    }
}

impl<'de> Deserialize<'de> for Trade {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (f64, f64, f64, f64) = Deserialize::deserialize(deserializer)?;
        Ok(Trade {
            id: arr.0 as u64,
            timestamp: arr.1 as i64,
            price: arr.2,
            amount: arr.3,
        })
    }
}

/// Current order book of a market.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrderBook {
    /// Ask side, lowest price first.
    pub asks: Vec<OrderBookEntry>,
    /// Bid side, highest price first.
    pub bids: Vec<OrderBookEntry>,
    /// Sequence number of the snapshot.
    #[serde(rename = "seqNum")]
    pub seq_num: u64,
}

impl OrderBook {
    /// Lowest ask.
    pub fn best_ask(&self) -> Option<&OrderBookEntry> {
        self.asks.first()
    }

    /// Highest bid.
    pub fn best_bid(&self) -> Option<&OrderBookEntry> {
        self.bids.first()
    }
}

/// Single order book level.
/// Format: [price, amount]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderBookEntry {
    /// Price level.
    pub price: f64,
    /// Amount at price level.
    pub amount: f64,
}

impl<'de> Deserialize<'de> for OrderBookEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr: (f64, f64) = Deserialize::deserialize(deserializer)?;
        Ok(OrderBookEntry {
            price: arr.0,
            amount: arr.1,
        })
    }
}

/// OHLC candles keyed by period label (seconds, e.g. "3600").
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Ohlc {
    /// Candle series by period label.
    pub series: HashMap<String, Vec<Candle>>,
}

impl Ohlc {
    /// Candles for a period, if the response contains it.
    pub fn period(&self, period: OhlcPeriod) -> Option<&[Candle]> {
        self.series.get(&period.label()).map(Vec::as_slice)
    }

    /// Known periods present in the response, shortest first.
    pub fn periods(&self) -> Vec<OhlcPeriod> {
        let mut periods: Vec<OhlcPeriod> = self
            .series
            .keys()
            .filter_map(|label| label.parse().ok())
            .collect();
        periods.sort();
        periods
    }
}

/// Single OHLC candle.
/// Format: [close_time, open, high, low, close, volume, quote_volume?]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    /// Unix timestamp of the candle close, truncated toward zero.
    pub close_time: i64,
    /// Open price.
    pub open: f64,
    /// High price.
    pub high: f64,
    /// Low price.
    pub low: f64,
    /// Close price.
    pub close: f64,
    /// Volume in base currency.
    pub volume: f64,
    /// Volume in quote currency, when the API provides it.
    pub quote_volume: Option<f64>,
}

impl<'de> Deserialize<'de> for Candle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let row = numeric_row::deserialize(deserializer, 6)?;
        Ok(Candle {
            close_time: row[0] as i64,
            open: row[1],
            high: row[2],
            low: row[3],
            close: row[4],
            volume: row[5],
            quote_volume: row.get(6).copied(),
        })
    }
}

/// Last price of every market, keyed by `"exchange:pair"`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct AggregatePrices {
    /// Prices by raw market key.
    pub prices: HashMap<String, f64>,
}

impl AggregatePrices {
    /// Last price of a market.
    pub fn get(&self, exchange: &str, pair: &str) -> Option<f64> {
        lookup(&self.prices, exchange, pair).copied()
    }

    /// Prices with parsed keys. Keys that do not parse are skipped.
    pub fn iter_markets(&self) -> impl Iterator<Item = (MarketKey, f64)> + '_ {
        self.prices
            .iter()
            .filter_map(|(key, price)| Some((key.parse::<MarketKey>().ok()?, *price)))
    }
}

/// Summary of every market, keyed by `"exchange:pair"`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct AggregateSummaries {
    /// Summaries by raw market key.
    pub summaries: HashMap<String, Summary>,
}

impl AggregateSummaries {
    /// Summary of a market.
    pub fn get(&self, exchange: &str, pair: &str) -> Option<&Summary> {
        lookup(&self.summaries, exchange, pair)
    }

    /// Summaries with parsed keys. Keys that do not parse are skipped.
    pub fn iter_markets(&self) -> impl Iterator<Item = (MarketKey, &Summary)> + '_ {
        self.summaries
            .iter()
            .filter_map(|(key, summary)| Some((key.parse::<MarketKey>().ok()?, summary)))
    }
}

fn lookup<'a, V>(map: &'a HashMap<String, V>, exchange: &str, pair: &str) -> Option<&'a V> {
    let key = MarketKey::new(exchange, pair).to_string();
    map.get(&key)
        .or_else(|| map.get(&format!("market:{}", key)))
}
