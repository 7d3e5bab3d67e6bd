//! Common domain types for the Cryptowatch API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::serde_helpers::display_fromstr;

/// An exchange and pair combination, as used in aggregate endpoint keys.
///
/// Aggregate endpoints key their results as `"exchange:pair"`. The live API
/// also prefixes keys with `market:`; both forms parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarketKey {
    /// Exchange symbol (e.g. "kraken").
    pub exchange: String,
    /// Pair symbol (e.g. "btcusd").
    pub pair: String,
}

impl MarketKey {
    /// Create a new market key.
    pub fn new(exchange: impl Into<String>, pair: impl Into<String>) -> Self {
        Self {
            exchange: exchange.into(),
            pair: pair.into(),
        }
    }

    /// Check whether a raw aggregate key refers to this market.
    pub fn matches(&self, raw: &str) -> bool {
        raw.parse::<MarketKey>().is_ok_and(|key| &key == self)
    }
}

impl fmt::Display for MarketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.exchange, self.pair)
    }
}

impl FromStr for MarketKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("market:").unwrap_or(s);
        match s.split_once(':') {
            Some((exchange, pair))
                if !exchange.is_empty() && !pair.is_empty() && !pair.contains(':') =>
            {
                Ok(Self::new(exchange, pair))
            }
            _ => Err(format!("Invalid market key: {}", s)),
        }
    }
}

impl Serialize for MarketKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        display_fromstr::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for MarketKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        display_fromstr::deserialize(deserializer)
    }
}

/// OHLC candle period.
///
/// The OHLC endpoint keys each series by its period length in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OhlcPeriod {
    /// 1 minute
    Min1,
    /// 3 minutes
    Min3,
    /// 5 minutes
    Min5,
    /// 15 minutes
    Min15,
    /// 30 minutes
    Min30,
    /// 1 hour
    Hour1,
    /// 2 hours
    Hour2,
    /// 4 hours
    Hour4,
    /// 6 hours
    Hour6,
    /// 12 hours
    Hour12,
    /// 1 day
    Day1,
    /// 3 days
    Day3,
    /// 1 week
    Week1,
}

impl OhlcPeriod {
    /// All periods served by the API, shortest first.
    pub const ALL: [OhlcPeriod; 13] = [
        OhlcPeriod::Min1,
        OhlcPeriod::Min3,
        OhlcPeriod::Min5,
        OhlcPeriod::Min15,
        OhlcPeriod::Min30,
        OhlcPeriod::Hour1,
        OhlcPeriod::Hour2,
        OhlcPeriod::Hour4,
        OhlcPeriod::Hour6,
        OhlcPeriod::Hour12,
        OhlcPeriod::Day1,
        OhlcPeriod::Day3,
        OhlcPeriod::Week1,
    ];

    /// Period length in seconds.
    pub fn seconds(self) -> u32 {
        u32::from(self)
    }

    /// The key used for this period in OHLC responses (e.g. "3600").
    pub fn label(self) -> String {
        self.seconds().to_string()
    }
}

impl From<OhlcPeriod> for u32 {
    fn from(period: OhlcPeriod) -> u32 {
        match period {
            OhlcPeriod::Min1 => 60,
            OhlcPeriod::Min3 => 180,
            OhlcPeriod::Min5 => 300,
            OhlcPeriod::Min15 => 900,
            OhlcPeriod::Min30 => 1800,
            OhlcPeriod::Hour1 => 3600,
            OhlcPeriod::Hour2 => 7200,
            OhlcPeriod::Hour4 => 14400,
            OhlcPeriod::Hour6 => 21600,
            OhlcPeriod::Hour12 => 43200,
            OhlcPeriod::Day1 => 86400,
            OhlcPeriod::Day3 => 259200,
            OhlcPeriod::Week1 => 604800,
        }
    }
}

impl TryFrom<u32> for OhlcPeriod {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        OhlcPeriod::ALL
            .into_iter()
            .find(|period| period.seconds() == value)
            .ok_or_else(|| format!("Invalid OHLC period: {}", value))
    }
}

impl FromStr for OhlcPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let seconds: u32 = s
            .parse()
            .map_err(|_| format!("Invalid OHLC period: {}", s))?;
        OhlcPeriod::try_from(seconds)
    }
}

impl fmt::Display for OhlcPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.seconds())
    }
}
