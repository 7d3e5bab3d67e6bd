//! Cryptowatch REST API endpoint paths.
//!
//! Path arguments are substituted as given, without escaping.

/// Base URL for the Cryptowatch REST API.
pub const CRYPTOWATCH_BASE_URL: &str = "https://api.cryptowat.ch";

/// List all assets.
pub const ASSETS: &str = "/assets";
/// List all pairs.
pub const PAIRS: &str = "/pairs";
/// List all exchanges.
pub const EXCHANGES: &str = "/exchanges";
/// List all markets.
pub const MARKETS: &str = "/markets";
/// Last price of every market.
pub const AGGREGATE_PRICES: &str = "/markets/prices";
/// 24h summary of every market.
pub const AGGREGATE_SUMMARIES: &str = "/markets/summaries";

/// Single asset with its markets.
pub fn asset(asset: &str) -> String {
    format!("/assets/{}", asset)
}

/// Single pair with its markets.
pub fn pair(pair: &str) -> String {
    format!("/pairs/{}", pair)
}

/// Single exchange with its routes.
pub fn exchange(exchange: &str) -> String {
    format!("/exchanges/{}", exchange)
}

/// Single market with its routes.
pub fn market(exchange: &str, pair: &str) -> String {
    format!("/markets/{}/{}", exchange, pair)
}

/// Last price of a market.
pub fn market_price(exchange: &str, pair: &str) -> String {
    format!("{}/price", market(exchange, pair))
}

/// 24h summary of a market.
pub fn market_summary(exchange: &str, pair: &str) -> String {
    format!("{}/summary", market(exchange, pair))
}

/// Recent trades of a market.
pub fn market_trades(exchange: &str, pair: &str) -> String {
    format!("{}/trades", market(exchange, pair))
}

/// Order book of a market.
pub fn market_order_book(exchange: &str, pair: &str) -> String {
    format!("{}/orderbook", market(exchange, pair))
}

/// OHLC candles of a market.
pub fn market_ohlc(exchange: &str, pair: &str) -> String {
    format!("{}/ohlc", market(exchange, pair))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_argument_paths() {
        assert_eq!(asset("btc"), "/assets/btc");
        assert_eq!(pair("btcusd"), "/pairs/btcusd");
        assert_eq!(exchange("kraken"), "/exchanges/kraken");
    }

    #[test]
    fn test_market_paths() {
        assert_eq!(market("gdax", "ethbtc"), "/markets/gdax/ethbtc");
        assert_eq!(market_price("gdax", "ethbtc"), "/markets/gdax/ethbtc/price");
        assert_eq!(market_summary("gdax", "ethbtc"), "/markets/gdax/ethbtc/summary");
        assert_eq!(market_trades("gdax", "ethbtc"), "/markets/gdax/ethbtc/trades");
        assert_eq!(
            market_order_book("gdax", "ethbtc"),
            "/markets/gdax/ethbtc/orderbook"
        );
        assert_eq!(market_ohlc("gdax", "ethbtc"), "/markets/gdax/ethbtc/ohlc");
    }
}
