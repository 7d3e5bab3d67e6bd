//! Example: Fetching market data from Cryptowatch.
//!
//! This example walks the public REST API from assets down to a single
//! market's trades, order book and candles.
//!
//! Run with: cargo run --example market_data

use cryptowatch_api_client::OhlcPeriod;
use cryptowatch_api_client::rest::CryptowatchRestClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = CryptowatchRestClient::new();

    println!("=== Assets ===");
    let assets = client.get_assets().await?;
    for asset in assets.iter().take(5) {
        println!("{}: {} (fiat: {})", asset.symbol, asset.name, asset.fiat);
    }

    println!("\n=== BTC Markets ===");
    let btc = client.get_asset_markets("btc").await?;
    println!(
        "{} is base in {} markets and quote in {}",
        btc.name,
        btc.markets.base.len(),
        btc.markets.quote.len()
    );

    println!("\n=== Exchanges ===");
    let exchanges = client.get_exchanges().await?;
    for exchange in exchanges.iter().filter(|e| e.active).take(5) {
        println!("{} ({})", exchange.name, exchange.symbol);
    }

    println!("\n=== Summary (kraken:btcusd) ===");
    let summary = client.get_market_summary("kraken", "btcusd").await?;
    println!("Last: {}", summary.price.last);
    println!("High: {} Low: {}", summary.price.high, summary.price.low);
    println!(
        "Change: {:.2}% ({})",
        summary.price.change.percentage * 100.0,
        summary.price.change.absolute
    );
    println!("Volume: {}", summary.volume);

    println!("\n=== Recent Trades (kraken:btcusd) ===");
    let trades = client.get_trades("kraken", "btcusd").await?;
    for trade in trades.iter().rev().take(5) {
        println!(
            "  #{} {} @ {} (time: {})",
            trade.id, trade.amount, trade.price, trade.timestamp
        );
    }

    println!("\n=== Order Book (kraken:btcusd) ===");
    let book = client.get_order_book("kraken", "btcusd").await?;
    println!("Asks (lowest first):");
    for ask in book.asks.iter().take(3) {
        println!("  {} @ {}", ask.amount, ask.price);
    }
    println!("Bids (highest first):");
    for bid in book.bids.iter().take(3) {
        println!("  {} @ {}", bid.amount, bid.price);
    }

    println!("\n=== OHLC (kraken:btcusd, 1 hour) ===");
    let ohlc = client.get_ohlc("kraken", "btcusd").await?;
    if let Some(candles) = ohlc.period(OhlcPeriod::Hour1) {
        for candle in candles.iter().rev().take(3) {
            println!(
                "  Close time: {}, O: {}, H: {}, L: {}, C: {}, Vol: {}",
                candle.close_time, candle.open, candle.high, candle.low, candle.close, candle.volume
            );
        }
    }

    println!("\n=== Aggregate Prices ===");
    let prices = client.get_aggregate_prices().await?;
    for (market, price) in prices.iter_markets().take(5) {
        println!("  {}: {}", market, price);
    }

    println!("\nDone!");
    Ok(())
}
