//! Example: Navigating the API through the routes it returns.
//!
//! Run with: cargo run --example follow_routes

use cryptowatch_api_client::rest::CryptowatchRestClient;
use cryptowatch_api_client::rest::public::{DetailedMarket, Summary};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = CryptowatchRestClient::new();

    let pair = client.get_pair_markets("ethbtc").await?;
    println!("{} trades on {} markets", pair.symbol, pair.markets.len());

    for listing in pair.markets.iter().filter(|m| m.active).take(3) {
        let market: DetailedMarket = client.get_route(&listing.route).await?;
        let summary: Summary = client.get_route(&market.routes.summary).await?;
        println!(
            "  {}: last {} (24h volume {})",
            market.exchange, summary.price.last, summary.volume
        );
    }

    Ok(())
}
