use cryptowatch_api_client::rest::CryptowatchRestClient;

fn live_tests_enabled() -> bool {
    std::env::var("CRYPTOWATCH_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_market_data_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = CryptowatchRestClient::new();

    let markets = client.get_markets().await?;
    assert!(!markets.is_empty());

    let market = client.get_market("kraken", "btcusd").await?;
    assert_eq!(market.exchange, "kraken");

    let price = client.get_market_price("kraken", "btcusd").await?;
    assert!(price > 0.0);

    let book = client.get_order_book("kraken", "btcusd").await?;
    assert!(!book.asks.is_empty());

    Ok(())
}
