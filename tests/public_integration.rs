use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cryptowatch_api_client::rest::CryptowatchRestClient;
use cryptowatch_api_client::rest::public::{OrderBookEntry, Summary, Trade};
use cryptowatch_api_client::{MarketKey, OhlcPeriod};

fn build_client(server: &MockServer) -> CryptowatchRestClient {
    CryptowatchRestClient::builder().base_url(server.uri()).build()
}

async fn mount_result(server: &MockServer, route: &str, result: serde_json::Value) {
    let response = serde_json::json!({
        "result": result,
        "allowance": { "cost": 0.005, "remaining": 9.995 }
    });

    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_assets() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/assets",
        serde_json::json!([
            { "symbol": "btc", "name": "Bitcoin", "fiat": false, "route": "https://api.cryptowat.ch/assets/btc" },
            { "symbol": "usd", "name": "United States dollar", "fiat": true, "route": "https://api.cryptowat.ch/assets/usd" }
        ]),
    )
    .await;

    let client = build_client(&server);
    let assets = client.get_assets().await.unwrap();
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].symbol, "btc");
    assert!(assets[1].fiat);
}

#[tokio::test]
async fn test_get_asset_markets_path() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/assets/btc",
        serde_json::json!({
            "id": 60,
            "symbol": "btc",
            "name": "Bitcoin",
            "fiat": false,
            "markets": {
                "base": [
                    { "exchange": "bitfinex", "pair": "btcusd", "active": true, "route": "https://api.cryptowat.ch/markets/bitfinex/btcusd" }
                ],
                "quote": [
                    { "exchange": "gdax", "pair": "ethbtc", "active": true, "route": "https://api.cryptowat.ch/markets/gdax/ethbtc" }
                ]
            }
        }),
    )
    .await;

    let client = build_client(&server);
    let asset = client.get_asset_markets("btc").await.unwrap();
    assert_eq!(asset.id, 60);
    assert_eq!(asset.markets.base[0].pair, "btcusd");
    assert_eq!(asset.markets.quote[0].exchange, "gdax");
}

#[tokio::test]
async fn test_get_pairs() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/pairs",
        serde_json::json!([{
            "symbol": "btcusd",
            "id": 9,
            "base": { "symbol": "btc", "name": "Bitcoin", "isFiat": false, "route": "https://api.cryptowat.ch/assets/btc" },
            "quote": { "symbol": "usd", "name": "United States dollar", "isFiat": true, "route": "https://api.cryptowat.ch/assets/usd" },
            "route": "https://api.cryptowat.ch/pairs/btcusd"
        }]),
    )
    .await;

    let client = build_client(&server);
    let pairs = client.get_pairs().await.unwrap();
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].id, 9);
    assert_eq!(pairs[0].base.symbol, "btc");
    assert!(pairs[0].quote.is_fiat);
}

#[tokio::test]
async fn test_get_pair_markets() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/pairs/ethbtc",
        serde_json::json!({
            "symbol": "ethbtc",
            "id": 21,
            "base": { "symbol": "eth", "name": "Ethereum", "isFiat": false },
            "quote": { "symbol": "btc", "name": "Bitcoin", "isFiat": false },
            "route": "https://api.cryptowat.ch/pairs/ethbtc",
            "markets": [
                { "exchange": "gdax", "pair": "ethbtc", "active": true, "route": "https://api.cryptowat.ch/markets/gdax/ethbtc" },
                { "exchange": "kraken", "pair": "ethbtc", "active": false, "route": "https://api.cryptowat.ch/markets/kraken/ethbtc" }
            ]
        }),
    )
    .await;

    let client = build_client(&server);
    let pair = client.get_pair_markets("ethbtc").await.unwrap();
    assert_eq!(pair.symbol, "ethbtc");
    assert_eq!(pair.markets.len(), 2);
    assert!(!pair.markets[1].active);
}

#[tokio::test]
async fn test_get_exchanges() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/exchanges",
        serde_json::json!([
            { "symbol": "kraken", "name": "Kraken", "active": true, "route": "https://api.cryptowat.ch/exchanges/kraken" }
        ]),
    )
    .await;

    let client = build_client(&server);
    let exchanges = client.get_exchanges().await.unwrap();
    assert_eq!(exchanges[0].name, "Kraken");
    assert!(exchanges[0].active);
}

#[tokio::test]
async fn test_get_exchange() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/exchanges/kraken",
        serde_json::json!({
            "id": 4,
            "name": "Kraken",
            "active": true,
            "routes": { "markets": "https://api.cryptowat.ch/markets/kraken" }
        }),
    )
    .await;

    let client = build_client(&server);
    let exchange = client.get_exchange("kraken").await.unwrap();
    assert_eq!(exchange.id, 4);
    assert_eq!(exchange.routes.markets, "https://api.cryptowat.ch/markets/kraken");
}

#[tokio::test]
async fn test_get_markets() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/markets",
        serde_json::json!([
            { "exchange": "gdax", "pair": "ethbtc", "active": true, "route": "https://api.cryptowat.ch/markets/gdax/ethbtc" }
        ]),
    )
    .await;

    let client = build_client(&server);
    let markets = client.get_markets().await.unwrap();
    assert_eq!(markets[0].key(), MarketKey::new("gdax", "ethbtc"));
}

#[tokio::test]
async fn test_get_market_path() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/markets/gdax/ethbtc",
        serde_json::json!({
            "exchange": "gdax",
            "pair": "ethbtc",
            "active": true,
            "routes": {
                "price": "https://api.cryptowat.ch/markets/gdax/ethbtc/price",
                "summary": "https://api.cryptowat.ch/markets/gdax/ethbtc/summary",
                "orderbook": "https://api.cryptowat.ch/markets/gdax/ethbtc/orderbook",
                "trades": "https://api.cryptowat.ch/markets/gdax/ethbtc/trades",
                "ohlc": "https://api.cryptowat.ch/markets/gdax/ethbtc/ohlc"
            }
        }),
    )
    .await;

    let client = build_client(&server);
    let market = client.get_market("gdax", "ethbtc").await.unwrap();
    assert_eq!(market.exchange, "gdax");
    assert_eq!(
        market.routes.orderbook,
        "https://api.cryptowat.ch/markets/gdax/ethbtc/orderbook"
    );
}

#[tokio::test]
async fn test_get_market_price() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/markets/gdax/ethbtc/price",
        serde_json::json!({ "price": 6321.5 }),
    )
    .await;

    let client = build_client(&server);
    let price = client.get_market_price("gdax", "ethbtc").await.unwrap();
    assert_eq!(price, 6321.5);
}

#[tokio::test]
async fn test_get_market_summary() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/markets/gdax/ethbtc/summary",
        serde_json::json!({
            "price": {
                "last": 6321.5,
                "high": 6400.0,
                "low": 6200.0,
                "change": { "percentage": 0.0125, "absolute": 78.0 }
            },
            "volume": 1234.5,
            "volumeQuote": 7800000.0
        }),
    )
    .await;

    let client = build_client(&server);
    let summary: Summary = client.get_market_summary("gdax", "ethbtc").await.unwrap();
    assert_eq!(summary.price.last, 6321.5);
    assert_eq!(summary.price.change.percentage, 0.0125);
    assert_eq!(summary.volume, 1234.5);
    assert_eq!(summary.volume_quote, 7800000.0);
}

#[tokio::test]
async fn test_get_trades() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/markets/gdax/ethbtc/trades",
        serde_json::json!([[1, 1500000000, 6300.0, 0.5]]),
    )
    .await;

    let client = build_client(&server);
    let trades = client.get_trades("gdax", "ethbtc").await.unwrap();
    assert_eq!(
        trades,
        vec![Trade {
            id: 1,
            timestamp: 1_500_000_000,
            price: 6300.0,
            amount: 0.5,
        }]
    );
}

#[tokio::test]
async fn test_get_trades_with_float_columns() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/markets/gdax/ethbtc/trades",
        serde_json::json!([[1.0, 1500000000.0, 6300.0, 0.5], [2, 1500000001, 6301.0, 0.25]]),
    )
    .await;

    let client = build_client(&server);
    let trades = client.get_trades("gdax", "ethbtc").await.unwrap();
    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].id, 1);
    assert_eq!(trades[0].timestamp, 1_500_000_000);
    assert_eq!(trades[1].id, 2);
    assert_eq!(trades[1].amount, 0.25);
}

#[tokio::test]
async fn test_get_order_book() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/markets/gdax/ethbtc/orderbook",
        serde_json::json!({ "asks": [[6325.0, 1.2]], "bids": [[6310.0, 0.8]] }),
    )
    .await;

    let client = build_client(&server);
    let book = client.get_order_book("gdax", "ethbtc").await.unwrap();
    assert_eq!(
        book.asks,
        vec![OrderBookEntry {
            price: 6325.0,
            amount: 1.2
        }]
    );
    assert_eq!(
        book.bids,
        vec![OrderBookEntry {
            price: 6310.0,
            amount: 0.8
        }]
    );
}

#[tokio::test]
async fn test_get_ohlc() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/markets/gdax/ethbtc/ohlc",
        serde_json::json!({
            "60": [
                [1500000060, 6300.0, 6305.0, 6298.0, 6302.0, 1.5],
                [1500000120, 6302.0, 6310.0, 6301.0, 6309.0, 2.25]
            ],
            "180": [
                [1500000180, 6300.0, 6310.0, 6298.0, 6309.0, 3.75]
            ]
        }),
    )
    .await;

    let client = build_client(&server);
    let ohlc = client.get_ohlc("gdax", "ethbtc").await.unwrap();
    assert_eq!(ohlc.periods(), vec![OhlcPeriod::Min1, OhlcPeriod::Min3]);

    let minutes = ohlc.period(OhlcPeriod::Min1).unwrap();
    assert_eq!(minutes.len(), 2);
    assert_eq!(minutes[1].close_time, 1_500_000_120);
    assert_eq!(minutes[1].close, 6309.0);
    assert_eq!(minutes[1].volume, 2.25);
    assert_eq!(ohlc.series["180"][0].open, 6300.0);
}

#[tokio::test]
async fn test_get_aggregate_prices() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/markets/prices",
        serde_json::json!({ "gdax:ethbtc": 0.075, "kraken:btcusd": 6321.5 }),
    )
    .await;

    let client = build_client(&server);
    let prices = client.get_aggregate_prices().await.unwrap();
    assert_eq!(prices.prices.len(), 2);
    assert_eq!(prices.get("kraken", "btcusd"), Some(6321.5));
}

#[tokio::test]
async fn test_get_aggregate_summaries() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/markets/summaries",
        serde_json::json!({
            "kraken:btcusd": {
                "price": { "last": 6321.5, "high": 6400.0, "low": 6200.0, "change": { "percentage": 0.01, "absolute": 63.0 } },
                "volume": 900.0
            }
        }),
    )
    .await;

    let client = build_client(&server);
    let summaries = client.get_aggregate_summaries().await.unwrap();
    let summary = summaries.get("kraken", "btcusd").unwrap();
    assert_eq!(summary.price.high, 6400.0);
    assert_eq!(summary.volume, 900.0);
}

#[tokio::test]
async fn test_get_route_follows_inline_link() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/markets/kraken/btcusd/price",
        serde_json::json!({ "price": 6321.5 }),
    )
    .await;

    #[derive(serde::Deserialize)]
    struct Price {
        price: f64,
    }

    let client = build_client(&server);
    let route = format!("{}/markets/kraken/btcusd/price", server.uri());
    let price: Price = client.get_route(&route).await.unwrap();
    assert_eq!(price.price, 6321.5);
}

#[tokio::test]
async fn test_get_route_stays_on_configured_server() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/markets/kraken/btcusd/summary",
        serde_json::json!({ "price": { "last": 6321.5 }, "volume": 900.0 }),
    )
    .await;

    let client = build_client(&server);
    let summary: Summary = client
        .get_route("https://api.cryptowat.ch/markets/kraken/btcusd/summary")
        .await
        .unwrap();
    assert_eq!(summary.price.last, 6321.5);
    assert_eq!(summary.volume, 900.0);
}

#[tokio::test]
async fn test_get_route_rejects_relative_url() {
    let server = MockServer::start().await;
    let client = build_client(&server);
    let err = client
        .get_route::<serde_json::Value>("markets/kraken/btcusd")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        cryptowatch_api_client::CryptowatchError::Url(_)
    ));
}

#[tokio::test]
async fn test_get_raw_returns_result_value() {
    let server = MockServer::start().await;
    mount_result(
        &server,
        "/markets/kraken/btcusd/price",
        serde_json::json!({ "price": 6321.5, "newField": "kept" }),
    )
    .await;

    let client = build_client(&server);
    let raw = client.get_raw("/markets/kraken/btcusd/price").await.unwrap();
    assert_eq!(raw["newField"], "kept");
    assert_eq!(raw["price"], 6321.5);
}
