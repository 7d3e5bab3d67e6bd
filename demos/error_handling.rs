//! Example: Telling Cryptowatch errors apart.
//!
//! Run with: cargo run --example error_handling

use cryptowatch_api_client::CryptowatchError;
use cryptowatch_api_client::rest::CryptowatchRestClient;

#[tokio::main]
async fn main() {
    let client = CryptowatchRestClient::new();

    match client.get_market("kraken", "notapair").await {
        Ok(market) => println!("Unexpectedly found market: {:?}", market),
        Err(CryptowatchError::Api(api)) if api.is_not_found() => {
            println!("Not found ({}): {}", api.status, api.message);
        }
        Err(CryptowatchError::RateLimitExceeded {
            reset_in_minutes, ..
        }) => {
            println!("Out of allowance, try again in {} minutes", reset_in_minutes);
        }
        Err(err) if err.is_transport() => println!("Network problem: {}", err),
        Err(err) if err.is_decode() => println!("Unexpected response: {}", err),
        Err(err) => println!("Other error: {}", err),
    }
}
