//! Cryptowatch REST API client implementation.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, RETRY_AFTER, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use time::OffsetDateTime;
use url::Url;

use crate::error::{ApiError, CryptowatchError};
use crate::rest::endpoints::CRYPTOWATCH_BASE_URL;

/// The Cryptowatch REST API client.
///
/// Every endpoint method issues a single GET request, unwraps the response
/// envelope and decodes the `result` payload. The client holds no state
/// besides its configuration and can be cloned freely.
///
/// # Example
///
/// ```rust,no_run
/// use cryptowatch_api_client::rest::CryptowatchRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CryptowatchRestClient::new();
///
///     let price = client.get_market_price("kraken", "btcusd").await?;
///     println!("BTC/USD on Kraken: {}", price);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CryptowatchRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
}

impl CryptowatchRestClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> CryptowatchRestClientBuilder {
        CryptowatchRestClientBuilder::new()
    }

    /// The base URL every endpoint path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request to an endpoint path and decode its `result`.
    pub(crate) async fn public_get<T>(&self, endpoint: &str) -> Result<T, CryptowatchError>
    where
        T: DeserializeOwned,
    {
        let result = self.get_raw(endpoint).await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Make a GET request to an endpoint path and return the raw `result` value.
    ///
    /// Useful when the API has added fields the typed responses do not cover yet.
    pub async fn get_raw(&self, endpoint: &str) -> Result<Value, CryptowatchError> {
        let url = format!("{}{}", self.base_url, endpoint);
        self.fetch_result(&url).await
    }

    /// Follow a `route` returned inline by the API and decode its `result`.
    ///
    /// Routes are absolute URLs such as `https://api.cryptowat.ch/markets/kraken/btcusd`.
    /// Only their path and query are used: the request goes to the client's
    /// configured base URL, so a client aimed at a mirror or mock server stays
    /// there.
    ///
    /// ```rust,no_run
    /// use cryptowatch_api_client::rest::CryptowatchRestClient;
    /// use cryptowatch_api_client::rest::public::Summary;
    ///
    /// # async fn run() -> Result<(), cryptowatch_api_client::CryptowatchError> {
    /// let client = CryptowatchRestClient::new();
    /// let market = client.get_market("kraken", "btcusd").await?;
    /// let summary: Summary = client.get_route(&market.routes.summary).await?;
    /// println!("24h volume: {}", summary.volume);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_route<T>(&self, route: &str) -> Result<T, CryptowatchError>
    where
        T: DeserializeOwned,
    {
        let url = self.rebase_route(route)?;
        let result = self.fetch_result(url.as_str()).await?;
        Ok(serde_json::from_value(result)?)
    }

    fn rebase_route(&self, route: &str) -> Result<Url, CryptowatchError> {
        let route = Url::parse(route)?;
        let mut rebased = format!("{}{}", self.base_url, route.path());
        if let Some(query) = route.query() {
            rebased.push('?');
            rebased.push_str(query);
        }
        Ok(Url::parse(&rebased)?)
    }

    async fn fetch_result(&self, url: &str) -> Result<Value, CryptowatchError> {
        let response = self.http_client.get(url).send().await?;
        parse_response(response).await
    }
}

impl Default for CryptowatchRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CryptowatchRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptowatchRestClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Parse a response from the Cryptowatch API.
///
/// The body must be a JSON object whatever the status. A 200 yields its
/// `result` field, a 429 a rate limit error and anything else the envelope's
/// `error` message.
async fn parse_response(response: reqwest::Response) -> Result<Value, CryptowatchError> {
    let status = response.status();
    let retry_after = retry_after_secs(response.headers());
    let body = response.text().await?;

    let mut envelope: Map<String, Value> = serde_json::from_str(&body)?;
    tracing::debug!(status = status.as_u16(), "Cryptowatch response");

    match status {
        StatusCode::TOO_MANY_REQUESTS => {
            let reset_in_minutes = match retry_after {
                Some(secs) => u32::try_from(secs.div_ceil(60)).unwrap_or(u32::MAX),
                None => minutes_until_reset(OffsetDateTime::now_utc()),
            };
            Err(CryptowatchError::RateLimitExceeded {
                reset_in_minutes,
                retry_after_secs: retry_after,
            })
        }
        StatusCode::OK => {
            if let Some(allowance) = envelope.get("allowance") {
                match serde_json::from_value::<Allowance>(allowance.clone()) {
                    Ok(allowance) => tracing::debug!(
                        cost = allowance.cost,
                        remaining = allowance.remaining,
                        "Cryptowatch allowance"
                    ),
                    Err(e) => tracing::debug!("Unrecognized allowance: {}", e),
                }
            }
            envelope.remove("result").ok_or_else(|| {
                CryptowatchError::InvalidResponse("Response missing 'result' field".to_string())
            })
        }
        other => Err(CryptowatchError::Api(ApiError::from_envelope(
            other.as_u16(),
            &envelope,
        ))),
    }
}

/// Minutes left until the hourly allowance resets, judged by the wall clock.
///
/// Only used when the server does not send `Retry-After`.
pub(crate) fn minutes_until_reset(now: OffsetDateTime) -> u32 {
    60 - u32::from(now.minute())
}

fn retry_after_secs(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

/// Request cost accounting reported next to `result`.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Allowance {
    cost: f64,
    remaining: f64,
}

/// Builder for [`CryptowatchRestClient`].
pub struct CryptowatchRestClientBuilder {
    base_url: String,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    max_retries: u32,
}

impl CryptowatchRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: CRYPTOWATCH_BASE_URL.to_string(),
            user_agent: None,
            timeout: None,
            max_retries: 0,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a total timeout per request. No timeout is applied by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Retry transient failures up to `retries` times. Disabled by default.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    pub fn build(self) -> CryptowatchRestClient {
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("cryptowatch-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("cryptowatch-api-client"));
        headers.insert(USER_AGENT, header_value);

        let mut reqwest_builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let reqwest_client = reqwest_builder
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(self.max_retries);

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        CryptowatchRestClient {
            http_client: client,
            base_url: self.base_url,
        }
    }
}

impl Default for CryptowatchRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
