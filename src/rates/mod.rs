//! Fiat-to-fiat reference-rate client.
//!
//! Queries the RapidAPI currency-exchange endpoint for a fixed quantity of
//! 1.0 unit. The upstream replies with a bare decimal in the body.

mod types;
pub use types::ReferenceRate;

use crate::common::{RouteScannerError, create_http_client_with_headers, is_supported_fiat};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};

const RATE_API_URL: &str = "https://currency-exchange.p.rapidapi.com/exchange";
const RATE_API_HOST: &str = "currency-exchange.p.rapidapi.com";

/// Anything that can quote a fiat pair.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn exchange_rate(&self, from: &str, to: &str)
    -> Result<ReferenceRate, RouteScannerError>;
}

/// Explicit client configuration; the API key comes from the environment at
/// construction time, never from ambient state afterwards.
#[derive(Debug, Clone)]
pub struct RateConfig {
    pub api_url: String,
    pub api_host: String,
    pub api_key: String,
    pub timeout: std::time::Duration,
}

impl RateConfig {
    /// Reads `RAPIDAPI_KEY`. Missing key leaves requests unauthenticated and
    /// the upstream will reject them, which surfaces as `UpstreamUnavailable`.
    pub fn from_env() -> Self {
        Self {
            api_url: RATE_API_URL.to_string(),
            api_host: RATE_API_HOST.to_string(),
            api_key: std::env::var("RAPIDAPI_KEY").unwrap_or_default(),
            timeout: std::time::Duration::from_secs(7),
        }
    }
}

pub struct CurrencyExchangeApi {
    client: reqwest::Client,
    config: RateConfig,
}

impl CurrencyExchangeApi {
    pub fn new() -> Self {
        Self::with_config(RateConfig::from_env())
    }

    pub fn with_config(config: RateConfig) -> Self {
        let mut headers = HeaderMap::new();
        if let Ok(key) = HeaderValue::from_str(&config.api_key) {
            headers.insert("X-RapidAPI-Key", key);
        }
        if let Ok(host) = HeaderValue::from_str(&config.api_host) {
            headers.insert("X-RapidAPI-Host", host);
        }
        let client = create_http_client_with_headers(config.timeout, headers);
        Self { client, config }
    }
}

impl Default for CurrencyExchangeApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateSource for CurrencyExchangeApi {
    async fn exchange_rate(
        &self,
        from: &str,
        to: &str,
    ) -> Result<ReferenceRate, RouteScannerError> {
        let from = from.to_uppercase();
        let to = to.to_uppercase();

        if !is_supported_fiat(&from) || !is_supported_fiat(&to) {
            return Ok(ReferenceRate::unavailable(from, to));
        }
        if from == to {
            return Ok(ReferenceRate {
                from,
                to,
                rate: Some(1.0),
                success: true,
            });
        }

        let response = self
            .client
            .get(&self.config.api_url)
            .query(&[("from", from.as_str()), ("to", to.as_str()), ("q", "1.0")])
            .send()
            .await?
            .error_for_status()?;
        let body = response.text().await?;

        // A well-formed reply is a bare decimal; anything else leaves the
        // rate unset with success false.
        match body.trim().parse::<f64>() {
            Ok(rate) => Ok(ReferenceRate {
                from,
                to,
                rate: Some(rate),
                success: true,
            }),
            Err(_) => Ok(ReferenceRate::unavailable(from, to)),
        }
    }
}
