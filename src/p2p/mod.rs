//! Binance P2P advertisement-book client.
//!
//! One POST per call against the public `bapi/c2c` advertisement endpoints,
//! normalized into [`OrderBookPage`] records. The [`OrderBookSource`] trait is
//! the seam the route scanner (and tests) consume.

mod types;
pub use types::{
    Advertisement, FilterConditionsData, FilterConditionsResponse, OrderBookPage, P2pSearchItem,
    P2pSearchResponse, RawAdv, RawAdvertiser, RawTradeMethod, TradeDirection,
};

use crate::common::{RouteScannerError, create_http_client_with_headers};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};

const P2P_API_BASE: &str = "https://p2p.binance.com/bapi/c2c/v2";

/// Parameters for one advertisement search page.
#[derive(Debug, Clone)]
pub struct OrderBookQuery {
    pub fiat: String,
    pub asset: String,
    pub direction: TradeDirection,
    /// Accepted payment-method identifiers; empty means no filter.
    pub pay_types: Vec<String>,
    /// Required transaction amount, denominated in `fiat`.
    pub trans_amount: Option<u64>,
    /// 1-based page number.
    pub page: u32,
    pub rows: u32,
}

impl OrderBookQuery {
    pub fn new(fiat: &str, asset: &str, direction: TradeDirection) -> Self {
        Self {
            fiat: fiat.to_uppercase(),
            asset: asset.to_uppercase(),
            direction,
            pay_types: Vec::new(),
            trans_amount: None,
            page: 1,
            rows: 10,
        }
    }
}

/// Anything that can serve advertisement-book pages.
#[async_trait]
pub trait OrderBookSource: Send + Sync {
    async fn search_advs(&self, query: &OrderBookQuery)
    -> Result<OrderBookPage, RouteScannerError>;
}

/// Explicit client configuration; never reached via ambient state.
#[derive(Debug, Clone)]
pub struct P2pConfig {
    /// Base for the `friendly` API segment (advertisement search).
    pub friendly_api_base: String,
    /// Base for the `public` API segment (filter conditions).
    pub public_api_base: String,
    pub timeout: std::time::Duration,
}

impl Default for P2pConfig {
    fn default() -> Self {
        Self {
            friendly_api_base: format!("{}/friendly/c2c/adv", P2P_API_BASE),
            public_api_base: format!("{}/public/c2c/adv", P2P_API_BASE),
            timeout: crate::common::DEFAULT_TIMEOUT,
        }
    }
}

pub struct BinanceP2p {
    client: reqwest::Client,
    config: P2pConfig,
}

impl BinanceP2p {
    pub fn new() -> Self {
        Self::with_config(P2pConfig::default())
    }

    pub fn with_config(config: P2pConfig) -> Self {
        let client = create_http_client_with_headers(config.timeout, browser_headers());
        Self { client, config }
    }

    /// Payment-method identifiers available for P2P trading in `fiat`.
    pub async fn paytypes(&self, fiat: &str) -> Result<Vec<String>, RouteScannerError> {
        let url = format!("{}/filter-conditions", self.config.public_api_base);
        let body = serde_json::json!({ "fiat": fiat.to_uppercase() });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;
        let parsed: FilterConditionsResponse = serde_json::from_str(&text)?;

        let paytypes: Vec<String> = parsed
            .data
            .map(|data| {
                data.trade_methods
                    .into_iter()
                    .filter_map(|method| method.identifier)
                    .collect()
            })
            .unwrap_or_default();

        if paytypes.is_empty() {
            return Err(RouteScannerError::MalformedResponse(format!(
                "no payment methods listed for fiat {}",
                fiat.to_uppercase()
            )));
        }
        Ok(paytypes)
    }
}

impl Default for BinanceP2p {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderBookSource for BinanceP2p {
    async fn search_advs(
        &self,
        query: &OrderBookQuery,
    ) -> Result<OrderBookPage, RouteScannerError> {
        let url = format!("{}/search", self.config.friendly_api_base);
        // tradeType goes upstream verbatim; the advertiser-perspective flip
        // happens during normalization of each returned record.
        let body = serde_json::json!({
            "page": query.page,
            "rows": query.rows,
            "payTypes": query.pay_types,
            "transAmount": query.trans_amount,
            "asset": query.asset,
            "fiat": query.fiat,
            "tradeType": query.direction,
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        let text = response.text().await?;
        let parsed: P2pSearchResponse = serde_json::from_str(&text)?;

        OrderBookPage::from_search(parsed)
    }
}

/// Browser-like headers; the P2P endpoints reject anonymous clients.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert("Accept", HeaderValue::from_static("*/*"));
    headers.insert(
        "Accept-Language",
        HeaderValue::from_static("en-GB,en-US;q=0.9,en;q=0.8"),
    );
    headers.insert("Cache-Control", HeaderValue::from_static("no-cache"));
    headers.insert("Pragma", HeaderValue::from_static("no-cache"));
    headers.insert(
        "Origin",
        HeaderValue::from_static("https://p2p.binance.com"),
    );
    headers.insert(
        "User-Agent",
        HeaderValue::from_static(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:88.0) Gecko/20100101 Firefox/88.0",
        ),
    );
    headers
}
