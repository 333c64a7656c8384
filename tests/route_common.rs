//! Shared fixtures for the deterministic route-scanner tests.

use async_trait::async_trait;
use p2p_route_scanner_rs::{
    Advertisement, OrderBookPage, OrderBookQuery, OrderBookSource, RateSource, ReferenceRate,
    RouteScannerError, TradeDirection,
};
use std::collections::HashMap;
use std::sync::Mutex;

pub fn adv(
    asset: &str,
    fiat: &str,
    direction: TradeDirection,
    price: f64,
    quantity: f64,
) -> Advertisement {
    Advertisement {
        adv_no: format!("{}-{}-{}", asset, fiat, direction),
        direction,
        asset: asset.to_string(),
        fiat: fiat.to_string(),
        price,
        min_trans_amount: 100.0,
        max_trans_amount: 100_000.0,
        trade_methods: vec!["BANK".to_string()],
        tradable_quantity: quantity,
        advertiser_name: "maker".to_string(),
        month_order_count: 120,
        month_finish_rate: 0.98,
    }
}

pub fn page(advs: Vec<Advertisement>) -> OrderBookPage {
    OrderBookPage {
        total_count: advs.len() as u64,
        advs,
        success: true,
        timestamp: 1,
    }
}

pub fn empty_page() -> OrderBookPage {
    page(Vec::new())
}

/// In-memory advertisement book keyed by (fiat, asset, direction). Unknown
/// keys answer with an empty page; assets in `failing` answer with an error.
/// Every query is recorded for later inspection.
#[derive(Default)]
pub struct FixtureBook {
    pages: HashMap<(String, String, TradeDirection), OrderBookPage>,
    failing: Vec<String>,
    pub queries: Mutex<Vec<OrderBookQuery>>,
}

impl FixtureBook {
    pub fn with_page(
        mut self,
        fiat: &str,
        asset: &str,
        direction: TradeDirection,
        page: OrderBookPage,
    ) -> Self {
        self.pages
            .insert((fiat.to_string(), asset.to_string(), direction), page);
        self
    }

    pub fn with_failure(mut self, asset: &str) -> Self {
        self.failing.push(asset.to_string());
        self
    }
}

#[async_trait]
impl OrderBookSource for FixtureBook {
    async fn search_advs(
        &self,
        query: &OrderBookQuery,
    ) -> Result<OrderBookPage, RouteScannerError> {
        self.queries.lock().unwrap().push(query.clone());
        if self.failing.contains(&query.asset) {
            return Err(RouteScannerError::MalformedResponse(format!(
                "fixture failure for {}",
                query.asset
            )));
        }
        Ok(self
            .pages
            .get(&(query.fiat.clone(), query.asset.clone(), query.direction))
            .cloned()
            .unwrap_or_else(empty_page))
    }
}

/// Always quotes the same rate with success.
pub struct FixedRate(pub f64);

#[async_trait]
impl RateSource for FixedRate {
    async fn exchange_rate(
        &self,
        from: &str,
        to: &str,
    ) -> Result<ReferenceRate, RouteScannerError> {
        Ok(ReferenceRate {
            from: from.to_uppercase(),
            to: to.to_uppercase(),
            rate: Some(self.0),
            success: true,
        })
    }
}

/// Always answers "rate unavailable" without erroring.
pub struct UnavailableRate;

#[async_trait]
impl RateSource for UnavailableRate {
    async fn exchange_rate(
        &self,
        from: &str,
        to: &str,
    ) -> Result<ReferenceRate, RouteScannerError> {
        Ok(ReferenceRate::unavailable(
            from.to_uppercase(),
            to.to_uppercase(),
        ))
    }
}
