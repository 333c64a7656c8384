//! Best-exchange-way orchestration.
//!
//! For each supported asset, pull one buy-side page (fiat_1) and one
//! sell-side page (fiat_2), aggregate each side into a liquidity-weighted
//! price, and derive the implied cross rate plus its deviation from the
//! reference market rate.

mod types;
mod weighted;

pub use types::{ExchangeWayColumns, ExchangeWayRow, ExchangeWayTable};
pub use weighted::weighted_mean_price;

use crate::common::{ASSETS, RouteScannerError, is_supported_fiat};
use crate::p2p::{OrderBookQuery, OrderBookSource, TradeDirection};
use crate::rates::RateSource;
use futures::future::join_all;
use tracing::warn;

/// Parameters for one best-exchange-way evaluation.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub fiat_1: String,
    pub fiat_2: String,
    /// Payment-method filters for the fiat_1 buy side; empty means no filter.
    pub pay_types_1: Vec<String>,
    /// Payment-method filters for the fiat_2 sell side; empty means no filter.
    pub pay_types_2: Vec<String>,
    /// Required transaction amount, denominated in fiat_1.
    pub trans_amount: f64,
    /// Advertisements per page on each side.
    pub rows: u32,
}

pub struct RouteScanner;

impl RouteScanner {
    /// Evaluate every supported asset and build the columnar result table.
    ///
    /// The reference-rate fetch is fatal on failure since every row depends
    /// on it. Per-asset pipelines are isolated: a failed or empty fetch for
    /// one asset skips that asset and never aborts the others. Rows keep the
    /// `ASSETS` enumeration order regardless of fetch completion order.
    pub async fn best_exchange_way(
        order_books: &dyn OrderBookSource,
        rates: &dyn RateSource,
        request: &RouteRequest,
    ) -> Result<ExchangeWayTable, RouteScannerError> {
        let fiat_1 = request.fiat_1.to_uppercase();
        let fiat_2 = request.fiat_2.to_uppercase();
        for char_code in [&fiat_1, &fiat_2] {
            if !is_supported_fiat(char_code) {
                return Err(RouteScannerError::UnsupportedCurrency(char_code.clone()));
            }
        }

        // fiat_1-per-fiat_2 multiplier; every sell-side amount divides by it.
        let reference = rates.exchange_rate(&fiat_2, &fiat_1).await?;
        let rate = reference.rate.filter(|_| reference.success).ok_or_else(|| {
            RouteScannerError::MalformedResponse(format!(
                "no reference rate for {}/{}",
                fiat_1, fiat_2
            ))
        })?;
        if rate <= 0.0 || !rate.is_finite() {
            return Err(RouteScannerError::InvalidReferenceRate(rate));
        }

        // Sell side is denominated in fiat_2; the +1 rounds the converted
        // amount up so the sell page always covers the full buy amount.
        let buy_amount = request.trans_amount.floor() as u64;
        let sell_amount = (request.trans_amount / rate).floor() as u64 + 1;

        let evaluations = ASSETS.iter().map(|asset| {
            Self::evaluate_asset(
                order_books,
                asset,
                &fiat_1,
                &fiat_2,
                request,
                buy_amount,
                sell_amount,
                rate,
            )
        });
        let results = join_all(evaluations).await;

        let mut rows = Vec::new();
        for (asset, result) in ASSETS.iter().zip(results) {
            match result {
                Ok(Some(row)) => rows.push(row),
                Ok(None) => {}
                Err(err) => {
                    warn!(asset = %asset, error = %err, "skipping asset after failed evaluation");
                }
            }
        }

        Ok(ExchangeWayTable::from_rows(rows, rate))
    }

    /// One asset's pipeline: buy page, sell page, weighted prices, row.
    /// `Ok(None)` means either side came back empty and the asset is skipped.
    #[allow(clippy::too_many_arguments)]
    async fn evaluate_asset(
        order_books: &dyn OrderBookSource,
        asset: &str,
        fiat_1: &str,
        fiat_2: &str,
        request: &RouteRequest,
        buy_amount: u64,
        sell_amount: u64,
        rate: f64,
    ) -> Result<Option<ExchangeWayRow>, RouteScannerError> {
        let buy_query = OrderBookQuery {
            fiat: fiat_1.to_string(),
            asset: asset.to_string(),
            direction: TradeDirection::Buy,
            pay_types: request.pay_types_1.clone(),
            trans_amount: Some(buy_amount),
            page: 1,
            rows: request.rows,
        };
        let buy_page = order_books.search_advs(&buy_query).await?;
        if buy_page.is_empty() {
            return Ok(None);
        }

        let sell_query = OrderBookQuery {
            fiat: fiat_2.to_string(),
            asset: asset.to_string(),
            direction: TradeDirection::Sell,
            pay_types: request.pay_types_2.clone(),
            trans_amount: Some(sell_amount),
            page: 1,
            rows: request.rows,
        };
        let sell_page = order_books.search_advs(&sell_query).await?;
        if sell_page.is_empty() {
            return Ok(None);
        }

        let buy_price = weighted_mean_price(&buy_page.advs)?;
        let sell_price = weighted_mean_price(&sell_page.advs)?;
        let cross_rate = buy_price / sell_price;

        Ok(Some(ExchangeWayRow {
            asset: asset.to_string(),
            buy_price,
            sell_price,
            cross_rate,
            market_diff: cross_rate / rate - 1.0,
        }))
    }
}
