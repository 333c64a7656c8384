use serde::{Deserialize, Serialize};

/// One evaluated asset: both sides quoted, cross rate and market deviation
/// derived from the liquidity-weighted prices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeWayRow {
    pub asset: String,
    /// Weighted buy-side price, denominated in fiat_1.
    pub buy_price: f64,
    /// Weighted sell-side price, denominated in fiat_2.
    pub sell_price: f64,
    /// buy_price / sell_price: implied fiat_1-per-fiat_2.
    pub cross_rate: f64,
    /// cross_rate / reference_rate - 1.
    pub market_diff: f64,
}

/// Columnar response table: index i across all arrays is one asset's row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExchangeWayColumns {
    pub asset: Vec<String>,
    pub price_1: Vec<f64>,
    pub price_2: Vec<f64>,
    pub cross_rate: Vec<f64>,
    pub market_diff: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeWayTable {
    pub table: ExchangeWayColumns,
    /// Reference rate every row's deviation was measured against.
    pub rate: f64,
    /// True iff at least one row was emitted.
    pub success: bool,
}

impl ExchangeWayTable {
    pub fn from_rows(rows: Vec<ExchangeWayRow>, rate: f64) -> Self {
        let success = !rows.is_empty();
        let mut table = ExchangeWayColumns::default();
        for row in rows {
            table.asset.push(row.asset);
            table.price_1.push(row.buy_price);
            table.price_2.push(row.sell_price);
            table.cross_rate.push(row.cross_rate);
            table.market_diff.push(row.market_diff);
        }
        Self {
            table,
            rate,
            success,
        }
    }
}
