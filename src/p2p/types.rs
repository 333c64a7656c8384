use crate::common::{RouteScannerError, get_timestamp_millis, parse_f64};
use serde::{Deserialize, Serialize};

/// Taker-side trade direction: `Buy` means the caller wants to buy the asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeDirection {
    #[serde(rename = "BUY")]
    Buy,
    #[serde(rename = "SELL")]
    Sell,
}

impl TradeDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TradeDirection::Buy => "BUY",
            TradeDirection::Sell => "SELL",
        }
    }

    /// Advertiser-perspective inversion: Binance reports each advertisement's
    /// direction as the advertiser's stated intent, the opposite of the
    /// taker's side. Normalized records carry the flipped value.
    pub fn invert(self) -> Self {
        match self {
            TradeDirection::Buy => TradeDirection::Sell,
            TradeDirection::Sell => TradeDirection::Buy,
        }
    }
}

impl std::fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized P2P advertisement. Immutable once fetched; lives only for
/// the duration of one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advertisement {
    pub adv_no: String,
    pub direction: TradeDirection,
    pub asset: String,
    pub fiat: String,
    pub price: f64,
    pub min_trans_amount: f64,
    pub max_trans_amount: f64,
    pub trade_methods: Vec<String>,
    pub tradable_quantity: f64,
    pub advertiser_name: String,
    pub month_order_count: u32,
    pub month_finish_rate: f64,
}

/// One page of the advertisement book for a (fiat, asset, direction) query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBookPage {
    pub advs: Vec<Advertisement>,
    pub total_count: u64,
    pub success: bool,
    pub timestamp: u64,
}

impl OrderBookPage {
    pub fn is_empty(&self) -> bool {
        self.advs.is_empty()
    }

    /// Normalize a raw `search` payload. A response without a `data` payload
    /// becomes an empty page carrying the response's own success flag.
    pub fn from_search(response: P2pSearchResponse) -> Result<Self, RouteScannerError> {
        let timestamp = get_timestamp_millis();
        let Some(items) = response.data else {
            return Ok(OrderBookPage {
                advs: Vec::new(),
                total_count: 0,
                success: response.success,
                timestamp,
            });
        };

        let total_count = response.total.unwrap_or(items.len() as u64);
        let mut advs = Vec::with_capacity(items.len());
        for item in items {
            advs.push(Advertisement::from_raw(item)?);
        }

        Ok(OrderBookPage {
            advs,
            total_count,
            success: response.success,
            timestamp,
        })
    }
}

impl Advertisement {
    fn from_raw(item: P2pSearchItem) -> Result<Self, RouteScannerError> {
        let adv = item.adv;
        Ok(Advertisement {
            adv_no: adv.adv_no,
            // Flip to the taker's perspective; see TradeDirection::invert.
            direction: adv.trade_type.invert(),
            asset: adv.asset,
            fiat: adv.fiat_unit,
            price: parse_f64(&adv.price, "price")?,
            min_trans_amount: parse_f64(&adv.min_single_trans_amount, "minSingleTransAmount")?,
            max_trans_amount: parse_f64(
                &adv.dynamic_max_single_trans_amount,
                "dynamicMaxSingleTransAmount",
            )?,
            trade_methods: adv
                .trade_methods
                .into_iter()
                .filter_map(|method| method.identifier)
                .collect(),
            tradable_quantity: parse_f64(&adv.tradable_quantity, "tradableQuantity")?,
            advertiser_name: item.advertiser.nick_name,
            month_order_count: item.advertiser.month_order_count,
            month_finish_rate: item.advertiser.month_finish_rate,
        })
    }
}

/// Raw `bapi/c2c .../search` response envelope.
#[derive(Debug, Deserialize)]
pub struct P2pSearchResponse {
    pub data: Option<Vec<P2pSearchItem>>,
    pub total: Option<u64>,
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Deserialize)]
pub struct P2pSearchItem {
    pub adv: RawAdv,
    pub advertiser: RawAdvertiser,
}

/// Binance serializes every numeric advertisement field as a decimal string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAdv {
    pub adv_no: String,
    pub trade_type: TradeDirection,
    pub asset: String,
    pub fiat_unit: String,
    pub price: String,
    pub min_single_trans_amount: String,
    pub dynamic_max_single_trans_amount: String,
    #[serde(default)]
    pub trade_methods: Vec<RawTradeMethod>,
    pub tradable_quantity: String,
}

#[derive(Debug, Deserialize)]
pub struct RawTradeMethod {
    pub identifier: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAdvertiser {
    pub nick_name: String,
    #[serde(default)]
    pub month_order_count: u32,
    #[serde(default)]
    pub month_finish_rate: f64,
}

/// Raw `filter-conditions` response, reduced to the payment-method list.
#[derive(Debug, Deserialize)]
pub struct FilterConditionsResponse {
    pub data: Option<FilterConditionsData>,
    #[serde(default)]
    pub success: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConditionsData {
    #[serde(default)]
    pub trade_methods: Vec<RawTradeMethod>,
}
