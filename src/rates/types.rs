use serde::{Deserialize, Serialize};

/// Fiat-to-fiat reference rate. `rate` is the `to`-per-`from` multiplier:
/// the quote obtained for (from = fiat_2, to = fiat_1) is fiat_1-per-fiat_2.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceRate {
    pub from: String,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    pub success: bool,
}

impl ReferenceRate {
    pub fn unavailable(from: String, to: String) -> Self {
        Self {
            from,
            to,
            rate: None,
            success: false,
        }
    }
}
