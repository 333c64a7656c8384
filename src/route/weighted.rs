use crate::common::RouteScannerError;
use crate::p2p::Advertisement;

/// Liquidity-weighted mean unit price over one advertisement page:
/// sum(price_i * quantity_i) / sum(quantity_i).
///
/// Callers must hand in a non-empty page with tradable quantity; an empty
/// list or a zero total weight is `EmptyAggregationInput`.
pub fn weighted_mean_price(advs: &[Advertisement]) -> Result<f64, RouteScannerError> {
    let total_quantity: f64 = advs.iter().map(|adv| adv.tradable_quantity).sum();
    if advs.is_empty() || total_quantity == 0.0 {
        return Err(RouteScannerError::EmptyAggregationInput);
    }

    let weighted_sum: f64 = advs
        .iter()
        .map(|adv| adv.price * adv.tradable_quantity)
        .sum();
    Ok(weighted_sum / total_quantity)
}
