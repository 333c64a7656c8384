mod route_common;

use p2p_route_scanner_rs::{RouteScannerError, TradeDirection, weighted_mean_price};
use route_common::adv;

#[test]
fn weighted_mean_matches_hand_computation() {
    let advs = vec![
        adv("USDT", "USD", TradeDirection::Sell, 1.00, 100.0),
        adv("USDT", "USD", TradeDirection::Sell, 1.02, 200.0),
        adv("USDT", "USD", TradeDirection::Sell, 1.05, 700.0),
    ];

    let price = weighted_mean_price(&advs).unwrap();
    let expected = (1.00 * 100.0 + 1.02 * 200.0 + 1.05 * 700.0) / 1000.0;
    assert!((price - expected).abs() < 1e-12);
}

#[test]
fn weighted_mean_stays_within_price_bounds() {
    // Weighted average bound: for positive quantities the result can never
    // leave the [min, max] unit-price interval.
    let samples: &[&[(f64, f64)]] = &[
        &[(1.0, 1.0)],
        &[(1.0, 10.0), (2.0, 0.001)],
        &[(89.5, 300.0), (91.2, 150.0), (90.0, 5000.0)],
        &[(0.5, 1e9), (0.7, 1.0)],
    ];

    for sample in samples {
        let advs: Vec<_> = sample
            .iter()
            .map(|&(price, quantity)| adv("BTC", "EUR", TradeDirection::Buy, price, quantity))
            .collect();
        let min = sample.iter().map(|s| s.0).fold(f64::INFINITY, f64::min);
        let max = sample.iter().map(|s| s.0).fold(f64::NEG_INFINITY, f64::max);

        let price = weighted_mean_price(&advs).unwrap();
        assert!(
            price >= min && price <= max,
            "weighted mean {} outside [{}, {}]",
            price,
            min,
            max
        );
    }
}

#[test]
fn single_advertisement_is_its_own_mean() {
    let advs = vec![adv("ETH", "GBP", TradeDirection::Buy, 2543.21, 12.0)];
    assert!((weighted_mean_price(&advs).unwrap() - 2543.21).abs() < 1e-12);
}

#[test]
fn empty_input_is_rejected() {
    let err = weighted_mean_price(&[]).unwrap_err();
    assert!(matches!(err, RouteScannerError::EmptyAggregationInput));
}

#[test]
fn zero_total_quantity_is_rejected() {
    let advs = vec![
        adv("USDT", "USD", TradeDirection::Sell, 1.0, 0.0),
        adv("USDT", "USD", TradeDirection::Sell, 1.1, 0.0),
    ];
    let err = weighted_mean_price(&advs).unwrap_err();
    assert!(matches!(err, RouteScannerError::EmptyAggregationInput));
}
