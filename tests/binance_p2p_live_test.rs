use p2p_route_scanner_rs::{BinanceP2p, OrderBookQuery, OrderBookSource, TradeDirection};

// Live smoke tests against the real P2P API; run with `cargo test -- --ignored`.

#[tokio::test]
#[ignore = "hits the live Binance P2P API"]
async fn live_search_returns_a_page() {
    let client = BinanceP2p::new();
    let query = OrderBookQuery::new("USD", "USDT", TradeDirection::Buy);

    let page = client.search_advs(&query).await.unwrap();
    assert!(page.success);

    for adv in &page.advs {
        assert_eq!(adv.asset, "USDT");
        assert_eq!(adv.fiat, "USD");
        assert!(adv.price > 0.0, "price should be positive");
        // Search for BUY quotes returns advertiser-side SELL records.
        assert_eq!(adv.direction, TradeDirection::Sell);
    }
}

#[tokio::test]
#[ignore = "hits the live Binance P2P API"]
async fn live_paytypes_lists_identifiers() {
    let client = BinanceP2p::new();
    let paytypes = client.paytypes("USD").await.unwrap();
    assert!(!paytypes.is_empty());
}
