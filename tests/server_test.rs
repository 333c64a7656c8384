use axum::http::StatusCode;
use p2p_route_scanner_rs::server::{AppState, ServerConfig, error_status, router, split_pay_types};
use p2p_route_scanner_rs::{BinanceP2p, CurrencyExchangeApi, RouteScannerError};
use std::sync::Arc;

#[test]
fn pay_type_filters_split_on_commas() {
    assert_eq!(
        split_pay_types(Some("TinkoffNew,RosBank, QIWI")),
        vec!["TinkoffNew", "RosBank", "QIWI"]
    );
    assert_eq!(split_pay_types(Some("")), Vec::<String>::new());
    assert_eq!(split_pay_types(Some(",,")), Vec::<String>::new());
    assert_eq!(split_pay_types(None), Vec::<String>::new());
}

#[test]
fn error_statuses_follow_the_taxonomy() {
    assert_eq!(
        error_status(&RouteScannerError::UnsupportedCurrency("XXX".into())),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        error_status(&RouteScannerError::MalformedResponse("bad".into())),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        error_status(&RouteScannerError::EmptyAggregationInput),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        error_status(&RouteScannerError::InvalidReferenceRate(0.0)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn default_bind_address_is_port_8000() {
    let config = ServerConfig::default();
    assert_eq!(config.bind.port(), 8000);
}

#[tokio::test]
async fn router_builds_with_constructed_collaborators() {
    let state = Arc::new(AppState {
        order_books: BinanceP2p::new(),
        rates: CurrencyExchangeApi::new(),
    });
    // Construction only; no request leaves the process.
    let _app = router(state);
}
