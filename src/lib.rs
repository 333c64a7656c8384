//! `p2p-route-scanner-rs`
//!
//! Fetch Binance P2P advertisement books, aggregate liquidity-weighted prices,
//! and evaluate the best fiat-to-fiat exchange way through a crypto asset.
//!
//! ## Quickstart (library)
//!
//! ```no_run
//! use p2p_route_scanner_rs::{BinanceP2p, CurrencyExchangeApi, RouteRequest, RouteScanner};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), p2p_route_scanner_rs::RouteScannerError> {
//! let order_books = BinanceP2p::new();
//! let rates = CurrencyExchangeApi::new();
//! let request = RouteRequest {
//!     fiat_1: "USD".to_string(),
//!     fiat_2: "KZT".to_string(),
//!     pay_types_1: vec![],
//!     pay_types_2: vec![],
//!     trans_amount: 1000.0,
//!     rows: 5,
//! };
//! let table = RouteScanner::best_exchange_way(&order_books, &rates, &request).await?;
//! for (asset, cross) in table.table.asset.iter().zip(&table.table.cross_rate) {
//!     println!("{} cross={}", asset, cross);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Quickstart (HTTP service)
//!
//! ```no_run
//! use p2p_route_scanner_rs::server::{AppState, ServerConfig, serve};
//! use p2p_route_scanner_rs::{BinanceP2p, CurrencyExchangeApi};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> std::io::Result<()> {
//! let state = Arc::new(AppState {
//!     order_books: BinanceP2p::new(),
//!     rates: CurrencyExchangeApi::new(),
//! });
//! serve(ServerConfig::default(), state).await
//! # }
//! ```

pub mod common;
pub mod p2p;
pub mod rates;
pub mod route;
pub mod server;
pub mod telemetry;

// Re-export common types
pub use common::{ASSETS, FIATS, RouteScannerError, is_supported_asset, is_supported_fiat};
pub use p2p::{
    Advertisement, BinanceP2p, OrderBookPage, OrderBookQuery, OrderBookSource, P2pConfig,
    TradeDirection,
};
pub use rates::{CurrencyExchangeApi, RateConfig, RateSource, ReferenceRate};
pub use route::{
    ExchangeWayColumns, ExchangeWayRow, ExchangeWayTable, RouteRequest, RouteScanner,
    weighted_mean_price,
};
