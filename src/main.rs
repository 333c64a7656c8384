use p2p_route_scanner_rs::server::{AppState, ServerConfig, serve};
use p2p_route_scanner_rs::telemetry::init_tracing;
use p2p_route_scanner_rs::{BinanceP2p, CurrencyExchangeApi};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok(); // load .env
    init_tracing("p2p_route_scanner_rs=info,tower_http=info");

    let config = ServerConfig::from_env()?;
    let state = Arc::new(AppState {
        order_books: BinanceP2p::new(),
        rates: CurrencyExchangeApi::new(),
    });

    serve(config, state).await?;
    Ok(())
}
