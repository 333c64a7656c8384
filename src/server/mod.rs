//! HTTP surface: axum routes over the P2P client, the rate client, and the
//! route scanner.

use crate::common::{ASSETS, FIATS, RouteScannerError, is_supported_fiat};
use crate::p2p::{BinanceP2p, OrderBookPage, OrderBookQuery, OrderBookSource, TradeDirection};
use crate::rates::{CurrencyExchangeApi, RateSource, ReferenceRate};
use crate::route::{ExchangeWayTable, RouteRequest, RouteScanner};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Listener configuration, read from the environment once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
}

impl ServerConfig {
    /// Reads `P2P_SCANNER_ADDR`; defaults to `0.0.0.0:8000`.
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        let addr =
            std::env::var("P2P_SCANNER_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
        Ok(Self { bind: addr.parse()? })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([0, 0, 0, 0], 8000)),
        }
    }
}

/// Constructed collaborators shared by every handler.
pub struct AppState {
    pub order_books: BinanceP2p,
    pub rates: CurrencyExchangeApi,
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/advs/", get(advs))
        .route("/best_exchange_way/", get(best_exchange_way))
        .route("/paytypes/", get(paytypes))
        .route("/assets/", get(assets))
        .route("/fiats/", get(fiats))
        .route("/assets-fiats/", get(assets_and_fiats))
        .route("/exchange_rate/", get(exchange_rate))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until shutdown.
pub async fn serve(config: ServerConfig, state: Arc<AppState>) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    info!("listening on http://{}", config.bind);
    axum::serve(listener, app).await
}

/// Error envelope: every scanner error maps to one HTTP status and a
/// `{"detail": ...}` body.
pub struct ApiError(pub RouteScannerError);

impl From<RouteScannerError> for ApiError {
    fn from(err: RouteScannerError) -> Self {
        ApiError(err)
    }
}

pub fn error_status(err: &RouteScannerError) -> StatusCode {
    match err {
        RouteScannerError::UnsupportedCurrency(_) => StatusCode::NOT_FOUND,
        RouteScannerError::UpstreamUnavailable(_) | RouteScannerError::MalformedResponse(_) => {
            StatusCode::BAD_GATEWAY
        }
        RouteScannerError::EmptyAggregationInput | RouteScannerError::InvalidReferenceRate(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = error_status(&self.0);
        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Hello World" }))
}

async fn assets() -> Json<Value> {
    Json(json!({ "assets": ASSETS }))
}

async fn fiats() -> Json<Value> {
    Json(json!({ "fiats": FIATS.as_slice() }))
}

async fn assets_and_fiats() -> Json<Value> {
    Json(json!({ "assets": ASSETS, "fiats": FIATS.as_slice() }))
}

#[derive(Debug, Deserialize)]
struct AdvsParams {
    fiat: String,
    asset: String,
    trade_type: TradeDirection,
    pay_types: Option<String>,
    trans_amount: Option<u64>,
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_advs_rows")]
    rows: u32,
}

fn default_page() -> u32 {
    1
}

fn default_advs_rows() -> u32 {
    10
}

async fn advs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<AdvsParams>,
) -> Result<Json<OrderBookPage>, ApiError> {
    let query = OrderBookQuery {
        fiat: params.fiat.to_uppercase(),
        asset: params.asset.to_uppercase(),
        direction: params.trade_type,
        pay_types: split_pay_types(params.pay_types.as_deref()),
        trans_amount: params.trans_amount,
        page: params.page,
        rows: params.rows,
    };
    let page = state.order_books.search_advs(&query).await?;
    Ok(Json(page))
}

#[derive(Debug, Deserialize)]
struct BestExchangeWayParams {
    fiat_1: String,
    fiat_2: String,
    pay_types_1: Option<String>,
    pay_types_2: Option<String>,
    trans_amount: f64,
    #[serde(default = "default_route_rows")]
    rows: u32,
}

fn default_route_rows() -> u32 {
    5
}

async fn best_exchange_way(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BestExchangeWayParams>,
) -> Result<Json<ExchangeWayTable>, ApiError> {
    let request = RouteRequest {
        fiat_1: params.fiat_1,
        fiat_2: params.fiat_2,
        pay_types_1: split_pay_types(params.pay_types_1.as_deref()),
        pay_types_2: split_pay_types(params.pay_types_2.as_deref()),
        trans_amount: params.trans_amount,
        rows: params.rows,
    };
    let table = RouteScanner::best_exchange_way(&state.order_books, &state.rates, &request).await?;
    Ok(Json(table))
}

#[derive(Debug, Deserialize)]
struct PaytypesParams {
    char_code: String,
}

async fn paytypes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaytypesParams>,
) -> Result<Json<Value>, ApiError> {
    let char_code = params.char_code.to_uppercase();
    if !is_supported_fiat(&char_code) {
        return Err(ApiError(RouteScannerError::UnsupportedCurrency(char_code)));
    }
    let paytypes = state.order_books.paytypes(&char_code).await?;
    Ok(Json(json!({ "paytypes": paytypes, "success": true })))
}

#[derive(Debug, Deserialize)]
struct ExchangeRateParams {
    from_currency: String,
    to_currency: String,
}

async fn exchange_rate(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExchangeRateParams>,
) -> Result<Json<ReferenceRate>, ApiError> {
    let rate = state
        .rates
        .exchange_rate(&params.from_currency, &params.to_currency)
        .await?;
    Ok(Json(rate))
}

/// Query-string payment filters arrive comma-separated.
pub fn split_pay_types(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|identifier| !identifier.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
