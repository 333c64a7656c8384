pub mod client;
pub mod currency;
pub mod errors;
pub mod utils;

// Re-export
pub use client::{DEFAULT_TIMEOUT, create_http_client, create_http_client_with_headers};
pub use currency::{ASSETS, FIATS, is_supported_asset, is_supported_fiat};
pub use errors::RouteScannerError;
pub use utils::{get_timestamp_millis, parse_f64};
