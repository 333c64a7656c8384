// src/common/utils.rs
use crate::common::RouteScannerError;

// Parse a string to a f64, return a RouteScannerError if the parsing fails
pub fn parse_f64(value: &str, field_name: &str) -> Result<f64, RouteScannerError> {
    value
        .parse::<f64>()
        .map_err(|_| RouteScannerError::MalformedResponse(format!("Invalid {} format", field_name)))
}

// get timestamp in milliseconds
pub fn get_timestamp_millis() -> u64 {
    chrono::Utc::now()
        .timestamp_millis()
        .try_into()
        .unwrap_or(0)
}
