#[derive(thiserror::Error, Debug)]
pub enum RouteScannerError {
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] reqwest::Error),

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Weighted price over an empty advertisement list")]
    EmptyAggregationInput,

    #[error("Invalid reference rate: {0}")]
    InvalidReferenceRate(f64),
}

impl From<serde_json::Error> for RouteScannerError {
    fn from(err: serde_json::Error) -> Self {
        RouteScannerError::MalformedResponse(err.to_string())
    }
}
