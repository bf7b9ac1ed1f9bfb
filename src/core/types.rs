use serde::Deserialize;
use std::collections::HashMap;

/// Status block returned with every CoinMarketCap response, success or error.
///
/// On API-level errors (HTTP 4xx/5xx with a structured body) this is where
/// the error surfaces: `error_code` is non-zero and `error_message` explains
/// the rejection. Transport and decode failures never reach this type.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseStatus {
    pub timestamp: Option<String>,
    pub error_code: Option<i64>,
    pub error_message: Option<String>,
    pub elapsed: Option<i64>,
    pub credit_count: Option<i64>,
    pub notice: Option<String>,
}

/// Outer envelope common to every endpoint, generic over the data shape.
///
/// `data` is absent on error responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// True when the API reported an error for this call.
    pub fn is_error(&self) -> bool {
        self.status.error_code.unwrap_or(0) != 0
    }

    /// The API-reported error message, if the call was rejected.
    pub fn error_message(&self) -> Option<&str> {
        if self.is_error() {
            self.status.error_message.as_deref()
        } else {
            None
        }
    }
}

/// Envelope whose payload is a list of objects.
pub type ListResponse<T> = ApiResponse<Vec<T>>;

/// Envelope whose payload is keyed by the identifier kind used in the
/// request: CoinMarketCap ID, slug, or symbol.
pub type MapResponse<T> = ApiResponse<HashMap<String, T>>;
