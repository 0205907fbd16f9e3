//! Charger search error types.

/// Errors that can occur when querying the charger search backend.
#[derive(Debug, thiserror::Error)]
pub enum ChargerError {
    /// HTTP request failed (connection refused, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not a list of stations
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Mock data could not be loaded
    #[error("mock data error: {message}")]
    Mock { message: String },
}

impl ChargerError {
    /// Whether the backend rejected the query itself (e.g. a missing or
    /// non-numeric radius), as opposed to failing to answer it.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ChargerError::Api { status: 400 | 422, .. })
    }
}
