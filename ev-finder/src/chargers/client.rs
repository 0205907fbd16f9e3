//! HTTP client for the charger search backend.

use futures::FutureExt;
use futures::future::BoxFuture;
use serde::Serialize;
use tracing::debug;

use crate::domain::Station;

use super::error::ChargerError;
use super::{ChargerSearch, SearchQuery};

/// Default base URL of the search backend.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Path of the radius search endpoint, relative to the base URL.
const SEARCH_PATH: &str = "/api/chargers/search/";

/// Query string parameters, in the backend's naming.
#[derive(Serialize)]
struct SearchParams<'a> {
    lat: f64,
    lon: f64,
    radius: &'a str,
    available: bool,
}

/// Configuration for the charger search client.
#[derive(Debug, Clone)]
pub struct ChargerClientConfig {
    /// Base URL of the backend (scheme, host and port)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ChargerClientConfig {
    /// Create a config pointing at the given backend.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ChargerClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client for the charger search backend.
#[derive(Debug, Clone)]
pub struct ChargerClient {
    http: reqwest::Client,
    base_url: String,
}

impl ChargerClient {
    /// Create a new client.
    pub fn new(config: ChargerClientConfig) -> Result<Self, ChargerError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the search endpoint, without query string.
    pub fn search_url(&self) -> String {
        format!("{}{}", self.base_url, SEARCH_PATH)
    }

    fn build_request(&self, query: &SearchQuery) -> Result<reqwest::Request, ChargerError> {
        let params = SearchParams {
            lat: query.origin.latitude(),
            lon: query.origin.longitude(),
            radius: &query.radius,
            available: query.available_only,
        };

        Ok(self.http.get(self.search_url()).query(&params).build()?)
    }

    /// Search for stations around `query.origin`.
    pub async fn search_nearby(&self, query: &SearchQuery) -> Result<Vec<Station>, ChargerError> {
        let request = self.build_request(query)?;
        debug!(url = %request.url(), "querying charger backend");

        let response = self.http.execute(request).await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChargerError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ChargerError::Json {
            message: e.to_string(),
        })
    }
}

impl ChargerSearch for ChargerClient {
    fn search<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> BoxFuture<'a, Result<Vec<Station>, ChargerError>> {
        self.search_nearby(query).boxed()
    }
}
