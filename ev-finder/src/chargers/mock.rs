//! Mock charger backend for running without the real search service.
//!
//! Serves a fixed list of stations loaded from a JSON file (the same
//! array format the backend returns). The radius only has to be a positive
//! number; distances are taken from the file rather than computed.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use futures::FutureExt;
use futures::future::BoxFuture;
use tokio::sync::RwLock;

use crate::domain::Station;

use super::error::ChargerError;
use super::{ChargerSearch, SearchQuery};

/// Mock search backend with canned stations.
#[derive(Clone, Default)]
pub struct MockChargers {
    stations: Arc<RwLock<Vec<Station>>>,
    /// When set, every search fails with this status and message.
    failure: Option<(u16, String)>,
    calls: Arc<AtomicUsize>,
    last_query: Arc<RwLock<Option<SearchQuery>>>,
}

impl MockChargers {
    /// Create a mock serving the given stations.
    pub fn new(stations: Vec<Station>) -> Self {
        Self {
            stations: Arc::new(RwLock::new(stations)),
            ..Self::default()
        }
    }

    /// Load stations from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ChargerError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ChargerError::Mock {
            message: format!("failed to read {:?}: {}", path, e),
        })?;

        let stations: Vec<Station> =
            serde_json::from_str(&json).map_err(|e| ChargerError::Mock {
                message: format!("failed to parse {:?}: {}", path, e),
            })?;

        Ok(Self::new(stations))
    }

    /// Make every search fail with the given backend status.
    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self {
            failure: Some((status, message.into())),
            ..Self::default()
        }
    }

    /// Number of searches served so far, including failed ones.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The most recent query received.
    pub async fn last_query(&self) -> Option<SearchQuery> {
        self.last_query.read().await.clone()
    }

    async fn run(&self, query: &SearchQuery) -> Result<Vec<Station>, ChargerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.write().await = Some(query.clone());

        if let Some((status, message)) = &self.failure {
            return Err(ChargerError::Api {
                status: *status,
                message: message.clone(),
            });
        }

        let radius_ok = query
            .radius
            .trim()
            .parse::<f64>()
            .is_ok_and(|r| r.is_finite() && r > 0.0);
        if !radius_ok {
            return Err(ChargerError::Api {
                status: 400,
                message: "radius must be a positive number".to_string(),
            });
        }

        let stations = self.stations.read().await;
        Ok(stations
            .iter()
            .filter(|s| !query.available_only || s.is_available)
            .cloned()
            .collect())
    }
}

impl ChargerSearch for MockChargers {
    fn search<'a>(
        &'a self,
        query: &'a SearchQuery,
    ) -> BoxFuture<'a, Result<Vec<Station>, ChargerError>> {
        self.run(query).boxed()
    }
}
