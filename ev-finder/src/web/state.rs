//! Application state for the web layer.

use std::sync::Arc;

use crate::chargers::ChargerSearch;
use crate::map::MapConfig;

use super::sessions::SessionStore;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Charger search backend (HTTP client or mock)
    pub chargers: Arc<dyn ChargerSearch>,

    /// Live browser sessions
    pub sessions: SessionStore,

    /// Map tiles, zoom levels and marker icons
    pub map: Arc<MapConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(chargers: impl ChargerSearch + 'static, sessions: SessionStore, map: MapConfig) -> Self {
        Self {
            chargers: Arc::new(chargers),
            sessions,
            map: Arc::new(map),
        }
    }
}
