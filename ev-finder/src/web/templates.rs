//! Askama templates for the web frontend.

use askama::Template;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use uuid::Uuid;

use crate::domain::{Coordinate, Station, StationId};
use crate::finder::{FinderView, Notice, directions_url};

/// Bytes that must be escaped inside a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// URL of a per-station endpoint such as `select` or `directions`.
///
/// Station ids come from the backend and may contain `/`, `?` or spaces,
/// so the id is percent-encoded; axum's `Path` extractor decodes it again.
pub fn station_url(session_id: Uuid, action: &str, station: &StationId) -> String {
    format!(
        "/s/{}/{}/{}",
        session_id,
        action,
        utf8_percent_encode(station.as_str(), PATH_SEGMENT)
    )
}

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Placeholder shown until the position fix arrives.
///
/// A denied session stays on this page for good.
#[derive(Template)]
#[template(path = "tracking.html")]
pub struct TrackingTemplate {
    pub session_id: Uuid,
    pub denied: bool,
    pub notice: Option<&'static str>,
}

/// Sidebar with search filters and results, plus the map.
#[derive(Template)]
#[template(path = "finder.html")]
pub struct FinderTemplate {
    pub session_id: Uuid,
    pub radius: String,
    pub available_only: bool,
    pub has_searched: bool,
    pub stations: Vec<StationCardView>,
    /// Serialized `MapView`, read by the map script.
    pub map_json: String,
    pub map_generation: u64,
    pub notice: Option<&'static str>,
}

impl FinderTemplate {
    /// Build the page from one session snapshot.
    ///
    /// `user` is the resolved position; `map_json` must come from the same
    /// snapshot so the markers match the cards.
    pub fn from_view(
        session_id: Uuid,
        user: Coordinate,
        view: &FinderView,
        map_json: String,
        notice: Option<Notice>,
    ) -> Self {
        let stations = view
            .stations
            .iter()
            .map(|s| StationCardView::from_station(session_id, user, s))
            .collect();

        Self {
            session_id,
            radius: view.filter.radius.clone(),
            available_only: view.filter.available_only,
            has_searched: view.has_searched,
            stations,
            map_json,
            map_generation: view.map_generation,
            notice: notice.map(|n| n.message()),
        }
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One station card in the sidebar.
#[derive(Debug, Clone)]
pub struct StationCardView {
    pub id: String,
    pub name: String,
    pub power: String,
    pub distance: String,
    pub is_available: bool,
    /// Endpoint that makes this station the map's fly-to target
    pub select_url: String,
    /// External route planner link, opened in a new tab
    pub directions_url: String,
}

impl StationCardView {
    /// Create from a domain Station.
    pub fn from_station(session_id: Uuid, user: Coordinate, station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
            power: station.power_label(),
            distance: station.distance_label(),
            is_available: station.is_available,
            select_url: station_url(session_id, "select", &station.id),
            directions_url: directions_url(user, station.position),
        }
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_available {
            "Available"
        } else {
            "Unavailable"
        }
    }

    /// CSS class for the availability badge.
    pub fn status_class(&self) -> &'static str {
        if self.is_available { "green" } else { "red" }
    }
}
