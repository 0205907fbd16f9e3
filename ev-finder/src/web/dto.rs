//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{SearchFilter, Station};
use crate::finder::{LocationState, Notice, SearchOutcome};
use crate::map::MapView;

/// Position report from the browser's geolocation call.
///
/// Either both coordinates or an `error` describing why no fix was given.
#[derive(Debug, Deserialize)]
pub struct LocationReport {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub error: Option<String>,
}

/// Result of a location report.
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    /// `tracking`, `denied` or `resolved`
    pub state: &'static str,

    /// Whether this report changed the session
    pub applied: bool,
}

impl LocationResponse {
    pub fn new(location: LocationState, applied: bool) -> Self {
        let state = match location {
            LocationState::Tracking => "tracking",
            LocationState::Denied => "denied",
            LocationState::Resolved(_) => "resolved",
        };
        Self { state, applied }
    }
}

/// Search filter as submitted by the sidebar form.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    /// Radius as typed; may be empty
    #[serde(default)]
    pub radius: String,

    /// Checkbox value: present (`on`) when ticked, absent otherwise
    pub available: Option<String>,
}

impl SearchForm {
    pub fn to_filter(&self) -> SearchFilter {
        let available_only = self
            .available
            .as_deref()
            .is_some_and(|v| matches!(v.trim(), "on" | "true" | "1"));
        SearchFilter::new(self.radius.clone(), available_only)
    }
}

/// JSON answer to a search request.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    /// `applied`, `failed` or `superseded`
    pub outcome: &'static str,

    /// Alert to show, if the search failed
    pub notice: Option<Notice>,

    /// Alert text, if the search failed
    pub message: Option<&'static str>,

    /// Whether results have ever been shown in this session
    pub has_searched: bool,

    /// Current result set (after this search was applied or dropped)
    pub stations: Vec<Station>,

    /// Map for the current result set
    pub map: Option<MapView>,
}

impl SearchResponse {
    pub fn outcome_name(outcome: &SearchOutcome) -> &'static str {
        match outcome {
            SearchOutcome::Applied { .. } => "applied",
            SearchOutcome::Failed(_) => "failed",
            SearchOutcome::Superseded => "superseded",
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
