//! Blocking notifications shown to the user.

use serde::Serialize;

use crate::chargers::ChargerError;

/// A blocking alert the page shows once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// The device refused to give a position fix.
    LocationDenied,
    /// The backend rejected the search input.
    InvalidRadius,
    /// The backend could not be reached or gave an unusable answer.
    SearchUnavailable,
}

impl Notice {
    /// Pick the notice for a failed search.
    pub fn for_search_error(err: &ChargerError) -> Self {
        if err.is_invalid_input() {
            Notice::InvalidRadius
        } else {
            Notice::SearchUnavailable
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::LocationDenied => "Location permission denied",
            Notice::InvalidRadius => "Enter radius",
            Notice::SearchUnavailable => "Charger search failed, try again",
        }
    }
}
