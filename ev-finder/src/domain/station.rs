//! Charging station records returned by the search backend.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Backend identifier of a charging station.
///
/// The backend may send ids as JSON numbers or strings; both are kept
/// as their textual form so they can be used as URL path segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "WireId", into = "String")]
pub struct StationId(String);

impl StationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<StationId> for String {
    fn from(id: StationId) -> Self {
        id.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Number(u64),
    Text(String),
}

impl From<WireId> for StationId {
    fn from(id: WireId) -> Self {
        match id {
            WireId::Number(n) => StationId(n.to_string()),
            WireId::Text(s) => StationId(s),
        }
    }
}

/// Numeric field that some backends encode as a decimal string.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireNumber {
    Number(f64),
    Text(String),
}

impl TryFrom<WireNumber> for f64 {
    type Error = String;

    fn try_from(n: WireNumber) -> Result<Self, Self::Error> {
        match n {
            WireNumber::Number(n) => Ok(n),
            WireNumber::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| format!("expected a number, got {s:?}")),
        }
    }
}

/// A station record exactly as it appears on the wire.
#[derive(Deserialize)]
struct WireStation {
    id: WireId,
    name: String,
    latitude: WireNumber,
    longitude: WireNumber,
    power_kw: WireNumber,
    is_available: bool,
    distance: WireNumber,
}

/// A charging station from one search result set.
///
/// Stations are read-only: they are replaced wholesale by the next search,
/// never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireStation")]
pub struct Station {
    pub id: StationId,
    pub name: String,
    #[serde(flatten)]
    pub position: Coordinate,
    pub power_kw: f64,
    pub is_available: bool,
    /// Distance from the search origin in kilometres, as computed by the backend.
    pub distance: f64,
}

impl Station {
    /// Power rating for display, e.g. `50 kW`.
    pub fn power_label(&self) -> String {
        format!("{} kW", self.power_kw)
    }

    /// Distance for display, e.g. `1.2 km`.
    pub fn distance_label(&self) -> String {
        format!("{} km", self.distance)
    }
}

impl TryFrom<WireStation> for Station {
    type Error = String;

    fn try_from(wire: WireStation) -> Result<Self, Self::Error> {
        let latitude = f64::try_from(wire.latitude)?;
        let longitude = f64::try_from(wire.longitude)?;
        let position = Coordinate::new(latitude, longitude).map_err(|e| e.to_string())?;

        Ok(Station {
            id: wire.id.into(),
            name: wire.name,
            position,
            power_kw: f64::try_from(wire.power_kw)?,
            is_available: wire.is_available,
            distance: f64::try_from(wire.distance)?,
        })
    }
}
