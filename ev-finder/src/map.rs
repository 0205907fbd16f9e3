//! Map view model.
//!
//! The browser draws the map; this module decides what is on it. A
//! [`MapView`] is built from one [`FinderView`] snapshot, so the markers
//! always match the station list rendered next to it.

use serde::Serialize;

use crate::domain::{Coordinate, Station, StationId};
use crate::finder::FinderView;

/// OpenStreetMap raster tile template.
const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

const DEFAULT_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

const USER_ICON_URL: &str = "https://maps.gstatic.com/mapfiles/ms2/micons/blue-dot.png";
const STATION_ICON_URL: &str = "https://maps.gstatic.com/mapfiles/ms2/micons/red-dot.png";

/// A marker image and how it sits on its coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IconSpec {
    pub url: String,
    /// Width and height in pixels.
    pub size: [u32; 2],
    /// Pixel within the image that touches the coordinate.
    pub anchor: [u32; 2],
}

impl IconSpec {
    /// A 32x32 pin anchored at the bottom centre.
    pub fn pin(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            size: [32, 32],
            anchor: [16, 32],
        }
    }
}

/// Marker images for the user and for stations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerIcons {
    pub user: IconSpec,
    pub station: IconSpec,
}

impl Default for MarkerIcons {
    fn default() -> Self {
        Self {
            user: IconSpec::pin(USER_ICON_URL),
            station: IconSpec::pin(STATION_ICON_URL),
        }
    }
}

/// Configuration for the map renderer.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Raster tile URL template (`{s}`, `{z}`, `{x}`, `{y}` placeholders).
    pub tile_url: String,

    /// Attribution HTML shown in the map corner.
    pub attribution: String,

    /// Zoom level of a freshly mounted map, centred on the user.
    pub initial_zoom: u8,

    /// Zoom level after flying to a selected station.
    pub fly_to_zoom: u8,

    /// Length of the fly-to animation in seconds.
    pub fly_to_duration_secs: f64,

    pub icons: MarkerIcons,
}

impl MapConfig {
    pub fn with_tile_url(mut self, url: impl Into<String>) -> Self {
        self.tile_url = url.into();
        self
    }

    pub fn with_icons(mut self, icons: MarkerIcons) -> Self {
        self.icons = icons;
        self
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            tile_url: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            initial_zoom: 11,
            fly_to_zoom: 14,
            fly_to_duration_secs: 1.2,
            icons: MarkerIcons::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerKind {
    User,
    Station,
}

/// One pin on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub kind: MarkerKind,
    pub position: Coordinate,
    pub icon: IconSpec,
    /// Popup lines; the first is shown in bold.
    pub popup: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub station_id: Option<StationId>,
}

impl Marker {
    fn user(position: Coordinate, icons: &MarkerIcons) -> Self {
        Self {
            kind: MarkerKind::User,
            position,
            icon: icons.user.clone(),
            popup: vec!["You are here".to_string()],
            station_id: None,
        }
    }

    fn station(station: &Station, icons: &MarkerIcons) -> Self {
        Self {
            kind: MarkerKind::Station,
            position: station.position,
            icon: icons.station.clone(),
            popup: vec![
                station.name.clone(),
                format!("⚡ {}", station.power_label()),
                format!("📍 {}", station.distance_label()),
            ],
            station_id: Some(station.id.clone()),
        }
    }
}

/// Animated move to a selected station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlyTo {
    pub target: Coordinate,
    pub zoom: u8,
    pub duration_secs: f64,
}

/// Everything the browser needs to draw the map.
///
/// `generation` changes with every applied search. The browser discards
/// its map instance and mounts a fresh one whenever it sees a new value,
/// so zoom and pan state never leaks from one result set into the next.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub generation: u64,
    pub center: Coordinate,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    /// Recompute the container size once after mounting.
    pub invalidate_size_on_mount: bool,
    pub markers: Vec<Marker>,
    pub fly_to: Option<FlyTo>,
}

impl MapView {
    /// Build the map for a session snapshot.
    ///
    /// Returns `None` while the user's position is unknown; no map is shown
    /// until then.
    pub fn build(config: &MapConfig, view: &FinderView) -> Option<Self> {
        let user = view.location.coordinate()?;

        let markers = std::iter::once(Marker::user(user, &config.icons))
            .chain(
                view.stations
                    .iter()
                    .map(|s| Marker::station(s, &config.icons)),
            )
            .collect();

        let fly_to = view.selected.map(|target| FlyTo {
            target,
            zoom: config.fly_to_zoom,
            duration_secs: config.fly_to_duration_secs,
        });

        Some(Self {
            generation: view.map_generation,
            center: user,
            zoom: config.initial_zoom,
            tile_url: config.tile_url.clone(),
            attribution: config.attribution.clone(),
            invalidate_size_on_mount: true,
            markers,
            fly_to,
        })
    }
}
