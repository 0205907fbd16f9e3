//! Turn-by-turn directions links.
//!
//! Directions are delegated to Google Maps: the link opens its route
//! planner with the user as origin and the station as destination.

use crate::domain::Coordinate;

/// Base of the Google Maps directions URL (`api=1` form).
const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/?api=1";

/// Generate a directions URL from `origin` to `destination`.
///
/// # Example
///
/// ```
/// use ev_finder::domain::Coordinate;
/// use ev_finder::finder::directions_url;
///
/// let me = Coordinate::new(12.9716, 77.5946).unwrap();
/// let station = Coordinate::new(12.98, 77.6).unwrap();
/// assert_eq!(
///     directions_url(me, station),
///     "https://www.google.com/maps/dir/?api=1&origin=12.9716,77.5946&destination=12.98,77.6"
/// );
/// ```
pub fn directions_url(origin: Coordinate, destination: Coordinate) -> String {
    format!("{DIRECTIONS_BASE}&origin={origin}&destination={destination}")
}
