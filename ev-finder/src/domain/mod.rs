//! Domain types for the charger finder.
//!
//! Coordinates are validated at construction; station records are
//! validated when decoded from the backend, so code that receives these
//! types can trust their validity.

mod coordinate;
mod filter;
mod station;

pub use coordinate::{Coordinate, InvalidCoordinate};
pub use filter::SearchFilter;
pub use station::{Station, StationId};
