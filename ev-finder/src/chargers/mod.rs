//! Charger search backend.
//!
//! The backend owns the actual radius search: it computes distances,
//! applies the radius and availability filters, and returns the matching
//! stations. This module only speaks its HTTP interface:
//!
//! `GET /api/chargers/search/?lat=<f64>&lon=<f64>&radius=<text>&available=<bool>`
//!
//! The response is a JSON array of station records.

mod client;
mod error;
mod mock;

use futures::future::BoxFuture;
use serde::Serialize;

use crate::domain::{Coordinate, SearchFilter, Station};

pub use client::{ChargerClient, ChargerClientConfig};
pub use error::ChargerError;
pub use mock::MockChargers;

/// One query against the search backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    pub origin: Coordinate,
    /// Passed through exactly as the user typed it.
    pub radius: String,
    pub available_only: bool,
}

impl SearchQuery {
    pub fn new(origin: Coordinate, filter: &SearchFilter) -> Self {
        Self {
            origin,
            radius: filter.radius.clone(),
            available_only: filter.available_only,
        }
    }
}

/// Something that can answer a radius search.
///
/// Implemented by the HTTP [`ChargerClient`] and by [`MockChargers`] for
/// development and tests.
pub trait ChargerSearch: Send + Sync {
    fn search<'a>(&'a self, query: &'a SearchQuery)
    -> BoxFuture<'a, Result<Vec<Station>, ChargerError>>;
}
