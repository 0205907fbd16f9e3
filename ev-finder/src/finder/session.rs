//! Per-user finder state.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::chargers::{ChargerError, SearchQuery};
use crate::domain::{Coordinate, SearchFilter, Station, StationId};

use super::directions::directions_url;
use super::error::FinderError;
use super::location::LocationState;
use super::notice::Notice;

/// Handle for one in-flight search.
///
/// Issued by [`FinderSession::begin_search`] and consumed by
/// [`FinderSession::complete_search`]. Only the ticket with the highest
/// sequence number issued so far can change the session.
#[derive(Debug, Clone)]
pub struct SearchTicket {
    seq: u64,
    query: SearchQuery,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }
}

/// What happened when a search result was handed back.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The results replaced the previous set.
    Applied { count: usize },
    /// The search failed; the previous results stay visible.
    Failed(Notice),
    /// A newer search was started after this one; the result was dropped.
    Superseded,
}

/// Immutable snapshot of a session, used to render both the sidebar and
/// the map from the same data.
#[derive(Debug, Clone)]
pub struct FinderView {
    pub location: LocationState,
    pub filter: SearchFilter,
    pub stations: Arc<[Station]>,
    pub has_searched: bool,
    pub selected: Option<Coordinate>,
    pub map_generation: u64,
}

/// State of one user's finder page.
#[derive(Debug, Clone)]
pub struct FinderSession {
    location: LocationState,
    filter: SearchFilter,
    stations: Arc<[Station]>,
    /// Set by the first successful search, never cleared.
    has_searched: bool,
    /// Fly-to target chosen from the list.
    selected: Option<Coordinate>,
    /// Bumped on every applied search so the map starts from scratch.
    map_generation: u64,
    latest_issued: u64,
    notice: Option<Notice>,
}

impl Default for FinderSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FinderSession {
    pub fn new() -> Self {
        Self {
            location: LocationState::Tracking,
            filter: SearchFilter::default(),
            stations: Arc::from(Vec::new()),
            has_searched: false,
            selected: None,
            map_generation: 0,
            latest_issued: 0,
            notice: None,
        }
    }

    pub fn location(&self) -> LocationState {
        self.location
    }

    pub fn filter(&self) -> &SearchFilter {
        &self.filter
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn has_searched(&self) -> bool {
        self.has_searched
    }

    pub fn selected(&self) -> Option<Coordinate> {
        self.selected
    }

    pub fn map_generation(&self) -> u64 {
        self.map_generation
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Record the position fix.
    ///
    /// Returns `false` if the location was already resolved or denied, in
    /// which case nothing changes.
    pub fn resolve_location(&mut self, coordinate: Coordinate) -> bool {
        if !self.location.is_tracking() {
            debug!(?coordinate, "ignoring position report, location already settled");
            return false;
        }
        info!(%coordinate, "location resolved");
        self.location = LocationState::Resolved(coordinate);
        true
    }

    /// Record that the position request failed or was refused.
    ///
    /// The page stays on its tracking placeholder for good.
    pub fn deny_location(&mut self) -> bool {
        if !self.location.is_tracking() {
            debug!("ignoring denial, location already settled");
            return false;
        }
        warn!("location permission denied");
        self.location = LocationState::Denied;
        self.notice = Some(Notice::LocationDenied);
        true
    }

    pub fn set_filter(&mut self, filter: SearchFilter) {
        self.filter = filter;
    }

    /// Start a search with the current filter.
    ///
    /// Fails without issuing a ticket while the location is unknown.
    pub fn begin_search(&mut self) -> Result<SearchTicket, FinderError> {
        let origin = self
            .location
            .coordinate()
            .ok_or(FinderError::LocationUnresolved)?;

        self.latest_issued += 1;
        let ticket = SearchTicket {
            seq: self.latest_issued,
            query: SearchQuery::new(origin, &self.filter),
        };
        debug!(seq = ticket.seq, radius = %ticket.query.radius, "search issued");
        Ok(ticket)
    }

    /// Hand back the backend's answer for `ticket`.
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        result: Result<Vec<Station>, ChargerError>,
    ) -> SearchOutcome {
        if ticket.seq != self.latest_issued {
            debug!(
                seq = ticket.seq,
                latest = self.latest_issued,
                "dropping superseded search result"
            );
            return SearchOutcome::Superseded;
        }

        match result {
            Ok(stations) => {
                let count = stations.len();
                self.stations = Arc::from(stations);
                self.has_searched = true;
                self.map_generation += 1;
                self.selected = None;
                info!(seq = ticket.seq, count, "search applied");
                SearchOutcome::Applied { count }
            }
            Err(e) => {
                let notice = Notice::for_search_error(&e);
                warn!(seq = ticket.seq, error = %e, ?notice, "search failed");
                self.notice = Some(notice);
                SearchOutcome::Failed(notice)
            }
        }
    }

    fn station(&self, id: &StationId) -> Result<&Station, FinderError> {
        self.stations
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| FinderError::UnknownStation(id.clone()))
    }

    /// Make `id` the map's fly-to target.
    ///
    /// Leaves the result list untouched. A later selection replaces an
    /// earlier one even if the map is still moving.
    pub fn select_station(&mut self, id: &StationId) -> Result<Coordinate, FinderError> {
        let position = self.station(id)?.position;
        self.selected = Some(position);
        Ok(position)
    }

    /// Directions link from the user to station `id`.
    ///
    /// Does not change the selection.
    pub fn directions(&self, id: &StationId) -> Result<String, FinderError> {
        let origin = self
            .location
            .coordinate()
            .ok_or(FinderError::LocationUnresolved)?;
        let station = self.station(id)?;
        Ok(directions_url(origin, station.position))
    }

    /// Remove and return the pending notice, so each alert is shown once.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Snapshot everything needed to render the page.
    pub fn view(&self) -> FinderView {
        FinderView {
            location: self.location,
            filter: self.filter.clone(),
            stations: Arc::clone(&self.stations),
            has_searched: self.has_searched,
            selected: self.selected,
            map_generation: self.map_generation,
        }
    }
}
