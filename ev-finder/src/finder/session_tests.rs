//! Scenario tests for the finder session state machine.

use super::*;
use crate::chargers::ChargerError;
use crate::domain::{Coordinate, SearchFilter, Station, StationId};

fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).unwrap()
}

fn user() -> Coordinate {
    coord(12.9716, 77.5946)
}

fn station(id: &str, lat: f64, lon: f64, available: bool) -> Station {
    Station {
        id: StationId::new(id),
        name: format!("Station {id}"),
        position: coord(lat, lon),
        power_kw: 50.0,
        is_available: available,
        distance: 1.2,
    }
}

fn bad_radius() -> ChargerError {
    ChargerError::Api {
        status: 400,
        message: "radius must be a number".into(),
    }
}

fn located() -> FinderSession {
    let mut session = FinderSession::new();
    assert!(session.resolve_location(user()));
    session
}

/// Run a full search that succeeds with `stations`.
fn search_with(session: &mut FinderSession, stations: Vec<Station>) -> SearchOutcome {
    let ticket = session.begin_search().unwrap();
    session.complete_search(ticket, Ok(stations))
}

// ============================================================================
// Location
// ============================================================================

#[test]
fn new_session_is_tracking_with_nothing_shown() {
    let session = FinderSession::new();
    assert!(session.location().is_tracking());
    assert!(!session.has_searched());
    assert!(session.stations().is_empty());
    assert_eq!(session.map_generation(), 0);
    assert_eq!(session.notice(), None);
}

#[test]
fn location_is_immutable_after_first_fix() {
    let mut session = located();
    assert!(!session.resolve_location(coord(51.5, -0.12)));
    assert!(!session.deny_location());
    assert_eq!(session.location(), LocationState::Resolved(user()));
}

#[test]
fn denial_is_terminal_and_raises_notice() {
    let mut session = FinderSession::new();
    assert!(session.deny_location());
    assert_eq!(session.location(), LocationState::Denied);
    assert_eq!(session.take_notice(), Some(Notice::LocationDenied));

    // A late fix does not rescue a denied session.
    assert!(!session.resolve_location(user()));
    assert_eq!(session.location(), LocationState::Denied);
}

#[test]
fn search_requires_location() {
    let mut session = FinderSession::new();
    session.set_filter(SearchFilter::new("5", false));
    assert_eq!(
        session.begin_search().unwrap_err(),
        FinderError::LocationUnresolved
    );

    session.deny_location();
    assert_eq!(
        session.begin_search().unwrap_err(),
        FinderError::LocationUnresolved
    );
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn ticket_carries_filter_and_origin() {
    let mut session = located();
    session.set_filter(SearchFilter::new("5", true));

    let ticket = session.begin_search().unwrap();
    assert_eq!(ticket.seq(), 1);
    assert_eq!(ticket.query().origin, user());
    assert_eq!(ticket.query().radius, "5");
    assert!(ticket.query().available_only);
}

#[test]
fn radius_is_not_validated_before_submission() {
    let mut session = located();
    session.set_filter(SearchFilter::new("", false));
    let ticket = session.begin_search().unwrap();
    assert_eq!(ticket.query().radius, "");
}

#[test]
fn worked_example_single_station() {
    let mut session = located();
    session.set_filter(SearchFilter::new("5", false));

    let outcome = search_with(&mut session, vec![station("1", 12.98, 77.60, true)]);

    assert_eq!(outcome, SearchOutcome::Applied { count: 1 });
    assert!(session.has_searched());
    assert_eq!(session.stations().len(), 1);
    assert_eq!(session.stations()[0].name, "Station 1");
    assert_eq!(session.map_generation(), 1);
}

#[test]
fn results_are_replaced_wholesale() {
    let mut session = located();
    session.set_filter(SearchFilter::new("5", false));

    search_with(
        &mut session,
        vec![station("1", 12.98, 77.60, true), station("2", 12.99, 77.61, false)],
    );
    search_with(&mut session, vec![station("3", 13.0, 77.7, true)]);

    let ids: Vec<&str> = session.stations().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["3"]);
    assert_eq!(session.map_generation(), 2);
}

#[test]
fn empty_result_still_latches_has_searched() {
    let mut session = located();
    session.set_filter(SearchFilter::new("1", false));
    let outcome = search_with(&mut session, vec![]);
    assert_eq!(outcome, SearchOutcome::Applied { count: 0 });
    assert!(session.has_searched());
    assert!(session.stations().is_empty());
}

#[test]
fn failure_keeps_previous_results_and_latch() {
    let mut session = located();
    session.set_filter(SearchFilter::new("5", false));
    search_with(&mut session, vec![station("1", 12.98, 77.60, true)]);

    session.set_filter(SearchFilter::new("", false));
    let ticket = session.begin_search().unwrap();
    let outcome = session.complete_search(ticket, Err(bad_radius()));

    assert_eq!(outcome, SearchOutcome::Failed(Notice::InvalidRadius));
    assert!(session.has_searched());
    assert_eq!(session.stations().len(), 1);
    assert_eq!(session.map_generation(), 1);
    assert_eq!(session.take_notice(), Some(Notice::InvalidRadius));
    assert_eq!(session.take_notice(), None);
}

#[test]
fn failure_before_any_success_does_not_latch() {
    let mut session = located();
    let ticket = session.begin_search().unwrap();
    let outcome = session.complete_search(
        ticket,
        Err(ChargerError::Json {
            message: "expected a sequence".into(),
        }),
    );

    assert_eq!(outcome, SearchOutcome::Failed(Notice::SearchUnavailable));
    assert!(!session.has_searched());
}

#[test]
fn stale_success_is_dropped() {
    let mut session = located();
    session.set_filter(SearchFilter::new("50", false));
    let slow = session.begin_search().unwrap();
    session.set_filter(SearchFilter::new("5", false));
    let fast = session.begin_search().unwrap();
    assert!(fast.seq() > slow.seq());

    let near = vec![station("near", 12.98, 77.60, true)];
    let far = vec![
        station("near", 12.98, 77.60, true),
        station("far", 13.3, 77.9, true),
    ];

    assert_eq!(
        session.complete_search(fast, Ok(near)),
        SearchOutcome::Applied { count: 1 }
    );
    assert_eq!(session.complete_search(slow, Ok(far)), SearchOutcome::Superseded);

    assert_eq!(session.stations().len(), 1);
    assert_eq!(session.map_generation(), 1);
}

#[test]
fn stale_failure_is_dropped() {
    let mut session = located();
    session.set_filter(SearchFilter::new("5", false));
    let first = session.begin_search().unwrap();
    let second = session.begin_search().unwrap();

    assert_eq!(
        session.complete_search(first, Err(bad_radius())),
        SearchOutcome::Superseded
    );
    assert_eq!(session.notice(), None);

    assert_eq!(
        session.complete_search(second, Ok(vec![])),
        SearchOutcome::Applied { count: 0 }
    );
}

#[test]
fn older_response_arriving_first_is_still_dropped() {
    let mut session = located();
    session.set_filter(SearchFilter::new("5", false));
    let first = session.begin_search().unwrap();
    let second = session.begin_search().unwrap();

    assert_eq!(
        session.complete_search(first, Ok(vec![station("1", 12.98, 77.60, true)])),
        SearchOutcome::Superseded
    );
    assert!(!session.has_searched());

    session.complete_search(second, Ok(vec![station("2", 12.97, 77.59, true)]));
    assert_eq!(session.stations()[0].id.as_str(), "2");
}

// ============================================================================
// Selection and directions
// ============================================================================

#[test]
fn selecting_sets_fly_to_target_only() {
    let mut session = located();
    session.set_filter(SearchFilter::new("5", false));
    search_with(
        &mut session,
        vec![station("1", 12.98, 77.60, true), station("2", 12.99, 77.61, false)],
    );
    let generation = session.map_generation();

    let target = session.select_station(&StationId::new("2")).unwrap();

    assert_eq!(target, coord(12.99, 77.61));
    assert_eq!(session.selected(), Some(target));
    assert_eq!(session.stations().len(), 2);
    assert_eq!(session.map_generation(), generation);
}

#[test]
fn later_selection_supersedes_earlier() {
    let mut session = located();
    session.set_filter(SearchFilter::new("5", false));
    search_with(
        &mut session,
        vec![station("1", 12.98, 77.60, true), station("2", 12.99, 77.61, false)],
    );

    session.select_station(&StationId::new("1")).unwrap();
    session.select_station(&StationId::new("2")).unwrap();
    assert_eq!(session.selected(), Some(coord(12.99, 77.61)));
}

#[test]
fn selecting_unknown_station_fails() {
    let mut session = located();
    session.set_filter(SearchFilter::new("5", false));
    search_with(&mut session, vec![station("1", 12.98, 77.60, true)]);

    let err = session.select_station(&StationId::new("99")).unwrap_err();
    assert_eq!(err, FinderError::UnknownStation(StationId::new("99")));
    assert_eq!(session.selected(), None);
}

#[test]
fn new_search_clears_selection() {
    let mut session = located();
    session.set_filter(SearchFilter::new("5", false));
    search_with(&mut session, vec![station("1", 12.98, 77.60, true)]);
    session.select_station(&StationId::new("1")).unwrap();

    search_with(&mut session, vec![station("1", 12.98, 77.60, true)]);
    assert_eq!(session.selected(), None);
}

#[test]
fn directions_do_not_select() {
    let mut session = located();
    session.set_filter(SearchFilter::new("5", false));
    search_with(&mut session, vec![station("1", 12.98, 77.60, true)]);

    let url = session.directions(&StationId::new("1")).unwrap();

    assert_eq!(
        url,
        "https://www.google.com/maps/dir/?api=1&origin=12.9716,77.5946&destination=12.98,77.6"
    );
    assert_eq!(session.selected(), None);
}

#[test]
fn directions_for_unknown_station_fail() {
    let session = located();
    assert!(matches!(
        session.directions(&StationId::new("1")),
        Err(FinderError::UnknownStation(_))
    ));
}

// ============================================================================
// Snapshots
// ============================================================================

#[test]
fn view_is_a_consistent_snapshot() {
    let mut session = located();
    session.set_filter(SearchFilter::new("5", true));
    search_with(&mut session, vec![station("1", 12.98, 77.60, true)]);

    let view = session.view();

    // Later searches don't reach into an existing snapshot.
    search_with(&mut session, vec![]);

    assert_eq!(view.stations.len(), 1);
    assert_eq!(view.map_generation, 1);
    assert_eq!(view.filter, SearchFilter::new("5", true));
    assert!(view.has_searched);
    assert_eq!(view.location.coordinate(), Some(user()));
}
