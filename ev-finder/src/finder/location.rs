//! Where the user is.

use crate::domain::Coordinate;

/// Outcome of the one-shot position request.
///
/// Starts as `Tracking`. The first report moves it to `Resolved` or
/// `Denied` and it never changes again; a later permission change is not
/// picked up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LocationState {
    #[default]
    Tracking,
    Denied,
    Resolved(Coordinate),
}

impl LocationState {
    /// The user's position, once known.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            LocationState::Resolved(c) => Some(*c),
            _ => None,
        }
    }

    /// Whether the first report is still outstanding.
    pub fn is_tracking(&self) -> bool {
        matches!(self, LocationState::Tracking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_tracking() {
        let state = LocationState::default();
        assert!(state.is_tracking());
        assert_eq!(state.coordinate(), None);
    }

    #[test]
    fn resolved_exposes_coordinate() {
        let c = Coordinate::new(12.9716, 77.5946).unwrap();
        let state = LocationState::Resolved(c);
        assert!(!state.is_tracking());
        assert_eq!(state.coordinate(), Some(c));
    }

    #[test]
    fn denied_has_no_coordinate() {
        assert_eq!(LocationState::Denied.coordinate(), None);
    }
}
