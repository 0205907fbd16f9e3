//! Finder error types.

use crate::domain::StationId;

/// Errors from operations on a [`super::FinderSession`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FinderError {
    /// The operation needs the user's position, which is not known yet
    #[error("location has not been resolved")]
    LocationUnresolved,

    /// The station is not part of the current result set
    #[error("station {0} is not in the current results")]
    UnknownStation(StationId),
}
