//! The charger finder component.
//!
//! A [`FinderSession`] holds everything one user sees: where they are,
//! what they searched for, the stations that came back and which one is
//! selected on the map. The flow is:
//!
//! 1. The browser reports a position fix (or a denial) once.
//! 2. The user edits the radius and availability filter.
//! 3. A search is started with [`FinderSession::begin_search`], the backend
//!    is queried without holding the session, and the result is handed back
//!    through [`FinderSession::complete_search`].
//!
//! Every search carries a sequence number, and only the most recently
//! started search may change the session. Slower, older responses are
//! dropped.

mod directions;
mod error;
mod location;
mod notice;
mod session;

#[cfg(test)]
mod session_tests;

pub use directions::directions_url;
pub use error::FinderError;
pub use location::LocationState;
pub use notice::Notice;
pub use session::{FinderSession, FinderView, SearchOutcome, SearchTicket};
