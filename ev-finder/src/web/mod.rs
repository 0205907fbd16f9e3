//! Web layer for the charger finder.
//!
//! Serves the finder page and the small JSON API its script talks to.

mod dto;
mod routes;
mod sessions;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use sessions::{SessionStore, SharedSession};
pub use state::AppState;
pub use templates::*;
