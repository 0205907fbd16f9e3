//! Search filter inputs.

use serde::{Deserialize, Serialize};

/// The user's current search inputs.
///
/// `radius` is kept exactly as typed. It is not validated here; the search
/// backend decides whether it is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub radius: String,
    pub available_only: bool,
}

impl SearchFilter {
    pub fn new(radius: impl Into<String>, available_only: bool) -> Self {
        Self {
            radius: radius.into(),
            available_only,
        }
    }
}
