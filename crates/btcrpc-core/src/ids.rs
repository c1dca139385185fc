//! Call identifiers.
//!
//! Every request envelope carries a numeric id. Inside a batch the ids are
//! assigned 0, 1, 2, … in recording order, and that order is the one results
//! come back in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one recorded or sent call. Defaults to 0, the first id of a batch.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CallId(u64);

impl CallId {
    /// Wrap a raw id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw numeric id as it appears on the wire.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// The id that follows this one in recording order.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CallId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<CallId> for u64 {
    fn from(id: CallId) -> Self {
        id.0
    }
}
