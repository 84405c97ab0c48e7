//! User roles.
//!
//! A role arrives from an external session provider as a string. Parsing
//! is fail-closed: unrecognized values become `None`, and every policy
//! operation treats `None` as the most restrictive profile rather than an
//! error.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The acting party's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Hospital administrator. Universal override: sees everything.
    Admin,
    /// Treating doctor. Sees clinical data for their own patients.
    Doctor,
    /// Patient. Sees their own records and public doctor listings.
    Patient,
}

impl Role {
    /// Parse a session role value.
    ///
    /// Returns `None` for anything outside the closed set, including the
    /// empty string. Callers pass the `None` straight through to the
    /// policy functions, which degrade to the all-false profile.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Role::Admin),
            "doctor" => Some(Role::Doctor),
            "patient" => Some(Role::Patient),
            _ => None,
        }
    }

    /// The canonical session-string form of this role.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Patient => "patient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
