//! Staff member identity
//!
//! A staff member is just a named person. Identity is the
//! (given name, family name) pair; there is no separate identifier.
//! Sorted listings order by family name first, then given name.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A registered staff member. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StaffMember {
    given_name: String,
    family_name: String,
}

impl StaffMember {
    /// Creates a staff member from the two name parts.
    pub fn new(given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            given_name: given_name.into(),
            family_name: family_name.into(),
        }
    }

    /// Returns the given name.
    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    /// Returns the family name.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Renders the name family-first, as roster headers require:
    /// `"Lee, Ann"`.
    pub fn reversed_name(&self) -> String {
        format!("{}, {}", self.family_name, self.given_name)
    }
}

impl Ord for StaffMember {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.family_name, &self.given_name).cmp(&(&other.family_name, &other.given_name))
    }
}

impl PartialOrd for StaffMember {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for StaffMember {
    /// The conventional name ordering, used when listing and finding
    /// staff: `"Ann Lee"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.given_name, self.family_name)
    }
}
