//! NBA franchise records returned by the `/teams` endpoints.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Numeric identifier for a team.
pub type TeamID = u32;

/// An NBA franchise.
///
/// Two teams are equal when their ids match. Ordering is by full name, with
/// the id as tie-breaker.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Team {
    /// Unique team identifier.
    pub id: TeamID,

    /// Three-letter code, e.g. "LAL".
    pub abbreviation: String,

    pub city: String,

    /// "East" or "West".
    pub conference: String,

    pub division: String,

    /// City plus nickname, e.g. "Los Angeles Lakers".
    pub full_name: String,

    /// Nickname only, e.g. "Lakers".
    pub name: String,
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Team {}

impl PartialOrd for Team {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Team {
    /// Relies on ids being unique: two records with the same id must describe
    /// the same team, otherwise the order is not transitive.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.id == other.id {
            return Ordering::Equal;
        }
        self.full_name
            .cmp(&other.full_name)
            .then(self.id.cmp(&other.id))
    }
}

#[cfg(test)]
pub(crate) fn lakers() -> Team {
    Team {
        id: 14,
        abbreviation: "LAL".to_string(),
        city: "Los Angeles".to_string(),
        conference: "West".to_string(),
        division: "Pacific".to_string(),
        full_name: "Los Angeles Lakers".to_string(),
        name: "Lakers".to_string(),
    }
}
