//! Player records returned by `/players` and embedded in `/stats`.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::{Team, TeamID};

/// Numeric identifier for a player.
pub type PlayerID = u32;

/// A player.
///
/// The `/players` endpoint nests the full [`Team`]; the copy embedded in a
/// stats record only carries `team_id`. Both shapes decode into this type,
/// use [`Player::team_id`] to read the association regardless of shape.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Player {
    /// Unique player identifier.
    pub id: PlayerID,

    pub first_name: String,

    pub last_name: String,

    /// Position code such as "G", "F" or "C". Empty for many historical players.
    pub position: String,

    pub height_feet: Option<f64>,

    pub height_inches: Option<f64>,

    pub weight_pounds: Option<f64>,

    /// Full team record, present on `/players` responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<Team>,

    /// Bare team id, present on players embedded in stats records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamID>,
}

impl Player {
    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The associated team id, from either the nested team or the bare id.
    pub fn team_id(&self) -> Option<TeamID> {
        self.team.as_ref().map(|t| t.id).or(self.team_id)
    }

    /// Height as `(feet, inches)` when both parts are known.
    pub fn height(&self) -> Option<(f64, f64)> {
        Some((self.height_feet?, self.height_inches?))
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Player {}

impl PartialOrd for Player {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Player {
    /// Relies on ids being unique: two records with the same id must describe
    /// the same player, otherwise the order is not transitive.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.id == other.id {
            return Ordering::Equal;
        }
        self.first_name
            .cmp(&other.first_name)
            .then_with(|| self.last_name.cmp(&other.last_name))
            .then(self.id.cmp(&other.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::team::lakers;

    fn lebron() -> Player {
        Player {
            id: 237,
            first_name: "LeBron".to_string(),
            last_name: "James".to_string(),
            position: "F".to_string(),
            height_feet: Some(6.0),
            height_inches: Some(8.0),
            weight_pounds: Some(250.0),
            team: Some(lakers()),
            team_id: None,
        }
    }

    #[test]
    fn team_id_from_nested_team() {
        assert_eq!(lebron().team_id(), Some(14));
    }

    #[test]
    fn team_id_from_stats_shape() {
        let player: Player = serde_json::from_str(
            r#"{"id":237,"first_name":"LeBron","last_name":"James","position":"F","height_feet":6,"height_inches":8,"weight_pounds":250,"team_id":14}"#,
        )
        .unwrap();
        assert!(player.team.is_none());
        assert_eq!(player.team_id(), Some(14));
        assert_eq!(player.height(), Some((6.0, 8.0)));
    }

    #[test]
    fn missing_measurements_decode_as_none() {
        let player: Player = serde_json::from_str(
            r#"{"id":1,"first_name":"Alaa","last_name":"Abdelnaby","position":"","height_feet":null,"height_inches":null,"weight_pounds":null,"team":null}"#,
        )
        .unwrap();
        assert_eq!(player.height(), None);
        assert_eq!(player.weight_pounds, None);
        assert_eq!(player.team_id(), None);
    }

    #[test]
    fn ordered_by_first_name_then_last_name() {
        let lebron = lebron();
        let mut anthony = super::tests::lebron();
        anthony.id = 214;
        anthony.first_name = "Anthony".to_string();
        anthony.last_name = "Davis".to_string();
        let mut bronny = super::tests::lebron();
        bronny.id = 9999;
        bronny.first_name = "LeBron".to_string();
        bronny.last_name = "Adams".to_string();

        let mut players = vec![lebron.clone(), bronny.clone(), anthony.clone()];
        players.sort();
        let ids: Vec<_> = players.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![214, 9999, 237]);
    }

    #[test]
    fn equal_ids_compare_equal() {
        let a = lebron();
        let mut b = lebron();
        b.first_name = "King".to_string();
        assert_eq!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn namesakes_ordered_by_id() {
        let mut players: Vec<Player> = [4000, 237, 1200]
            .iter()
            .map(|&id| Player { id, ..lebron() })
            .collect();
        players.sort();
        let ids: Vec<_> = players.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![237, 1200, 4000]);
    }

    #[test]
    fn full_name() {
        assert_eq!(lebron().full_name(), "LeBron James");
    }
}
