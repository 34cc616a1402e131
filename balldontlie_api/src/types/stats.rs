//! Box-score records returned by the `/stats` endpoint.

use std::cmp::Ordering;

use serde::{Deserialize, Deserializer, Serialize};

use super::{Player, Team, TeamID};

/// Numeric identifier for a single stats line.
pub type StatsID = u64;

/// One player's box score for one game.
///
/// Equality is by id. Ordering follows the player's first name, with the
/// stats id as tie-breaker.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlayerStats {
    pub id: StatsID,

    /// The player this line belongs to. Carries `team_id` instead of a nested team.
    pub player: Player,

    /// The team the player appeared for in this game.
    pub team: Team,

    /// Game context. Older payloads may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<Game>,

    /// Assists.
    pub ast: Option<u32>,

    /// Blocks.
    pub blk: u32,

    /// Total rebounds.
    pub reb: u32,

    /// Defensive rebounds.
    pub dreb: u32,

    /// Offensive rebounds.
    pub oreb: u32,

    /// Steals.
    pub stl: u32,

    /// Personal fouls.
    pub pf: u32,

    /// Minutes played as free text, e.g. "34:12" or "34".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub min: String,

    pub turnover: u32,

    /// Points.
    pub pts: u32,

    pub fgm: u32,
    pub fga: u32,
    pub fg_pct: Option<f64>,

    pub fg3m: u32,
    pub fg3a: u32,
    pub fg3_pct: Option<f64>,

    pub ftm: u32,
    pub fta: u32,
    pub ft_pct: Option<f64>,
}

impl PlayerStats {
    /// Field goal percentage as a fraction, falling back to `fgm / fga`.
    pub fn fg_pct_value(&self) -> f64 {
        self.fg_pct.unwrap_or_else(|| ratio(self.fgm, self.fga))
    }

    /// Three point percentage as a fraction, falling back to `fg3m / fg3a`.
    pub fn fg3_pct_value(&self) -> f64 {
        self.fg3_pct.unwrap_or_else(|| ratio(self.fg3m, self.fg3a))
    }

    /// Free throw percentage as a fraction, falling back to `ftm / fta`.
    pub fn ft_pct_value(&self) -> f64 {
        self.ft_pct.unwrap_or_else(|| ratio(self.ftm, self.fta))
    }
}

impl PartialEq for PlayerStats {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PlayerStats {}

impl PartialOrd for PlayerStats {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PlayerStats {
    // Same unique-id assumption as `Player`.
    fn cmp(&self, other: &Self) -> Ordering {
        if self.id == other.id {
            return Ordering::Equal;
        }
        self.player
            .first_name
            .cmp(&other.player.first_name)
            .then(self.id.cmp(&other.id))
    }
}

/// Game context embedded in a stats record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Game {
    pub id: u64,

    /// ISO-8601 timestamp as sent by the API.
    pub date: String,

    pub season: u32,

    /// "Final", a tip-off time, or a quarter marker.
    pub status: String,

    pub period: u32,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub time: String,

    pub postseason: bool,

    pub home_team_id: TeamID,

    pub visitor_team_id: TeamID,

    pub home_team_score: u32,

    pub visitor_team_score: u32,
}

/// The metrics that can be charted for a set of stats lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Assists,
    Blocks,
    FieldGoals,
    FreeThrows,
    ThreePointers,
    Points,
    Rebounds,
    DefensiveRebounds,
    OffensiveRebounds,
}

impl StatKind {
    pub const ALL: [StatKind; 9] = [
        StatKind::Assists,
        StatKind::Blocks,
        StatKind::FieldGoals,
        StatKind::FreeThrows,
        StatKind::ThreePointers,
        StatKind::Points,
        StatKind::Rebounds,
        StatKind::DefensiveRebounds,
        StatKind::OffensiveRebounds,
    ];

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Assists => "Assists",
            StatKind::Blocks => "Blocks",
            StatKind::FieldGoals => "Field Goals",
            StatKind::FreeThrows => "Free Throws",
            StatKind::ThreePointers => "Three Pointers",
            StatKind::Points => "Points Scored",
            StatKind::Rebounds => "Rebounds",
            StatKind::DefensiveRebounds => "Defensive Rebounds",
            StatKind::OffensiveRebounds => "Offensive Rebounds",
        }
    }

    /// Reads this metric from a stats line. Shooting splits are scaled to 0-100.
    pub fn value_of(&self, stats: &PlayerStats) -> f64 {
        match self {
            StatKind::Assists => f64::from(stats.ast.unwrap_or(0)),
            StatKind::Blocks => f64::from(stats.blk),
            StatKind::FieldGoals => stats.fg_pct_value() * 100.0,
            StatKind::FreeThrows => stats.ft_pct_value() * 100.0,
            StatKind::ThreePointers => stats.fg3_pct_value() * 100.0,
            StatKind::Points => f64::from(stats.pts),
            StatKind::Rebounds => f64::from(stats.reb),
            StatKind::DefensiveRebounds => f64::from(stats.dreb),
            StatKind::OffensiveRebounds => f64::from(stats.oreb),
        }
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for StatKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ast" | "assists" => Ok(StatKind::Assists),
            "blk" | "blocks" => Ok(StatKind::Blocks),
            "fg" | "field-goals" => Ok(StatKind::FieldGoals),
            "ft" | "free-throws" => Ok(StatKind::FreeThrows),
            "fg3" | "three-pointers" => Ok(StatKind::ThreePointers),
            "pts" | "points" => Ok(StatKind::Points),
            "reb" | "rebounds" => Ok(StatKind::Rebounds),
            "dreb" | "defensive-rebounds" => Ok(StatKind::DefensiveRebounds),
            "oreb" | "offensive-rebounds" => Ok(StatKind::OffensiveRebounds),
            _ => Err(()),
        }
    }
}

fn ratio(made: u32, attempted: u32) -> f64 {
    if attempted == 0 {
        0.0
    } else {
        f64::from(made) / f64::from(attempted)
    }
}

pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
