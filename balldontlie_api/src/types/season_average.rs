use serde::{Deserialize, Serialize};

use super::{stats::null_as_empty, PlayerID};

/// A player's per-game averages over one season, from `/season_averages`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SeasonAverage {
    pub player_id: PlayerID,
    pub season: u32,
    pub games_played: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub min: String,
    pub pts: f64,
    pub ast: f64,
    pub reb: f64,
    pub oreb: f64,
    pub dreb: f64,
    pub stl: f64,
    pub blk: f64,
    pub turnover: f64,
    pub pf: f64,
    pub fgm: f64,
    pub fga: f64,
    pub fg3m: f64,
    pub fg3a: f64,
    pub ftm: f64,
    pub fta: f64,
    pub fg_pct: f64,
    pub fg3_pct: f64,
    pub ft_pct: f64,
}
