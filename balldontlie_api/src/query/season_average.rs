use crate::types::PlayerID;

use super::{Query, RequestDescriptor};

/// Season averages for a set of players. Without a season the API uses the current one.
#[derive(Debug, Clone, Default)]
pub struct SeasonAveragesQuery {
    pub season: Option<u32>,
    pub player_ids: Vec<PlayerID>,
}

impl Query for SeasonAveragesQuery {
    fn to_request(&self) -> RequestDescriptor {
        let mut request = RequestDescriptor::new("season_averages");
        if let Some(season) = self.season {
            request.push("season", season);
        }
        for player_id in self.player_ids.iter() {
            request.push("player_ids[]", player_id);
        }
        request
    }
}

impl SeasonAveragesQuery {
    pub fn with_season(mut self, season: u32) -> Self {
        self.season = Some(season);
        self
    }

    pub fn with_player_id(mut self, player_id: PlayerID) -> Self {
        self.player_ids.push(player_id);
        self
    }

    pub fn with_player_ids(mut self, player_ids: &[PlayerID]) -> Self {
        self.player_ids.extend_from_slice(player_ids);
        self
    }
}
