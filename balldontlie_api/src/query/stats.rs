use chrono::NaiveDate;

use crate::types::PlayerID;

use super::{
    common::{Paginated, QueryCommon},
    Query, RequestDescriptor,
};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Pages through `/stats`, filtered by seasons, players and a date window.
///
/// Seasons and player ids are sent as repeated `seasons[]` / `player_ids[]`
/// parameters in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct StatsQuery {
    pub common: QueryCommon,
    pub seasons: Vec<u32>,
    pub player_ids: Vec<PlayerID>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl Query for StatsQuery {
    fn to_request(&self) -> RequestDescriptor {
        let mut request = RequestDescriptor::new("stats");
        self.common.add_to_request(&mut request);
        for season in self.seasons.iter() {
            request.push("seasons[]", season);
        }
        for player_id in self.player_ids.iter() {
            request.push("player_ids[]", player_id);
        }
        if let Some(start_date) = self.start_date.as_deref().filter(|d| !d.is_empty()) {
            request.push("start_date", start_date);
        }
        if let Some(end_date) = self.end_date.as_deref().filter(|d| !d.is_empty()) {
            request.push("end_date", end_date);
        }
        request
    }
}

impl Paginated for StatsQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl StatsQuery {
    pub fn with_season(mut self, season: u32) -> Self {
        self.seasons.push(season);
        self
    }
    pub fn with_seasons(mut self, seasons: &[u32]) -> Self {
        self.seasons.extend_from_slice(seasons);
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

    /// Sets the lower date bound, passed through verbatim.
    pub fn with_start_date(mut self, start_date: &str) -> Self {
        self.start_date = Some(start_date.to_string());
        self
    }
    pub fn with_start_date_naive(self, start_date: NaiveDate) -> Self {
        let formatted = start_date.format(DATE_FORMAT).to_string();
        self.with_start_date(&formatted)
    }

    /// Sets the upper date bound, passed through verbatim.
    pub fn with_end_date(mut self, end_date: &str) -> Self {
        self.end_date = Some(end_date.to_string());
        self
    }
    pub fn with_end_date_naive(self, end_date: NaiveDate) -> Self {
        let formatted = end_date.format(DATE_FORMAT).to_string();
        self.with_end_date(&formatted)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::query::{Paginated, Query, StatsQuery};

    #[test]
    fn test_stats_query() {
        insta::assert_snapshot!(
            StatsQuery::default().to_request().to_string(),
            @"stats?page=0&per_page=25"
        );

        insta::assert_snapshot!(
            StatsQuery::default()
                .with_per_page(100)
                .with_season(2023)
                .with_player_ids(&[237, 115, 15])
                .to_request()
                .to_string(),
            @"stats?page=0&per_page=100&seasons%5B%5D=2023&player_ids%5B%5D=237&player_ids%5B%5D=115&player_ids%5B%5D=15"
        );

        insta::assert_snapshot!(
            StatsQuery::default()
                .with_page(2)
                .with_player_id(237)
                .with_start_date("2024-01-01")
                .with_end_date("2024-01-31")
                .to_request()
                .to_string(),
            @"stats?page=2&per_page=25&player_ids%5B%5D=237&start_date=2024-01-01&end_date=2024-01-31"
        );
    }

    #[test]
    fn naive_dates_are_iso_formatted() {
        let query = StatsQuery::default()
            .with_start_date_naive(NaiveDate::from_ymd_opt(2024, 2, 3).unwrap())
            .with_end_date_naive(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
        assert_eq!(query.start_date.as_deref(), Some("2024-02-03"));
        assert_eq!(query.end_date.as_deref(), Some("2024-12-31"));
    }

    #[test]
    fn empty_dates_are_omitted() {
        let request = StatsQuery::default()
            .with_start_date("")
            .with_end_date("")
            .to_request();
        assert_eq!(request.params().len(), 2);
    }

    #[test]
    fn malformed_input_is_passed_through() {
        let request = StatsQuery::default()
            .with_season(23)
            .with_start_date("yesterday")
            .to_request();
        let params = request.params();
        assert!(params.contains(&("seasons[]".to_string(), "23".to_string())));
        assert!(params.contains(&("start_date".to_string(), "yesterday".to_string())));
    }
}
