mod meta;
pub use self::meta::{
    ListResponse, PaginatedResponse, PaginationMeta, PlayerList, PlayerStatsList, TeamList,
};

mod team;
pub use self::team::{Team, TeamID};

mod player;
pub use self::player::{Player, PlayerID};

mod stats;
pub use self::stats::{Game, PlayerStats, StatKind, StatsID};

mod season_average;
pub use self::season_average::SeasonAverage;
