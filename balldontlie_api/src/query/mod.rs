mod common;
pub use self::common::{Paginated, Query, QueryCommon, RequestDescriptor};

mod team;
pub use self::team::{TeamQuery, TeamsQuery};

mod player;
pub use self::player::PlayerQuery;

mod stats;
pub use self::stats::StatsQuery;

mod season_average;
pub use self::season_average::SeasonAveragesQuery;
