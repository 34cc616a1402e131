use crate::types::TeamID;

use super::{Query, RequestDescriptor};

/// Lists every team. The endpoint takes no parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamsQuery;

impl Query for TeamsQuery {
    fn to_request(&self) -> RequestDescriptor {
        RequestDescriptor::new("teams")
    }
}

/// Looks up a single team by id.
#[derive(Debug, Clone, Copy)]
pub struct TeamQuery {
    pub id: TeamID,
}

impl TeamQuery {
    pub fn new(id: TeamID) -> Self {
        Self { id }
    }
}

impl Query for TeamQuery {
    fn to_request(&self) -> RequestDescriptor {
        RequestDescriptor::new(format!("teams/{}", self.id))
    }
}
