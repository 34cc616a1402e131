use super::{
    common::{Paginated, QueryCommon},
    Query, RequestDescriptor,
};

/// Pages through `/players`, optionally filtered by a name search.
#[derive(Debug, Clone, Default)]
pub struct PlayerQuery {
    pub common: QueryCommon,
    pub search: Option<String>,
}

impl Query for PlayerQuery {
    fn to_request(&self) -> RequestDescriptor {
        let mut request = RequestDescriptor::new("players");
        self.common.add_to_request(&mut request);
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            request.push("search", search);
        }
        request
    }
}

impl Paginated for PlayerQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
}

impl PlayerQuery {
    /// Filters by first or last name. An empty string sends no filter.
    pub fn with_search(mut self, search: &str) -> Self {
        self.search = Some(search.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{Paginated, PlayerQuery, Query};

    #[test]
    fn test_player_query() {
        insta::assert_snapshot!(
            PlayerQuery::default().to_request().to_string(),
            @"players?page=0&per_page=25"
        );

        insta::assert_snapshot!(
            PlayerQuery::default()
                .with_page(0)
                .with_per_page(40)
                .with_search("james")
                .to_request()
                .to_string(),
            @"players?page=0&per_page=40&search=james"
        );

        insta::assert_snapshot!(
            PlayerQuery::default()
                .with_page(3)
                .with_search("")
                .to_request()
                .to_string(),
            @"players?page=3&per_page=25"
        );
    }
}
