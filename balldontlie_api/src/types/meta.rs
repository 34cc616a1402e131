use serde::{Deserialize, Serialize};

use super::{Player, PlayerStats, Team};

/// Pagination metadata attached to `/players` and `/stats` responses.
///
/// Every field is optional on the wire; `next_page` is absent on the last page.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationMeta {
    pub current_page: Option<u32>,
    pub per_page: Option<u32>,
    pub next_page: Option<u32>,
    pub total_pages: Option<u32>,
    pub total_count: Option<u64>,
}

impl PaginationMeta {
    /// True when the server reported no further page.
    pub fn is_exhausted(&self) -> bool {
        self.next_page.is_none()
    }
}

/// A page of records together with its pagination metadata.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// A plain list of records without pagination metadata.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

pub type TeamList = ListResponse<Team>;
pub type PlayerList = PaginatedResponse<Player>;
pub type PlayerStatsList = PaginatedResponse<PlayerStats>;

#[cfg(test)]
mod tests {
    use super::PaginationMeta;

    #[test]
    fn exhausted_when_next_page_missing() {
        let meta: PaginationMeta = serde_json::from_str(
            r#"{"current_page": 3, "per_page": 25, "next_page": null, "total_pages": 3, "total_count": 70}"#,
        )
        .unwrap();
        assert!(meta.is_exhausted());
        assert_eq!(meta.current_page, Some(3));
        assert_eq!(meta.total_count, Some(70));
    }

    #[test]
    fn not_exhausted_with_next_page() {
        let meta: PaginationMeta =
            serde_json::from_str(r#"{"current_page": 1, "next_page": 2}"#).unwrap();
        assert!(!meta.is_exhausted());
        assert_eq!(meta.per_page, None);
        assert_eq!(meta.total_pages, None);
    }
}
