//! Shared query infrastructure: [`RequestDescriptor`], the [`Query`] and
//! [`Paginated`] traits, and the [`QueryCommon`] paging fields.

use std::fmt;

use url::{form_urlencoded, Url};

/// A fully resolved read-only request: resource path relative to the API base
/// plus the query parameters in the order they will be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    path: String,
    params: Vec<(String, String)>,
}

impl RequestDescriptor {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Resource path relative to the API base, e.g. `players`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters in send order. Repeated keys appear once per value.
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Appends one query parameter.
    pub fn push(&mut self, key: &str, value: impl ToString) {
        self.params.push((key.to_string(), value.to_string()));
    }

    /// Resolves the descriptor against `base`, which should end in `/`.
    pub fn to_url(&self, base: &Url) -> Result<Url, url::ParseError> {
        let mut url = base.join(&self.path)?;
        if !self.params.is_empty() {
            url.query_pairs_mut().extend_pairs(self.params.iter());
        }
        Ok(url)
    }
}

impl fmt::Display for RequestDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.params.is_empty() {
            return write!(f, "{}", self.path);
        }
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish();
        write!(f, "{}?{}", self.path, query)
    }
}

/// Implemented by every query builder.
pub trait Query {
    /// Builds the request descriptor for this query. Never validates input.
    fn to_request(&self) -> RequestDescriptor;
}

/// Shared builder methods for queries that accept paging parameters.
pub trait Paginated: Query {
    /// Returns a mutable reference to the common paging fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number. The API treats 0 and 1 as the first page.
    fn with_page(mut self, page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }

    /// Sets the number of results per page.
    fn with_per_page(mut self, per_page: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().per_page = per_page;
        self
    }
}

/// Paging fields shared by `/players` and `/stats` queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryCommon {
    /// Page number. Defaults to 0.
    pub page: u32,
    /// Results per page. Defaults to 25.
    pub per_page: u32,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon {
            page: 0,
            per_page: 25,
        }
    }
}

impl QueryCommon {
    /// Appends `page` and `per_page`, always in that order.
    pub fn add_to_request(&self, request: &mut RequestDescriptor) {
        request.push("page", self.page);
        request.push("per_page", self.per_page);
    }
}
