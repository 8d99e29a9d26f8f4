use std::sync::Arc;

use serde::Serialize;

use crate::validation::{check_not_less_than, check_not_negative};
use crate::{Error, Page};

use super::Ordering;

/// The options sent along when requesting one page of a query: page number,
/// page size, sort order, and an optional sort field.
///
/// Immutable after construction; `previous` and `next` derive the options for
/// an adjacent page as a new value. The same type describes a request on the
/// client and the originating request inside a [`Page`] response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOptions {
    page_number: i64,
    page_size: i64,
    order: Ordering,
    sort_by: String,
}

impl QueryOptions {
    /// Creates options for the given page, sorted ascending with no explicit
    /// sort field. Fails if `page_number` is below 1 or `page_size` is
    /// negative.
    pub fn new(page_number: i64, page_size: i64) -> Result<Self, Error> {
        Ok(QueryOptions {
            page_number: check_not_less_than(1, page_number, "Page number")?,
            page_size: check_not_negative(page_size, "Page size")?,
            order: Ordering::default(),
            sort_by: String::new(),
        })
    }

    /// Sets the sort order.
    pub fn with_order(mut self, order: Ordering) -> Self {
        self.order = order;
        self
    }

    /// Sets the field to sort by. An empty string means no explicit sort
    /// field and is accepted as-is.
    pub fn with_sort_by(mut self, sort_by: &str) -> Self {
        self.sort_by = sort_by.to_string();
        self
    }

    /// The page number of the requested page (1-indexed).
    pub fn page_number(&self) -> i64 {
        self.page_number
    }

    /// The size of the requested page.
    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    /// The sort order of the query.
    pub fn order(&self) -> Ordering {
        self.order
    }

    /// The field the query sorts by, empty when unset.
    pub fn sort_by(&self) -> &str {
        &self.sort_by
    }

    /// Serializes these options for use in a URL, e.g.
    /// `?pageNumber=1&pageSize=15&order=asc&sort=name`.
    ///
    /// Field order is fixed; `sort` is omitted when no sort field is set and
    /// the `?` prefix is emitted only when `include_prefix` is true. No
    /// URL-encoding is performed; callers must encode a sort field that may
    /// contain reserved characters.
    pub fn query_string(&self, include_prefix: bool) -> String {
        let mut query_string = format!(
            "pageNumber={}&pageSize={}&order={}",
            self.page_number, self.page_size, self.order
        );

        if !self.sort_by.is_empty() {
            query_string = format!("{}&sort={}", query_string, self.sort_by);
        }

        if include_prefix {
            query_string = format!("?{}", query_string);
        }

        query_string
    }

    /// The options for the previous page. At page 1 this is a no-op and the
    /// result equals `self`; the page number never goes below 1.
    pub fn previous(&self) -> QueryOptions {
        if self.page_number == 1 {
            return self.clone();
        }
        QueryOptions {
            page_number: self.page_number - 1,
            ..self.clone()
        }
    }

    /// The options for the next page. Unbounded, since these options alone do
    /// not know the total page count; [`Page::query_next_page`] enforces the
    /// upper boundary.
    pub fn next(&self) -> QueryOptions {
        QueryOptions {
            page_number: self.page_number + 1,
            ..self.clone()
        }
    }

    /// Wraps the results of running this query into a [`Page`] that can be
    /// sent back to the issuer. Fails if either total is negative.
    pub fn to_page<T>(
        &self,
        results: Vec<T>,
        total_pages: i64,
        total_size: i64,
    ) -> Result<Page<T>, Error> {
        Page::new(results, total_pages, total_size, Arc::new(self.clone()))
    }
}
