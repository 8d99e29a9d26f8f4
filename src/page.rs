use std::sync::Arc;

use serde::Serialize;

use crate::validation::check_not_negative;
use crate::{Error, QueryOptions};

/// One page of a query result: the values on this page, the totals for the
/// whole query, and the [`QueryOptions`] that produced it.
///
/// The options are shared, not owned; [`Page::query_next_page`] and
/// [`Page::query_previous_page`] hand back the same `Arc` at a boundary so
/// callers can detect the no-op with [`Arc::ptr_eq`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    values: Vec<T>,
    total_pages: i64,
    total_size: i64,
    query_options: Arc<QueryOptions>,
}

impl<T> Page<T> {
    /// Creates a new page. An empty `values` is valid. Fails if either total
    /// is negative.
    pub fn new(
        values: Vec<T>,
        total_pages: i64,
        total_size: i64,
        query_options: Arc<QueryOptions>,
    ) -> Result<Self, Error> {
        Ok(Page {
            values,
            total_pages: check_not_negative(total_pages, "Total amount of pages")?,
            total_size: check_not_negative(total_size, "Total size")?,
            query_options,
        })
    }

    /// The values embedded in this page.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The amount of results in this page, as opposed to
    /// [`total_size`](Page::total_size) which counts the whole query.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// The page number, taken from the query options that produced this page.
    pub fn page_number(&self) -> i64 {
        self.query_options.page_number()
    }

    /// The total amount of pages for the query this page is a part of.
    pub fn total_pages(&self) -> i64 {
        self.total_pages
    }

    /// The total amount of results across all pages of the query.
    pub fn total_size(&self) -> i64 {
        self.total_size
    }

    /// The options that produced this page.
    pub fn query_options(&self) -> &Arc<QueryOptions> {
        &self.query_options
    }

    /// Whether this is the first page.
    pub fn is_first_page(&self) -> bool {
        self.page_number() == 1
    }

    /// Whether this is the last page. A query with zero pages never reports
    /// its page as last, since page numbers start at 1.
    pub fn is_last_page(&self) -> bool {
        self.page_number() == self.total_pages
    }

    /// The options to request the next page, or the options of this page
    /// unchanged (same `Arc`) when it is already the last.
    pub fn query_next_page(&self) -> Arc<QueryOptions> {
        if self.is_last_page() {
            Arc::clone(&self.query_options)
        } else {
            Arc::new(self.query_options.next())
        }
    }

    /// The options to request the previous page, or the options of this page
    /// unchanged (same `Arc`) when it is already the first.
    pub fn query_previous_page(&self) -> Arc<QueryOptions> {
        if self.is_first_page() {
            Arc::clone(&self.query_options)
        } else {
            Arc::new(self.query_options.previous())
        }
    }
}
