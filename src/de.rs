//! Reconstruction of [`QueryOptions`] and [`Page`] values from parsed JSON.
//!
//! All entry points operate on [`serde_json::Value`] and fold missing or
//! mistyped fields into the crate's validation errors; extra fields are
//! ignored. Nothing here performs I/O.

use std::sync::Arc;

use serde_json::Value;

use crate::validation::check_not_none;
use crate::{Error, Ordering, Page, QueryOptions};

/// Parses a sort order from its wire token, `asc` or `desc`.
pub fn ordering(token: &str) -> Result<Ordering, Error> {
    token.parse()
}

/// Reconstructs [`QueryOptions`] from a parsed JSON object with `pageNumber`,
/// `pageSize`, `order`, and an optional `sortBy` field. The constructor
/// invariants still apply, so an in-range shape can still fail on its values.
pub fn query_options(body: &Value) -> Result<QueryOptions, Error> {
    let body = check_not_none(body.as_object(), "Query Options JSON")?;

    let page_number = check_not_none(
        body.get("pageNumber").and_then(Value::as_i64),
        "Page number",
    )?;
    let page_size = check_not_none(body.get("pageSize").and_then(Value::as_i64), "Page size")?;
    let order = ordering(body.get("order").and_then(Value::as_str).unwrap_or_default())?;
    let sort_by = body.get("sortBy").and_then(Value::as_str).unwrap_or_default();

    Ok(QueryOptions::new(page_number, page_size)?
        .with_order(order)
        .with_sort_by(sort_by))
}

/// Reconstructs a [`Page`] from a parsed JSON object, applying
/// `value_deserializer` to every element of its `values` array in order.
///
/// The first element failure aborts the whole call; no partial page is
/// returned. The embedded `queryOptions` object is reconstructed via
/// [`query_options`].
pub fn page<T, F>(body: &Value, mut value_deserializer: F) -> Result<Page<T>, Error>
where
    F: FnMut(&Value) -> Result<T, Error>,
{
    let body = check_not_none(body.as_object(), "Page JSON")?;

    let values = check_not_none(body.get("values").and_then(Value::as_array), "Values")?
        .iter()
        .map(&mut value_deserializer)
        .collect::<Result<Vec<T>, Error>>()?;
    let total_pages = check_not_none(
        body.get("totalPages").and_then(Value::as_i64),
        "Total amount of pages",
    )?;
    let total_size = check_not_none(body.get("totalSize").and_then(Value::as_i64), "Total size")?;
    let options = query_options(body.get("queryOptions").unwrap_or(&Value::Null))?;

    tracing::debug!(
        page_number = options.page_number(),
        size = values.len(),
        total_pages,
        "deserialized page"
    );

    Page::new(values, total_pages, total_size, Arc::new(options))
}

/// Reconstructs a [`Page`] whose values are left as raw JSON.
pub fn page_values(body: &Value) -> Result<Page<Value>, Error> {
    page(body, |value| Ok(value.clone()))
}
