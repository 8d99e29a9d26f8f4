//! Error types for the pagination model.

/// Validation and parsing failures. Every error is raised synchronously at
/// construction or parsing time; a value that exists is always valid.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// A required object, array, or field is missing.
    #[error("{0} can not be null.")]
    Null(&'static str),
    /// A count or size argument is negative.
    #[error("{0} can not be negative.")]
    Negative(&'static str),
    /// A value is below its required floor.
    #[error("{subject} can not be less than {min}.")]
    LessThan { subject: &'static str, min: i64 },
    /// A required string token is missing or blank.
    #[error("{0} can not be empty.")]
    Empty(&'static str),
    /// A sort-order token matched neither recognized value.
    #[error("Order '{0}' is not valid, should be 'asc' or 'desc'.")]
    InvalidOrder(String),
}
