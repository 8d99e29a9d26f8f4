use crate::Error;

/// Returns the value unchanged, or [`Error::Null`] naming `subject` if it is
/// absent. This is the only place absence is legitimately encountered; a value
/// that passes is valid for the rest of its lifetime.
pub fn check_not_none<T>(value: Option<T>, subject: &'static str) -> Result<T, Error> {
    value.ok_or(Error::Null(subject))
}

/// Returns the value unchanged, or [`Error::Negative`] naming `subject` if it
/// is below zero.
pub fn check_not_negative(value: i64, subject: &'static str) -> Result<i64, Error> {
    if value < 0 {
        return Err(Error::Negative(subject));
    }
    Ok(value)
}

/// Returns the value unchanged, or [`Error::LessThan`] if it is below `min`.
pub fn check_not_less_than(min: i64, value: i64, subject: &'static str) -> Result<i64, Error> {
    if value < min {
        return Err(Error::LessThan { subject, min });
    }
    Ok(value)
}

/// Returns the string unchanged (untrimmed), or [`Error::Empty`] naming
/// `subject` if it is absent or blank after trimming.
pub fn check_not_empty<'a>(value: Option<&'a str>, subject: &'static str) -> Result<&'a str, Error> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(s),
        _ => Err(Error::Empty(subject)),
    }
}
