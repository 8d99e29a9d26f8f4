use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Sort order of a query. Serializes to the wire tokens `asc` and `desc`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ordering {
    /// Ascending order. This is the default.
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Descending order.
    #[serde(rename = "desc")]
    Descending,
}

impl Ordering {
    /// The wire token for this order.
    pub fn as_str(&self) -> &'static str {
        match self {
            Ordering::Ascending => "asc",
            Ordering::Descending => "desc",
        }
    }
}

impl fmt::Display for Ordering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Ordering {
    type Err = Error;

    /// Token matching is case sensitive; only `asc` and `desc` are accepted.
    /// Blank input fails with [`Error::Empty`], anything else unrecognized
    /// with [`Error::InvalidOrder`] naming the offending token.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::validation::check_not_empty(Some(s), "Order")?;
        match s {
            "asc" => Ok(Ordering::Ascending),
            "desc" => Ok(Ordering::Descending),
            other => Err(Error::InvalidOrder(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Ordering;
    use crate::Error;

    #[test]
    fn parses_wire_tokens() {
        assert_eq!("asc".parse::<Ordering>(), Ok(Ordering::Ascending));
        assert_eq!("desc".parse::<Ordering>(), Ok(Ordering::Descending));
    }

    #[test]
    fn blank_input_is_an_empty_error() {
        assert_eq!("".parse::<Ordering>(), Err(Error::Empty("Order")));
        assert_eq!("   ".parse::<Ordering>(), Err(Error::Empty("Order")));
    }

    #[test]
    fn unrecognized_tokens_name_the_offender() {
        let err = "xyz".parse::<Ordering>().unwrap_err();
        assert_eq!(err, Error::InvalidOrder("xyz".to_string()));
        assert_eq!(
            err.to_string(),
            "Order 'xyz' is not valid, should be 'asc' or 'desc'."
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(
            "ASC".parse::<Ordering>(),
            Err(Error::InvalidOrder("ASC".to_string()))
        );
        assert_eq!(
            "Desc".parse::<Ordering>(),
            Err(Error::InvalidOrder("Desc".to_string()))
        );
    }

    #[test]
    fn display_matches_wire_tokens() {
        assert_eq!(Ordering::Ascending.to_string(), "asc");
        assert_eq!(Ordering::Descending.to_string(), "desc");
    }
}
