//! Row limit for ranking queries.

use crate::error::{InsightsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum number of rows a ranking query returns.
///
/// Truncation happens after sorting, so a limit larger than the number of
/// ranked rows simply returns every row. `Limit::new(0)` is valid and yields
/// an empty result.
///
/// # Examples
///
/// ```rust
/// use pl_insights::Limit;
///
/// let limit = Limit::new(10);
/// assert_eq!(limit.as_u32(), 10);
/// assert_eq!(limit.to_string(), "10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Limit(pub u32);

impl Limit {
    pub fn new(rows: u32) -> Self {
        Self(rows)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl Default for Limit {
    fn default() -> Self {
        Self(10)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Limit {
    type Err = InsightsError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(Self)
            .map_err(|_| InsightsError::InvalidLimit {
                value: s.to_string(),
            })
    }
}
