//! Filter types for the football statistics queries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Restricts a query to the players of one club.
///
/// `All` selects the unfiltered query template; `Club` appends an exact
/// `team_name = ?` clause before aggregation. A club name that matches no team
/// produces an empty result, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamFilter {
    #[default]
    All,
    Club(String),
}

impl TeamFilter {
    pub fn club(name: impl Into<String>) -> Self {
        TeamFilter::Club(name.into())
    }

    /// The club name to bind, if any.
    pub fn club_name(&self) -> Option<&str> {
        match self {
            TeamFilter::All => None,
            TeamFilter::Club(name) => Some(name),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, TeamFilter::All)
    }
}

/// An absent or empty name means no filter.
impl From<Option<String>> for TeamFilter {
    fn from(name: Option<String>) -> Self {
        match name {
            Some(name) if !name.is_empty() => TeamFilter::Club(name),
            _ => TeamFilter::All,
        }
    }
}

impl From<Option<&str>> for TeamFilter {
    fn from(name: Option<&str>) -> Self {
        name.map(str::to_string).into()
    }
}

impl fmt::Display for TeamFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamFilter::All => write!(f, "All Clubs"),
            TeamFilter::Club(name) => write!(f, "{}", name),
        }
    }
}
