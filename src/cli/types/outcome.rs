//! Match outcome codes and the league points they award.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one per-team match row, stored as `W`, `D` or `L`.
///
/// # Examples
///
/// ```rust
/// use pl_insights::MatchOutcome;
///
/// assert_eq!(MatchOutcome::Win.points(), 3);
/// assert_eq!(MatchOutcome::Draw.code(), "D");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub const ALL: [MatchOutcome; 3] = [MatchOutcome::Win, MatchOutcome::Draw, MatchOutcome::Loss];

    /// Code stored in `match_result."Result"`.
    pub fn code(&self) -> &'static str {
        match self {
            MatchOutcome::Win => "W",
            MatchOutcome::Draw => "D",
            MatchOutcome::Loss => "L",
        }
    }

    pub fn points(&self) -> u32 {
        match self {
            MatchOutcome::Win => 3,
            MatchOutcome::Draw => 1,
            MatchOutcome::Loss => 0,
        }
    }

    /// SQL `CASE` expression awarding points for `column`.
    ///
    /// Codes outside the closed set score zero, the same as a loss.
    pub fn points_case_sql(column: &str) -> String {
        let mut sql = format!("CASE {}", column);
        for outcome in Self::ALL.iter().filter(|o| o.points() > 0) {
            sql.push_str(&format!(
                " WHEN '{}' THEN {}",
                outcome.code(),
                outcome.points()
            ));
        }
        sql.push_str(" ELSE 0 END");
        sql
    }
}

impl fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
