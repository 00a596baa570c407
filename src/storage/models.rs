//! Row types returned by the query layer

use serde::{Deserialize, Serialize};

/// One entry of the top goalscorers ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopGoalscorerRow {
    pub player_name: String,
    pub club: String,
    pub goals: i64,
}

/// Goals plus assists for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisivePlayerRow {
    pub player_name: String,
    pub club: String,
    pub total_decisive: i64,
}

/// Goals scored by a club, summed over its players' statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamGoalsRow {
    pub club: String,
    pub goals_scored: i64,
}

/// League points for a club
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingRow {
    pub club: String,
    pub points: i64,
}

/// Average goals for and against per match row.
///
/// An average is `None` when every contributing value is null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackDefenseRow {
    pub club: String,
    pub avg_goals_for: Option<f64>,
    pub avg_goals_against: Option<f64>,
}

/// Goals conceded by a club
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefenseRow {
    pub club: String,
    pub goals_conceded: i64,
}

/// Number of players of one nationality at one club.
///
/// Players with no recorded nation are grouped under `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NationalityRow {
    pub club: String,
    pub nationality: Option<String>,
    pub count: i64,
}
