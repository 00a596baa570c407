//! Rendering of query results as text tables, CSV and JSON.

pub mod csv;
pub mod table;

use crate::{
    dashboard::{NationalityTotal, TeamPerformanceRow},
    storage::{
        AttackDefenseRow, DecisivePlayerRow, DefenseRow, NationalityRow, StandingRow,
        TeamGoalsRow, TopGoalscorerRow,
    },
};

pub use csv::{write_csv, write_csv_file};
pub use table::write_table;

/// A row with a fixed set of named columns.
pub trait Tabular {
    /// Column headers, in the order [`cells`](Tabular::cells) returns values
    const HEADERS: &'static [&'static str];

    /// Values shown in text tables
    fn cells(&self) -> Vec<String>;

    /// Values written to CSV exports. Defaults to [`cells`](Tabular::cells);
    /// rows with averages override it to keep full precision.
    fn record(&self) -> Vec<String> {
        self.cells()
    }
}

fn format_average(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_default()
}

/// Shortest representation that reads back as the same `f64`
fn exact_average(value: Option<f64>) -> String {
    value.map(|v| format!("{:?}", v)).unwrap_or_default()
}

impl Tabular for TopGoalscorerRow {
    const HEADERS: &'static [&'static str] = &["Player_Name", "Club", "Goals"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.player_name.clone(),
            self.club.clone(),
            self.goals.to_string(),
        ]
    }
}

impl Tabular for DecisivePlayerRow {
    const HEADERS: &'static [&'static str] = &["Player_Name", "Club", "Total_Decisive"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.player_name.clone(),
            self.club.clone(),
            self.total_decisive.to_string(),
        ]
    }
}

impl Tabular for TeamGoalsRow {
    const HEADERS: &'static [&'static str] = &["Club", "Goals_Scored"];

    fn cells(&self) -> Vec<String> {
        vec![self.club.clone(), self.goals_scored.to_string()]
    }
}

impl Tabular for StandingRow {
    const HEADERS: &'static [&'static str] = &["Club", "Points"];

    fn cells(&self) -> Vec<String> {
        vec![self.club.clone(), self.points.to_string()]
    }
}

impl Tabular for AttackDefenseRow {
    const HEADERS: &'static [&'static str] = &["Club", "Avg_Goals_For", "Avg_Goals_Against"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.club.clone(),
            format_average(self.avg_goals_for),
            format_average(self.avg_goals_against),
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.club.clone(),
            exact_average(self.avg_goals_for),
            exact_average(self.avg_goals_against),
        ]
    }
}

impl Tabular for DefenseRow {
    const HEADERS: &'static [&'static str] = &["Club", "Goals_Conceded"];

    fn cells(&self) -> Vec<String> {
        vec![self.club.clone(), self.goals_conceded.to_string()]
    }
}

impl Tabular for NationalityRow {
    const HEADERS: &'static [&'static str] = &["Club", "Nationality", "Count"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.club.clone(),
            self.nationality.clone().unwrap_or_default(),
            self.count.to_string(),
        ]
    }
}

impl Tabular for NationalityTotal {
    const HEADERS: &'static [&'static str] = &["Nationality", "Count"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.nationality.clone().unwrap_or_default(),
            self.count.to_string(),
        ]
    }
}

impl Tabular for TeamPerformanceRow {
    const HEADERS: &'static [&'static str] = &[
        "Club",
        "Points",
        "Goals_Scored",
        "Avg_Goals_For",
        "Avg_Goals_Against",
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.club.clone(),
            self.points.to_string(),
            self.goals_scored.map(|g| g.to_string()).unwrap_or_default(),
            format_average(self.avg_goals_for),
            format_average(self.avg_goals_against),
        ]
    }

    fn record(&self) -> Vec<String> {
        vec![
            self.club.clone(),
            self.points.to_string(),
            self.goals_scored.map(|g| g.to_string()).unwrap_or_default(),
            exact_average(self.avg_goals_for),
            exact_average(self.avg_goals_against),
        ]
    }
}
