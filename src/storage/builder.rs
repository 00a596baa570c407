//! Parameterized aggregate query assembly

use crate::cli::types::{filters::TeamFilter, limit::Limit};
use crate::error::Result;
use rusqlite::{Connection, Row, ToSql};

/// An aggregate `SELECT` built clause by clause.
///
/// The joins and aggregates live in the base statement; the team filter only
/// decides whether a `WHERE` clause and its bound parameter are appended, so
/// filtered and unfiltered variants aggregate identically.
pub(crate) struct AggregateQuery {
    sql: String,
    params: Vec<Box<dyn ToSql>>,
}

impl AggregateQuery {
    pub(crate) fn new(base: &str) -> Self {
        Self {
            sql: base.trim().to_string(),
            params: Vec::new(),
        }
    }

    /// Restrict rows to one club before grouping.
    pub(crate) fn team_filter(mut self, column: &str, filter: &TeamFilter) -> Self {
        if let Some(name) = filter.club_name() {
            self.sql.push_str(&format!(" WHERE {} = ?", column));
            self.params.push(Box::new(name.to_string()));
        }
        self
    }

    pub(crate) fn group_by(mut self, columns: &str) -> Self {
        self.sql.push_str(" GROUP BY ");
        self.sql.push_str(columns);
        self
    }

    pub(crate) fn order_by(mut self, columns: &str) -> Self {
        self.sql.push_str(" ORDER BY ");
        self.sql.push_str(columns);
        self
    }

    pub(crate) fn limit(mut self, limit: Limit) -> Self {
        self.sql.push_str(" LIMIT ?");
        self.params.push(Box::new(limit.as_u32()));
        self
    }

    #[cfg(test)]
    pub(crate) fn sql(&self) -> &str {
        &self.sql
    }

    #[cfg(test)]
    pub(crate) fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Run the query and map every row.
    pub(crate) fn fetch<T, F>(&self, conn: &Connection, mut map: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = conn.prepare(&self.sql)?;
        let param_refs: Vec<&dyn ToSql> = self.params.iter().map(|p| p.as_ref()).collect();

        let rows = stmt.query_map(&param_refs[..], |row| map(row))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row?);
        }
        Ok(results)
    }
}
