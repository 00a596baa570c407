//! Storage layer for the football statistics database
//!
//! The database is owned by an external loader; this layer only reads it.
//! - `models`: Typed result rows, one per query
//! - `schema`: Connection lifecycle and schema checks
//! - `builder`: Parameterized aggregate query assembly
//! - `queries`: Player rankings and lookups
//! - `analysis`: Team aggregates over match results

mod builder;
pub mod analysis;
pub mod models;
pub mod queries;
pub mod schema;

#[cfg(any(test, feature = "test-utils"))]
pub mod fixtures;


pub use models::*;
pub use schema::{FootballDatabase, REQUIRED_TABLES};
