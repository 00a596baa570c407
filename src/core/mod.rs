//! Core utilities for the Premier League insights tool
//!
//! - `config`: Database location and connection settings

pub mod config;

pub use config::{default_database_path, resolve_database_path, DatabaseConfig};
