//! Type-safe wrappers and enums for the football statistics queries.

pub mod filters;
pub mod limit;
pub mod outcome;
