//! Command implementations for the Premier League insights CLI

pub mod clubs;
pub mod common;
pub mod overview;
pub mod players;
pub mod teams;
