//! Catan Elo - round-robin skill ratings for multiplayer board games
//!
//! This crate replays recorded games through a pairwise Elo update and
//! aggregates per-player statistics for reporting.

pub mod config;
pub mod error;
pub mod rating;
pub mod records;
pub mod stats;
pub mod types;

// Re-export commonly used types
pub use error::{Result, StatsError};
pub use types::*;

// Re-export key components
pub use rating::{compute_ratings, RatingEngine};
pub use records::{GameRecord, PlayerGameEntry};
pub use stats::{summarize, PlayerSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
