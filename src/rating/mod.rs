//! Rating system: round-robin Elo over recorded games
//!
//! This module provides the pairwise Elo calculation, the calculator
//! interface, and the engine that replays game history in order.

pub mod calculator;
pub mod elo;
pub mod engine;

// Re-export commonly used types
pub use calculator::{GameAdjustments, PlayerAdjustment, RatingCalculator};
pub use elo::{EloSettings, RoundRobinElo};
pub use engine::{compute_ratings, Diagnostic, RatingEngine, ReplayCounts, ReplayReport};
