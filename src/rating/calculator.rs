//! Rating calculator trait
//!
//! A calculator turns one game plus the pre-game rating snapshot into
//! per-player adjustments. It never mutates ratings itself; the engine
//! applies the adjustments once the whole game has been scored.

use crate::error::StatsError;
use crate::records::GameRecord;
use crate::types::{PlayerName, RatingMap};
use serde::{Deserialize, Serialize};

/// Rating adjustment for one participant in one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAdjustment {
    pub player: PlayerName,
    /// Unrounded sum of pairwise deltas
    pub raw_delta: f64,
    /// Amount actually applied to the rating map
    pub applied_delta: f64,
}

/// Result of scoring a single game
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameAdjustments {
    pub adjustments: Vec<PlayerAdjustment>,
    /// Pairwise comparisons that could not be scored
    pub failures: Vec<StatsError>,
}

impl GameAdjustments {
    pub fn for_player(&self, player: &str) -> Option<&PlayerAdjustment> {
        self.adjustments.iter().find(|a| a.player == player)
    }
}

/// Trait for calculating rating changes after games
pub trait RatingCalculator {
    /// Score every participant of `game` against the pre-game `ratings`
    ///
    /// Players missing from `ratings` are treated as sitting at
    /// `initial_rating()`.
    fn game_adjustments(&self, game: &GameRecord, ratings: &RatingMap) -> GameAdjustments;

    /// Rating assigned to players the first time they appear
    fn initial_rating(&self) -> f64;
}
