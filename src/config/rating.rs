//! Rating and summary configuration

use serde::{Deserialize, Serialize};

/// Parameters for the Elo replay and the player summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Rating every player starts from
    pub initial_rating: f64,
    /// Elo K-factor applied to each pairwise comparison
    pub k_factor: f64,
    /// Ending VP that counts as a win
    pub win_threshold: i64,
    /// Minimum games for a player to appear in the summary
    pub min_games: usize,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            initial_rating: 1000.0,
            k_factor: 15.0,
            win_threshold: 10,
            min_games: 2,
        }
    }
}
