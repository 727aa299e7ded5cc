//! Sequential replay of game history
//!
//! Games are folded into the rating map strictly in input order. Each game is
//! scored against the ratings as they stood before it, then all of its
//! adjustments are applied together.

use crate::error::StatsError;
use crate::rating::calculator::RatingCalculator;
use crate::rating::elo::{EloSettings, RoundRobinElo};
use crate::records::GameRecord;
use crate::types::{GameId, RatingMap};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// A recoverable problem encountered while replaying
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub game_id: GameId,
    pub error: StatsError,
}

/// Summary of a replay pass
#[derive(Debug, Clone, Default)]
pub struct ReplayReport {
    pub ratings: RatingMap,
    pub games_rated: usize,
    pub games_skipped_variant: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Counters for logging, serializable for the JSON report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayCounts {
    pub games_rated: usize,
    pub games_skipped_variant: usize,
    pub malformed_comparisons: usize,
}

impl ReplayReport {
    pub fn counts(&self) -> ReplayCounts {
        ReplayCounts {
            games_rated: self.games_rated,
            games_skipped_variant: self.games_skipped_variant,
            malformed_comparisons: self.diagnostics.len(),
        }
    }
}

/// Replays games through a rating calculator
#[derive(Debug, Clone, Default)]
pub struct RatingEngine<C = RoundRobinElo> {
    calculator: C,
}

impl RatingEngine<RoundRobinElo> {
    /// Engine using the round-robin Elo update
    pub fn elo(settings: EloSettings) -> Self {
        Self::new(RoundRobinElo::new(settings))
    }
}

impl<C: RatingCalculator> RatingEngine<C> {
    pub fn new(calculator: C) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &C {
        &self.calculator
    }

    /// Seed every player appearing in `games` at `initial_rating` and replay
    pub fn compute_ratings(&self, games: &[GameRecord], initial_rating: f64) -> RatingMap {
        let seeded = RatingMap::with_players(
            games.iter().flat_map(|g| g.player_names().cloned()),
            initial_rating,
        );
        self.replay(games, seeded).ratings
    }

    /// Replay `games` in order on top of existing `ratings`
    pub fn replay(&self, games: &[GameRecord], ratings: RatingMap) -> ReplayReport {
        let mut report = ReplayReport {
            ratings,
            ..Default::default()
        };
        let initial_rating = self.calculator.initial_rating();

        for game in games {
            for name in game.player_names() {
                if !report.ratings.contains(name) {
                    report.ratings.insert(name.clone(), initial_rating);
                }
            }

            if game.is_variant {
                debug!("Game {}: variant, ratings unchanged", game.game_id);
                report.games_skipped_variant += 1;
                continue;
            }

            let result = self.calculator.game_adjustments(game, &report.ratings);

            for failure in result.failures {
                warn!("Skipping comparison: {}", failure);
                report.diagnostics.push(Diagnostic {
                    game_id: game.game_id.clone(),
                    error: failure,
                });
            }

            for adjustment in &result.adjustments {
                report
                    .ratings
                    .adjust(&adjustment.player, adjustment.applied_delta, initial_rating);
            }

            debug!(
                "Game {}: {} players rated",
                game.game_id,
                result.adjustments.len()
            );
            report.games_rated += 1;
        }

        info!(
            "Replayed {} games ({} rated, {} variant, {} malformed comparisons)",
            games.len(),
            report.games_rated,
            report.games_skipped_variant,
            report.diagnostics.len()
        );

        report
    }
}

/// Compute final ratings with the standard K-factor of 15
pub fn compute_ratings(games: &[GameRecord], initial_rating: f64) -> RatingMap {
    RatingEngine::elo(EloSettings {
        initial_rating,
        ..EloSettings::default()
    })
    .compute_ratings(games, initial_rating)
}
