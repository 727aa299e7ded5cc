//! Round-robin Elo
//!
//! Every ordered pair of participants in a game is scored as an independent
//! Elo match and each player's deltas are summed. The diagonal pair (a player
//! against themselves) is included; it is always a tie at equal ratings and
//! so contributes nothing.

use crate::config::RatingConfig;
use crate::error::StatsError;
use crate::rating::calculator::{GameAdjustments, PlayerAdjustment, RatingCalculator};
use crate::records::{GameRecord, Participant};
use crate::types::{MatchOutcome, RatingMap};
use serde::{Deserialize, Serialize};
use skillratings::elo::EloRating;

/// Parameters of the round-robin update
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EloSettings {
    /// Sensitivity per pairwise comparison
    pub k_factor: f64,
    /// Starting rating for every player
    pub initial_rating: f64,
}

impl Default for EloSettings {
    fn default() -> Self {
        Self {
            k_factor: 15.0,
            initial_rating: 1000.0,
        }
    }
}

impl From<&RatingConfig> for EloSettings {
    fn from(config: &RatingConfig) -> Self {
        Self {
            k_factor: config.k_factor,
            initial_rating: config.initial_rating,
        }
    }
}

/// Probability that a player rated `rating_a` beats one rated `rating_b`
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    let (expected_a, _) = skillratings::elo::expected_score(
        &EloRating { rating: rating_a },
        &EloRating { rating: rating_b },
    );
    expected_a
}

/// Elo delta for player A from a single comparison against player B
pub fn pair_adjustment(rating_a: f64, rating_b: f64, outcome: MatchOutcome, k_factor: f64) -> f64 {
    k_factor * (outcome.score() - expected_score(rating_a, rating_b))
}

/// Round an accumulated adjustment to a whole rating point, ties to even
pub fn round_adjustment(delta: f64) -> f64 {
    delta.round_ties_even()
}

/// Round-robin Elo calculator
#[derive(Debug, Clone, Default)]
pub struct RoundRobinElo {
    settings: EloSettings,
}

impl RoundRobinElo {
    pub fn new(settings: EloSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &EloSettings {
        &self.settings
    }

    fn rating_of(&self, ratings: &RatingMap, participant: &Participant) -> f64 {
        ratings
            .get(&participant.name)
            .unwrap_or(self.settings.initial_rating)
    }

    fn outcome(
        game: &GameRecord,
        a: &Participant,
        b: &Participant,
    ) -> Result<MatchOutcome, StatsError> {
        match (a.ending_vp.value(), b.ending_vp.value()) {
            (Some(vp_a), Some(vp_b)) => Ok(MatchOutcome::from_scores(vp_a, vp_b)),
            _ => Err(StatsError::MalformedScore {
                game_id: game.game_id.clone(),
                slot_a: a.slot,
                slot_b: b.slot,
                value_a: a.ending_vp.raw(),
                value_b: b.ending_vp.raw(),
            }),
        }
    }
}

impl RatingCalculator for RoundRobinElo {
    fn game_adjustments(&self, game: &GameRecord, ratings: &RatingMap) -> GameAdjustments {
        let participants = game.participants();
        let mut result = GameAdjustments::default();

        for a in participants {
            let rating_a = self.rating_of(ratings, a);
            let mut raw_delta = 0.0;

            for b in participants {
                match Self::outcome(game, a, b) {
                    Ok(outcome) => {
                        let rating_b = self.rating_of(ratings, b);
                        raw_delta +=
                            pair_adjustment(rating_a, rating_b, outcome, self.settings.k_factor);
                    }
                    Err(e) => result.failures.push(e),
                }
            }

            result.adjustments.push(PlayerAdjustment {
                player: a.name.clone(),
                raw_delta,
                applied_delta: round_adjustment(raw_delta),
            });
        }

        result
    }

    fn initial_rating(&self) -> f64 {
        self.settings.initial_rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::RawGameRow;

    fn game(players: &[(&str, &str, &str)]) -> GameRecord {
        GameRecord::from_raw(&RawGameRow::new("1", players, false)).unwrap()
    }

    #[test]
    fn test_expected_score() {
        assert!((expected_score(1000.0, 1000.0) - 0.5).abs() < 1e-12);
        assert!((expected_score(1400.0, 1000.0) - 0.909_090_909).abs() < 1e-6);
        assert!(
            (expected_score(1015.0, 985.0) + expected_score(985.0, 1015.0) - 1.0).abs() < 1e-12
        );
    }

    #[test]
    fn test_pair_adjustment() {
        assert_eq!(pair_adjustment(1000.0, 1000.0, MatchOutcome::Win, 15.0), 7.5);
        assert_eq!(pair_adjustment(1000.0, 1000.0, MatchOutcome::Tie, 15.0), 0.0);
        assert_eq!(pair_adjustment(1000.0, 1000.0, MatchOutcome::Loss, 15.0), -7.5);
    }

    #[test]
    fn test_round_adjustment_ties_to_even() {
        assert_eq!(round_adjustment(7.5), 8.0);
        assert_eq!(round_adjustment(2.5), 2.0);
        assert_eq!(round_adjustment(-2.5), -2.0);
        assert_eq!(round_adjustment(15.969), 16.0);
        assert_eq!(round_adjustment(-0.4), 0.0);
    }

    #[test]
    fn test_three_player_adjustments() {
        let calculator = RoundRobinElo::default();
        let game = game(&[("A", "9", "10"), ("B", "7", "6"), ("C", "8", "3")]);
        let ratings = RatingMap::with_players(["A", "B", "C"], 1000.0);

        let result = calculator.game_adjustments(&game, &ratings);

        assert!(result.failures.is_empty());
        assert_eq!(result.for_player("A").unwrap().raw_delta, 15.0);
        assert_eq!(result.for_player("B").unwrap().raw_delta, 0.0);
        assert_eq!(result.for_player("C").unwrap().raw_delta, -15.0);
    }

    #[test]
    fn test_unknown_players_start_at_initial_rating() {
        let calculator = RoundRobinElo::new(EloSettings {
            k_factor: 20.0,
            initial_rating: 1200.0,
        });
        let game = game(&[("A", "9", "10"), ("B", "7", "10"), ("C", "8", "10")]);

        let result = calculator.game_adjustments(&game, &RatingMap::new());

        for adjustment in &result.adjustments {
            assert_eq!(adjustment.applied_delta, 0.0);
        }
        assert_eq!(calculator.initial_rating(), 1200.0);
    }

    #[test]
    fn test_malformed_score_skips_only_affected_pairs() {
        let calculator = RoundRobinElo::default();
        let game = game(&[("A", "9", "10"), ("B", "7", "6"), ("C", "8", "abc")]);
        let ratings = RatingMap::with_players(["A", "B", "C"], 1000.0);

        let result = calculator.game_adjustments(&game, &ratings);

        // A-C, B-C, C-A, C-B and C-C
        assert_eq!(result.failures.len(), 5);
        assert_eq!(result.for_player("A").unwrap().raw_delta, 7.5);
        assert_eq!(result.for_player("A").unwrap().applied_delta, 8.0);
        assert_eq!(result.for_player("B").unwrap().applied_delta, -8.0);
        assert_eq!(result.for_player("C").unwrap().applied_delta, 0.0);
        assert!(matches!(
            &result.failures[0],
            StatsError::MalformedScore { game_id, slot_a: 1, slot_b: 3, .. } if game_id == "1"
        ));
    }
}
