//! Per-player summary statistics
//!
//! Joins flattened game entries with final ratings and reduces them to one
//! `PlayerSummary` per player for reporting.

use crate::config::RatingConfig;
use crate::error::StatsError;
use crate::records::PlayerGameEntry;
use crate::stats::statistics::{mean, round_to, sample_std_dev};
use crate::types::{PlayerName, RatingMap};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Decimal places kept in reported figures
const REPORT_PRECISION: i32 = 2;

/// Aggregate statistics for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub player: PlayerName,
    pub starting_production_mean: f64,
    pub starting_production_std: f64,
    pub ending_vp_mean: f64,
    pub ending_vp_std: f64,
    pub rating_mean: f64,
    pub games_played: usize,
    pub wins: usize,
    pub win_percentage: f64,
}

/// Aggregation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregatorSettings {
    /// Ending VP at or above which a game counts as a win
    pub win_threshold: i64,
    /// Players with fewer games are left out of the summary
    pub min_games: usize,
}

impl Default for AggregatorSettings {
    fn default() -> Self {
        Self {
            win_threshold: 10,
            min_games: 2,
        }
    }
}

impl From<&RatingConfig> for AggregatorSettings {
    fn from(config: &RatingConfig) -> Self {
        Self {
            win_threshold: config.win_threshold,
            min_games: config.min_games,
        }
    }
}

#[derive(Default)]
struct PlayerSamples {
    production: Vec<f64>,
    ending_vp: Vec<f64>,
    rating: Vec<f64>,
    wins: usize,
}

/// Builds player summaries from game entries and final ratings
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    settings: AggregatorSettings,
}

impl Aggregator {
    pub fn new(settings: AggregatorSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AggregatorSettings {
        &self.settings
    }

    /// Summaries for every player with enough games, best first
    pub fn summarize(&self, entries: &[PlayerGameEntry], ratings: &RatingMap) -> Vec<PlayerSummary> {
        let mut grouped: BTreeMap<&str, PlayerSamples> = BTreeMap::new();
        let mut missing: BTreeMap<&str, usize> = BTreeMap::new();

        for entry in entries {
            let Some(rating) = ratings.get(&entry.player) else {
                *missing.entry(entry.player.as_str()).or_default() += 1;
                continue;
            };

            let samples = grouped.entry(entry.player.as_str()).or_default();
            samples.production.push(entry.starting_production);
            samples.ending_vp.push(entry.ending_vp as f64);
            samples.rating.push(rating);
            if entry.ending_vp >= self.settings.win_threshold {
                samples.wins += 1;
            }
        }

        for (player, rows) in missing {
            let error = StatsError::MissingRating {
                player: player.to_string(),
            };
            warn!("Excluding {} rows from summary: {}", rows, error);
        }

        let mut summaries: Vec<PlayerSummary> = grouped
            .into_iter()
            .map(|(player, samples)| Self::summarize_player(player, &samples))
            .filter(|summary| {
                let keep = summary.games_played >= self.settings.min_games;
                if !keep {
                    debug!(
                        "Leaving out {}: only {} games played",
                        summary.player, summary.games_played
                    );
                }
                keep
            })
            .collect();

        summaries.sort_by(compare_summaries);
        summaries
    }

    fn summarize_player(player: &str, samples: &PlayerSamples) -> PlayerSummary {
        let games_played = samples.ending_vp.len();
        let win_percentage = samples.wins as f64 / games_played as f64 * 100.0;

        PlayerSummary {
            player: player.to_string(),
            starting_production_mean: round_to(mean(&samples.production), REPORT_PRECISION),
            starting_production_std: round_to(sample_std_dev(&samples.production), REPORT_PRECISION),
            ending_vp_mean: round_to(mean(&samples.ending_vp), REPORT_PRECISION),
            ending_vp_std: round_to(sample_std_dev(&samples.ending_vp), REPORT_PRECISION),
            rating_mean: round_to(mean(&samples.rating), REPORT_PRECISION),
            games_played,
            wins: samples.wins,
            win_percentage: round_to(win_percentage, REPORT_PRECISION),
        }
    }
}

/// Descending by rating, then win percentage, then mean ending VP
fn compare_summaries(a: &PlayerSummary, b: &PlayerSummary) -> Ordering {
    b.rating_mean
        .total_cmp(&a.rating_mean)
        .then_with(|| b.win_percentage.total_cmp(&a.win_percentage))
        .then_with(|| b.ending_vp_mean.total_cmp(&a.ending_vp_mean))
        .then_with(|| a.player.cmp(&b.player))
}

/// Summarize with the default win threshold and minimum game count
pub fn summarize(entries: &[PlayerGameEntry], ratings: &RatingMap) -> Vec<PlayerSummary> {
    Aggregator::default().summarize(entries, ratings)
}
