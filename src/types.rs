//! Common types used throughout the rating pipeline

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Player display name as written on the score sheet
pub type PlayerName = String;

/// Value of the `Game #` column, used for diagnostics only
pub type GameId = String;

/// Result of one pairwise comparison between two participants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Tie,
    Loss,
}

impl MatchOutcome {
    /// Compare player A's ending VP against player B's
    pub fn from_scores(a: i64, b: i64) -> Self {
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => MatchOutcome::Win,
            std::cmp::Ordering::Equal => MatchOutcome::Tie,
            std::cmp::Ordering::Less => MatchOutcome::Loss,
        }
    }

    /// Actual score fed into the Elo update
    pub fn score(self) -> f64 {
        match self {
            MatchOutcome::Win => 1.0,
            MatchOutcome::Tie => 0.5,
            MatchOutcome::Loss => 0.0,
        }
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Win => write!(f, "Win"),
            MatchOutcome::Tie => write!(f, "Tie"),
            MatchOutcome::Loss => write!(f, "Loss"),
        }
    }
}

/// A spreadsheet cell holding an integer score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreCell {
    Value(i64),
    Empty,
    Malformed(String),
}

impl ScoreCell {
    /// Parse a raw cell. Only plain integers are accepted.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return ScoreCell::Empty;
        }
        match trimmed.parse::<i64>() {
            Ok(value) => ScoreCell::Value(value),
            Err(_) => ScoreCell::Malformed(trimmed.to_string()),
        }
    }

    pub fn value(&self) -> Option<i64> {
        match self {
            ScoreCell::Value(v) => Some(*v),
            _ => None,
        }
    }

    /// Original cell text, for diagnostics
    pub fn raw(&self) -> String {
        match self {
            ScoreCell::Value(v) => v.to_string(),
            ScoreCell::Empty => String::new(),
            ScoreCell::Malformed(s) => s.clone(),
        }
    }
}

/// Current rating of every known player
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingMap {
    ratings: BTreeMap<PlayerName, f64>,
}

impl RatingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed every given player at `initial_rating`
    pub fn with_players<I, S>(players: I, initial_rating: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PlayerName>,
    {
        let ratings = players
            .into_iter()
            .map(|name| (name.into(), initial_rating))
            .collect();
        Self { ratings }
    }

    pub fn get(&self, player: &str) -> Option<f64> {
        self.ratings.get(player).copied()
    }

    pub fn insert(&mut self, player: impl Into<PlayerName>, rating: f64) {
        self.ratings.insert(player.into(), rating);
    }

    /// Add `delta` to a player's rating, seeding unknown players at `initial_rating`
    pub fn adjust(&mut self, player: &str, delta: f64, initial_rating: f64) {
        *self
            .ratings
            .entry(player.to_string())
            .or_insert(initial_rating) += delta;
    }

    pub fn contains(&self, player: &str) -> bool {
        self.ratings.contains_key(player)
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerName, f64)> {
        self.ratings.iter().map(|(name, rating)| (name, *rating))
    }

    pub fn players(&self) -> impl Iterator<Item = &PlayerName> {
        self.ratings.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_scores() {
        assert_eq!(MatchOutcome::from_scores(10, 6), MatchOutcome::Win);
        assert_eq!(MatchOutcome::from_scores(7, 7), MatchOutcome::Tie);
        assert_eq!(MatchOutcome::from_scores(3, 9), MatchOutcome::Loss);
        assert_eq!(MatchOutcome::Win.score(), 1.0);
        assert_eq!(MatchOutcome::Tie.score(), 0.5);
        assert_eq!(MatchOutcome::Loss.score(), 0.0);
    }

    #[test]
    fn test_score_cell_parse() {
        assert_eq!(ScoreCell::parse(" 10 "), ScoreCell::Value(10));
        assert_eq!(ScoreCell::parse(""), ScoreCell::Empty);
        assert_eq!(ScoreCell::parse("   "), ScoreCell::Empty);
        assert_eq!(
            ScoreCell::parse("ten"),
            ScoreCell::Malformed("ten".to_string())
        );
        assert_eq!(
            ScoreCell::parse("10.0"),
            ScoreCell::Malformed("10.0".to_string())
        );
        assert_eq!(ScoreCell::parse("8").value(), Some(8));
        assert_eq!(ScoreCell::parse("x").value(), None);
    }

    #[test]
    fn test_rating_map_seed_and_adjust() {
        let mut ratings = RatingMap::with_players(["Alice", "Bob"], 1000.0);
        assert_eq!(ratings.len(), 2);
        assert_eq!(ratings.get("Alice"), Some(1000.0));

        ratings.adjust("Alice", 8.0, 1000.0);
        ratings.adjust("Carol", -4.0, 1000.0);

        assert_eq!(ratings.get("Alice"), Some(1008.0));
        assert_eq!(ratings.get("Carol"), Some(996.0));
        assert!(ratings.contains("Bob"));
        assert!(!ratings.contains("Dave"));

        let names: Vec<_> = ratings.players().cloned().collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }
}
