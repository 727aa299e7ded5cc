//! Error types for the rating pipeline
//!
//! Application code propagates `anyhow` errors; the variants below name the
//! recoverable data faults the engine and aggregator log and skip past.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific game-record scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    #[error("Malformed ending VP in game {game_id}: slot {slot_a} ({value_a:?}) vs slot {slot_b} ({value_b:?})")]
    MalformedScore {
        game_id: String,
        slot_a: usize,
        slot_b: usize,
        value_a: String,
        value_b: String,
    },

    #[error("No rating found for player: {player}")]
    MissingRating { player: String },

    #[error("Game {game_id} has {count} players, expected 3 or 4")]
    UnknownParticipantCount { game_id: String, count: usize },

    #[error("Invalid game record {game_id}: {reason}")]
    InvalidRecord { game_id: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Game source error: {message}")]
    SourceError { message: String },
}
