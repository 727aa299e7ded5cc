//! Game records: raw sheet rows, validated games, and data sources

pub mod game;
pub mod source;

// Re-export commonly used types
pub use game::{
    flatten_entries, parse_games, GameRecord, ParsedGames, Participant, PlayerGameEntry,
    RawGameRow, RawSlot,
};
pub use source::{CsvGameSource, GameSource};
