//! Game records and their per-player flattening
//!
//! A `RawGameRow` holds the sheet cells verbatim; `GameRecord` is the
//! validated, typed form the rating engine consumes.

use crate::error::StatsError;
use crate::types::{GameId, PlayerName, ScoreCell};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Number of player column groups on the score sheet
pub const MAX_SLOTS: usize = 4;

/// Smallest table the game is played with
pub const MIN_PLAYERS: usize = 3;

/// One player's column group, as raw strings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSlot {
    pub player: String,
    pub starting_production: String,
    pub ending_vp: String,
}

/// One row of the `Games` sheet, before any parsing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGameRow {
    pub game_id: String,
    pub variant: String,
    pub slots: [RawSlot; MAX_SLOTS],
}

impl RawGameRow {
    /// Convenience constructor used by tests and benches
    pub fn new(game_id: impl Into<String>, players: &[(&str, &str, &str)], variant: bool) -> Self {
        let mut row = RawGameRow {
            game_id: game_id.into(),
            variant: if variant { "TRUE" } else { "FALSE" }.to_string(),
            ..Default::default()
        };
        for (slot, (player, production, vp)) in row.slots.iter_mut().zip(players) {
            *slot = RawSlot {
                player: player.to_string(),
                starting_production: production.to_string(),
                ending_vp: vp.to_string(),
            };
        }
        row
    }
}

/// A single active participant in a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: PlayerName,
    /// 1-based column group on the sheet
    pub slot: usize,
    pub starting_production: Option<f64>,
    pub ending_vp: ScoreCell,
}

/// A validated game with 3 or 4 participants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: GameId,
    pub is_variant: bool,
    participants: Vec<Participant>,
}

/// Flattened per-player-per-game row used by the aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerGameEntry {
    pub player: PlayerName,
    pub starting_production: f64,
    pub ending_vp: i64,
}

impl GameRecord {
    /// Validate a raw row into a typed record
    pub fn from_raw(row: &RawGameRow) -> Result<Self, StatsError> {
        let game_id = row.game_id.trim().to_string();

        let participants: Vec<Participant> = row
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.player.trim().is_empty())
            .map(|(index, slot)| Participant {
                name: slot.player.trim().to_string(),
                slot: index + 1,
                starting_production: parse_production(&slot.starting_production),
                ending_vp: ScoreCell::parse(&slot.ending_vp),
            })
            .collect();

        Self::new(game_id, parse_variant(&row.variant), participants)
    }

    /// Build a record from already-typed participants
    pub fn new(
        game_id: impl Into<GameId>,
        is_variant: bool,
        participants: Vec<Participant>,
    ) -> Result<Self, StatsError> {
        let game_id = game_id.into();
        let count = participants.len();
        if !(MIN_PLAYERS..=MAX_SLOTS).contains(&count) {
            return Err(StatsError::UnknownParticipantCount { game_id, count });
        }

        for (i, a) in participants.iter().enumerate() {
            if participants[i + 1..].iter().any(|b| b.name == a.name) {
                return Err(StatsError::InvalidRecord {
                    game_id,
                    reason: format!("player {} listed twice", a.name),
                });
            }
        }

        Ok(Self {
            game_id,
            is_variant,
            participants,
        })
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn player_count(&self) -> usize {
        self.participants.len()
    }

    pub fn player_names(&self) -> impl Iterator<Item = &PlayerName> {
        self.participants.iter().map(|p| &p.name)
    }

    /// Rows for the aggregator; participants with missing or non-numeric
    /// production or VP are dropped
    pub fn player_entries(&self) -> Vec<PlayerGameEntry> {
        self.participants
            .iter()
            .filter_map(|p| {
                Some(PlayerGameEntry {
                    player: p.name.clone(),
                    starting_production: p.starting_production?,
                    ending_vp: p.ending_vp.value()?,
                })
            })
            .collect()
    }
}

/// Flatten every game into aggregator rows, preserving game order
pub fn flatten_entries(games: &[GameRecord]) -> Vec<PlayerGameEntry> {
    games.iter().flat_map(GameRecord::player_entries).collect()
}

/// Games that passed validation, plus how many rows were rejected
#[derive(Debug, Clone, Default)]
pub struct ParsedGames {
    pub games: Vec<GameRecord>,
    pub rejected: Vec<StatsError>,
}

/// Validate every row, logging and collecting the ones that fail
pub fn parse_games(rows: &[RawGameRow]) -> ParsedGames {
    let mut parsed = ParsedGames::default();
    for row in rows {
        match GameRecord::from_raw(row) {
            Ok(game) => parsed.games.push(game),
            Err(e) => {
                warn!("Skipping game record: {}", e);
                parsed.rejected.push(e);
            }
        }
    }
    parsed
}

fn parse_variant(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("TRUE")
}

fn parse_production(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
