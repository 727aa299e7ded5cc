//! Game data sources
//!
//! The score sheet is maintained elsewhere; this module reads an exported
//! copy of its `Games` tab. Columns are located by header name so the export
//! may carry extra columns in any order.

use crate::error::{Result, StatsError};
use crate::records::game::{RawGameRow, RawSlot, MAX_SLOTS};
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Header of the game identifier column
pub const GAME_ID_COLUMN: &str = "Game #";

/// Header of the house-rules flag column
pub const VARIANT_COLUMN: &str = "Variant";

/// Trait for anything that can supply raw game rows in chronological order
#[cfg_attr(test, mockall::automock)]
pub trait GameSource {
    fn load_rows(&self) -> Result<Vec<RawGameRow>>;
}

/// Reads games from a CSV export of the score sheet
#[derive(Debug, Clone)]
pub struct CsvGameSource {
    path: PathBuf,
}

impl CsvGameSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl GameSource for CsvGameSource {
    fn load_rows(&self) -> Result<Vec<RawGameRow>> {
        info!("Loading games from: {}", self.path.display());
        let file = std::fs::File::open(&self.path).map_err(|e| StatsError::SourceError {
            message: format!("Failed to open {}: {}", self.path.display(), e),
        })?;
        read_rows(file)
    }
}

/// Column positions resolved from the header row
struct ColumnIndex {
    by_name: HashMap<String, usize>,
}

impl ColumnIndex {
    fn new(headers: &csv::StringRecord) -> Self {
        let by_name = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.trim().to_string(), i))
            .collect();
        Self { by_name }
    }

    fn has(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    fn cell(&self, record: &csv::StringRecord, name: &str) -> String {
        self.by_name
            .get(name)
            .and_then(|&i| record.get(i))
            .unwrap_or("")
            .to_string()
    }
}

/// Parse CSV text with a header row into raw game rows
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawGameRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = ColumnIndex::new(&headers);

    for required in ["Player 1", "Ending VP 1"] {
        if !columns.has(required) {
            return Err(StatsError::SourceError {
                message: format!("Missing required column: {}", required),
            }
            .into());
        }
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let mut row = RawGameRow {
            game_id: columns.cell(&record, GAME_ID_COLUMN),
            variant: columns.cell(&record, VARIANT_COLUMN),
            ..Default::default()
        };
        for (i, slot) in row.slots.iter_mut().enumerate().take(MAX_SLOTS) {
            let n = i + 1;
            *slot = RawSlot {
                player: columns.cell(&record, &format!("Player {}", n)),
                starting_production: columns.cell(&record, &format!("Starting Production {}", n)),
                ending_vp: columns.cell(&record, &format!("Ending VP {}", n)),
            };
        }
        rows.push(row);
    }

    debug!("Read {} game rows", rows.len());
    Ok(rows)
}
