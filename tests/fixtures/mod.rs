//! Test fixtures for integration testing

use catan_elo::error::Result;
use catan_elo::records::{GameRecord, GameSource, RawGameRow};

/// A short season exported from the score sheet
pub const SEASON_CSV: &str = "\
Game #,Date,Player 1,Starting Production 1,Ending VP 1,Player 2,Starting Production 2,Ending VP 2,Player 3,Starting Production 3,Ending VP 3,Player 4,Starting Production 4,Ending VP 4,Variant
1,2021-01-02,Alice,9,10,Bob,7,6,Carol,8,3,,,,FALSE
2,2021-01-09,Carol,9,10,Bob,7,8,Alice,8,5,,,,FALSE
3,2021-01-16,Alice,10,12,Bob,8,9,Carol,7,7,Dave,6,4,TRUE
4,2021-01-23,Bob,8,10,Carol,9,eleven,Alice,7,9,,,,FALSE
5,2021-01-30,Alice,9,8,Bob,6,10,,,,,,,FALSE
";

/// Game source serving fixed rows, standing in for the sheet export
#[derive(Debug, Clone, Default)]
pub struct StaticGameSource {
    rows: Vec<RawGameRow>,
}

impl StaticGameSource {
    pub fn new(rows: Vec<RawGameRow>) -> Self {
        Self { rows }
    }
}

impl GameSource for StaticGameSource {
    fn load_rows(&self) -> Result<Vec<RawGameRow>> {
        Ok(self.rows.clone())
    }
}

/// Build a validated game, panicking on bad fixture data
pub fn game(id: &str, players: &[(&str, &str, &str)], variant: bool) -> GameRecord {
    GameRecord::from_raw(&RawGameRow::new(id, players, variant)).expect("valid fixture game")
}
