//! Player statistics for reporting
//!
//! This module aggregates flattened game entries and final ratings into
//! per-player summaries, and renders them for the terminal.

pub mod aggregator;
pub mod statistics;
pub mod table;

// Re-export commonly used types
pub use aggregator::{summarize, Aggregator, AggregatorSettings, PlayerSummary};
pub use table::render_table;
