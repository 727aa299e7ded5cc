//! Command-line entry point for the Catan Elo report
//!
//! Loads the exported game sheet, replays every game through the
//! round-robin Elo update, and prints the per-player summary.

use anyhow::Result;
use catan_elo::config::{AppConfig, ReportFormat};
use catan_elo::rating::{EloSettings, RatingEngine, ReplayCounts};
use catan_elo::records::{flatten_entries, parse_games, CsvGameSource, GameSource};
use catan_elo::stats::{render_table, Aggregator, AggregatorSettings, PlayerSummary};
use catan_elo::RatingMap;
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Catan Elo - round-robin ratings and player statistics
#[derive(Parser)]
#[command(
    name = "catan-elo",
    version,
    about = "Compute round-robin Elo ratings and player statistics from Catan game records"
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Games CSV override
    #[arg(short, long, value_name = "FILE", help = "CSV export of the Games sheet")]
    games: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Output format override
    #[arg(short, long, value_name = "FORMAT", help = "Report format (table, json)")]
    format: Option<ReportFormat>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without reading games")]
    dry_run: bool,
}

/// JSON report layout
#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: chrono::DateTime<chrono::Utc>,
    replay: ReplayCounts,
    rejected_records: usize,
    ratings: &'a RatingMap,
    players: &'a [PlayerSummary],
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file or environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(games) = &args.games {
        config.source.games_csv = games.clone();
    }

    if let Some(format) = args.format {
        config.report.format = format;
    }

    catan_elo::config::validate_config(&config)?;
    Ok(config)
}

fn run(config: &AppConfig) -> Result<()> {
    let source = CsvGameSource::new(&config.source.games_csv);
    let rows = source.load_rows()?;

    let parsed = parse_games(&rows);
    if !parsed.rejected.is_empty() {
        warn!("{} game records rejected", parsed.rejected.len());
    }

    let engine = RatingEngine::elo(EloSettings::from(&config.rating));
    let seeded = RatingMap::with_players(
        parsed.games.iter().flat_map(|g| g.player_names().cloned()),
        config.rating.initial_rating,
    );
    let replay = engine.replay(&parsed.games, seeded);

    let aggregator = Aggregator::new(AggregatorSettings::from(&config.rating));
    let entries = flatten_entries(&parsed.games);
    let summaries = aggregator.summarize(&entries, &replay.ratings);
    info!("{} players in summary", summaries.len());

    match config.report.format {
        ReportFormat::Table => print!("{}", render_table(&summaries)),
        ReportFormat::Json => {
            let report = JsonReport {
                generated_at: chrono::Utc::now(),
                replay: replay.counts(),
                rejected_records: parsed.rejected.len(),
                ratings: &replay.ratings,
                players: &summaries,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("{} v{}", config.service.name, catan_elo::VERSION);
    info!("   Games: {}", config.source.games_csv.display());
    info!(
        "   K-factor: {}, initial rating: {}",
        config.rating.k_factor, config.rating.initial_rating
    );

    if args.dry_run {
        info!("Configuration validation successful");
        return Ok(());
    }

    if let Err(e) = run(&config) {
        error!("Report generation failed: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
