//! Performance benchmarks for rating replay and aggregation

use catan_elo::rating::{EloSettings, RatingEngine};
use catan_elo::records::{flatten_entries, parse_games, GameRecord, RawGameRow};
use catan_elo::stats::summarize;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const PLAYERS: [&str; 8] = [
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi",
];

/// Deterministic season of mixed 3- and 4-player games
fn create_season(games: usize) -> Vec<GameRecord> {
    let rows: Vec<RawGameRow> = (0..games)
        .map(|g| {
            let seats = if g % 3 == 0 { 4 } else { 3 };
            let vps: Vec<String> = (0..seats).map(|s| ((g * 7 + s * 5) % 9 + 3).to_string()).collect();
            let players: Vec<(&str, &str, &str)> = (0..seats)
                .map(|s| (PLAYERS[(g + s * 3) % PLAYERS.len()], "8", vps[s].as_str()))
                .collect();
            RawGameRow::new(g.to_string(), &players, g % 11 == 0)
        })
        .collect();

    parse_games(&rows).games
}

fn bench_rating_replay(c: &mut Criterion) {
    let engine = RatingEngine::elo(EloSettings::default());

    for size in [100, 1_000] {
        let games = create_season(size);
        c.bench_function(&format!("replay_{}_games", size), |b| {
            b.iter(|| engine.compute_ratings(black_box(&games), 1000.0))
        });
    }
}

fn bench_summary(c: &mut Criterion) {
    let engine = RatingEngine::elo(EloSettings::default());
    let games = create_season(1_000);
    let ratings = engine.compute_ratings(&games, 1000.0);
    let entries = flatten_entries(&games);

    c.bench_function("summarize_1000_games", |b| {
        b.iter(|| summarize(black_box(&entries), black_box(&ratings)))
    });
}

criterion_group!(benches, bench_rating_replay, bench_summary);
criterion_main!(benches);
