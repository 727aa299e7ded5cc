//! Plain-text rendering of player summaries

use crate::stats::aggregator::PlayerSummary;
use std::fmt::Write;

const HEADERS: [&str; 9] = [
    "Player",
    "Prod mean",
    "Prod std",
    "VP mean",
    "VP std",
    "Elo",
    "Games",
    "Wins",
    "Win %",
];

fn figure(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{:.2}", value)
    }
}

fn row_cells(summary: &PlayerSummary) -> [String; 9] {
    [
        summary.player.clone(),
        figure(summary.starting_production_mean),
        figure(summary.starting_production_std),
        figure(summary.ending_vp_mean),
        figure(summary.ending_vp_std),
        format!("{:.0}", summary.rating_mean),
        summary.games_played.to_string(),
        summary.wins.to_string(),
        figure(summary.win_percentage),
    ]
}

/// Render summaries as an aligned table; the player column is left-aligned
pub fn render_table(summaries: &[PlayerSummary]) -> String {
    let rows: Vec<[String; 9]> = summaries.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: &[&str]| {
        let mut line = String::new();
        for (i, (cell, width)) in cells.iter().zip(&widths).enumerate() {
            if i == 0 {
                let _ = write!(line, "{:<width$}", cell, width = width);
            } else {
                let _ = write!(line, "  {:>width$}", cell, width = width);
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    };

    push_line(&HEADERS);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&rule.iter().map(String::as_str).collect::<Vec<_>>());
    for row in &rows {
        push_line(&row.iter().map(String::as_str).collect::<Vec<_>>());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(player: &str, std: f64) -> PlayerSummary {
        PlayerSummary {
            player: player.to_string(),
            starting_production_mean: 9.0,
            starting_production_std: std,
            ending_vp_mean: 10.0,
            ending_vp_std: 2.0,
            rating_mean: 1012.0,
            games_played: 3,
            wins: 2,
            win_percentage: 66.67,
        }
    }

    #[test]
    fn test_render_table() {
        let table = render_table(&[summary("Alice", 1.0), summary("Bartholomew", f64::NAN)]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Player     "));
        assert!(lines[1].starts_with("-----------"));
        assert!(lines[2].starts_with("Alice"));
        assert!(lines[2].contains("1012"));
        assert!(lines[2].ends_with("66.67"));
        assert!(lines[3].contains(" - "));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_table(&[]).lines().count(), 2);
    }
}
