//! Duel results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::match_runner::MatchResult;
use crate::stats::DuelStats;

/// Everything worth keeping from one duel series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelReport {
    /// Engine taking Black in game one
    pub engine1: String,
    /// Engine taking White in game one
    pub engine2: String,
    pub board_size: usize,
    pub games: u32,
    pub stats: DuelStats,
    pub game_records: Vec<GameRecord>,
}

/// A single finished game in the report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    /// "BLACK", "WHITE", or "DRAW"
    pub winner: String,
    pub black: String,
    pub white: String,
    pub score_black: usize,
    pub score_white: usize,
    /// Moves as "BLACK D3" entries; passes appear as "BLACK PASS"
    pub moves: Vec<String>,
}

impl GameRecord {
    pub fn from_result(result: &MatchResult) -> Self {
        let winner = match result.winner {
            Some(color) => color.name().to_string(),
            None => "DRAW".to_string(),
        };

        Self {
            winner,
            black: result.black_label.clone(),
            white: result.white_label.clone(),
            score_black: result.score.black,
            score_white: result.score.white,
            moves: result
                .moves
                .iter()
                .map(|(color, entry)| format!("{} {}", color, entry))
                .collect(),
        }
    }
}

impl DuelReport {
    pub fn new(
        engine1: &str,
        engine2: &str,
        board_size: usize,
        stats: DuelStats,
        results: &[MatchResult],
    ) -> Self {
        Self {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            board_size,
            games: results.len() as u32,
            stats,
            game_records: results.iter().map(GameRecord::from_result).collect(),
        }
    }

    /// Save the report to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load a report from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Duel: {} vs {} ===\n\n",
            self.engine1, self.engine2
        ));
        report.push_str(&format!(
            "Board: {}x{}, Games: {}\n\n",
            self.board_size, self.board_size, self.games
        ));

        report.push_str(&format!(
            "{:<20} {:>5} {:>7} {:>11} {:>11}\n",
            "Engine", "Wins", "Games", "Avg Score", "Avg Margin"
        ));
        report.push_str(&"-".repeat(58));
        report.push('\n');

        for summary in self.stats.summaries() {
            report.push_str(&format!(
                "{:<20} {:>5} {:>7} {:>11.1} {:>11.1}\n",
                summary.label, summary.wins, summary.games, summary.avg_score, summary.avg_margin
            ));
        }

        report.push_str(&format!("\nDraws: {}\n", self.stats.draws));
        report.push_str(&format!(
            "Average moves per game: {:.1}\n",
            self.stats.average_moves()
        ));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
