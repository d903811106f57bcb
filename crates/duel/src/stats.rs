//! Aggregated statistics over a duel series

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use reversi_core::Color;

use crate::match_runner::MatchResult;

/// Running totals across a series, keyed by engine label.
///
/// When both sides share a label (self-play), its totals cover both colors
/// of every game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelStats {
    /// Labels in first-seen order, driving report row order
    pub engine_labels: Vec<String>,
    pub wins: HashMap<String, u32>,
    pub draws: u32,
    /// Final disc counts summed per engine
    pub score_totals: HashMap<String, u32>,
    /// Final disc margins (own minus opponent) summed per engine
    pub score_diff_totals: HashMap<String, i64>,
    /// Color-slots played per engine; self-play counts both sides
    pub games_played: HashMap<String, u32>,
    pub total_games: u32,
    pub total_moves: u64,
}

/// Per-engine digest of a finished series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSummary {
    pub label: String,
    pub wins: u32,
    pub games: u32,
    pub avg_score: f64,
    pub avg_margin: f64,
}

impl DuelStats {
    pub fn new(engine_labels: Vec<String>) -> Self {
        let zeroes_u32: HashMap<String, u32> = engine_labels
            .iter()
            .map(|label| (label.clone(), 0))
            .collect();
        let zeroes_i64: HashMap<String, i64> = engine_labels
            .iter()
            .map(|label| (label.clone(), 0))
            .collect();

        Self {
            engine_labels,
            wins: zeroes_u32.clone(),
            draws: 0,
            score_totals: zeroes_u32.clone(),
            score_diff_totals: zeroes_i64,
            games_played: zeroes_u32,
            total_games: 0,
            total_moves: 0,
        }
    }

    /// Folds one finished game into the totals.
    pub fn record(&mut self, result: &MatchResult) {
        self.total_games += 1;
        self.total_moves += result.moves.len() as u64;

        for color in [Color::Black, Color::White] {
            let label = result.label_for(color).to_string();
            let own = result.score.of(color);
            let opponent = result.score.of(color.other());

            *self.games_played.entry(label.clone()).or_insert(0) += 1;
            *self.score_totals.entry(label.clone()).or_insert(0) += own as u32;
            *self.score_diff_totals.entry(label).or_insert(0) += own as i64 - opponent as i64;
        }

        match result.winner {
            Some(color) => {
                let label = result.label_for(color).to_string();
                *self.wins.entry(label).or_insert(0) += 1;
            }
            None => self.draws += 1,
        }
    }

    /// Per-engine averages in label order.
    pub fn summaries(&self) -> Vec<EngineSummary> {
        self.engine_labels
            .iter()
            .map(|label| {
                let games = self.games_played.get(label).copied().unwrap_or(0);
                let divisor = games.max(1) as f64;
                EngineSummary {
                    label: label.clone(),
                    wins: self.wins.get(label).copied().unwrap_or(0),
                    games,
                    avg_score: self.score_totals.get(label).copied().unwrap_or(0) as f64 / divisor,
                    avg_margin: self.score_diff_totals.get(label).copied().unwrap_or(0) as f64
                        / divisor,
                }
            })
            .collect()
    }

    pub fn average_moves(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / self.total_games as f64
    }
}
