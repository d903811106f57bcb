//! Match runner for playing games between engines

use engine_registry::{build_engine, EngineKind, EngineOptions};
use reversi_core::{coord_to_str, Board, Color, Coord, Engine, Score};

use crate::stats::DuelStats;

/// How one contestant is built: which engine, under what label, with what knobs.
#[derive(Debug, Clone)]
pub struct EngineSpec {
    pub kind: EngineKind,
    /// Display label used in logs, statistics, and reports
    pub label: String,
    /// Search depth for engines that search
    pub depth: Option<u8>,
    /// RNG seed for reproducible series
    pub seed: Option<u64>,
}

impl EngineSpec {
    pub fn new(kind: EngineKind) -> Self {
        Self {
            kind,
            label: kind.label().to_string(),
            depth: None,
            seed: None,
        }
    }
}

/// A live engine together with the spec it was built from.
pub struct EnginePlayer {
    spec: EngineSpec,
    engine: Box<dyn Engine>,
}

impl EnginePlayer {
    pub fn new(spec: EngineSpec) -> Self {
        let engine = build_engine(
            spec.kind,
            &EngineOptions {
                depth: spec.depth,
                seed: spec.seed,
                ..Default::default()
            },
        );
        Self { spec, engine }
    }

    pub fn label(&self) -> &str {
        &self.spec.label
    }

    /// Asks the engine for a move on a private snapshot and clamps the
    /// answer to the legal move list. Returns `None` only when `color` has
    /// no legal move at all.
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Coord> {
        let snapshot = board.clone();
        let valid_moves = snapshot.valid_moves(color);
        if valid_moves.is_empty() {
            return None;
        }

        let chosen = self.engine.pick_move(snapshot, color, &valid_moves);
        Some(match chosen {
            Some(mv) if valid_moves.contains(&mv) => mv,
            _ => valid_moves[0],
        })
    }
}

/// Configuration for a duel series
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: u32,
    /// Board size for every game
    pub board_size: usize,
    /// Whether to alternate colors each game
    pub swap_colors: bool,
    /// Print progress during the series
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 10,
            board_size: 8,
            swap_colors: true,
            verbose: true,
        }
    }
}

/// Outcome of a single finished game.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// Winning color, or `None` for a draw
    pub winner: Option<Color>,
    pub score: Score,
    /// Move log as (mover, coordinate) pairs; passes log as "PASS"
    pub moves: Vec<(Color, String)>,
    pub black_label: String,
    pub white_label: String,
}

impl MatchResult {
    pub fn label_for(&self, color: Color) -> &str {
        match color {
            Color::Black => &self.black_label,
            Color::White => &self.white_label,
        }
    }
}

/// Runs series of games between two engines
pub struct DuelRunner {
    config: MatchConfig,
}

impl DuelRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Plays the configured number of games between two players.
    ///
    /// `first` takes Black in game one; with `swap_colors` the assignment
    /// alternates every game so neither engine keeps the first-move edge.
    pub fn run_series(
        &self,
        first: &mut EnginePlayer,
        second: &mut EnginePlayer,
    ) -> (DuelStats, Vec<MatchResult>) {
        let mut labels = vec![first.label().to_string()];
        if second.label() != first.label() {
            labels.push(second.label().to_string());
        }

        let mut stats = DuelStats::new(labels);
        let mut results = Vec::with_capacity(self.config.games as usize);

        for game_index in 0..self.config.games {
            let result = if self.config.swap_colors && game_index % 2 == 1 {
                self.play_game(second, first)
            } else {
                self.play_game(first, second)
            };

            stats.record(&result);

            if self.config.verbose {
                let outcome = match result.winner {
                    Some(color) => format!("{} as {}", result.label_for(color), color),
                    None => "Draw".to_string(),
                };
                println!(
                    "Game {}/{}: {} - {}-{}",
                    game_index + 1,
                    self.config.games,
                    outcome,
                    result.score.black,
                    result.score.white
                );
            }

            results.push(result);
        }

        (stats, results)
    }

    /// Plays a single game with the given color assignment.
    fn play_game(&self, black: &mut EnginePlayer, white: &mut EnginePlayer) -> MatchResult {
        let mut board = Board::new(self.config.board_size);
        black.engine.new_game();
        white.engine.new_game();

        let mut moves: Vec<(Color, String)> = Vec::new();

        while !board.is_game_over() {
            let color = board.current_player();
            let valid_moves = board.valid_moves(color);

            if valid_moves.is_empty() {
                if board.pass_turn(color) {
                    moves.push((color, "PASS".to_string()));
                    continue;
                }
                break;
            }

            let player = match color {
                Color::Black => &mut *black,
                Color::White => &mut *white,
            };

            let chosen = player.choose_move(&board, color);
            let mv = match chosen {
                Some(mv) if board.play_move(mv, color) => mv,
                _ => {
                    // A misbehaving engine forfeits its pick, not the game.
                    let fallback = valid_moves[0];
                    board.play_move(fallback, color);
                    fallback
                }
            };
            moves.push((color, coord_to_str(mv)));
        }

        let score = board.score();
        MatchResult {
            winner: determine_winner(score),
            score,
            moves,
            black_label: black.label().to_string(),
            white_label: white.label().to_string(),
        }
    }
}

fn determine_winner(score: Score) -> Option<Color> {
    if score.black > score.white {
        Some(Color::Black)
    } else if score.white > score.black {
        Some(Color::White)
    } else {
        None
    }
}
