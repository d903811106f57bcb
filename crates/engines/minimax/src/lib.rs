//! Minimax Reversi Engine
//!
//! Alpha-beta minimax search over a blended positional evaluation, with
//! softmax-weighted selection among the top-scoring root moves so repeated
//! games do not replay the same line.

mod eval;
mod search;
mod select;

use rand::rngs::StdRng;
use rand::SeedableRng;
use reversi_core::{Board, Color, Coord, Engine};


/// Smallest usable softmax temperature; anything lower is clamped up to this.
const MIN_TEMPERATURE: f64 = 1e-6;

/// Tunable knobs for [`MinimaxEngine`].
///
/// Out-of-range values are clamped at construction rather than rejected, so
/// any config produces a working engine.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Search depth in plies (minimum 1)
    pub depth: u8,
    /// When false the engine always plays the single best-scoring move
    pub randomize: bool,
    /// Number of top-scoring moves eligible for weighted selection (minimum 1)
    pub top_k: usize,
    /// Softmax temperature; higher spreads probability across candidates
    pub temperature: f64,
    /// Fixed RNG seed for reproducible games; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            randomize: true,
            top_k: 2,
            temperature: 0.15,
            seed: None,
        }
    }
}

/// Reversi engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Fixed-depth minimax search with alpha-beta pruning
/// - Evaluation blending disc balance, mobility, and corner control
/// - Softmax sampling over the top-k root moves for variety
/// - An explicit RNG so seeded games replay identically
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    depth: u8,
    randomize: bool,
    top_k: usize,
    temperature: f64,
    rng: StdRng,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            depth: config.depth.max(1),
            randomize: config.randomize,
            top_k: config.top_k.max(1),
            temperature: config.temperature.max(MIN_TEMPERATURE),
            rng,
            nodes: 0,
        }
    }

    /// Nodes visited by the most recent `pick_move` call
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn pick_move(&mut self, snapshot: Board, color: Color, valid_moves: &[Coord]) -> Option<Coord> {
        if valid_moves.is_empty() {
            return None;
        }
        self.nodes = 0;

        let mut board = snapshot;
        let scored = search::score_root_moves(&mut board, color, self.depth, &mut self.nodes);
        if scored.is_empty() {
            return None;
        }

        let choice = if self.randomize && scored.len() > 1 {
            select::select_move(&scored, self.top_k, self.temperature, &mut self.rng)
        } else {
            select::argmax_move(&scored)
        };

        Some(ensure_legal(choice, valid_moves))
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Clamps a chosen move to the caller's legal move list.
///
/// `valid_moves` must be non-empty. Selection only ever returns moves it was
/// given, but the caller's list is the authority, so anything outside it is
/// replaced with the first legal move.
fn ensure_legal(choice: Coord, valid_moves: &[Coord]) -> Coord {
    if valid_moves.contains(&choice) {
        choice
    } else {
        valid_moves[0]
    }
}

// Re-export for direct use if needed
pub use eval::evaluate;
