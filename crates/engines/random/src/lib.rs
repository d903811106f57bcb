//! Random Move Reversi Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Testing infrastructure before tuning the searching engine
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use reversi_core::{Board, Color, Coord, Engine};


/// A Reversi engine that plays random legal moves.
///
/// This engine provides no evaluation - it simply picks a random move
/// from all available legal moves. It's the simplest possible engine
/// and serves as a baseline for testing.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Builds an engine whose picks replay identically for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn pick_move(&mut self, _snapshot: Board, _color: Color, valid_moves: &[Coord]) -> Option<Coord> {
        valid_moves.choose(&mut self.rng).copied()
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}
