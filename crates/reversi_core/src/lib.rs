pub mod board;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use types::*;

// =============================================================================
// Engine trait
// =============================================================================

/// Trait that all Reversi engines must implement.
///
/// This allows swapping between the searching engine, the random baseline,
/// and future variants behind one move-picking interface. Engines never see
/// the authoritative game board: drivers hand them a private snapshot.
pub trait Engine: Send {
    /// Choose a move for `color` on the given board snapshot.
    ///
    /// # Arguments
    /// * `snapshot` - Private copy of the game; the engine may mutate it freely
    /// * `color` - The color the engine is choosing for
    /// * `valid_moves` - Legal moves for `color`, in row-major order
    ///
    /// # Returns
    /// A move drawn from `valid_moves`, or `None` when `valid_moves` is empty
    /// (the caller resolves that by passing).
    fn pick_move(&mut self, snapshot: Board, color: Color, valid_moves: &[Coord]) -> Option<Coord>;

    /// Returns the engine's name for logs and reports
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
