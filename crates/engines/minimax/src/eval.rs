//! Board evaluation blending disc balance, mobility, and corner control.

use reversi_core::{Board, Color, Coord};

/// Weight per disc of material advantage.
pub(crate) const DISC_WEIGHT: f64 = 1.5;
/// Weight per extra legal move. Keeping options open matters more in the
/// midgame than raw disc count.
pub(crate) const MOBILITY_WEIGHT: f64 = 5.0;
/// Weight per corner held. A corner disc can never be recaptured.
pub(crate) const CORNER_WEIGHT: f64 = 25.0;

/// Evaluates the board from `color`'s perspective.
///
/// Returns a score where:
/// - Positive = good for `color`
/// - Negative = good for the opponent
/// - 0 = balanced position
pub fn evaluate(board: &Board, color: Color) -> f64 {
    let opponent = color.other();
    let score = board.score();

    let disc_balance = score.of(color) as f64 - score.of(opponent) as f64;
    let mobility =
        board.valid_moves(color).len() as f64 - board.valid_moves(opponent).len() as f64;
    let corners = f64::from(corner_balance(board, color));

    disc_balance * DISC_WEIGHT + mobility * MOBILITY_WEIGHT + corners * CORNER_WEIGHT
}

/// Corners held by `color` minus corners held by the opponent.
fn corner_balance(board: &Board, color: Color) -> i32 {
    let last = board.size() - 1;
    let corners = [
        Coord::new(0, 0),
        Coord::new(0, last),
        Coord::new(last, 0),
        Coord::new(last, last),
    ];

    let mut balance = 0;
    for corner in corners {
        match board.piece_at(corner) {
            Some(owner) if owner == color => balance += 1,
            Some(_) => balance -= 1,
            None => {}
        }
    }
    balance
}
