//! Minimax search with alpha-beta pruning

use reversi_core::{Board, Color, Coord};

use crate::eval::evaluate;

/// Scores every legal root move for `color` at the given depth.
///
/// Each root move is searched with a fresh full (alpha, beta) window so the
/// returned scores are comparable across moves; the weighted selection
/// downstream needs real values, not window-clipped bounds.
///
/// # Arguments
/// * `board` - Scratch board with `color` to move; left unchanged on return
/// * `color` - The color being searched for
/// * `depth` - Total search depth in plies
/// * `nodes` - Counter for nodes visited (for statistics)
///
/// # Returns
/// `(move, score)` pairs in the board's row-major move order. Empty when
/// `color` has no legal move.
pub(crate) fn score_root_moves(
    board: &mut Board,
    color: Color,
    depth: u8,
    nodes: &mut u64,
) -> Vec<(Coord, f64)> {
    let moves = board.valid_moves(color);
    let mut scored = Vec::with_capacity(moves.len());

    for mv in moves {
        let played = board.play_move(mv, color);
        debug_assert!(played, "root moves come from valid_moves");
        *nodes += 1;

        let score = minimax(
            board,
            board.current_player(),
            depth.saturating_sub(1),
            f64::NEG_INFINITY,
            f64::INFINITY,
            color,
            nodes,
        );

        let undone = board.undo();
        debug_assert!(undone, "every played root move can be undone");

        scored.push((mv, score));
    }

    scored
}

/// Recursive minimax with alpha-beta pruning.
///
/// `player` is the side to move at this node and always matches the board's
/// own side to move, so a blocked `player` can pass unconditionally. Scores
/// are from `search_color`'s perspective; nodes where `player` is the
/// opponent minimize.
fn minimax(
    board: &mut Board,
    player: Color,
    depth: u8,
    mut alpha: f64,
    mut beta: f64,
    search_color: Color,
    nodes: &mut u64,
) -> f64 {
    let moves = board.valid_moves(player);
    let opponent = player.other();

    if depth == 0 || (moves.is_empty() && !board.has_valid_move(opponent)) {
        return evaluate(board, search_color);
    }

    // Blocked side passes and the search continues one ply down.
    if moves.is_empty() {
        let passed = board.pass_turn(player);
        debug_assert!(passed, "the side to move can always pass");
        *nodes += 1;

        let score = minimax(board, opponent, depth - 1, alpha, beta, search_color, nodes);

        let undone = board.undo();
        debug_assert!(undone, "a recorded pass can be undone");
        return score;
    }

    let maximizing = player == search_color;
    let mut best = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };

    for mv in moves {
        let played = board.play_move(mv, player);
        debug_assert!(played, "moves come from valid_moves");
        *nodes += 1;

        let score = minimax(board, opponent, depth - 1, alpha, beta, search_color, nodes);

        let undone = board.undo();
        debug_assert!(undone, "every played move can be undone");

        if maximizing {
            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
        } else {
            if score < best {
                best = score;
            }
            if best < beta {
                beta = best;
            }
        }
        if alpha >= beta {
            break; // Alpha-beta cutoff
        }
    }

    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
