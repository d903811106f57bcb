//! Whole-game rule invariants
//!
//! Drives complete games with a first-legal-move policy and checks the
//! properties that must hold at every step:
//! - Moves reported legal are playable, and playing adds the placed disc
//!   plus at least one flip to the mover's count
//! - Disc and empty-cell counts always sum to the grid size
//! - A blocked side passes without the grid changing
//! - The game ends exactly when neither side can move
//! - Undoing every mutation walks back to the exact opening position

use reversi_core::{Board, Color, Score};

fn empty_cells(board: &Board) -> usize {
    board
        .to_state_string()
        .chars()
        .filter(|&ch| ch == '.')
        .count()
}

/// Plays a full game taking the first legal move every turn. Returns the
/// finished board and the number of recorded mutations (moves plus passes).
fn drive_game(size: usize) -> (Board, usize) {
    let mut board = Board::new(size);
    let mut mutations = 0;

    // Every iteration either fills a cell or passes, and two consecutive
    // blocked sides end the game, so this bound is never reached.
    for _ in 0..size * size * 4 {
        if board.is_game_over() {
            break;
        }
        let color = board.current_player();
        let moves = board.valid_moves(color);

        if moves.is_empty() {
            let grid = board.to_state_string();
            assert!(
                board.pass_turn(color),
                "the blocked side to move must be able to pass"
            );
            mutations += 1;
            assert_eq!(
                board.to_state_string(),
                grid,
                "passing must not touch the grid"
            );
            continue;
        }

        let before = board.score();
        let mv = moves[0];
        assert!(board.is_valid_move(mv, color));
        assert!(board.play_move(mv, color));
        mutations += 1;

        let after = board.score();
        assert!(
            after.of(color) >= before.of(color) + 2,
            "a move places one disc and flips at least one"
        );
        assert_eq!(
            after.black + after.white + empty_cells(&board),
            size * size,
            "cell counts must be conserved"
        );
        assert_eq!(board.current_player(), color.other());
    }

    (board, mutations)
}

// =============================================================================
// Full Game Tests
// =============================================================================

#[test]
fn test_full_game_reaches_terminal_state() {
    let (board, mutations) = drive_game(8);

    assert!(board.is_game_over());
    assert!(board.valid_moves(Color::Black).is_empty());
    assert!(board.valid_moves(Color::White).is_empty());
    assert_eq!(board.history_len(), mutations);

    let final_score = board.score();
    assert!(final_score.black + final_score.white >= 4);
}

#[test]
fn test_full_game_on_small_and_large_boards() {
    for size in [4, 6, 10] {
        let (board, _) = drive_game(size);
        assert!(board.is_game_over(), "size {} game must finish", size);
    }
}

// =============================================================================
// Undo Tests
// =============================================================================

#[test]
fn test_undo_walks_back_to_the_opening() {
    let size = 8;
    let opening = Board::new(size);
    let (mut board, mutations) = drive_game(size);

    for step in 0..mutations {
        assert!(board.undo(), "undo {} of {} must succeed", step + 1, mutations);
    }

    assert_eq!(board.to_state_string(), opening.to_state_string());
    assert_eq!(board.current_player(), Color::Black);
    assert_eq!(board.score(), Score { black: 2, white: 2 });

    // One more undo finds nothing and changes nothing.
    assert!(!board.undo());
    assert_eq!(board.to_state_string(), opening.to_state_string());
}
