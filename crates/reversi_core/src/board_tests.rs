use super::*;

#[test]
fn test_opening_position() {
    let board = Board::new(8);
    assert_eq!(board.score(), Score { black: 2, white: 2 });
    assert_eq!(board.current_player(), Color::Black);
    // Standard center pattern: D4/E5 white, D5/E4 black.
    assert_eq!(board.piece_at(Coord::new(3, 3)), Some(Color::White));
    assert_eq!(board.piece_at(Coord::new(4, 4)), Some(Color::White));
    assert_eq!(board.piece_at(Coord::new(4, 3)), Some(Color::Black));
    assert_eq!(board.piece_at(Coord::new(3, 4)), Some(Color::Black));
}

#[test]
fn test_opening_position_all_sizes() {
    for size in [4, 6, 8, 10] {
        let board = Board::new(size);
        assert_eq!(
            board.score(),
            Score { black: 2, white: 2 },
            "size {} should open with two discs each",
            size
        );
        assert_eq!(board.current_player(), Color::Black);
    }
}

#[test]
fn test_opening_valid_moves_in_row_major_order() {
    let board = Board::new(8);
    let moves = board.valid_moves(Color::Black);
    let expected = [
        Coord::new(2, 3), // D3
        Coord::new(3, 2), // C4
        Coord::new(4, 5), // F5
        Coord::new(5, 4), // E6
    ];
    assert_eq!(moves, expected);
    for mv in moves {
        assert!(board.is_valid_move(mv, Color::Black));
    }
}

#[test]
fn test_play_d3_flips_d4() {
    let mut board = Board::new(8);
    assert!(board.play_move(Coord::new(2, 3), Color::Black));
    assert_eq!(board.piece_at(Coord::new(2, 3)), Some(Color::Black));
    assert_eq!(board.piece_at(Coord::new(3, 3)), Some(Color::Black));
    assert_eq!(board.score(), Score { black: 4, white: 1 });
    assert_eq!(board.current_player(), Color::White);
}

#[test]
fn test_illegal_moves_leave_board_untouched() {
    let mut board = Board::new(8);
    let before = board.to_state_string();

    // No capture line from the corner.
    assert!(!board.play_move(Coord::new(0, 0), Color::Black));
    // Occupied cell.
    assert!(!board.play_move(Coord::new(3, 3), Color::Black));
    // Off the board entirely.
    assert!(!board.play_move(Coord::new(8, 8), Color::Black));

    assert_eq!(board.to_state_string(), before);
    assert_eq!(board.current_player(), Color::Black);
    assert_eq!(board.history_len(), 0);
}

#[test]
fn test_move_flips_in_multiple_directions() {
    // Placing at A1 brackets white discs both rightward and downward.
    let mut board = Board::from_state_string(4, ".WB.W...B.......", Color::Black);
    assert!(board.play_move(Coord::new(0, 0), Color::Black));
    assert_eq!(board.score(), Score { black: 5, white: 0 });
}

#[test]
fn test_pass_turn_checks_side_to_move() {
    // White to move with no legal move; black has one.
    let mut board = Board::from_state_string(4, "BW..............", Color::White);
    assert!(!board.has_valid_move(Color::White));
    assert!(board.has_valid_move(Color::Black));
    let grid = board.to_state_string();

    // Passing out of turn is rejected.
    assert!(!board.pass_turn(Color::Black));
    assert_eq!(board.current_player(), Color::White);

    assert!(board.pass_turn(Color::White));
    assert_eq!(board.current_player(), Color::Black);
    assert_eq!(board.to_state_string(), grid);
}

#[test]
fn test_undo_reverses_moves_in_order() {
    let mut board = Board::new(8);
    let opening = board.to_state_string();

    assert!(board.play_move(Coord::new(2, 3), Color::Black));
    let after_black = board.to_state_string();
    assert!(board.play_move(Coord::new(2, 2), Color::White));

    assert!(board.undo());
    assert_eq!(board.to_state_string(), after_black);
    assert_eq!(board.current_player(), Color::White);

    assert!(board.undo());
    assert_eq!(board.to_state_string(), opening);
    assert_eq!(board.current_player(), Color::Black);

    // History is exhausted; state stays put.
    assert!(!board.undo());
    assert_eq!(board.to_state_string(), opening);
}

#[test]
fn test_undo_reverses_pass() {
    let mut board = Board::from_state_string(4, "BW..............", Color::White);
    let grid = board.to_state_string();
    assert!(board.pass_turn(Color::White));
    assert!(board.undo());
    assert_eq!(board.current_player(), Color::White);
    assert_eq!(board.to_state_string(), grid);
}

#[test]
fn test_clone_is_isolated_and_history_free() {
    let mut original = Board::new(8);
    assert!(original.play_move(Coord::new(2, 3), Color::Black));

    let mut snapshot = original.clone();
    // The clone carries the position but not the past.
    assert_eq!(snapshot.to_state_string(), original.to_state_string());
    assert_eq!(snapshot.history_len(), 0);
    assert!(!snapshot.clone().undo());

    // Mutating the clone leaves the original alone.
    let before = original.to_state_string();
    assert!(snapshot.play_move(Coord::new(2, 2), Color::White));
    assert_eq!(original.to_state_string(), before);
    assert_eq!(original.current_player(), Color::White);
    assert_eq!(original.history_len(), 1);
}

#[test]
fn test_cell_counts_always_sum_to_grid_size() {
    let mut board = Board::new(8);
    for _ in 0..6 {
        let color = board.current_player();
        let moves = board.valid_moves(color);
        if moves.is_empty() {
            break;
        }
        assert!(board.play_move(moves[0], color));
        let score = board.score();
        let empties = board
            .to_state_string()
            .chars()
            .filter(|&ch| ch == '.')
            .count();
        assert_eq!(score.black + score.white + empties, 64);
    }
}

#[test]
fn test_state_string_round_trip() {
    let mut board = Board::new(8);
    assert!(board.play_move(Coord::new(2, 3), Color::Black));
    let rebuilt = Board::from_state_string(8, &board.to_state_string(), board.current_player());
    assert_eq!(rebuilt.to_state_string(), board.to_state_string());
    assert_eq!(rebuilt.current_player(), Color::White);
    assert_eq!(rebuilt.history_len(), 0);
}

#[test]
fn test_out_of_range_reads_are_empty() {
    let board = Board::new(8);
    assert_eq!(board.piece_at(Coord::new(8, 0)), None);
    assert_eq!(board.piece_at(Coord::new(0, 8)), None);
    assert!(!board.is_on_board(-1, 0));
    assert!(!board.is_on_board(0, 8));
}

#[test]
fn test_game_over_when_neither_side_can_move() {
    let board = Board::new(8);
    assert!(!board.is_game_over());

    let full = Board::from_state_string(4, &"B".repeat(16), Color::White);
    assert!(full.is_game_over());
    assert_eq!(full.score(), Score { black: 16, white: 0 });
}
