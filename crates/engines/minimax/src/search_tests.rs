use super::*;

const EPS: f64 = 1e-9;

#[test]
fn test_opening_moves_score_equal_by_symmetry() {
    let mut board = Board::new(8);
    let mut nodes = 0;

    let scored = score_root_moves(&mut board, Color::Black, 1, &mut nodes);

    let moves: Vec<Coord> = scored.iter().map(|&(mv, _)| mv).collect();
    assert_eq!(
        moves,
        vec![
            Coord::new(2, 3),
            Coord::new(3, 2),
            Coord::new(4, 5),
            Coord::new(5, 4),
        ],
        "root moves keep the board's row-major order"
    );

    // Every opening reply flips exactly one disc into a rotated copy of the
    // same position: 3 discs of balance, equal mobility, no corners.
    for &(mv, score) in &scored {
        assert!(
            (score - 4.5).abs() < EPS,
            "move {:?} scored {}, expected 4.5",
            mv,
            score
        );
    }
    assert_eq!(nodes, 4);
}

#[test]
fn test_scores_are_deterministic() {
    let mut first_board = Board::new(8);
    let mut second_board = Board::new(8);
    let mut nodes = 0;

    let first = score_root_moves(&mut first_board, Color::Black, 3, &mut nodes);
    let second = score_root_moves(&mut second_board, Color::Black, 3, &mut nodes);

    assert_eq!(first, second);
}

#[test]
fn test_scratch_board_left_unchanged() {
    let mut board = Board::new(8);
    let grid = board.to_state_string();
    let mut nodes = 0;

    score_root_moves(&mut board, Color::Black, 3, &mut nodes);

    assert_eq!(board.to_state_string(), grid);
    assert_eq!(board.current_player(), Color::Black);
    assert_eq!(board.history_len(), 0, "every make must be unmade");
}

#[test]
fn test_blocked_color_scores_nothing() {
    // A lone opposing disc gives Black nothing to bracket.
    let mut board = Board::from_state_string(4, "W...............", Color::Black);
    let mut nodes = 0;

    let scored = score_root_moves(&mut board, Color::Black, 3, &mut nodes);

    assert!(scored.is_empty());
    assert_eq!(nodes, 0);
}

#[test]
fn test_search_passes_over_a_blocked_opponent() {
    // Two detached clusters. Whichever cluster Black captures first leaves
    // White with no reply but Black still able to finish the other, so the
    // line below depth 1 runs through a pass node for White.
    let mut board = Board::from_state_string(4, "BW........WB....", Color::Black);
    let mut nodes = 0;

    let scored = score_root_moves(&mut board, Color::Black, 3, &mut nodes);

    let moves: Vec<Coord> = scored.iter().map(|&(mv, _)| mv).collect();
    assert_eq!(moves, vec![Coord::new(0, 2), Coord::new(2, 1)]);

    // Both lines end with all six discs Black plus the A1 corner:
    // 6 * 1.5 + 1 * 25 = 34.
    for &(mv, score) in &scored {
        assert!(
            (score - 34.0).abs() < EPS,
            "move {:?} scored {}, expected 34.0",
            mv,
            score
        );
    }

    // Per root: one move, one pass, one forced reply.
    assert_eq!(nodes, 6);
    assert_eq!(board.history_len(), 0);
}

#[test]
fn test_corner_capture_outscores_plain_edge() {
    // Black can take the A1 corner or an edge square on row 3; both flip
    // one disc, but only one lands on a corner.
    let mut board = Board::from_state_string(4, ".WB......WB.....", Color::Black);
    let mut nodes = 0;

    let scored = score_root_moves(&mut board, Color::Black, 1, &mut nodes);

    assert_eq!(scored.len(), 2);
    assert_eq!(scored[0].0, Coord::new(0, 0));
    assert_eq!(scored[1].0, Coord::new(2, 0));
    assert!((scored[0].1 - 29.5).abs() < EPS);
    assert!((scored[1].1 - 4.5).abs() < EPS);
    assert!(
        scored[0].1 > scored[1].1,
        "the corner move must dominate the edge move"
    );
}

#[test]
fn test_deeper_search_visits_more_nodes() {
    let mut board = Board::new(8);

    let mut shallow_nodes = 0;
    score_root_moves(&mut board, Color::Black, 1, &mut shallow_nodes);

    let mut deep_nodes = 0;
    score_root_moves(&mut board, Color::Black, 3, &mut deep_nodes);

    assert!(deep_nodes > shallow_nodes);
}
