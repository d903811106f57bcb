use crate::types::*;

/// The eight compass directions used by legality scans and flipping.
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Grid plus side to move, captured before each mutation so `undo` can
/// restore both atomically.
#[derive(Clone, Debug)]
struct HistoryEntry {
    cells: Vec<Option<Color>>,
    current_player: Color,
}

/// Canonical game state: an N x N grid of cells, the side to move, and the
/// undo history. Cells are `None` when empty.
#[derive(Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Color>>,
    current_player: Color,
    history: Vec<HistoryEntry>,
}

impl Clone for Board {
    /// Copies the grid and side to move only. Clones start with an empty
    /// history: they are search snapshots, and undoing into the parent
    /// game's past would be meaningless.
    fn clone(&self) -> Self {
        Board {
            size: self.size,
            cells: self.cells.clone(),
            current_player: self.current_player,
            history: Vec::new(),
        }
    }
}

impl Board {
    /// Creates a board with the standard four-disc opening and BLACK to move.
    ///
    /// # Panics
    /// Panics if `size` is odd or below 4; the opening needs a 2x2 center.
    pub fn new(size: usize) -> Self {
        assert!(
            size >= 4 && size % 2 == 0,
            "board size must be even and at least 4"
        );
        let mut board = Board {
            size,
            cells: vec![None; size * size],
            current_player: Color::Black,
            history: Vec::new(),
        };
        let mid = size / 2;
        board.cells[(mid - 1) * size + (mid - 1)] = Some(Color::White);
        board.cells[mid * size + mid] = Some(Color::White);
        board.cells[mid * size + (mid - 1)] = Some(Color::Black);
        board.cells[(mid - 1) * size + mid] = Some(Color::Black);
        board
    }

    /// Rebuilds a board from the flattened `B`/`W`/`.` wire form. Characters
    /// beyond the grid are ignored; missing ones count as empty.
    pub fn from_state_string(size: usize, state: &str, current_player: Color) -> Self {
        let mut board = Board::new(size);
        let mut chars = state.chars();
        for cell in board.cells.iter_mut() {
            *cell = match chars.next() {
                Some('B') => Some(Color::Black),
                Some('W') => Some(Color::White),
                _ => None,
            };
        }
        board.current_player = current_player;
        board
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Number of undo-able mutations recorded so far.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn is_on_board(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Bounds-checked read. Out-of-range reads are not an error; they answer
    /// `None` just like an empty cell, which is exactly what the direction
    /// scans need at the board edge.
    pub fn piece_at(&self, coord: Coord) -> Option<Color> {
        if coord.row >= self.size || coord.col >= self.size {
            return None;
        }
        self.cells[coord.row * self.size + coord.col]
    }

    fn cell(&self, row: i32, col: i32) -> Option<Color> {
        if !self.is_on_board(row, col) {
            return None;
        }
        self.cells[row as usize * self.size + col as usize]
    }

    /// A move is legal when the target cell is empty and on the board, and at
    /// least one of the eight rays from it crosses a contiguous run of
    /// opponent discs capped by one of `color`'s own discs.
    pub fn is_valid_move(&self, coord: Coord, color: Color) -> bool {
        if coord.row >= self.size || coord.col >= self.size {
            return false;
        }
        if self.cells[coord.row * self.size + coord.col].is_some() {
            return false;
        }
        let opponent = color.other();
        for (dr, dc) in DIRECTIONS {
            let mut r = coord.row as i32 + dr;
            let mut c = coord.col as i32 + dc;
            if self.cell(r, c) != Some(opponent) {
                continue;
            }
            while self.cell(r, c) == Some(opponent) {
                r += dr;
                c += dc;
            }
            if self.cell(r, c) == Some(color) {
                return true;
            }
        }
        false
    }

    /// All legal moves for `color` in row-major order. The ordering is part
    /// of the contract: deterministic enumeration keeps search results and
    /// tie-breaks reproducible.
    pub fn valid_moves(&self, color: Color) -> Vec<Coord> {
        let mut moves = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let coord = Coord::new(row, col);
                if self.is_valid_move(coord, color) {
                    moves.push(coord);
                }
            }
        }
        moves
    }

    pub fn has_valid_move(&self, color: Color) -> bool {
        for row in 0..self.size {
            for col in 0..self.size {
                if self.is_valid_move(Coord::new(row, col), color) {
                    return true;
                }
            }
        }
        false
    }

    /// Applies `color`'s move: places the disc and flips every bracketed run
    /// of opponent discs, possibly in several directions at once. Fails
    /// without mutating anything when the move is illegal. On success the
    /// prior state is pushed onto the history and the turn switches to the
    /// opponent.
    ///
    /// Note that the side to move is not checked here; turn policy is the
    /// caller's responsibility.
    pub fn play_move(&mut self, coord: Coord, color: Color) -> bool {
        if !self.is_valid_move(coord, color) {
            return false;
        }
        self.push_history();

        self.cells[coord.row * self.size + coord.col] = Some(color);
        let opponent = color.other();
        for (dr, dc) in DIRECTIONS {
            let mut r = coord.row as i32 + dr;
            let mut c = coord.col as i32 + dc;
            let mut run = Vec::new();
            while self.cell(r, c) == Some(opponent) {
                run.push((r as usize, c as usize));
                r += dr;
                c += dc;
            }
            // Only runs capped by our own disc flip; runs that hit the edge
            // or an empty cell stay as they are.
            if self.cell(r, c) == Some(color) {
                for (fr, fc) in run {
                    self.cells[fr * self.size + fc] = Some(color);
                }
            }
        }
        self.current_player = opponent;
        true
    }

    /// Hands the turn to the opponent without touching the grid. Fails when
    /// `color` is not the side to move. Whether `color` is genuinely blocked
    /// is a caller obligation, checked via `has_valid_move`.
    pub fn pass_turn(&mut self, color: Color) -> bool {
        if self.current_player != color {
            return false;
        }
        self.push_history();
        self.current_player = color.other();
        true
    }

    /// Reverts the most recent successful `play_move` or `pass_turn`,
    /// restoring grid and side to move together. Returns false when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(entry) => {
                self.cells = entry.cells;
                self.current_player = entry.current_player;
                true
            }
            None => false,
        }
    }

    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for cell in &self.cells {
            match cell {
                Some(Color::Black) => score.black += 1,
                Some(Color::White) => score.white += 1,
                None => {}
            }
        }
        score
    }

    /// The game ends when neither color has a legal move.
    pub fn is_game_over(&self) -> bool {
        !self.has_valid_move(Color::Black) && !self.has_valid_move(Color::White)
    }

    /// Flattens the grid row-major into one `B`/`W`/`.` character per cell,
    /// the form carried by board updates on the wire.
    pub fn to_state_string(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell {
                Some(Color::Black) => 'B',
                Some(Color::White) => 'W',
                None => '.',
            })
            .collect()
    }

    fn push_history(&mut self) {
        self.history.push(HistoryEntry {
            cells: self.cells.clone(),
            current_player: self.current_player,
        });
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
