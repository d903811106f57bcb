//! Command handling and board bookkeeping for a protocol session.

use std::thread;
use std::time::Duration;

use engine_registry::{build_engine, EngineKind, EngineOptions};
use reversi_core::{color_from_name, coord_to_str, str_to_coord, Board, Color, Engine};

/// How a session is assembled: which engine answers GENMOVE and on what board.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub engine: EngineKind,
    pub board_size: usize,
    /// Search depth override for engines that search
    pub depth: Option<u8>,
    /// RNG seed for reproducible games
    pub seed: Option<u64>,
    /// Pause before answering GENMOVE, so moves do not appear instantly
    pub think_delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::Minimax,
            board_size: 8,
            depth: None,
            seed: None,
            think_delay: Duration::from_millis(200),
        }
    }
}

/// One game hosted behind the text protocol.
///
/// `handle_command` parses a single request line and returns the response
/// lines to write back, in order. Empty and unknown commands produce no
/// response at all.
pub struct Session {
    board: Board,
    board_size: usize,
    engine: Box<dyn Engine>,
    think_delay: Duration,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        let engine = build_engine(
            config.engine,
            &EngineOptions {
                depth: config.depth,
                seed: config.seed,
                ..Default::default()
            },
        );

        Self {
            board: Board::new(config.board_size),
            board_size: config.board_size,
            engine,
            think_delay: config.think_delay,
        }
    }

    pub fn handle_command(&mut self, line: &str) -> Vec<String> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            return Vec::new();
        }

        match parts[0] {
            "INIT" => self.handle_init(),
            "NEWGAME" => self.handle_newgame(),
            "PLAY" => self.handle_play(&parts),
            "GENMOVE" => self.handle_genmove(parts.get(1).copied()),
            "UNDO" => self.handle_undo(),
            "BOARD" => vec![self.board_update()],
            "VALID_MOVES" => self.handle_valid_moves(parts.get(1).copied()),
            "PASS" => self.handle_pass(parts.get(1).copied()),
            _ => Vec::new(),
        }
    }

    // ------------------------------------------------------------------
    // Command handlers
    // ------------------------------------------------------------------

    fn handle_init(&mut self) -> Vec<String> {
        self.board = Board::new(self.board_size);
        vec!["READY".to_string()]
    }

    fn handle_newgame(&mut self) -> Vec<String> {
        self.board = Board::new(self.board_size);
        self.engine.new_game();
        vec!["OK".to_string(), self.board_update()]
    }

    fn handle_play(&mut self, parts: &[&str]) -> Vec<String> {
        if parts.len() < 2 {
            return vec!["ERROR Missing coordinate".to_string()];
        }

        let coord_str = parts[1];
        match str_to_coord(coord_str) {
            Some(coord) => {
                let player = self.board.current_player();
                if self.board.play_move(coord, player) {
                    let mut responses = vec!["OK".to_string(), self.board_update()];
                    if let Some(result) = self.game_result() {
                        responses.push(result);
                    }
                    responses
                } else {
                    vec![format!("ERROR Illegal move {}", coord_str)]
                }
            }
            None => vec!["ERROR Invalid coordinate format".to_string()],
        }
    }

    fn handle_genmove(&mut self, color_arg: Option<&str>) -> Vec<String> {
        let color = match self.resolve_color(color_arg) {
            Ok(color) => color,
            Err(error) => return vec![error],
        };

        if !self.think_delay.is_zero() {
            thread::sleep(self.think_delay);
        }

        let valid = self.board.valid_moves(color);
        if valid.is_empty() {
            return self.emit_pass(color);
        }

        // The engine only ever sees a private snapshot of the game.
        let snapshot = self.board.clone();
        let chosen = self
            .engine
            .pick_move(snapshot, color, &valid)
            .unwrap_or(valid[0]);

        let move_str = coord_to_str(chosen);
        if self.board.play_move(chosen, color) {
            let mut responses = vec![format!("MOVE {}", move_str), self.board_update()];
            if let Some(result) = self.game_result() {
                responses.push(result);
            }
            responses
        } else {
            vec![format!("ERROR Failed to apply move {}", move_str)]
        }
    }

    fn handle_undo(&mut self) -> Vec<String> {
        if self.board.undo() {
            vec!["OK".to_string(), self.board_update()]
        } else {
            vec!["ERROR Cannot undo".to_string()]
        }
    }

    fn handle_valid_moves(&mut self, color_arg: Option<&str>) -> Vec<String> {
        let color = match self.resolve_color(color_arg) {
            Ok(color) => color,
            Err(error) => return vec![error],
        };

        let moves: Vec<String> = self
            .board
            .valid_moves(color)
            .into_iter()
            .map(coord_to_str)
            .collect();
        vec![format!("VALID_MOVES {}", moves.join(" "))]
    }

    fn handle_pass(&mut self, color_arg: Option<&str>) -> Vec<String> {
        let color = match self.resolve_color(color_arg) {
            Ok(color) => color,
            Err(error) => return vec![error],
        };

        if color != self.board.current_player() {
            return vec![format!("ERROR Not {}'s turn", color)];
        }
        if self.board.has_valid_move(color) {
            return vec![format!("ERROR Moves available for {}", color)];
        }
        if self.board.pass_turn(color) {
            let mut responses = vec!["OK".to_string(), self.board_update()];
            if let Some(result) = self.game_result() {
                responses.push(result);
            }
            responses
        } else {
            vec![format!("ERROR Unable to pass for {}", color)]
        }
    }

    // ------------------------------------------------------------------
    // Shared plumbing
    // ------------------------------------------------------------------

    /// GENMOVE for a blocked color turns into a pass on the real board.
    fn emit_pass(&mut self, color: Color) -> Vec<String> {
        if self.board.pass_turn(color) {
            let mut responses = vec![format!("PASS {}", color), self.board_update()];
            if let Some(result) = self.game_result() {
                responses.push(result);
            }
            responses
        } else {
            vec![format!("ERROR Cannot pass {}", color)]
        }
    }

    fn resolve_color(&self, color_arg: Option<&str>) -> Result<Color, String> {
        match color_arg {
            Some(name) => {
                color_from_name(name).ok_or_else(|| format!("ERROR Invalid color {}", name))
            }
            None => Ok(self.board.current_player()),
        }
    }

    /// RESULT line once neither side can move, otherwise nothing.
    fn game_result(&self) -> Option<String> {
        let next = self.board.current_player();
        if self.board.has_valid_move(next) || self.board.has_valid_move(next.other()) {
            return None;
        }

        let score = self.board.score();
        let winner = if score.black > score.white {
            "BLACK"
        } else if score.white > score.black {
            "WHITE"
        } else {
            "DRAW"
        };
        Some(format!("RESULT {}", winner))
    }

    fn board_update(&self) -> String {
        format!(
            "BOARD {} {} {}",
            self.board_size,
            self.board.current_player(),
            self.board.to_state_string()
        )
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
