use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
    /// Wire name used by the text protocol and reports.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "BLACK",
            Color::White => "WHITE",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A 0-indexed (row, column) cell address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Disc counts per color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    pub fn of(self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

// Helpers

/// Formats a coordinate in letter+number notation: column letter from 'A',
/// 1-based row number. (2, 3) becomes "D3".
pub fn coord_to_str(coord: Coord) -> String {
    let col = (b'A' + coord.col as u8) as char;
    format!("{}{}", col, coord.row + 1)
}

/// Parses "D3"-style notation, case-insensitive. Bounds against a concrete
/// board size are the board's job; this only rejects malformed text.
pub fn str_to_coord(s: &str) -> Option<Coord> {
    let mut chars = s.chars();
    let col_ch = chars.next()?;
    if !col_ch.is_ascii_alphabetic() {
        return None;
    }
    let col = (col_ch.to_ascii_uppercase() as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(Coord::new(row - 1, col))
}

pub fn color_from_name(s: &str) -> Option<Color> {
    match s {
        "BLACK" => Some(Color::Black),
        "WHITE" => Some(Color::White),
        _ => None,
    }
}
