//! Core value types shared by the board model, move generation, and engines.
//! Everything here is `Copy` so search code can pass values around freely.

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoStack;

use crate::game_state::checkers_rules::BOARD_SIZE;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row direction of a man's forward step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row on which a man of this color is crowned.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => BOARD_SIZE - 1,
        }
    }

    /// Single-letter token used in state views and move texts.
    #[inline]
    pub const fn token(self) -> &'static str {
        match self {
            Color::White => "w",
            Color::Black => "b",
        }
    }
}

/// Piece rank: a plain man or a promoted (flying) king.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    #[inline]
    pub const fn man(color: Color) -> Self {
        Self {
            color,
            rank: Rank::Man,
        }
    }

    #[inline]
    pub const fn king(color: Color) -> Self {
        Self {
            color,
            rank: Rank::King,
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Client token: lowercase for men, uppercase for kings.
    pub const fn token(self) -> char {
        match (self.color, self.rank) {
            (Color::White, Rank::Man) => 'w',
            (Color::White, Rank::King) => 'W',
            (Color::Black, Rank::Man) => 'b',
            (Color::Black, Rank::King) => 'B',
        }
    }

    pub const fn from_token(token: char) -> Option<Self> {
        match token {
            'w' => Some(Piece::man(Color::White)),
            'W' => Some(Piece::king(Color::White)),
            'b' => Some(Piece::man(Color::Black)),
            'B' => Some(Piece::king(Color::Black)),
            _ => None,
        }
    }
}

/// Zero-indexed `(row, col)` board coordinate, row 0 at the top.
///
/// Signed so that off-board neighbours can be represented while scanning;
/// use [`Square::is_on_board`] before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Only dark squares, where `(row + col)` is odd, are playable.
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.row as i16 + self.col as i16) % 2 != 0
    }

    /// Neighbour in direction `(d_row, d_col)`, or `None` off the board.
    #[inline]
    pub fn step(self, d_row: i8, d_col: i8) -> Option<Square> {
        let next = Square::new(self.row.checked_add(d_row)?, self.col.checked_add(d_col)?);
        next.is_on_board().then_some(next)
    }

    #[inline]
    pub const fn to_pair(self) -> [i8; 2] {
        [self.row, self.col]
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Game status as reported to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    WinWhite,
    WinBlack,
}

impl GameStatus {
    #[inline]
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameStatus::WinWhite,
            Color::Black => GameStatus::WinBlack,
        }
    }

    #[inline]
    pub const fn is_playing(self) -> bool {
        matches!(self, GameStatus::Playing)
    }

    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Playing => None,
            GameStatus::WinWhite => Some(Color::White),
            GameStatus::WinBlack => Some(Color::Black),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::WinWhite => "win-white",
            GameStatus::WinBlack => "win-black",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_squares_have_odd_coordinate_sum() {
        assert!(Square::new(0, 1).is_dark());
        assert!(Square::new(5, 0).is_dark());
        assert!(!Square::new(0, 0).is_dark());
        assert!(!Square::new(7, 7).is_dark());
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        assert!(!Square::new(100, 100).is_dark());
        assert!(Square::new(i8::MAX, 0).is_dark());
        assert!(!Square::new(i8::MIN, i8::MIN).is_dark());
        assert_eq!(Square::new(i8::MAX, 0).step(1, 1), None);
        assert_eq!(Square::new(i8::MIN, 3).step(-1, 1), None);
    }

    #[test]
    fn step_off_the_edge_is_none() {
        assert_eq!(Square::new(0, 1).step(-1, 1), None);
        assert_eq!(Square::new(3, 2).step(1, 1), Some(Square::new(4, 3)));
    }

    #[test]
    fn piece_tokens_match_client_format() {
        for token in ['w', 'W', 'b', 'B'] {
            let piece = Piece::from_token(token).expect("known token");
            assert_eq!(piece.token(), token);
        }
        assert_eq!(Piece::from_token('x'), None);
    }

    #[test]
    fn status_strings() {
        assert_eq!(GameStatus::Playing.as_str(), "playing");
        assert_eq!(GameStatus::win_for(Color::White).as_str(), "win-white");
        assert_eq!(GameStatus::win_for(Color::Black).as_str(), "win-black");
    }
}
