//! 8x8 board model.
//!
//! The grid is a plain `Copy` array so speculative capture search can clone
//! it per recursion level without touching the authoritative board.

use crate::game_state::checkers_rules::{BLACK_START_ROWS, BOARD_SIZE, WHITE_START_ROWS};
use crate::game_state::checkers_types::{Color, Piece, Rank, Square};

const N: usize = BOARD_SIZE as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Piece>; N]; N],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard 12-vs-12 setup: black men on rows 0-2, white men on rows 5-7.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let sq = Square::new(row, col);
                if !sq.is_dark() {
                    continue;
                }
                if BLACK_START_ROWS.contains(&row) {
                    board.set(sq, Some(Piece::man(Color::Black)));
                } else if WHITE_START_ROWS.contains(&row) {
                    board.set(sq, Some(Piece::man(Color::White)));
                }
            }
        }
        board
    }

    /// Piece on `sq`; `None` for empty or off-board squares.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> {
        if !sq.is_on_board() {
            return None;
        }
        self.cells[sq.row as usize][sq.col as usize]
    }

    /// True only for on-board squares with no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        sq.is_on_board() && self.cells[sq.row as usize][sq.col as usize].is_none()
    }

    /// Callers must pass an on-board square.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        debug_assert!(sq.is_on_board(), "set on off-board square {sq}");
        self.cells[sq.row as usize][sq.col as usize] = piece;
    }

    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.get(sq);
        if piece.is_some() {
            self.set(sq, None);
        }
        piece
    }

    /// Moves whatever stands on `from` to `to`, leaving `from` empty.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.take(from)?;
        self.set(to, Some(piece));
        Some(piece)
    }

    /// Crowns a man standing on its promotion row. Returns whether it did.
    pub fn promote(&mut self, sq: Square) -> bool {
        match self.get(sq) {
            Some(piece) if piece.rank == Rank::Man && sq.row == piece.color.promotion_row() => {
                self.set(sq, Some(Piece::king(piece.color)));
                true
            }
            _ => false,
        }
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Square::new(row as i8, col as i8), piece))
            })
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces_of(color).count()
    }

    /// Raw rows, for views and rendering.
    #[inline]
    pub fn rows(&self) -> &[[Option<Piece>; N]; N] {
        &self.cells
    }
}
