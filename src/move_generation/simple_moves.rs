//! Non-capturing moves for a single piece.
//!
//! Men step one square along their two forward diagonals. Kings fly: every
//! empty square along each diagonal up to the first obstruction is a target.

use crate::game_state::checkers_rules::DIAGONALS;
use crate::game_state::checkers_types::*;
use crate::moves::move_descriptions::Move;

pub fn generate_simple_moves(board: &Board, from: Square, out: &mut Vec<Move>) {
    let Some(piece) = board.get(from) else {
        return;
    };

    if piece.is_king() {
        for (d_row, d_col) in DIAGONALS {
            let mut cursor = from.step(d_row, d_col);
            while let Some(to) = cursor {
                if !board.is_empty(to) {
                    break;
                }
                out.push(Move::Simple { from, to });
                cursor = to.step(d_row, d_col);
            }
        }
    } else {
        let forward = piece.color.forward();
        for d_col in [-1, 1] {
            if let Some(to) = from.step(forward, d_col) {
                if board.is_empty(to) {
                    out.push(Move::Simple { from, to });
                }
            }
        }
    }
}

/// Simple moves of every piece of `color`, in row-major piece order.
pub fn generate_all_simple_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    for (from, _) in board.pieces_of(color) {
        generate_simple_moves(board, from, &mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_parser::parse_board;

    fn targets(board: &Board, from: Square) -> Vec<Square> {
        let mut out = Vec::new();
        generate_simple_moves(board, from, &mut out);
        out.iter()
            .map(|mv| match mv {
                Move::Simple { to, .. } => *to,
                Move::Capture(_) => panic!("simple generator produced a capture"),
            })
            .collect()
    }

    #[test]
    fn white_man_steps_toward_row_zero() {
        let board = Board::initial();
        assert_eq!(targets(&board, Square::new(5, 0)), vec![Square::new(4, 1)]);
        assert_eq!(
            targets(&board, Square::new(5, 2)),
            vec![Square::new(4, 1), Square::new(4, 3)]
        );
        assert!(targets(&board, Square::new(6, 1)).is_empty(), "blocked by own men");
    }

    #[test]
    fn black_man_steps_toward_row_seven() {
        let board = Board::initial();
        assert_eq!(
            targets(&board, Square::new(2, 3)),
            vec![Square::new(3, 2), Square::new(3, 4)]
        );
    }

    #[test]
    fn king_slides_until_blocked() {
        let board = parse_board(
            "
            ........
            ........
            ........
            ........
            ...W....
            ........
            .b......
            ........",
        )
        .expect("valid board");
        let from = Square::new(4, 3);
        let got = targets(&board, from);
        // up-left: (3,2) (2,1) (1,0); up-right: (3,4) (2,5) (1,6) (0,7);
        // down-left: (5,2) then blocked by (6,1); down-right: (5,4) (6,5) (7,6)
        assert_eq!(got.len(), 3 + 4 + 1 + 3);
        assert!(got.contains(&Square::new(0, 7)));
        assert!(got.contains(&Square::new(5, 2)));
        assert!(!got.contains(&Square::new(6, 1)));
        assert!(!got.contains(&Square::new(7, 0)));
    }

    #[test]
    fn opening_white_has_seven_simple_moves() {
        assert_eq!(generate_all_simple_moves(&Board::initial(), Color::White).len(), 7);
        assert_eq!(generate_all_simple_moves(&Board::initial(), Color::Black).len(), 7);
    }
}
