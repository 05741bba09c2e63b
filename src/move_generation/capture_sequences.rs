//! Recursive capture-sequence search for a single piece.
//!
//! Each capture step is explored on a private copy of the board with the
//! victim removed and the capturer relocated (and crowned if it reached its
//! promotion row), then the search recurses from the landing square. Since
//! victims leave the copy immediately, a square captured earlier in the same
//! sequence can never be captured again. It is an empty square from then on,
//! so a flying king may pass through it or land on it later in the sequence.
//!
//! Men capture one square away in all four diagonal directions. Kings fly:
//! any number of empty squares, one opponent piece, then every empty square
//! beyond it up to the next obstruction is a candidate landing square.

use crate::game_state::checkers_rules::DIAGONALS;
use crate::game_state::checkers_types::*;
use crate::moves::move_descriptions::CaptureSequence;

/// All maximal-by-continuation capture sequences starting at `from`.
///
/// A sequence stops only where no further capture exists, so every returned
/// sequence is complete. Returns an empty list for empty squares.
pub fn capture_sequences_from(board: &Board, from: Square) -> Vec<CaptureSequence> {
    let mut out = Vec::new();
    collect_sequences(board, from, &mut out);
    out
}

/// Whether the piece on `from` has at least one capture available.
pub fn has_capture_from(board: &Board, from: Square) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };
    DIAGONALS
        .iter()
        .any(|&(d_row, d_col)| first_capture_in_direction(board, from, piece, d_row, d_col).is_some())
}

fn collect_sequences(board: &Board, from: Square, out: &mut Vec<CaptureSequence>) {
    let Some(piece) = board.get(from) else {
        return;
    };

    for (d_row, d_col) in DIAGONALS {
        let Some((victim, first_landing)) =
            first_capture_in_direction(board, from, piece, d_row, d_col)
        else {
            continue;
        };

        if piece.is_king() {
            let mut landing = Some(first_landing);
            while let Some(land) = landing {
                if !board.is_empty(land) {
                    break;
                }
                extend_through(board, from, victim, land, out);
                landing = land.step(d_row, d_col);
            }
        } else {
            extend_through(board, from, victim, first_landing, out);
        }
    }
}

/// Victim square and nearest landing square for a capture along one diagonal.
fn first_capture_in_direction(
    board: &Board,
    from: Square,
    piece: Piece,
    d_row: i8,
    d_col: i8,
) -> Option<(Square, Square)> {
    let mut victim = from.step(d_row, d_col)?;
    if piece.is_king() {
        while board.is_empty(victim) {
            victim = victim.step(d_row, d_col)?;
        }
    }

    let target = board.get(victim)?;
    if target.color == piece.color {
        return None;
    }

    let landing = victim.step(d_row, d_col)?;
    board.is_empty(landing).then_some((victim, landing))
}

fn extend_through(
    board: &Board,
    from: Square,
    victim: Square,
    landing: Square,
    out: &mut Vec<CaptureSequence>,
) {
    let mut next = *board;
    next.set(victim, None);
    next.relocate(from, landing);
    next.promote(landing);

    let tails = capture_sequences_from(&next, landing);
    if tails.is_empty() {
        out.push(CaptureSequence::single(from, landing, victim));
    } else {
        out.extend(
            tails
                .into_iter()
                .map(|tail| CaptureSequence::prepend(from, landing, victim, tail)),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_parser::parse_board;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn man_single_capture() {
        let board = parse_board(
            "
            ........
            ........
            ...b....
            ..w.....
            ........
            ........
            ........
            ........",
        )
        .expect("valid board");
        let seqs = capture_sequences_from(&board, sq(3, 2));
        assert_eq!(seqs.len(), 1);
        assert_eq!(seqs[0].path, vec![sq(1, 4)]);
        assert_eq!(seqs[0].captures, vec![sq(2, 3)]);
        assert!(has_capture_from(&board, sq(3, 2)));
    }

    #[test]
    fn man_captures_backwards_and_changes_direction() {
        let board = parse_board(
            "
            ........
            ........
            ...b.b..
            ..w.....
            ........
            ........
            ........
            ........",
        )
        .expect("valid board");
        let seqs = capture_sequences_from(&board, sq(3, 2));
        assert_eq!(seqs.len(), 1);
        assert_eq!(seqs[0].path, vec![sq(1, 4), sq(3, 6)]);
        assert_eq!(seqs[0].captures, vec![sq(2, 3), sq(2, 5)]);
    }

    #[test]
    fn no_capture_when_landing_is_blocked_or_victim_is_friendly() {
        let board = parse_board(
            "
            ........
            ....b...
            ...b.w..
            ..w...w.
            ........
            ........
            ........
            ........",
        )
        .expect("valid board");
        // (3,2) over (2,3) would land on the occupied (1,4).
        assert!(capture_sequences_from(&board, sq(3, 2)).is_empty());
        // (3,6) over its own man on (2,5) is never a capture.
        assert!(capture_sequences_from(&board, sq(3, 6)).is_empty());
        assert!(!has_capture_from(&board, sq(3, 2)));
        assert!(!has_capture_from(&board, sq(3, 6)));
    }

    #[test]
    fn flying_king_offers_every_landing_square_beyond_the_victim() {
        let board = parse_board(
            "
            ........
            ........
            ........
            ........
            ...b....
            ........
            ........
            W.......",
        )
        .expect("valid board");
        let seqs = capture_sequences_from(&board, sq(7, 0));
        let landings: Vec<_> = seqs.iter().map(|s| s.path[0]).collect();
        assert_eq!(landings, vec![sq(3, 4), sq(2, 5), sq(1, 6), sq(0, 7)]);
        assert!(seqs.iter().all(|s| s.captures == vec![sq(4, 3)]));
    }

    #[test]
    fn flying_king_continuation_only_from_the_right_landing_square() {
        let board = parse_board(
            "
            ........
            ....b...
            ........
            ........
            ...b....
            ........
            ........
            W.......",
        )
        .expect("valid board");
        let seqs = capture_sequences_from(&board, sq(7, 0));
        let best = seqs.iter().max_by_key(|s| s.len()).expect("has captures");
        assert_eq!(best.len(), 2);
        assert_eq!(best.path[0], sq(2, 5));
        assert_eq!(best.captures, vec![sq(4, 3), sq(1, 4)]);
        assert_eq!(best.landing(), Some(sq(0, 3)));
    }

    #[test]
    fn captured_square_is_never_captured_twice() {
        // A king circling a lone man must stop after one capture.
        let board = parse_board(
            "
            ........
            ........
            ........
            ....b...
            ........
            ..W.....
            ........
            ........",
        )
        .expect("valid board");
        let seqs = capture_sequences_from(&board, sq(5, 2));
        assert!(!seqs.is_empty());
        assert!(seqs.iter().all(|s| s.len() == 1));
    }

    #[test]
    fn man_promoted_mid_sequence_continues_as_king() {
        let board = parse_board(
            "
            ........
            ..b.....
            .w......
            ......b.
            ........
            ........
            ........
            ........",
        )
        .expect("valid board");
        // Crowned on (0,3), the piece flies over (1,4) and (2,5) to take (3,6).
        let seqs = capture_sequences_from(&board, sq(2, 1));
        assert_eq!(seqs.len(), 1);
        assert_eq!(seqs[0].path, vec![sq(0, 3), sq(4, 7)]);
        assert_eq!(seqs[0].captures, vec![sq(1, 2), sq(3, 6)]);
    }

    #[test]
    fn search_leaves_the_board_untouched() {
        let board = parse_board(
            "
            ........
            ........
            ...b.b..
            ..w.....
            ........
            ........
            ........
            ........",
        )
        .expect("valid board");
        let before = board;
        let _ = capture_sequences_from(&board, sq(3, 2));
        assert_eq!(board, before);
    }

    #[test]
    fn king_may_land_on_a_square_captured_earlier_in_the_sequence() {
        let board = parse_board(
            "
            .....b..
            ........
            .b...b.W
            ......b.
            .b......
            ........
            .b......
            ..b.b...",
        )
        .expect("valid board");
        let seqs = capture_sequences_from(&board, sq(2, 7));
        let revisit = seqs
            .iter()
            .find(|s| s.path == vec![sq(6, 3), sq(3, 0), sq(0, 3), sq(3, 6)])
            .expect("sequence ending on the first victim's square");
        assert_eq!(revisit.captures, vec![sq(3, 6), sq(4, 1), sq(2, 1), sq(2, 5)]);
        for s in &seqs {
            let mut seen = s.captures.clone();
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), s.captures.len(), "victim captured twice in {s:?}");
        }
    }

    #[test]
    fn empty_square_has_no_sequences() {
        assert!(capture_sequences_from(&Board::initial(), sq(4, 1)).is_empty());
        assert!(!has_capture_from(&Board::initial(), sq(4, 1)));
    }
}
