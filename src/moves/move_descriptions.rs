//! Move records produced by generation and consumed by the turn state machine.
//!
//! Generation yields [`Move`] values: either a one-step simple move or a full
//! capture sequence. Clients only ever pick the *first step* of a move, which
//! is what [`LegalMove`] describes. It carries the captured square recorded
//! at generation time so applying it never has to re-derive the victim.

use crate::game_state::checkers_types::{Color, Square};

/// Ordered capture steps of one piece from `start` to its final landing square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureSequence {
    pub start: Square,
    /// Landing squares in order.
    pub path: Vec<Square>,
    /// Captured squares in order; always the same length as `path`.
    pub captures: Vec<Square>,
}

impl CaptureSequence {
    /// Number of pieces this sequence captures.
    #[inline]
    pub fn len(&self) -> usize {
        self.captures.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }

    #[inline]
    pub fn landing(&self) -> Option<Square> {
        self.path.last().copied()
    }

    /// Single-step sequence, extended by [`CaptureSequence::prepend`] on the way out of recursion.
    pub fn single(start: Square, landing: Square, captured: Square) -> Self {
        Self {
            start,
            path: vec![landing],
            captures: vec![captured],
        }
    }

    /// Prefixes a continuation found from `landing` with the step that reached it.
    pub fn prepend(start: Square, landing: Square, captured: Square, tail: CaptureSequence) -> Self {
        let mut path = Vec::with_capacity(tail.path.len() + 1);
        path.push(landing);
        path.extend(tail.path);
        let mut captures = Vec::with_capacity(tail.captures.len() + 1);
        captures.push(captured);
        captures.extend(tail.captures);
        Self {
            start,
            path,
            captures,
        }
    }
}

/// A generated move: a plain step/slide, or a whole capture sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    Simple { from: Square, to: Square },
    Capture(CaptureSequence),
}

impl Move {
    #[inline]
    pub fn capture_count(&self) -> usize {
        match self {
            Move::Simple { .. } => 0,
            Move::Capture(seq) => seq.len(),
        }
    }

    /// The committable first step of this move.
    pub fn first_step(&self) -> Option<LegalMove> {
        match self {
            Move::Simple { from, to } => Some(LegalMove {
                from: *from,
                to: *to,
                captured: None,
            }),
            Move::Capture(seq) => Some(LegalMove {
                from: seq.start,
                to: *seq.path.first()?,
                captured: Some(*seq.captures.first()?),
            }),
        }
    }
}

/// One committable step, as offered to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegalMove {
    pub from: Square,
    pub to: Square,
    pub captured: Option<Square>,
}

impl LegalMove {
    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Most recent committed step, kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LastMove {
    pub from: Square,
    pub to: Square,
}

/// History line for a committed step, e.g. `W: (5,0)->(4,1)` or
/// `B: (2,3)->(4,5) x (3,4)`.
pub fn describe_move(mover: Color, step: &LegalMove) -> String {
    let side = match mover {
        Color::White => 'W',
        Color::Black => 'B',
    };
    match step.captured {
        Some(captured) => format!("{side}: {}->{} x {captured}", step.from, step.to),
        None => format!("{side}: {}->{}", step.from, step.to),
    }
}
