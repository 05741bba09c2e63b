//! Canonical checkers-rule constants.
//!
//! Board geometry, history bounds, and the rules tag reported to clients
//! live here so every subsystem agrees on them.

/// Squares per side of the board.
pub const BOARD_SIZE: i8 = 8;

/// Maximum number of pre-move snapshots kept for undo.
pub const UNDO_CAPACITY: usize = 300;

/// Number of most-recent history entries exposed by a full state view.
pub const HISTORY_VIEW_LEN: usize = 240;

/// Rules variant identifier reported alongside every state view.
pub const RULES_TAG: &str = "max-capture,flying-kings";

/// Number of top-scored moves the medium AI samples from.
pub const AI_TOP_K_MEDIUM: usize = 3;

/// Upper bound on consecutive AI moves while chaining a forced multi-jump.
pub const MAX_AI_CHAIN_STEPS: usize = 16;

/// Rows holding men in the initial setup, per side.
pub const BLACK_START_ROWS: std::ops::Range<i8> = 0..3;
pub const WHITE_START_ROWS: std::ops::Range<i8> = 5..8;

/// The four diagonal directions as `(d_row, d_col)`.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
