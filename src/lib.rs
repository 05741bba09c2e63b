//! Crate root module declarations for the Plum Checkers rule engine.
//!
//! Exposes the board model, max-capture move generation, move application,
//! the AI players, and the per-client session so binaries, benches, and an
//! outer request layer can import stable module paths.

pub mod errors;
pub mod session;

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod capture_sequences;
    pub mod legal_move_apply;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod simple_moves;
}

pub mod engines {
    pub mod engine_heuristic;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod board_parser;
    pub mod match_harness;
    pub mod render_game_state;
    pub mod state_view;
}
