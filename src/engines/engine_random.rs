//! Random-move bot.
//!
//! Selects uniformly from legal first steps, ignoring the requested level.
//! Used for the "bot" opponent, diagnostics and match-harness sparring.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, EngineParams};
use crate::errors::CheckersResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::{MaxCaptureGenerator, MoveGenerator};

pub struct RandomEngine {
    move_generator: MaxCaptureGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: MaxCaptureGenerator,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: MaxCaptureGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumCheckers Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        _params: &EngineParams,
    ) -> CheckersResult<EngineOutput> {
        let legal = self.move_generator.generate_legal_moves(game_state);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("random_engine legal_moves {}", legal.len()));

        out.best_move = legal.moves.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}
