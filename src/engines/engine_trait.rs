//! Engine abstraction layer used by sessions and the match harness.
//!
//! Defines the AI request parameters and output payload so different move
//! selectors can be swapped behind a single trait interface.

use std::fmt;
use std::str::FromStr;

use crate::errors::{CheckersError, CheckersResult};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::LegalMove;

/// Requested playing strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AiLevel {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl AiLevel {
    /// Parses a client-supplied level, falling back to `Medium`.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for AiLevel {
    type Err = CheckersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(AiLevel::Easy),
            "medium" => Ok(AiLevel::Medium),
            "hard" => Ok(AiLevel::Hard),
            _ => Err(CheckersError::InvalidAiLevel(s.to_owned())),
        }
    }
}

impl fmt::Display for AiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AiLevel::Easy => "easy",
            AiLevel::Medium => "medium",
            AiLevel::Hard => "hard",
        })
    }
}

/// Which selector answers an AI request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AiKind {
    /// Heuristic scorer; strength follows [`AiLevel`].
    #[default]
    Engine,
    /// Uniform random choice regardless of level.
    RandomBot,
}

impl AiKind {
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    /// Prefix attached to messages of moves this kind played.
    pub const fn tag(self) -> &'static str {
        match self {
            AiKind::Engine => "AI",
            AiKind::RandomBot => "BOT",
        }
    }
}

impl FromStr for AiKind {
    type Err = CheckersError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ai" | "engine" => Ok(AiKind::Engine),
            "bot" | "random" => Ok(AiKind::RandomBot),
            _ => Err(CheckersError::InvalidAiKind(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EngineParams {
    pub level: AiLevel,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<LegalMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &EngineParams,
    ) -> CheckersResult<EngineOutput>;
}
