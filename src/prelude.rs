//! Commonly used types and utilities for ease of import.

pub use crate::{
    AlexandriaEngine, Board, DieRoller, GameEngine, GameError, GameStatus, PlayerId, Roller,
    ScriptedRoller, TurnOutcome,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliRoller, GameSession, GameSummary};
