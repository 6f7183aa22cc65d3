//! Common types for Alexandria: engine errors.

use crate::player::PlayerId;

/// Errors returned by engine operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A game needs at least one player.
    InvalidPlayerCount,
    /// Operation requires a started game.
    NotStarted,
    /// No player has been selected for the turn yet.
    NoCurrentPlayer,
    /// Player id is not part of the roster.
    UnknownPlayer(PlayerId),
    /// Field layout has the wrong size, out-of-range, duplicate or shared fields.
    InvalidBoard,
    /// Roster ids are not numbered 1..=N in order.
    InvalidRoster,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidPlayerCount => write!(f, "A game needs at least one player"),
            GameError::NotStarted => write!(f, "Game has not been started"),
            GameError::NoCurrentPlayer => write!(f, "No player has been selected for this turn"),
            GameError::UnknownPlayer(id) => write!(f, "{} is not part of this game", id),
            GameError::InvalidBoard => write!(f, "Bonus and trap fields do not form a valid layout"),
            GameError::InvalidRoster => write!(f, "Player ids must run from 1 in roster order"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
