//! Player identity and per-player state.

use core::fmt;

/// Player identifier. Ids are 1-based and assigned in roster order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A single player on the track.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    id: PlayerId,
    position: i32,
    skip_next_round: bool,
    has_joker: bool,
}

impl Player {
    /// Create a player at `position` with no flags set.
    pub fn new(id: PlayerId, position: i32) -> Self {
        Self {
            id,
            position,
            skip_next_round: false,
            has_joker: false,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn position(&self) -> i32 {
        self.position
    }

    pub fn set_position(&mut self, position: i32) {
        self.position = position;
    }

    /// Move by `delta` fields (negative moves backward) and return the new position.
    pub fn advance(&mut self, delta: i32) -> i32 {
        self.position = self.position.wrapping_add(delta);
        self.position
    }

    pub fn skip_next_round(&self) -> bool {
        self.skip_next_round
    }

    pub fn set_skip_next_round(&mut self, skip: bool) {
        self.skip_next_round = skip;
    }

    pub fn has_joker(&self) -> bool {
        self.has_joker
    }

    pub fn set_joker(&mut self, joker: bool) {
        self.has_joker = joker;
    }
}
