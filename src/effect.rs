//! Random effects triggered by trap and bonus fields.

use rand::Rng;

use crate::config::EFFECT_KINDS;

/// Penalty applied when a player lands on a trap without a joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapEffect {
    /// Current player moves back two fields.
    MoveBack,
    /// Everyone else moves forward two fields.
    OthersForward,
    /// Current player sits out their next selection.
    SkipNextRound,
}

/// Reward applied when a player lands on a bonus field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BonusEffect {
    /// Current player moves forward two fields.
    MoveForward,
    /// Everyone else moves back two fields.
    OthersBackward,
    /// Current player gains a joker against the next trap.
    Joker,
}

impl TrapEffect {
    /// Map an effect id in `1..=3` to its effect.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(TrapEffect::MoveBack),
            2 => Some(TrapEffect::OthersForward),
            3 => Some(TrapEffect::SkipNextRound),
            _ => None,
        }
    }

    /// Draw one of the three trap effects uniformly.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        match draw_effect_id(rng) {
            1 => TrapEffect::MoveBack,
            2 => TrapEffect::OthersForward,
            _ => TrapEffect::SkipNextRound,
        }
    }
}

impl BonusEffect {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(BonusEffect::MoveForward),
            2 => Some(BonusEffect::OthersBackward),
            3 => Some(BonusEffect::Joker),
            _ => None,
        }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        match draw_effect_id(rng) {
            1 => BonusEffect::MoveForward,
            2 => BonusEffect::OthersBackward,
            _ => BonusEffect::Joker,
        }
    }
}

fn draw_effect_id<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(1..=EFFECT_KINDS)
}
