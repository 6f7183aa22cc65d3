use alloc::collections::VecDeque;
use alloc::vec::Vec;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{config::DEFAULT_DIE_FACES, player::PlayerId};

/// Source of the dice input for each turn.
pub trait Roller {
    /// Produce the number of steps `player` moves this turn.
    fn roll(&mut self, player: PlayerId) -> anyhow::Result<i32>;
}

/// Fair die with a configurable number of faces.
pub struct DieRoller {
    rng: SmallRng,
    faces: u8,
}

impl DieRoller {
    pub fn new(rng: SmallRng, faces: u8) -> anyhow::Result<Self> {
        if faces == 0 {
            return Err(anyhow::anyhow!("a die needs at least one face"));
        }
        Ok(Self { rng, faces })
    }

    /// Six-sided die seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            faces: DEFAULT_DIE_FACES,
        }
    }

    pub fn faces(&self) -> u8 {
        self.faces
    }
}

impl Roller for DieRoller {
    fn roll(&mut self, _player: PlayerId) -> anyhow::Result<i32> {
        Ok(i32::from(self.rng.random_range(1..=self.faces)))
    }
}

/// Replays a fixed list of rolls, then fails.
pub struct ScriptedRoller {
    rolls: VecDeque<i32>,
}

impl ScriptedRoller {
    pub fn new(rolls: Vec<i32>) -> Self {
        Self {
            rolls: rolls.into(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl Roller for ScriptedRoller {
    fn roll(&mut self, player: PlayerId) -> anyhow::Result<i32> {
        self.rolls
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("no scripted roll left for {}", player))
    }
}
