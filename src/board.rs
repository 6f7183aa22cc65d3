//! Field layout of the track: where the bonus and trap fields sit.

use alloc::vec::Vec;
use core::fmt;
use rand::{seq::SliceRandom, Rng};

use crate::common::GameError;
use crate::config::{BONUS_FIELD_COUNT, FIELD_COUNT, TRAP_FIELD_COUNT};

/// What a player finds on a field after moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Plain,
    Bonus,
    Trap,
}

/// Bonus and trap fields, kept in the order they were drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    bonus_fields: [i32; BONUS_FIELD_COUNT],
    trap_fields: [i32; TRAP_FIELD_COUNT],
}

impl Board {
    /// Shuffle fields `1..=FIELD_COUNT` and take the first five as bonus
    /// fields and the next five as traps.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut fields: Vec<i32> = (1..=FIELD_COUNT).collect();
        fields.shuffle(rng);
        Board {
            bonus_fields: core::array::from_fn(|i| fields[i]),
            trap_fields: core::array::from_fn(|i| fields[BONUS_FIELD_COUNT + i]),
        }
    }

    /// Build a layout from explicit fields. Every field must lie on the track
    /// and appear only once across both lists.
    pub fn from_fields(bonus: &[i32], traps: &[i32]) -> Result<Self, GameError> {
        if bonus.len() != BONUS_FIELD_COUNT || traps.len() != TRAP_FIELD_COUNT {
            return Err(GameError::InvalidBoard);
        }
        let mut seen = [false; FIELD_COUNT as usize];
        for &field in bonus.iter().chain(traps) {
            if !(1..=FIELD_COUNT).contains(&field) {
                return Err(GameError::InvalidBoard);
            }
            let slot = &mut seen[(field - 1) as usize];
            if *slot {
                return Err(GameError::InvalidBoard);
            }
            *slot = true;
        }
        Ok(Board {
            bonus_fields: core::array::from_fn(|i| bonus[i]),
            trap_fields: core::array::from_fn(|i| traps[i]),
        })
    }

    pub fn bonus_fields(&self) -> &[i32] {
        &self.bonus_fields
    }

    pub fn trap_fields(&self) -> &[i32] {
        &self.trap_fields
    }

    pub fn is_trap(&self, position: i32) -> bool {
        self.trap_fields.contains(&position)
    }

    pub fn is_bonus(&self, position: i32) -> bool {
        self.bonus_fields.contains(&position)
    }

    /// Classify a position. Traps take precedence, though a valid layout
    /// never marks a field as both.
    pub fn field_at(&self, position: i32) -> FieldKind {
        if self.is_trap(position) {
            FieldKind::Trap
        } else if self.is_bonus(position) {
            FieldKind::Bonus
        } else {
            FieldKind::Plain
        }
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: &[i32]) -> fmt::Result {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", field)?;
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Bonus fields are located at: ")?;
        write_fields(f, &self.bonus_fields)?;
        f.write_str(". Traps fields are located at: ")?;
        write_fields(f, &self.trap_fields)
    }
}
