/// Number of fields on the track. A player past this field ends the game.
pub const FIELD_COUNT: i32 = 30;
pub const BONUS_FIELD_COUNT: usize = 5;
pub const TRAP_FIELD_COUNT: usize = 5;

/// Distance every movement effect shifts a player by.
pub const EFFECT_DISTANCE: i32 = 2;

/// Effects are drawn uniformly from `1..=EFFECT_KINDS`.
pub const EFFECT_KINDS: u8 = 3;

pub const DEFAULT_DIE_FACES: u8 = 6;

/// Turn cap used by the session loop when the caller does not pick one.
pub const DEFAULT_MAX_TURNS: usize = 1_000;
