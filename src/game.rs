use alloc::vec::Vec;
use core::fmt;

use log::{debug, info};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    board::{Board, FieldKind},
    common::GameError,
    config::{EFFECT_DISTANCE, FIELD_COUNT},
    effect::{BonusEffect, TrapEffect},
    player::{Player, PlayerId},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    NotStarted,
    Running,
    /// At least one player has moved past the last field.
    Finished,
}

/// Direction the other players are pushed by a group effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Forward,
    Backward,
}

/// Result of resolving a single turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player ended the turn on `position`.
    Moved { player: PlayerId, position: i32 },
    /// A trap was cancelled by the player's joker.
    TrapAvoided { player: PlayerId },
    /// Every other player moved; positions listed in roster order.
    OthersMoved {
        shift: Shift,
        positions: Vec<(PlayerId, i32)>,
    },
    SkipNextRound { player: PlayerId },
    JokerActivated { player: PlayerId },
}

fn write_position(f: &mut fmt::Formatter<'_>, player: PlayerId, position: i32) -> fmt::Result {
    write!(f, "Current position for player {} is {}", player.0, position)
}

impl fmt::Display for TurnOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnOutcome::Moved { player, position } => write_position(f, *player, *position),
            TurnOutcome::TrapAvoided { .. } => f.write_str("Joker activated! Trap avoided."),
            TurnOutcome::OthersMoved { shift, positions } => {
                let direction = match shift {
                    Shift::Forward => "forward",
                    Shift::Backward => "backward",
                };
                writeln!(f, "All other players move {} {} fields:", direction, EFFECT_DISTANCE)?;
                for (player, position) in positions {
                    write_position(f, *player, *position)?;
                    f.write_str("\n")?;
                }
                Ok(())
            }
            TurnOutcome::SkipNextRound { player } => {
                write!(f, "Player {} will skip the next round", player.0)
            }
            TurnOutcome::JokerActivated { player } => {
                write!(f, "Player {} has activated the joker.", player.0)
            }
        }
    }
}

/// Snapshot of a session that can be restored with [`GameEngine::from_state`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub players: Vec<Player>,
    pub board: Option<Board>,
    pub current: Option<PlayerId>,
}

/// Core game logic: the roster, the field layout and whose turn it is.
pub struct GameEngine<R = SmallRng> {
    rng: R,
    players: Vec<Player>,
    board: Option<Board>,
    current: Option<usize>,
}

impl GameEngine<SmallRng> {
    /// Engine backed by a `SmallRng` seeded with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine that draws all randomness from `rng`. No game is
    /// running until [`start_game`](Self::start_game) is called.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            players: Vec::new(),
            board: None,
            current: None,
        }
    }

    /// Start a new game with `number_of_players` players on a freshly shuffled
    /// board. Any previous session on this engine is discarded.
    pub fn start_game(&mut self, number_of_players: usize) -> Result<Board, GameError> {
        if number_of_players == 0 {
            return Err(GameError::InvalidPlayerCount);
        }
        let board = Board::random(&mut self.rng);
        self.start_game_with_board(number_of_players, board)?;
        Ok(board)
    }

    /// Start a new game on a caller-supplied layout.
    pub fn start_game_with_board(
        &mut self,
        number_of_players: usize,
        board: Board,
    ) -> Result<(), GameError> {
        if number_of_players == 0 || number_of_players > u32::MAX as usize {
            return Err(GameError::InvalidPlayerCount);
        }
        if self.board.is_some() {
            info!("Restarting game, previous session discarded");
        }
        self.players = (1..=number_of_players as u32)
            .map(|id| Player::new(PlayerId(id), 0))
            .collect();
        self.board = Some(board);
        self.current = None;
        info!("Game started with {} players. {}", number_of_players, board);
        Ok(())
    }

    /// `true` until some player has moved past the last field.
    pub fn game_is_running(&self) -> bool {
        !self.players.iter().any(|p| p.position() > FIELD_COUNT)
    }

    pub fn status(&self) -> GameStatus {
        if self.board.is_none() {
            GameStatus::NotStarted
        } else if self.game_is_running() {
            GameStatus::Running
        } else {
            GameStatus::Finished
        }
    }

    /// Pick the player for the next turn uniformly at random.
    ///
    /// A player flagged to skip has the flag cleared and a second draw is
    /// made over the whole roster. The second draw is final: it may land on
    /// the same player again and ignores any skip flag on its pick.
    pub fn next_player(&mut self) -> Result<PlayerId, GameError> {
        if self.board.is_none() || self.players.is_empty() {
            return Err(GameError::NotStarted);
        }
        let mut idx = self.rng.random_range(0..self.players.len());
        if self.players[idx].skip_next_round() {
            self.players[idx].set_skip_next_round(false);
            debug!("{} skips this round", self.players[idx].id());
            idx = self.rng.random_range(0..self.players.len());
        }
        self.current = Some(idx);
        let id = self.players[idx].id();
        debug!("{} selected", id);
        Ok(id)
    }

    /// Move the current player by `steps` and resolve the field they land on.
    pub fn next_player_turn(&mut self, steps: i32) -> Result<TurnOutcome, GameError> {
        let board = self.board.ok_or(GameError::NotStarted)?;
        let idx = self.current.ok_or(GameError::NoCurrentPlayer)?;

        let player = &mut self.players[idx];
        let id = player.id();
        let position = player.advance(steps);
        debug!("{} moved {} to field {}", id, steps, position);

        let outcome = match board.field_at(position) {
            FieldKind::Trap if player.has_joker() => {
                player.set_joker(false);
                debug!("{} used the joker on trap {}", id, position);
                TurnOutcome::TrapAvoided { player: id }
            }
            FieldKind::Trap => {
                let effect = TrapEffect::random(&mut self.rng);
                self.apply_trap(idx, effect)
            }
            FieldKind::Bonus => {
                let effect = BonusEffect::random(&mut self.rng);
                self.apply_bonus(idx, effect)
            }
            FieldKind::Plain => TurnOutcome::Moved {
                player: id,
                position,
            },
        };
        Ok(outcome)
    }

    /// Apply `effect` to the current player as if they had landed on a trap.
    pub fn resolve_trap(&mut self, effect: TrapEffect) -> Result<TurnOutcome, GameError> {
        let idx = self.current_index()?;
        Ok(self.apply_trap(idx, effect))
    }

    /// Apply `effect` to the current player as if they had landed on a bonus field.
    pub fn resolve_bonus(&mut self, effect: BonusEffect) -> Result<TurnOutcome, GameError> {
        let idx = self.current_index()?;
        Ok(self.apply_bonus(idx, effect))
    }

    fn current_index(&self) -> Result<usize, GameError> {
        if self.board.is_none() {
            return Err(GameError::NotStarted);
        }
        self.current.ok_or(GameError::NoCurrentPlayer)
    }

    fn apply_trap(&mut self, idx: usize, effect: TrapEffect) -> TurnOutcome {
        debug!("{} hit trap effect {:?}", self.players[idx].id(), effect);
        match effect {
            TrapEffect::MoveBack => {
                let player = &mut self.players[idx];
                let position = player.advance(-EFFECT_DISTANCE);
                TurnOutcome::Moved {
                    player: player.id(),
                    position,
                }
            }
            TrapEffect::OthersForward => TurnOutcome::OthersMoved {
                shift: Shift::Forward,
                positions: self.shift_others(idx, EFFECT_DISTANCE),
            },
            TrapEffect::SkipNextRound => {
                let player = &mut self.players[idx];
                player.set_skip_next_round(true);
                TurnOutcome::SkipNextRound { player: player.id() }
            }
        }
    }

    fn apply_bonus(&mut self, idx: usize, effect: BonusEffect) -> TurnOutcome {
        debug!("{} got bonus effect {:?}", self.players[idx].id(), effect);
        match effect {
            BonusEffect::MoveForward => {
                let player = &mut self.players[idx];
                let position = player.advance(EFFECT_DISTANCE);
                TurnOutcome::Moved {
                    player: player.id(),
                    position,
                }
            }
            BonusEffect::OthersBackward => TurnOutcome::OthersMoved {
                shift: Shift::Backward,
                positions: self.shift_others(idx, -EFFECT_DISTANCE),
            },
            BonusEffect::Joker => {
                let player = &mut self.players[idx];
                player.set_joker(true);
                TurnOutcome::JokerActivated { player: player.id() }
            }
        }
    }

    /// Move every player except the one at `idx` by `delta`, in roster order.
    fn shift_others(&mut self, idx: usize, delta: i32) -> Vec<(PlayerId, i32)> {
        self.players
            .iter_mut()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, p)| (p.id(), p.advance(delta)))
            .collect()
    }

    /// Force the active player. Intended for scripted scenarios and tests.
    pub fn set_current_player(&mut self, id: PlayerId) -> Result<(), GameError> {
        if self.board.is_none() {
            return Err(GameError::NotStarted);
        }
        let idx = self
            .players
            .iter()
            .position(|p| p.id() == id)
            .ok_or(GameError::UnknownPlayer(id))?;
        self.current = Some(idx);
        Ok(())
    }

    /// Restore an engine from a previously saved state.
    pub fn from_state(state: GameState, rng: R) -> Result<Self, GameError> {
        let board = match state.board {
            Some(board) => {
                if state.players.is_empty() {
                    return Err(GameError::InvalidPlayerCount);
                }
                Some(Board::from_fields(board.bonus_fields(), board.trap_fields())?)
            }
            None if !state.players.is_empty() => return Err(GameError::NotStarted),
            None => None,
        };
        // Ids are handed out 1..=N in roster order by `start_game`.
        for (i, player) in state.players.iter().enumerate() {
            if player.id() != PlayerId(i as u32 + 1) {
                return Err(GameError::InvalidRoster);
            }
        }
        let current = match state.current {
            Some(id) => Some(
                state
                    .players
                    .iter()
                    .position(|p| p.id() == id)
                    .ok_or(GameError::UnknownPlayer(id))?,
            ),
            None => None,
        };
        Ok(Self {
            rng,
            players: state.players,
            board,
            current,
        })
    }
}

impl<R> GameEngine<R> {
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id() == id)
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.current.map(|idx| &self.players[idx])
    }

    /// Player furthest along the track; ties go to the lowest id.
    pub fn leader(&self) -> Option<&Player> {
        self.players
            .iter()
            .max_by(|a, b| a.position().cmp(&b.position()).then(b.id().cmp(&a.id())))
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            players: self.players.clone(),
            board: self.board,
            current: self.current.map(|idx| self.players[idx].id()),
        }
    }
}
