#![cfg(feature = "std")]

use std::io::Write;

use log::{debug, info, warn};
use rand::Rng;

use crate::{
    game::GameEngine,
    player::PlayerId,
    roller::Roller,
};

/// Final report of a session.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GameSummary {
    pub turns: usize,
    /// `false` when the turn limit stopped the game first.
    pub finished: bool,
    pub leader: Option<PlayerId>,
    pub positions: Vec<(PlayerId, i32)>,
}

/// Drives an engine turn by turn until someone leaves the track.
pub struct GameSession<R> {
    engine: GameEngine<R>,
    roller: Box<dyn Roller>,
    max_turns: usize,
}

impl<R: Rng> GameSession<R> {
    pub fn new(engine: GameEngine<R>, roller: Box<dyn Roller>, max_turns: usize) -> Self {
        Self {
            engine,
            roller,
            max_turns,
        }
    }

    pub fn engine(&self) -> &GameEngine<R> {
        &self.engine
    }

    pub fn into_engine(self) -> GameEngine<R> {
        self.engine
    }

    /// Play a full game with `players` players, writing every message to `out`.
    pub fn run(&mut self, players: usize, out: &mut dyn Write) -> anyhow::Result<GameSummary> {
        let board = self.engine.start_game(players)?;
        writeln!(out, "{}", board)?;

        let mut turns = 0;
        while self.engine.game_is_running() && turns < self.max_turns {
            let player = self.engine.next_player()?;
            writeln!(out, "{}", player)?;

            let steps = self.roller.roll(player)?;
            debug!("{} rolled {}", player, steps);

            let outcome = self.engine.next_player_turn(steps)?;
            let message = outcome.to_string();
            // Group effects already end every line with a newline.
            let message = message.trim_end_matches('\n');
            info!("turn {}: {}", turns + 1, message);
            writeln!(out, "{}", message)?;
            turns += 1;
        }

        let finished = !self.engine.game_is_running();
        if !finished {
            warn!("Stopped after {} turns without a winner", turns);
        }
        let leader = self.engine.leader().map(|p| p.id());
        if let Some(id) = leader.filter(|_| finished) {
            info!("{} left the track after {} turns", id, turns);
        }

        Ok(GameSummary {
            turns,
            finished,
            leader,
            positions: self
                .engine
                .players()
                .iter()
                .map(|p| (p.id(), p.position()))
                .collect(),
        })
    }
}
