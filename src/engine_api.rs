use alloc::string::{String, ToString};
use rand::Rng;

use crate::game::GameEngine;

/// Text interface of the engine: every operation answers with the message a
/// frontend shows the players.
pub trait AlexandriaEngine {
    fn start_game(&mut self, number_of_players: usize) -> anyhow::Result<String>;
    fn game_is_running(&self) -> bool;
    fn next_player(&mut self) -> anyhow::Result<String>;
    fn next_player_turn(&mut self, steps: i32) -> anyhow::Result<String>;
}

impl<R: Rng> AlexandriaEngine for GameEngine<R> {
    fn start_game(&mut self, number_of_players: usize) -> anyhow::Result<String> {
        let board = GameEngine::start_game(self, number_of_players).map_err(|e| anyhow::anyhow!(e))?;
        Ok(board.to_string())
    }

    fn game_is_running(&self) -> bool {
        GameEngine::game_is_running(self)
    }

    fn next_player(&mut self) -> anyhow::Result<String> {
        let id = GameEngine::next_player(self).map_err(|e| anyhow::anyhow!(e))?;
        Ok(id.to_string())
    }

    fn next_player_turn(&mut self, steps: i32) -> anyhow::Result<String> {
        let outcome = GameEngine::next_player_turn(self, steps).map_err(|e| anyhow::anyhow!(e))?;
        Ok(outcome.to_string())
    }
}
