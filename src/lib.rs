#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod board;
mod common;
mod config;
mod effect;
pub mod engine_api;
mod game;
mod player;
pub mod prelude;
pub mod roller;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod roller_cli;
#[cfg(feature = "std")]
pub mod session;

pub use board::*;
pub use common::*;
pub use config::*;
pub use effect::*;
pub use engine_api::AlexandriaEngine;
pub use game::*;
pub use player::*;
pub use roller::{DieRoller, Roller, ScriptedRoller};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use roller_cli::CliRoller;
#[cfg(feature = "std")]
pub use session::{GameSession, GameSummary};
