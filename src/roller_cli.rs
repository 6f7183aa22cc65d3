#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{player::PlayerId, roller::Roller};

/// Asks a human for each roll on a line-based reader.
pub struct CliRoller<I = io::StdinLock<'static>, O = io::Stdout> {
    input: I,
    output: O,
}

impl CliRoller {
    /// Read rolls from stdin and prompt on stdout.
    pub fn new() -> Self {
        Self {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl Default for CliRoller {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: BufRead, O: Write> CliRoller<I, O> {
    pub fn with_io(input: I, output: O) -> Self {
        Self { input, output }
    }
}

fn parse_roll(input: &str) -> Option<i32> {
    input.trim().parse().ok()
}

impl<I: BufRead, O: Write> Roller for CliRoller<I, O> {
    fn roll(&mut self, player: PlayerId) -> anyhow::Result<i32> {
        loop {
            write!(self.output, "{}, enter your roll: ", player)?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(anyhow::anyhow!("input closed while waiting for a roll"));
            }
            match parse_roll(&line) {
                Some(steps) => return Ok(steps),
                None => writeln!(self.output, "Invalid roll. Please enter a whole number.")?,
            }
        }
    }
}
