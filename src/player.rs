//! Drives a strategy through a full game and counts shots.

use log::debug;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::BoardError;
use crate::game::{Game, GameStatus};
use crate::strategy::{build_strategy, StrategyKind};

/// A named simulation driver. `score` counts completed games and is
/// informational only; the interesting output is the per-game shot count.
pub struct Player {
    name: String,
    score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Completed games.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Play one full game on a fresh random board of side `n` with the
    /// chosen strategy, returning the number of shots needed to sink the
    /// whole fleet.
    ///
    /// The game is a two-state machine: in progress until the last ship
    /// cell is hit, then won. Each turn shoots exactly one unshot cell, so
    /// the loop terminates within `n * n` shots.
    pub fn play(
        &mut self,
        kind: StrategyKind,
        n: usize,
        rng: &mut SmallRng,
    ) -> Result<u32, BoardError> {
        let mut strategy = build_strategy(kind, n)?;
        let board = Board::generate(n, rng)?;
        let mut game = Game::new(board);
        let mut shots = 0u32;

        while game.status() == GameStatus::InProgress {
            let (row, col) = strategy.next_target(rng, &game);
            let outcome = game.shoot(row, col)?;
            shots += 1;
            strategy.observe((row, col), outcome, &game)?;
        }

        self.score += 1;
        debug!(
            "{} finished a {:?} game on {}x{} in {} shots",
            self.name, kind, n, n, shots
        );
        Ok(shots)
    }
}

/// One-shot convenience wrapper around [`Player::play`].
pub fn play(kind: StrategyKind, n: usize, rng: &mut SmallRng) -> Result<u32, BoardError> {
    Player::new("sim").play(kind, n, rng)
}
