//! Game-level operations over a populated board.

use crate::board::{Board, CellState};
use crate::common::{BoardError, ShotResult};
use crate::config::FLEET;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Wraps a populated [`Board`] with shot resolution and victory tracking.
/// Shot history lives in the cell states; the ledger keeps answering
/// "where was ship X" after its cells are overwritten.
pub struct Game {
    board: Board,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// The underlying board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Resolve a shot at (row, col): empty cells become misses, ship cells
    /// become hits. Shooting a cell twice is a caller error and fails with
    /// `AlreadyShot`; strategies check cell state before shooting, so a
    /// completed game proves every cell was shot at most once.
    pub fn shoot(&mut self, row: usize, col: usize) -> Result<ShotResult, BoardError> {
        self.board.apply_shot(row, col)
    }

    /// Whether every cell of `ship`'s recorded run has been hit.
    pub fn is_sunk(&self, ship: usize) -> Result<bool, BoardError> {
        let placement = self.board.placement(ship).ok_or(BoardError::ShipNotPlaced)?;
        Ok(placement
            .cells(FLEET[ship].length())
            .all(|(r, c)| self.board.at(r, c) == CellState::Hit))
    }

    /// First candidate ship whose run is fully hit. Callers pass the set of
    /// ships still considered afloat, so at most one candidate can be newly
    /// sunk per shot.
    pub fn first_sunk(&self, candidates: &[usize]) -> Result<Option<usize>, BoardError> {
        for &ship in candidates {
            if self.is_sunk(ship)? {
                return Ok(Some(ship));
            }
        }
        Ok(None)
    }

    /// True once no live ship cell remains anywhere on the grid.
    pub fn victory(&self) -> bool {
        self.board.live_ship_cells() == 0
    }

    pub fn status(&self) -> GameStatus {
        if self.victory() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Clear shot history and replay the recorded layout, for repeated
    /// trials against the same configuration.
    pub fn reset(&mut self) {
        self.board.reset_shots();
    }
}
