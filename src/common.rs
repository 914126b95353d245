//! Common types: shot outcomes and board errors.

use std::fmt;

/// Outcome of a single shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// The cell held a live ship segment.
    Hit,
    /// The cell was empty water.
    Miss,
}

/// Errors returned by board and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column index is outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Fleet index is out of range.
    InvalidShip { ship: usize },
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Operation needs a placement the ledger does not hold.
    ShipNotPlaced,
    /// The ship is longer than the grid side and can never be placed.
    ShipDoesNotFit { length: usize, n: usize },
    /// Shot was already resolved at this cell.
    AlreadyShot { row: usize, col: usize },
    /// Evidence was already recorded at this cell.
    AlreadyRecorded { row: usize, col: usize },
    /// Grid side is below the minimum the strategy supports.
    GridTooSmall { n: usize, min: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the grid", row, col)
            }
            BoardError::InvalidShip { ship } => write!(f, "no ship with fleet index {}", ship),
            BoardError::ShipAlreadyPlaced => write!(f, "ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "ship placement overlaps with another ship"),
            BoardError::ShipNotPlaced => write!(f, "ship has not been placed on the board"),
            BoardError::ShipDoesNotFit { length, n } => {
                write!(
                    f,
                    "ship of length {} can never fit a grid of side {}",
                    length, n
                )
            }
            BoardError::AlreadyShot { row, col } => {
                write!(f, "cell ({}, {}) was already shot", row, col)
            }
            BoardError::AlreadyRecorded { row, col } => {
                write!(f, "evidence was already recorded at ({}, {})", row, col)
            }
            BoardError::GridTooSmall { n, min } => {
                write!(f, "grid side {} is below the supported minimum {}", n, min)
            }
        }
    }
}

impl std::error::Error for BoardError {}
