//! Targeting strategies: how the next shot is chosen.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, ShotResult};
use crate::config::{MIN_GRID, NUM_SHIPS};
use crate::density::{placement_density, DensityGrid};
use crate::game::Game;

/// Selects one of the shipped targeting policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Random,
    Hunt,
    Density,
}

/// A targeting policy. `next_target` must return a cell that has not been
/// shot; the game loop shoots it and reports the outcome back through
/// `observe`.
pub trait Strategy {
    fn next_target(&mut self, rng: &mut SmallRng, game: &Game) -> (usize, usize);

    fn observe(
        &mut self,
        coord: (usize, usize),
        outcome: ShotResult,
        game: &Game,
    ) -> Result<(), BoardError> {
        let _ = (coord, outcome, game);
        Ok(())
    }
}

/// Instantiate a strategy for a board of side `n`. Grids too small for the
/// density engine are rejected here, before any game executes.
pub fn build_strategy(kind: StrategyKind, n: usize) -> Result<Box<dyn Strategy>, BoardError> {
    Ok(match kind {
        StrategyKind::Random => Box::new(RandomStrategy::new()),
        StrategyKind::Hunt => Box::new(HuntStrategy::new()),
        StrategyKind::Density => Box::new(DensityStrategy::new(n)?),
    })
}

fn random_unshot(rng: &mut SmallRng, board: &Board) -> (usize, usize) {
    let n = board.side();
    loop {
        let row = rng.random_range(0..n);
        let col = rng.random_range(0..n);
        if !board.at(row, col).is_shot() {
            return (row, col);
        }
    }
}

/// Uniform random shots with no memory; already-shot cells are resampled
/// without costing a shot.
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for RandomStrategy {
    fn next_target(&mut self, rng: &mut SmallRng, game: &Game) -> (usize, usize) {
        random_unshot(rng, game.board())
    }
}

/// Random search until a hit, then a bounded hunt: the four orthogonal
/// neighbors of the hit are shot before search resumes. Neighbor shots do
/// not seed hunts of their own, so the hunt never recurses down a run.
pub struct HuntStrategy {
    pending: Vec<(usize, usize)>,
    hunting: bool,
}

impl HuntStrategy {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
            hunting: false,
        }
    }
}

impl Strategy for HuntStrategy {
    fn next_target(&mut self, rng: &mut SmallRng, game: &Game) -> (usize, usize) {
        let board = game.board();
        while let Some((row, col)) = self.pending.pop() {
            if !board.at(row, col).is_shot() {
                self.hunting = true;
                return (row, col);
            }
        }
        self.hunting = false;
        random_unshot(rng, board)
    }

    fn observe(
        &mut self,
        (row, col): (usize, usize),
        outcome: ShotResult,
        game: &Game,
    ) -> Result<(), BoardError> {
        if outcome == ShotResult::Hit && !self.hunting {
            let n = game.board().side();
            if row > 0 {
                self.pending.push((row - 1, col));
            }
            if row + 1 < n {
                self.pending.push((row + 1, col));
            }
            if col > 0 {
                self.pending.push((row, col - 1));
            }
            if col + 1 < n {
                self.pending.push((row, col + 1));
            }
        }
        Ok(())
    }
}

/// Maintains per-class placement-density grids over an observed evidence
/// board and always shoots the globally highest-scoring cell.
///
/// The observed board holds no ships of its own: shots are mirrored onto
/// it as hits and misses, and once a ship is confirmed sunk its true run
/// is resolved there, removing it from evidence. Ships leave consideration
/// one at a time, which holds because a shot touches exactly one cell.
pub struct DensityStrategy {
    observed: Board,
    afloat: Vec<usize>,
    grids: [Option<DensityGrid>; NUM_SHIPS],
}

impl DensityStrategy {
    /// Build the observed board and the initial density grid for every
    /// ship class. Grids below [`MIN_GRID`] are rejected up front.
    pub fn new(n: usize) -> Result<Self, BoardError> {
        if n < MIN_GRID {
            return Err(BoardError::GridTooSmall { n, min: MIN_GRID });
        }
        let observed = Board::new(n);
        let grids = std::array::from_fn(|ship| Some(placement_density(&observed, ship)));
        Ok(Self {
            observed,
            afloat: (0..NUM_SHIPS).collect(),
            grids,
        })
    }

    fn rescore(&mut self) {
        for &ship in &self.afloat {
            self.grids[ship] = Some(placement_density(&self.observed, ship));
        }
    }

    /// Globally best cell: the highest per-class best, classes scanned in
    /// fleet order with the first-seen maximum kept.
    fn global_best(&self) -> (usize, usize) {
        let mut best = (0, 0);
        let mut best_count = 0u32;
        for &ship in &self.afloat {
            if let Some(grid) = &self.grids[ship] {
                let (cell, count) = grid.best();
                if count > best_count {
                    best = cell;
                    best_count = count;
                }
            }
        }
        best
    }
}

impl Strategy for DensityStrategy {
    fn next_target(&mut self, _rng: &mut SmallRng, _game: &Game) -> (usize, usize) {
        self.global_best()
    }

    fn observe(
        &mut self,
        (row, col): (usize, usize),
        outcome: ShotResult,
        game: &Game,
    ) -> Result<(), BoardError> {
        self.observed.record(row, col, outcome)?;
        if outcome == ShotResult::Hit {
            if let Some(ship) = game.first_sunk(&self.afloat)? {
                self.afloat.retain(|&afloat| afloat != ship);
                self.grids[ship] = None;
                let placement = game
                    .board()
                    .placement(ship)
                    .ok_or(BoardError::ShipNotPlaced)?;
                self.observed.mark_resolved(ship, placement)?;
            }
        }
        self.rescore();
        Ok(())
    }
}
