//! Grid state, the placement ledger, and placement enumeration.

use rand::Rng;

use crate::common::{BoardError, ShotResult};
use crate::config::{FLEET, NUM_SHIPS};
use crate::ship::{Orientation, Placement};

/// State of a single grid cell.
///
/// `Ship` carries the fleet index of the ship occupying the cell. `Hit` and
/// `Miss` are terminal: once a cell is shot, its ship content survives only
/// in the placement ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Ship(usize),
    Hit,
    Miss,
}

impl CellState {
    /// Small-integer code used by display collaborators: 0 empty, 1..=5
    /// ship class, -1 hit, -2 miss.
    pub fn code(self) -> i8 {
        match self {
            CellState::Empty => 0,
            CellState::Ship(ship) => ship as i8 + 1,
            CellState::Hit => -1,
            CellState::Miss => -2,
        }
    }

    /// Whether a shot has already been resolved here.
    pub fn is_shot(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

/// Square grid of cells plus the ledger of ship placements.
///
/// The ledger is authoritative for ship identity and extent; the cell array
/// is authoritative for shot history. Outside of `place`, `remove` and shot
/// resolution the two never diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    n: usize,
    cells: Vec<CellState>,
    placements: [Option<Placement>; NUM_SHIPS],
}

impl Board {
    /// Create an empty board of side `n` with no ships placed.
    pub fn new(n: usize) -> Self {
        Board {
            n,
            cells: vec![CellState::Empty; n * n],
            placements: [None; NUM_SHIPS],
        }
    }

    /// Build a board of side `n` with the full fleet placed at random.
    /// This is the sole source of randomness for board layouts.
    pub fn generate<R: Rng>(n: usize, rng: &mut R) -> Result<Board, BoardError> {
        let mut board = Board::new(n);
        for ship in 0..NUM_SHIPS {
            board.random_place(rng, ship)?;
        }
        Ok(board)
    }

    /// Board side length.
    pub fn side(&self) -> usize {
        self.n
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.n + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if row >= self.n || col >= self.n {
            Err(BoardError::OutOfBounds { row, col })
        } else {
            Ok(())
        }
    }

    fn check_ship(ship: usize) -> Result<(), BoardError> {
        if ship >= NUM_SHIPS {
            Err(BoardError::InvalidShip { ship })
        } else {
            Ok(())
        }
    }

    /// Cell state at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<CellState, BoardError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[self.index(row, col)])
    }

    /// In-bounds cell access for crate internals.
    pub(crate) fn at(&self, row: usize, col: usize) -> CellState {
        self.cells[self.index(row, col)]
    }

    /// Recorded placement of `ship`, if any.
    pub fn placement(&self, ship: usize) -> Option<Placement> {
        self.placements.get(ship).copied().flatten()
    }

    /// Number of cells still holding live, unshot ship content.
    pub fn live_ship_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| matches!(cell, CellState::Ship(_)))
            .count()
    }

    fn run_in_bounds(&self, length: usize, row: usize, col: usize, o: Orientation) -> bool {
        match o {
            Orientation::Horizontal => row < self.n && col + length <= self.n,
            Orientation::Vertical => col < self.n && row + length <= self.n,
        }
    }

    fn placement_fits(
        &self,
        ship: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
        acceptable: impl Fn(CellState) -> bool,
    ) -> bool {
        let length = match FLEET.get(ship) {
            Some(class) => class.length(),
            None => return false,
        };
        if !self.run_in_bounds(length, row, col, orientation) {
            return false;
        }
        Placement::new(row, col, orientation)
            .cells(length)
            .all(|(r, c)| acceptable(self.cells[self.index(r, c)]))
    }

    /// Strict placement legality: the run fits inside the grid and every
    /// covered cell is empty.
    pub fn can_place(&self, ship: usize, row: usize, col: usize, orientation: Orientation) -> bool {
        self.placement_fits(ship, row, col, orientation, |cell| cell == CellState::Empty)
    }

    /// Relaxed legality used by the density engine: hit cells stay
    /// occupiable because the ship covering them has not been identified
    /// yet. Misses and resolved ship tags block.
    pub fn can_place_relaxed(
        &self,
        ship: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> bool {
        self.placement_fits(ship, row, col, orientation, |cell| {
            matches!(cell, CellState::Empty | CellState::Hit)
        })
    }

    /// Write `ship`'s tag into every covered cell and record the placement
    /// in the ledger.
    pub fn place(
        &mut self,
        ship: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        Self::check_ship(ship)?;
        if self.placements[ship].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        if !self.run_in_bounds(FLEET[ship].length(), row, col, orientation) {
            return Err(BoardError::OutOfBounds { row, col });
        }
        if !self.can_place(ship, row, col, orientation) {
            return Err(BoardError::ShipOverlaps);
        }
        let placement = Placement::new(row, col, orientation);
        for (r, c) in placement.cells(FLEET[ship].length()) {
            let idx = self.index(r, c);
            self.cells[idx] = CellState::Ship(ship);
        }
        self.placements[ship] = Some(placement);
        Ok(())
    }

    /// Inverse of `place`: restore the run to empty and clear the ledger
    /// entry. Enumeration helper, never called during live play.
    pub fn remove(&mut self, ship: usize) -> Result<(), BoardError> {
        Self::check_ship(ship)?;
        let placement = self.placements[ship].ok_or(BoardError::ShipNotPlaced)?;
        for (r, c) in placement.cells(FLEET[ship].length()) {
            let idx = self.index(r, c);
            self.cells[idx] = CellState::Empty;
        }
        self.placements[ship] = None;
        Ok(())
    }

    /// Place `ship` at a uniformly random legal position and orientation.
    ///
    /// Positions are sampled over the whole grid and retried until one is
    /// legal, with no attempt bound; on any grid the fleet fits, a legal
    /// spot exists and the loop terminates.
    pub fn random_place<R: Rng>(&mut self, rng: &mut R, ship: usize) -> Result<(), BoardError> {
        Self::check_ship(ship)?;
        let length = FLEET[ship].length();
        if length > self.n {
            return Err(BoardError::ShipDoesNotFit { length, n: self.n });
        }
        loop {
            let row = rng.random_range(0..self.n);
            let col = rng.random_range(0..self.n);
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if self.can_place(ship, row, col, orientation) {
                return self.place(ship, row, col, orientation);
            }
        }
    }

    /// Number of strictly legal placements of `ship` on the current grid.
    ///
    /// On an empty board this equals `n * (n - length + 1) * 2`; the
    /// enumeration form also covers partially occupied grids.
    pub fn count_legal_placements(&self, ship: usize) -> usize {
        let mut count = 0;
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for row in 0..self.n {
                for col in 0..self.n {
                    if self.can_place(ship, row, col, orientation) {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// Count the joint non-overlapping configurations of `ships` starting
    /// from the current grid, by backtracking over every legal placement of
    /// the head ship. Exponential in the list length; intended for short
    /// lists on small grids.
    pub fn count_fleet_arrangements(&mut self, ships: &[usize]) -> Result<usize, BoardError> {
        let Some((&ship, rest)) = ships.split_first() else {
            return Ok(1);
        };
        Self::check_ship(ship)?;
        let mut count = 0;
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for row in 0..self.n {
                for col in 0..self.n {
                    if !self.can_place(ship, row, col, orientation) {
                        continue;
                    }
                    if rest.is_empty() {
                        count += 1;
                    } else {
                        self.place(ship, row, col, orientation)?;
                        count += self.count_fleet_arrangements(rest)?;
                        self.remove(ship)?;
                    }
                }
            }
        }
        Ok(count)
    }

    /// Ledger equality: same side and identical placement of every ship.
    pub fn same_layout(&self, other: &Board) -> bool {
        self.n == other.n && self.placements == other.placements
    }

    /// Redraw random boards of the same side until one matches this
    /// board's layout, returning the number of draws (at least one).
    pub fn draws_until_same_layout<R: Rng>(&self, rng: &mut R) -> Result<usize, BoardError> {
        let mut draws = 1;
        let mut candidate = Board::generate(self.n, rng)?;
        while !self.same_layout(&candidate) {
            draws += 1;
            candidate = Board::generate(self.n, rng)?;
        }
        Ok(draws)
    }

    /// Mirror a shot outcome onto an evidence board that holds no ships of
    /// its own. Double recording is rejected.
    pub fn record(&mut self, row: usize, col: usize, outcome: ShotResult) -> Result<(), BoardError> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        if self.cells[idx] != CellState::Empty {
            return Err(BoardError::AlreadyRecorded { row, col });
        }
        self.cells[idx] = match outcome {
            ShotResult::Hit => CellState::Hit,
            ShotResult::Miss => CellState::Miss,
        };
        Ok(())
    }

    /// Attribute a sunk ship on an evidence board: paint its full run with
    /// its tag and record the ledger entry. The run's hit cells stop
    /// counting as evidence and block relaxed placement from now on.
    pub fn mark_resolved(&mut self, ship: usize, placement: Placement) -> Result<(), BoardError> {
        Self::check_ship(ship)?;
        if self.placements[ship].is_some() {
            return Err(BoardError::ShipAlreadyPlaced);
        }
        let length = FLEET[ship].length();
        if !self.run_in_bounds(length, placement.row, placement.col, placement.orientation) {
            return Err(BoardError::OutOfBounds {
                row: placement.row,
                col: placement.col,
            });
        }
        for (r, c) in placement.cells(length) {
            let idx = self.index(r, c);
            self.cells[idx] = CellState::Ship(ship);
        }
        self.placements[ship] = Some(placement);
        Ok(())
    }

    /// Full grid as small-integer codes (0 empty, 1..=5 ship, -1 hit, -2
    /// miss): the sole contract with display collaborators.
    pub fn cell_codes(&self) -> Vec<Vec<i8>> {
        (0..self.n)
            .map(|r| (0..self.n).map(|c| self.at(r, c).code()).collect())
            .collect()
    }

    /// Resolve a shot: empty cells become misses, ship cells become hits.
    pub(crate) fn apply_shot(&mut self, row: usize, col: usize) -> Result<ShotResult, BoardError> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        match self.cells[idx] {
            CellState::Empty => {
                self.cells[idx] = CellState::Miss;
                Ok(ShotResult::Miss)
            }
            CellState::Ship(_) => {
                self.cells[idx] = CellState::Hit;
                Ok(ShotResult::Hit)
            }
            CellState::Hit | CellState::Miss => Err(BoardError::AlreadyShot { row, col }),
        }
    }

    /// Clear shot history and replay the ledger, yielding an unplayed board
    /// with an identical layout.
    pub(crate) fn reset_shots(&mut self) {
        self.cells.fill(CellState::Empty);
        for ship in 0..NUM_SHIPS {
            if let Some(placement) = self.placements[ship] {
                for (r, c) in placement.cells(FLEET[ship].length()) {
                    let idx = self.index(r, c);
                    self.cells[idx] = CellState::Ship(ship);
                }
            }
        }
    }
}
