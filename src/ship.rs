//! Ship classes and placement geometry.

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Class of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    /// Create a new ship class.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length in cells.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Where a ship sits on the board: anchor cell plus orientation. The anchor
/// is the run's lowest row/column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub fn new(row: usize, col: usize, orientation: Orientation) -> Self {
        Self {
            row,
            col,
            orientation,
        }
    }

    /// Cells covered by a run of `length` starting at this anchor.
    pub fn cells(&self, length: usize) -> impl Iterator<Item = (usize, usize)> {
        let Placement {
            row,
            col,
            orientation,
        } = *self;
        (0..length).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }
}
