//! Placement-density scoring over an evidence board.

use crate::board::{Board, CellState};
use crate::config::FLEET;
use crate::ship::{Orientation, Placement};

/// Per-cell count of the relaxed-legal placements of one ship class that
/// cover the cell, given current evidence, plus the maximizing cell.
/// Rebuilt from scratch whenever evidence changes.
#[derive(Debug, Clone)]
pub struct DensityGrid {
    n: usize,
    counts: Vec<u32>,
    best: (usize, usize),
    best_count: u32,
}

impl DensityGrid {
    /// Density count at (row, col).
    pub fn count(&self, row: usize, col: usize) -> u32 {
        self.counts[row * self.n + col]
    }

    /// Maximizing cell and its count. Ties keep the first cell in
    /// row-major order.
    pub fn best(&self) -> ((usize, usize), u32) {
        (self.best, self.best_count)
    }

    /// Sum of all counts over the grid.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&count| count as u64).sum()
    }
}

/// Score every cell of `board` by the relaxed-legal placements of `ship`
/// covering it.
///
/// Each accepted run contributes 1 to each of its unhit cells; a run that
/// already covers unattributed hits contributes the hit count on top,
/// biasing the grid toward extending a partially discovered ship. Hit,
/// miss and resolved cells themselves score zero, so the maximizing cell
/// of an afloat ship is always unshot. A ship longer than the grid side
/// yields an all-zero grid.
pub fn placement_density(board: &Board, ship: usize) -> DensityGrid {
    let n = board.side();
    let mut counts = vec![0u32; n * n];
    let length = FLEET.get(ship).map_or(0, |class| class.length());

    if length > 0 {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            for row in 0..n {
                for col in 0..n {
                    if !board.can_place_relaxed(ship, row, col, orientation) {
                        continue;
                    }
                    let placement = Placement::new(row, col, orientation);
                    let hits = placement
                        .cells(length)
                        .filter(|&(r, c)| board.at(r, c) == CellState::Hit)
                        .count() as u32;
                    for (r, c) in placement.cells(length) {
                        if board.at(r, c) != CellState::Hit {
                            counts[r * n + c] += 1 + hits;
                        }
                    }
                }
            }
        }
    }

    // Pure fold for the maximum; the first cell in row-major order wins
    // ties.
    let (best_idx, best_count) = counts
        .iter()
        .enumerate()
        .fold((0usize, 0u32), |acc, (idx, &count)| {
            if count > acc.1 {
                (idx, count)
            } else {
                acc
            }
        });

    DensityGrid {
        n,
        counts,
        best: if n == 0 { (0, 0) } else { (best_idx / n, best_idx % n) },
        best_count,
    }
}
