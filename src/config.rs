use crate::ship::ShipClass;

pub const NUM_SHIPS: usize = 5;

/// The standard fleet, one ship of each class. The fleet index is the
/// ship's identity throughout the crate; its cell code is index + 1.
pub const FLEET: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Carrier", 5),
    ShipClass::new("Battleship", 4),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Submarine", 3),
    ShipClass::new("Destroyer", 2),
];

/// Total number of ship cells in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Smallest grid side that admits the full fleet and the density strategy.
pub const MIN_GRID: usize = 5;

/// Grid side used by the standard simulation setup.
pub const DEFAULT_GRID: usize = 10;
