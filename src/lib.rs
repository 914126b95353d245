//! Single-player Battleship shot-count simulator.
//!
//! A square board is populated with the standard five-ship fleet at random;
//! a targeting strategy then shoots until every ship is sunk, and the crate
//! reports how many shots that took. Three strategies ship: uniform random
//! search, adjacency hunting around confirmed hits, and a placement-density
//! engine that enumerates every legal placement of each afloat ship
//! consistent with the observed evidence and always shoots the
//! highest-scoring cell.

mod board;
mod common;
mod config;
mod density;
mod game;
mod logging;
mod player;
mod ship;
mod strategy;

pub use board::{Board, CellState};
pub use common::{BoardError, ShotResult};
pub use config::{DEFAULT_GRID, FLEET, MIN_GRID, NUM_SHIPS, TOTAL_SHIP_CELLS};
pub use density::{placement_density, DensityGrid};
pub use game::{Game, GameStatus};
pub use logging::init_logging;
pub use player::{play, Player};
pub use ship::{Orientation, Placement, ShipClass};
pub use strategy::{
    build_strategy, DensityStrategy, HuntStrategy, RandomStrategy, Strategy, StrategyKind,
};
