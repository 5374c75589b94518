//! Core Sea Battle engine (no_std compatible)
//!
//! Coordinates, ships, boards with their placement and shooting rules, and the
//! random fleet generator. Nothing here performs I/O; it only needs `alloc`
//! for the fleet list.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod coordinate;
pub mod fleet;
pub mod ship;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::{Board, Cell, Grid, StandardBoard};
pub use common::{BoardError, InputError, MoveError, ShotOutcome, ShotReport};
pub use config::*;
pub use coordinate::Coordinate;
pub use fleet::{random_board, random_ship, try_fleet};
pub use ship::{Orientation, Ship};
