//! Commonly used types and utilities for ease of import.

pub use crate::{
    make_move, random_board, AutomatedPlayer, Board, BoardError, Combatant, Coordinate, FleetConfig, Game,
    MoveError, Orientation, Ship, ShotOutcome, ShotReport, Side, StandardBoard, TurnState, BOARD_SIZE,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, CliPlayer};
