//! Random fleet generation.
//!
//! Ships are dropped at random positions until they fit. A board that runs out
//! of placement attempts is discarded and generation starts over on a fresh
//! one, up to a bounded number of boards.

use rand::Rng;

use super::board::Board;
use super::common::BoardError;
use super::config::FleetConfig;
use super::coordinate::Coordinate;
use super::ship::{Orientation, Ship};

/// Random ship of `length` cells.
///
/// The bow is drawn from `0..=N` on both axes, one past the last valid index,
/// so some candidates stick out of the grid and are simply rejected by the
/// board.
pub fn random_ship<R: Rng + ?Sized, const N: usize>(rng: &mut R, length: usize) -> Result<Ship, BoardError> {
    let bow = Coordinate::new(
        rng.random_range(0..=N as i32),
        rng.random_range(0..=N as i32),
    );
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(bow, length, orientation)
}

/// One attempt at populating a fresh board. Returns `None` once the
/// placement budget is spent.
///
/// The returned board is sealed.
pub fn try_fleet<R: Rng + ?Sized, const N: usize>(rng: &mut R, config: &FleetConfig) -> Option<Board<N>> {
    let mut board = Board::<N>::new();
    let mut attempts = 0;
    for &length in &config.lengths {
        loop {
            attempts += 1;
            if attempts > config.placement_attempts {
                return None;
            }
            let Ok(ship) = random_ship::<R, N>(rng, length) else {
                // Length the board will never accept.
                return None;
            };
            match board.add_ship(ship) {
                Ok(()) => break,
                Err(BoardError::WrongPlacement) => continue,
                Err(_) => return None,
            }
        }
    }
    board.seal();
    Some(board)
}

/// Generate a fully populated, sealed board.
pub fn random_board<R: Rng + ?Sized, const N: usize>(rng: &mut R, config: &FleetConfig) -> Result<Board<N>, BoardError> {
    for round in 1..=config.board_attempts {
        if let Some(board) = try_fleet::<R, N>(rng, config) {
            log::debug!("fleet of {} ships placed on board #{}", config.lengths.len(), round);
            return Ok(board);
        }
        log::debug!("placement budget exhausted, discarding board #{}", round);
    }
    log::warn!("no valid fleet after {} boards", config.board_attempts);
    Err(BoardError::FleetUnavailable {
        boards: config.board_attempts,
    })
}
