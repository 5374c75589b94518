#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Side length of the standard square grid.
pub const BOARD_SIZE: usize = 6;
/// Ship lengths of the standard fleet, placed in this order.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];
/// Number of ships in the standard fleet.
pub const NUM_SHIPS: usize = FLEET.len();
/// Total number of ship cells in the standard fleet.
pub const FLEET_CELLS: usize = 3 + 2 + 2 + 1 + 1 + 1 + 1;
/// Longest ship a board accepts.
pub const MAX_SHIP_LENGTH: usize = 4;
/// Random placements tried on one board before it is thrown away.
pub const PLACEMENT_ATTEMPTS: usize = 2000;
/// Fresh boards tried before fleet generation reports failure.
pub const BOARD_ATTEMPTS: usize = 1000;

/// Tunables for the fleet generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetConfig {
    /// Ship lengths in placement order.
    pub lengths: Vec<usize>,
    /// Placement attempts shared by all ships of a single board.
    pub placement_attempts: usize,
    /// Boards to start from scratch before giving up.
    pub board_attempts: usize,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            lengths: FLEET.to_vec(),
            placement_attempts: PLACEMENT_ATTEMPTS,
            board_attempts: BOARD_ATTEMPTS,
        }
    }
}
