//! Common types for Sea Battle: shot results and the error taxonomy.

use core::fmt;

use super::bitboard::BitBoardError;
use super::coordinate::Coordinate;

/// What a single shot did to the target board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot landed on open water.
    Miss,
    /// Shot hit a ship that still has hit points left.
    Damaged,
    /// Shot took the last hit point of a ship.
    Destroyed,
}

impl ShotOutcome {
    /// Only a hit that leaves the ship afloat earns another shot.
    pub fn grants_repeat(self) -> bool {
        matches!(self, ShotOutcome::Damaged)
    }
}

/// Outcome of a shot together with the repeat-turn flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotReport {
    pub outcome: ShotOutcome,
    /// `true` when the same attacker shoots again.
    pub repeat: bool,
}

impl From<ShotOutcome> for ShotReport {
    fn from(outcome: ShotOutcome) -> Self {
        ShotReport {
            outcome,
            repeat: outcome.grants_repeat(),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Shot aimed outside the grid.
    OutOfBounds(Coordinate),
    /// Cell was already shot at, or lies in a destroyed ship's contour.
    AlreadyTargeted(Coordinate),
    /// Ship leaves the grid, overlaps another ship or touches its contour.
    WrongPlacement,
    /// Placement phase is over; no more ships can be added.
    BoardSealed,
    /// Shots are only accepted once placement is over.
    NotSealed,
    /// Fleet generation gave up after this many fresh boards.
    FleetUnavailable { boards: usize },
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(c) => write!(f, "Shot at {} is outside the board", c),
            BoardError::AlreadyTargeted(c) => write!(f, "Cell {} has already been targeted", c),
            BoardError::WrongPlacement => write!(f, "Ship cannot be placed there"),
            BoardError::BoardSealed => write!(f, "Board is sealed, placement phase is over"),
            BoardError::NotSealed => write!(f, "Board is still in its placement phase"),
            BoardError::FleetUnavailable { boards } => {
                write!(f, "Unable to place the fleet after {} boards", boards)
            }
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
        }
    }
}

/// Malformed or missing interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Line did not contain exactly two tokens.
    WrongTokenCount(usize),
    /// One of the two tokens is not an integer.
    NotANumber,
    /// Input stream ended or failed.
    Closed,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongTokenCount(n) => {
                write!(f, "Enter exactly 2 coordinates (got {})", n)
            }
            InputError::NotANumber => write!(f, "Both coordinates must be numbers"),
            InputError::Closed => write!(f, "Input closed"),
        }
    }
}

/// Anything that can go wrong while a combatant takes its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    Board(BoardError),
    Input(InputError),
}

impl MoveError {
    /// Recoverable errors are reported and the move is retried.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MoveError::Board(BoardError::OutOfBounds(_))
                | MoveError::Board(BoardError::AlreadyTargeted(_))
                | MoveError::Input(InputError::WrongTokenCount(_))
                | MoveError::Input(InputError::NotANumber)
        )
    }
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        MoveError::Board(err)
    }
}

impl From<InputError> for MoveError {
    fn from(err: InputError) -> Self {
        MoveError::Input(err)
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Board(e) => e.fmt(f),
            MoveError::Input(e) => e.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for InputError {}
#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
#[cfg(feature = "std")]
impl std::error::Error for BitBoardError {}
