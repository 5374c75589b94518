//! Ship geometry and hit points.

use core::fmt;

use super::common::BoardError;
use super::config::MAX_SHIP_LENGTH;
use super::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along the row, towards higher columns.
    Horizontal,
    /// Extends along the column, towards higher rows.
    Vertical,
}

impl Orientation {
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A ship anchored at its bow, with remaining hit points.
///
/// Construction does not check the grid; the board does that when the ship
/// is added.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    lives: usize,
}

impl Ship {
    /// Build a ship of `length` cells starting at `bow`.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Result<Self, BoardError> {
        if length == 0 || length > MAX_SHIP_LENGTH {
            return Err(BoardError::WrongPlacement);
        }
        Ok(Ship {
            bow,
            length,
            orientation,
            lives: length,
        })
    }

    /// Occupied cells, starting at the bow.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let (dr, dc) = self.orientation.step();
        let bow = self.bow;
        (0..self.length as i32).map(move |i| bow.offset(dr * i, dc * i))
    }

    /// Whether `target` is one of the occupied cells.
    pub fn occupies(&self, target: Coordinate) -> bool {
        self.cells().any(|c| c == target)
    }

    /// Take one hit. Returns `true` if this hit sank the ship.
    pub(crate) fn take_hit(&mut self) -> bool {
        if self.lives == 0 {
            return false;
        }
        self.lives -= 1;
        self.lives == 0
    }

    pub fn is_sunk(&self) -> bool {
        self.lives == 0
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Remaining hit points.
    pub fn lives(&self) -> usize {
        self.lives
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: ({}, {}), length: {}, orientation: {:?}, lives: {} }}",
            self.bow.row, self.bow.col, self.length, self.orientation, self.lives,
        )
    }
}
