//! Game board: cell states, placed ships and the busy set.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;

use super::bitboard::BitBoard;
use super::common::{BoardError, ShotOutcome, ShotReport};
use super::config::BOARD_SIZE;
use super::coordinate::Coordinate;
use super::ship::Ship;

/// Bitboard wide enough for every grid up to 11×11.
pub type Grid<const N: usize> = BitBoard<u128, N>;

/// Board of the standard size.
pub type StandardBoard = Board<BOARD_SIZE>;

/// Visible state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Part of a ship that has not been hit.
    Ship,
    Hit,
    Missed,
    /// Contour of a destroyed ship, known to be empty.
    Excluded,
}

impl Cell {
    fn marker(self, hidden: bool) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::Ship if hidden => 'O',
            Cell::Ship => '■',
            Cell::Hit => 'X',
            Cell::Missed | Cell::Excluded => '.',
        }
    }
}

/// An N×N board with its fleet.
///
/// During placement the busy set holds every ship cell and its contour so that
/// ships never touch. [`seal`](Board::seal) clears it, after which it only
/// grows with shots and the contours of destroyed ships.
#[derive(Clone)]
pub struct Board<const N: usize> {
    cells: [[Cell; N]; N],
    hidden: bool,
    busy: Grid<N>,
    ships: Vec<Ship>,
    sunk: usize,
    sealed: bool,
}

impl<const N: usize> Board<N> {
    const FITS: () = assert!(N > 0 && N * N <= 128, "board does not fit a u128 bitboard");

    /// Create an empty, unsealed board.
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::FITS;
        Board {
            cells: [[Cell::Empty; N]; N],
            hidden: false,
            busy: Grid::new(),
            ships: Vec::new(),
            sunk: 0,
            sealed: false,
        }
    }

    /// Same board, with unhit ship cells concealed when rendered.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Side length of the grid.
    pub const fn size(&self) -> usize {
        N
    }

    /// Place a ship. On error the board is left untouched.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if self.sealed {
            return Err(BoardError::BoardSealed);
        }
        let footprint = Self::footprint(&ship)?;
        if !(footprint & self.busy).is_empty() {
            return Err(BoardError::WrongPlacement);
        }
        for (r, c) in footprint.iter_set_bits() {
            self.cells[r][c] = Cell::Ship;
        }
        self.busy |= footprint.dilate();
        self.ships.push(ship);
        Ok(())
    }

    /// End the placement phase: reservations made while placing are dropped.
    pub fn seal(&mut self) {
        self.busy.clear_all();
        self.sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Fire at `target`. The board must be sealed first.
    pub fn shoot(&mut self, target: Coordinate) -> Result<ShotReport, BoardError> {
        if !self.sealed {
            return Err(BoardError::NotSealed);
        }
        let (r, c) = target
            .index::<N>()
            .ok_or(BoardError::OutOfBounds(target))?;
        if self.busy.contains(r, c) {
            return Err(BoardError::AlreadyTargeted(target));
        }
        self.busy.set(r, c)?;

        let Some(ship) = self.ships.iter_mut().find(|s| s.occupies(target)) else {
            self.cells[r][c] = Cell::Missed;
            return Ok(ShotOutcome::Miss.into());
        };
        self.cells[r][c] = Cell::Hit;
        if !ship.take_hit() {
            return Ok(ShotOutcome::Damaged.into());
        }

        let footprint = Self::footprint(ship)?;
        self.sunk += 1;
        let contour = footprint.dilate() & !footprint;
        for (r, c) in (contour & !self.busy).iter_set_bits() {
            self.cells[r][c] = Cell::Excluded;
        }
        self.busy |= contour;
        Ok(ShotOutcome::Destroyed.into())
    }

    fn footprint(ship: &Ship) -> Result<Grid<N>, BoardError> {
        let cells = ship
            .cells()
            .map(|cell| cell.index::<N>())
            .collect::<Option<Vec<_>>>()
            .ok_or(BoardError::WrongPlacement)?;
        Ok(Grid::from_iter(cells)?)
    }

    /// Visible state of a cell, `None` outside the grid.
    pub fn cell(&self, at: Coordinate) -> Option<Cell> {
        at.index::<N>().map(|(r, c)| self.cells[r][c])
    }

    /// Whether `at` can no longer be shot at (or placed on, before sealing).
    pub fn is_busy(&self, at: Coordinate) -> bool {
        at.index::<N>().is_some_and(|(r, c)| self.busy.contains(r, c))
    }

    /// The busy set as a bitboard.
    pub fn busy(&self) -> Grid<N> {
        self.busy
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of ships destroyed so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` when every placed ship is destroyed.
    pub fn all_sunk(&self) -> bool {
        self.sunk == self.ships.len()
    }
}

impl<const N: usize> Default for Board<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Text grid with a one-based header row and row labels.
impl<const N: usize> fmt::Display for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  |")?;
        for c in 1..=N {
            write!(f, " {} |", c)?;
        }
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "\n{} |", r + 1)?;
            for cell in row {
                write!(f, " {} |", cell.marker(self.hidden))?;
            }
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Board<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  busy: {:?},\n  sunk: {},\n  sealed: {},\n  ships: {:?}\n}}",
            self.busy, self.sunk, self.sealed, self.ships
        )
    }
}
