//! Combatant trait and implementations
//!
//! - AutomatedPlayer: fires at uniformly random cells
//! - CliPlayer: reads targets from a line-oriented text stream

use rand::rngs::SmallRng;

use crate::engine::{Board, Coordinate, MoveError, ShotReport};

/// One side of a match. Only target selection differs between kinds; the
/// retry policy lives in [`make_move`].
pub trait Combatant {
    /// Pick the next cell to fire at on a `size`×`size` grid.
    fn choose_target(&mut self, rng: &mut SmallRng, size: usize) -> Result<Coordinate, MoveError>;

    /// Tell the combatant why its last attempt was rejected.
    fn report_error(&mut self, _err: &MoveError) {}
}

/// Choose and fire until a shot lands on `opponent`.
///
/// Recoverable errors (off-grid or repeated targets, malformed input) are
/// reported back to the combatant and the move is retried without limit.
/// Anything else, such as closed input, ends the move with an error.
pub fn make_move<const N: usize>(
    combatant: &mut dyn Combatant,
    rng: &mut SmallRng,
    opponent: &mut Board<N>,
) -> Result<(Coordinate, ShotReport), MoveError> {
    loop {
        let attempt = combatant
            .choose_target(rng, N)
            .and_then(|target| Ok((target, opponent.shoot(target)?)));
        match attempt {
            Ok(shot) => return Ok(shot),
            Err(err) if err.is_recoverable() => combatant.report_error(&err),
            Err(err) => return Err(err),
        }
    }
}

pub mod ai;
pub use ai::AutomatedPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::CliPlayer;
