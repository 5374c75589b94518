use rand::rngs::SmallRng;
use rand::Rng;

use crate::engine::{Coordinate, MoveError};

use super::Combatant;

/// Computer opponent firing at uniformly random cells.
///
/// It keeps no memory of earlier shots; repeats are rejected by the board and
/// simply redrawn.
#[derive(Debug, Default)]
pub struct AutomatedPlayer {
    redraws: usize,
}

impl AutomatedPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets the board rejected so far.
    pub fn redraws(&self) -> usize {
        self.redraws
    }
}

impl Combatant for AutomatedPlayer {
    fn choose_target(&mut self, rng: &mut SmallRng, size: usize) -> Result<Coordinate, MoveError> {
        let target = Coordinate::from((rng.random_range(0..size), rng.random_range(0..size)));
        log::trace!("computer aims at {}", target);
        Ok(target)
    }

    fn report_error(&mut self, err: &MoveError) {
        self.redraws += 1;
        log::info!("computer redraws: {}", err);
    }
}
