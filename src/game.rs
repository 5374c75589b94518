//! Turn controller: alternates the two sides until one fleet is gone.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
use core::fmt;

use rand::rngs::SmallRng;

use crate::engine::{random_board, Board, BoardError, Coordinate, FleetConfig, MoveError, ShotReport};
use crate::player::{make_move, Combatant};

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    Player,
    Computer,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }

    fn turn(self) -> TurnState {
        match self {
            Side::Player => TurnState::PlayerTurn,
            Side::Computer => TurnState::ComputerTurn,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => write!(f, "Player"),
            Side::Computer => write!(f, "Computer"),
        }
    }
}

/// State of the turn machine. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnState {
    PlayerTurn,
    ComputerTurn,
    GameOver(Side),
}

impl TurnState {
    /// Side to move, `None` once the game is over.
    pub fn mover(self) -> Option<Side> {
        match self {
            TurnState::PlayerTurn => Some(Side::Player),
            TurnState::ComputerTurn => Some(Side::Computer),
            TurnState::GameOver(_) => None,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            TurnState::GameOver(side) => Some(side),
            _ => None,
        }
    }
}

/// Everything that happened during one [`Game::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnRecord {
    pub mover: Side,
    pub target: Coordinate,
    pub report: ShotReport,
    /// State after the shot.
    pub state: TurnState,
}

/// Errors returned by the turn controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The game is already over.
    Finished,
    /// The moving side could not complete its move.
    Move(MoveError),
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::Move(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Finished => write!(f, "Game is already over"),
            GameError::Move(e) => write!(f, "Move failed: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// A match between the interactive side ("player") and the automated side
/// ("computer"). Each side's board is the one the other side shoots at.
pub struct Game<const N: usize> {
    player: Box<dyn Combatant>,
    computer: Box<dyn Combatant>,
    player_board: Board<N>,
    computer_board: Board<N>,
    state: TurnState,
    shots: [usize; 2],
    rng: SmallRng,
}

impl<const N: usize> Game<N> {
    /// Start a match on already populated boards. The player moves first.
    /// Boards still in their placement phase are sealed.
    pub fn new(
        player: Box<dyn Combatant>,
        computer: Box<dyn Combatant>,
        mut player_board: Board<N>,
        mut computer_board: Board<N>,
        rng: SmallRng,
    ) -> Self {
        for board in [&mut player_board, &mut computer_board] {
            if !board.is_sealed() {
                board.seal();
            }
        }
        Self {
            player,
            computer,
            player_board,
            computer_board,
            state: TurnState::PlayerTurn,
            shots: [0; 2],
            rng,
        }
    }

    /// Generate both fleets with `rng` and start a match. The computer's
    /// board is hidden.
    pub fn with_random_fleets(
        player: Box<dyn Combatant>,
        computer: Box<dyn Combatant>,
        config: &FleetConfig,
        mut rng: SmallRng,
    ) -> Result<Self, BoardError> {
        let player_board = random_board::<_, N>(&mut rng, config)?;
        let computer_board = random_board::<_, N>(&mut rng, config)?.hidden();
        Ok(Self::new(player, computer, player_board, computer_board, rng))
    }

    /// Execute one move of the side whose turn it is.
    pub fn step(&mut self) -> Result<TurnRecord, GameError> {
        let mover = self.state.mover().ok_or(GameError::Finished)?;
        let (combatant, target_board) = match mover {
            Side::Player => (&mut *self.player, &mut self.computer_board),
            Side::Computer => (&mut *self.computer, &mut self.player_board),
        };
        let (target, report) = make_move(combatant, &mut self.rng, target_board)?;
        self.shots[mover as usize] += 1;

        self.state = if target_board.all_sunk() {
            log::info!("{} wins after {} shots", mover, self.shots[mover as usize]);
            TurnState::GameOver(mover)
        } else if report.repeat {
            self.state
        } else {
            mover.opponent().turn()
        };
        log::debug!("{} fired at {}: {:?}", mover, target, report.outcome);

        Ok(TurnRecord {
            mover,
            target,
            report,
            state: self.state,
        })
    }

    /// Step until the game is over and return the winner.
    pub fn run(&mut self) -> Result<Side, GameError> {
        loop {
            if let Some(winner) = self.step()?.state.winner() {
                return Ok(winner);
            }
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Board the player owns (the computer shoots at it).
    pub fn player_board(&self) -> &Board<N> {
        &self.player_board
    }

    /// Board the computer owns (the player shoots at it).
    pub fn computer_board(&self) -> &Board<N> {
        &self.computer_board
    }

    /// Shots that landed on the opponent's board, per side.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.shots[side as usize]
    }
}
