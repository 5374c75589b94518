#![cfg(feature = "std")]

//! Console narration: board views and shot announcements.

use std::string::String;

use crate::engine::ShotOutcome;
use crate::game::{Game, Side, TurnRecord};

const RULE: &str = "--------------------";

pub fn greeting() -> String {
    [
        "Sea Battle",
        "Enter your shot as two numbers: row, then column",
        "A hit that does not sink a ship earns another shot",
    ]
    .join("\n")
}

/// Both boards, the player's own first. The computer's board is rendered
/// according to its hidden flag.
pub fn render_boards<const N: usize>(game: &Game<N>) -> String {
    std::format!(
        "{RULE}\nPlayer board:\n{}\n{RULE}\nComputer board:\n{}\n{RULE}",
        game.player_board(),
        game.computer_board(),
    )
}

pub fn announce_turn(side: Side) -> String {
    match side {
        Side::Player => "Player moves".into(),
        Side::Computer => "Computer moves".into(),
    }
}

/// One line describing what a move did.
pub fn describe(record: &TurnRecord) -> String {
    let outcome = match record.report.outcome {
        ShotOutcome::Destroyed => "Ship destroyed",
        ShotOutcome::Damaged => "Ship damaged",
        ShotOutcome::Miss => "Miss",
    };
    std::format!("{} fires at {}: {}", record.mover, record.target, outcome)
}

pub fn announce_winner(winner: Side) -> String {
    std::format!("{RULE}\n{} wins!", winner)
}
