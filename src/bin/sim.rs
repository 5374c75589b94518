use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{AutomatedPlayer, FleetConfig, Game, Side, BOARD_SIZE};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let mut game = Game::<BOARD_SIZE>::with_random_fleets(
        Box::new(AutomatedPlayer::new()),
        Box::new(AutomatedPlayer::new()),
        &FleetConfig::default(),
        SmallRng::seed_from_u64(seed),
    )?;
    let winner = game.run()?;

    let result = json!({
        "seed": seed,
        "winner": winner,
        "player": {
            "shots": game.shots_fired(Side::Player),
            "ships_lost": game.player_board().sunk_count(),
        },
        "computer": {
            "shots": game.shots_fired(Side::Computer),
            "ships_lost": game.computer_board().sunk_count(),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
