#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    init_logging, ui, AutomatedPlayer, CliPlayer, Combatant, FleetConfig, Game, BOARD_ATTEMPTS, BOARD_SIZE,
    PLACEMENT_ATTEMPTS,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct MatchOpts {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = PLACEMENT_ATTEMPTS, help = "Random placements tried per board")]
    placement_attempts: usize,
    #[arg(long, default_value_t = BOARD_ATTEMPTS, help = "Fresh boards tried before giving up")]
    board_attempts: usize,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer on the console (default).
    Play(MatchOpts),
    /// Let the computer play both sides.
    Autoplay(MatchOpts),
}

#[cfg(feature = "std")]
impl Default for MatchOpts {
    fn default() -> Self {
        Self {
            seed: None,
            placement_attempts: PLACEMENT_ATTEMPTS,
            board_attempts: BOARD_ATTEMPTS,
        }
    }
}

#[cfg(feature = "std")]
impl MatchOpts {
    fn rng(&self) -> SmallRng {
        match self.seed {
            Some(s) => {
                println!("Using fixed seed: {} (game will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            }
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        }
    }

    fn fleet(&self) -> FleetConfig {
        FleetConfig {
            placement_attempts: self.placement_attempts,
            board_attempts: self.board_attempts,
            ..FleetConfig::default()
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Info);
    let cli = Cli::parse();

    let (opts, interactive) = match cli.command {
        Some(Commands::Play(opts)) => (opts, true),
        Some(Commands::Autoplay(opts)) => (opts, false),
        None => (MatchOpts::default(), true),
    };
    let player: Box<dyn Combatant> = if interactive {
        Box::new(CliPlayer::stdio())
    } else {
        Box::new(AutomatedPlayer::new())
    };

    let mut game = Game::<BOARD_SIZE>::with_random_fleets(
        player,
        Box::new(AutomatedPlayer::new()),
        &opts.fleet(),
        opts.rng(),
    )?;

    println!("{}", ui::greeting());
    let winner = loop {
        println!("{}", ui::render_boards(&game));
        if let Some(side) = game.state().mover() {
            println!("{}", ui::announce_turn(side));
        }
        let record = game.step()?;
        println!("{}", ui::describe(&record));
        if let Some(winner) = record.state.winner() {
            break winner;
        }
    };
    println!("{}", ui::render_boards(&game));
    println!("{}", ui::announce_winner(winner));
    Ok(())
}
