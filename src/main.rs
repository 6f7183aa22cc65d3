#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use alexandria::{
    init_logging, CliRoller, DieRoller, GameEngine, GameSession, Roller, DEFAULT_DIE_FACES,
    DEFAULT_MAX_TURNS,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play on this terminal, entering each dice roll by hand.
    Play {
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
        players: u32,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
        max_turns: usize,
    },
    /// Let the computer roll for everyone until the game ends.
    Auto {
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
        players: u32,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_DIE_FACES)]
        faces: u8,
        #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
        max_turns: usize,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
fn play(players: u32, seed: Option<u64>, roller: Box<dyn Roller>, max_turns: usize) -> anyhow::Result<()> {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let engine = GameEngine::new(seeded_rng(seed));
    let mut session = GameSession::new(engine, roller, max_turns);
    let mut stdout = std::io::stdout();
    let summary = session.run(players as usize, &mut stdout)?;

    println!("\n=== GAME OVER ===");
    for (id, position) in &summary.positions {
        println!("{}: field {}", id, position);
    }
    match (summary.finished, summary.leader) {
        (true, Some(id)) => println!("{} wins after {} turns!", id, summary.turns),
        _ => println!("No winner after {} turns.", summary.turns),
    }
    Ok(())
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            players,
            seed,
            max_turns,
        } => play(players, seed, Box::new(CliRoller::new()), max_turns),
        Commands::Auto {
            players,
            seed,
            faces,
            max_turns,
        } => {
            // Separate stream so the dice do not shift the engine's draws.
            let die = DieRoller::new(seeded_rng(seed.map(|s| s.wrapping_add(1))), faces)?;
            play(players, seed, Box::new(die), max_turns)
        }
    }
}
