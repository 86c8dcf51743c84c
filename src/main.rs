#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{init_logging, run_session, Autopilot, TerminalRenderer, DEFAULT_PLAYER_NAME, FLEET};

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
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Player name (asked interactively when omitted)")]
        name: Option<String>,
    },
    /// Watch the autopilot play against the computer.
    Watch {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 0, help = "Extra matches to play after the first")]
        rematches: usize,
    },
}

#[cfg(feature = "std")]
fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, name } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let mut renderer = TerminalRenderer::stdio();
            renderer.welcome()?;
            let name = match name {
                Some(n) if !n.trim().is_empty() => n,
                Some(_) => DEFAULT_PLAYER_NAME.to_string(),
                None => renderer.ask_name()?,
            };
            let played = run_session(&mut renderer, &mut rng, &name, &FLEET)?;
            println!("Thanks for playing, {}! Matches played: {}", name, played);
        }
        Commands::Watch { seed, rematches } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = make_rng(seed);
            let pilot_rng = make_rng(seed.map(|s| s.wrapping_add(1)));
            let mut pilot = Autopilot::new(pilot_rng)
                .echo_to(std::io::stdout())
                .with_rematches(rematches);
            run_session(&mut pilot, &mut rng, "Autopilot", &FLEET)?;
        }
    }
    Ok(())
}
