//! Neon Runner - Entry Point
//!
//! Interactive terminal run: pick a handle and class, then hack through
//! encounters until you flatline, take down the Core Security AI, or log off.

use std::io::{self, BufReader};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::style::Stylize;

use neon_runner::core::config::GameConfig;
use neon_runner::core::error::Result;
use neon_runner::core::seeded;
use neon_runner::entity::ClassKind;
use neon_runner::session::{ScoreLog, Session, SessionStep};
use neon_runner::ui::{ConsoleNarrator, ConsolePrompt};

/// Neon Runner - a text-based cyberpunk hacker RPG
#[derive(Parser, Debug)]
#[command(name = "neon-runner")]
#[command(about = "Hack through ICE, level up, and take down the Core Security AI")]
struct Args {
    /// Runner handle (prompted when absent)
    #[arg(long)]
    handle: Option<String>,

    /// Class: infiltrator, engineer or analyst (prompted when absent)
    #[arg(long)]
    class: Option<String>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file overriding session settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the top scores and exit
    #[arg(long)]
    scores: bool,

    /// Disable the typewriter effect
    #[arg(long)]
    fast: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr and stay quiet unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::load_or_default(path),
        None => GameConfig::default(),
    };
    let scores = ScoreLog::new(config.scores_file.clone());

    if args.scores {
        for (rank, entry) in scores.top(10)?.iter().enumerate() {
            println!("{:>2}. {}", rank + 1, entry);
        }
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(|| rand::random());
    let mut rng = seeded(seed);
    tracing::info!(seed, "Neon Runner starting");

    let delay = if args.fast {
        Duration::ZERO
    } else {
        Duration::from_millis(config.text_delay_ms)
    };
    let mut narrator = ConsoleNarrator::new(io::stdout(), delay);
    let mut prompt = ConsolePrompt::new(BufReader::new(io::stdin()), io::stdout());

    narrator.typewrite("--- CYBER RPG: NEON RUNNER ---".cyan().bold());
    let handle = match args.handle {
        Some(handle) => handle,
        None => prompt.ask_handle(),
    };
    let class = match args.class.as_deref() {
        Some(class) => ClassKind::parse_or_default(class),
        None => prompt.ask_class(),
    };

    narrator.typewrite("--- CONNECTING TO NEON GRID ---".cyan());
    narrator.typewrite(format!(
        "Welcome, {}. The system pulses. You are a netrunner hunting for flaws.",
        handle.as_str().bold()
    ));
    narrator.typewrite(
        "Objective: breach nodes, collect XP, level up and take down the Core Security AI.",
    );

    let mut session = Session::start(handle, class, config);

    loop {
        let (_, step) = session.play_encounter(&mut prompt, &mut rng, &mut narrator);
        match step {
            SessionStep::Defeated => break,
            SessionStep::Victory => {
                narrator.typewrite(
                    "CONGRATULATIONS! You took down the Core Security AI and won the Neon Crown!"
                        .green()
                        .bold(),
                );
                break;
            }
            SessionStep::Continue => {
                if prompt.is_closed() || !prompt.ask_continue() {
                    break;
                }
            }
        }
    }

    let entry = session.finish();
    narrator.typewrite(
        format!(
            "Session over. Total score: {} | Final level: {}",
            entry.score, entry.level
        )
        .bold(),
    );

    match scores.append(&entry) {
        Ok(()) => narrator.typewrite(
            "Score saved. Thanks for playing. Come back soon - just don't get caught.",
        ),
        Err(e) => tracing::warn!("could not save score to {:?}: {}", scores.path(), e),
    }

    Ok(())
}
