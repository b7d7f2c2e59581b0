//! Headless Session Runner
//!
//! Plays whole runs with a scripted policy and prints one JSON summary per
//! run. Useful for balance checks and for reproducing a seed.

use clap::Parser;
use serde::Serialize;

use neon_runner::combat::NullSink;
use neon_runner::core::error::Result;
use neon_runner::core::{seeded, GameConfig};
use neon_runner::entity::ClassKind;
use neon_runner::session::{AutoPilot, Policy, Session, SessionStep};

/// Headless Neon Runner - scripted runs with JSON output
#[derive(Parser, Debug)]
#[command(name = "run_sim")]
#[command(about = "Play scripted Neon Runner sessions and print JSON summaries")]
struct Args {
    /// Base random seed; run N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// Number of runs to play
    #[arg(long, default_value_t = 1)]
    runs: u32,

    /// Class: infiltrator, engineer or analyst
    #[arg(long, default_value = "infiltrator")]
    class: String,

    /// Decision policy: aggressive or cautious
    #[arg(long, default_value = "aggressive")]
    policy: String,

    /// Stop a run after this many encounters
    #[arg(long, default_value_t = 50)]
    max_encounters: u32,

    /// Pretty-print each summary
    #[arg(long)]
    pretty: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct RunSummary {
    run: u32,
    seed: u64,
    class: ClassKind,
    policy: Policy,
    outcome: &'static str,
    encounters: u32,
    score: u32,
    level: u32,
    hp_left: u32,
    difficulty: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let policy: Policy = args.policy.parse()?;
    let class = ClassKind::parse_or_default(&args.class);
    let base_seed = args.seed.unwrap_or_else(|| rand::random());

    for run in 0..args.runs {
        let seed = base_seed.wrapping_add(u64::from(run));
        let summary = play_run(run, seed, class, policy, args.max_encounters);
        let json = if args.pretty {
            serde_json::to_string_pretty(&summary)?
        } else {
            serde_json::to_string(&summary)?
        };
        println!("{}", json);
    }

    Ok(())
}

fn play_run(
    run: u32,
    seed: u64,
    class: ClassKind,
    policy: Policy,
    max_encounters: u32,
) -> RunSummary {
    let mut rng = seeded(seed);
    let mut pilot = AutoPilot::new(policy);
    let mut session = Session::start(format!("bot-{}", run), class, GameConfig::default());

    let mut outcome = "stopped";
    while session.encounters < max_encounters {
        let (_, step) = session.play_encounter(&mut pilot, &mut rng, &mut NullSink);
        match step {
            SessionStep::Continue => continue,
            SessionStep::Victory => outcome = "victory",
            SessionStep::Defeated => outcome = "defeated",
        }
        break;
    }

    let entry = session.finish();
    RunSummary {
        run,
        seed,
        class,
        policy,
        outcome,
        encounters: session.encounters,
        score: entry.score,
        level: entry.level,
        hp_left: session.player.actor.hp(),
        difficulty: session.difficulty,
    }
}
