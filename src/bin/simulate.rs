//! Headless Simulator
//!
//! Plays a bot-vs-bot game and prints the result as JSON.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use monopoly_engine::core::EngineConfig;
use monopoly_engine::policy::{Autoplay, DecisionPolicy, GreedyPolicy, RandomPolicy};
use monopoly_engine::turn::GameSession;
use serde::Serialize;

/// Headless Simulator - bot-vs-bot games from a seed
#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Play a headless game between bots and print the result")]
struct Args {
    /// Number of players (2-4)
    #[arg(long, default_value_t = 4)]
    players: usize,

    /// Session seed; overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Turns before the game is called
    #[arg(long, default_value_t = 500)]
    max_turns: u32,

    /// TOML file with engine settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Bot used for every seat
    #[arg(long, value_enum, default_value_t = PolicyKind::Greedy)]
    policy: PolicyKind,

    /// Print every event as a JSON line before the result
    #[arg(long)]
    events: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyKind {
    Greedy,
    Random,
}

#[derive(Serialize)]
struct Summary {
    seed: u64,
    players: usize,
    winner: Option<String>,
    leader: Option<String>,
    turns: u32,
    standings: Vec<(String, i64)>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => EngineConfig::from_toml_str(&std::fs::read_to_string(path)?)?,
        None => EngineConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let seed = config.seed;

    let mut session = GameSession::new(config)?;
    session.start_game(args.players)?;

    let mut policy: Box<dyn DecisionPolicy> = match args.policy {
        PolicyKind::Greedy => Box::new(GreedyPolicy::new()),
        PolicyKind::Random => Box::new(RandomPolicy::new(seed)),
    };
    let result = Autoplay::new(args.max_turns).run(&mut session, &mut policy)?;

    if args.events {
        for event in session.take_events() {
            println!("{}", serde_json::to_string(&event)?);
        }
    }

    let summary = Summary {
        seed,
        players: args.players,
        winner: result.winner.map(|p| p.to_string()),
        leader: result.leader().map(|p| p.to_string()),
        turns: result.turns,
        standings: result
            .standings
            .iter()
            .map(|(p, worth)| (p.to_string(), *worth))
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
