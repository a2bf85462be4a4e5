//! Plump CLI - seat the named players, deal the opening round, and print
//! the table state.
//!
//! This is a thin driver over `plump-engine`; everything it prints is
//! cosmetic and owned by this binary, not by the engine.

use clap::Parser;
use plump_engine::{snapshot, GameEngine};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "plump")]
#[command(about = "Plump card game dealer")]
struct Args {
    /// Player names, in seating order
    #[arg(required = true)]
    players: Vec<String>,

    /// Number of cards to start with (clamped to the deck split)
    #[arg(short, long)]
    cards: Option<usize>,

    /// RNG seed for a reproducible deal
    #[arg(long)]
    seed: Option<u64>,

    /// Print the table state as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut game = GameEngine::new();
    for name in &args.players {
        game.add_player(name)?;
    }
    if let Some(cards) = args.cards {
        let unclamped = game.set_max_cards(cards)?;
        if !unclamped {
            warn!(
                requested = cards,
                stored = game.max_cards(),
                "hand-size cap was clamped"
            );
        }
    }

    let hand_size = game.deal(args.seed)?;
    info!(hand_size, rounds = game.number_of_rounds(), "opening round dealt");

    let snap = snapshot(&game);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&snap)?);
    } else {
        println!("{snap}");
    }
    Ok(())
}
