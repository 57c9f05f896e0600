//! Antichess agent binary.
//!
//! Usage: `antichess_agent <white|black> [--chess960] [--seed N] [--fen FEN]`
//!
//! Moves go over stdin/stdout one per line; diagnostics go to stderr and are
//! filtered with `RUST_LOG` (default `warn`).

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use antichess_agent::config::{AgentConfig, Side};
use antichess_agent::protocol::command_loop::run_stdio_loop;

#[derive(Parser)]
#[command(name = "antichess_agent")]
#[command(about = "Mandatory-capture chess agent speaking a line protocol")]
struct Cli {
    /// Color the agent plays; white moves immediately
    #[arg(value_enum)]
    side: Side,
    /// Encode castling as king-takes-rook
    #[arg(long)]
    chess960: bool,
    /// Fixed RNG seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,
    /// Start from this position instead of the initial one
    #[arg(long)]
    fen: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = AgentConfig::new(cli.side).with_alt_castling(cli.chess960);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(fen) = cli.fen {
        config = config.with_start_fen(fen);
    }

    run_stdio_loop(config)?;
    Ok(())
}
