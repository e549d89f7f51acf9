use std::io;

use clap::Parser;
use eyre::Result;
use ring_deque::{
    log::{setup_logs, LogLevel},
    menu, Deque,
};

/// Menu-driven double-ended queue of integers.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity of the diagnostics written to stderr. `RUST_LOG` directives take precedence.
    #[clap(long, value_enum, value_name = "LEVEL", env = "RING_DEQUE_LOG", default_value_t)]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logs(cli.log_level)?;

    let mut deque = Deque::new();
    menu::run(&mut deque, io::stdin().lock(), io::stdout().lock())?;
    tracing::info!(remaining = deque.len(), "menu closed");
    Ok(())
}
