//! Tic-tac-toe for the terminal.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use console::Console;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "starting session");

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout();
    let mut console = Console::new(stdin, stdout);
    console.run(cli.first.map(Into::into), &mut rng)
}
