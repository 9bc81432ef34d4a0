//! JPops shell.
//!
//! Reads source a line at a time from stdin and prints either the scanned
//! tokens or the parsed tree for each line.

use std::io;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use jpops::{
    parser::parser::DEFAULT_MAX_DEPTH,
    repl::{self, ReplConfig, ReplMode},
};

/// JPops language shell.
#[derive(Parser)]
#[command(name = "jpops", about = "Interactive shell for the JPops language")]
struct Cli {
    /// What to print for each line read.
    #[arg(long, value_enum, default_value_t = ReplMode::Tokens)]
    mode: ReplMode,

    /// Deepest expression nesting accepted before a line is rejected.
    #[arg(long = "max-depth", default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = ReplConfig {
        mode: cli.mode,
        max_depth: cli.max_depth,
    };
    debug!(?config, "starting shell");

    println!("Hello! This is the JPops programming language!");
    println!("Feel free to type in commands");

    let stdin = io::stdin();
    repl::start(stdin.lock(), io::stdout(), &config)
}
