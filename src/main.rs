//! Acrotext - find acrostics hidden in text
//!
//! A CLI tool that extracts positional letter sequences from text files
//! and scores them against a dictionary.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{filter::LevelFilter, fmt};

use commands::{AnalyzeCommand, BatchCommand, CommandExecutor, StrategiesCommand};

/// Acrotext - find acrostics hidden in text
///
/// Reads first/last/second letters of lines, first letters of sentences and
/// second words, then reports the sequences that look like real words.
#[derive(Parser)]
#[command(name = "acrotext")]
#[command(version)]
#[command(about = "Acrostic steganography solver")]
#[command(long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a single text file
    Analyze(AnalyzeCommand),

    /// Analyze every .txt file in a directory
    Batch(BatchCommand),

    /// List the extraction strategies
    Strategies(StrategiesCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(log_level(cli.verbose, cli.quiet));

    match cli.command {
        Commands::Analyze(cmd) => cmd.execute(),
        Commands::Batch(cmd) => cmd.execute(),
        Commands::Strategies(cmd) => cmd.execute(),
    }
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_tracing(level: LevelFilter) {
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("Tracing subscriber already set; skipping re-initialization.");
    }
}
