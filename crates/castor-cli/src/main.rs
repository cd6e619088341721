//! castor - Magenta star halo correction CLI
//!
//! Removes the magenta fringes narrowband palette mapping leaves around stars.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "castor")]
#[command(author, version, about = "Magenta star halo correction for narrowband images")]
#[command(long_about = "
Corrects the magenta star halos left behind by SHO-style narrowband
palette mapping. The correction inverts the image, suppresses the
resulting green cast with lightness-preserving SCNR, and inverts back.

Examples:
  castor correct stack.tif -o fixed.tif            # Default strength (0.8)
  castor correct stack.tif -o fixed.tif -a 1.0     # Full suppression
  castor info stack.tif --stats                    # Show image info
  castor batch -i 'lights/*.tif' -o corrected/     # Correct a whole session
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Correct magenta star halos
    #[command(visible_alias = "c")]
    Correct(CorrectArgs),

    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Correct multiple images
    Batch(BatchArgs),
}

#[derive(Args)]
struct CorrectArgs {
    /// Input image
    input: PathBuf,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,

    /// Correction strength (0.0-1.0)
    #[arg(short, long, default_value_t = castor_ops::DEFAULT_AMOUNT)]
    amount: f32,
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Show pixel statistics
    #[arg(short, long)]
    stats: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct BatchArgs {
    /// Input pattern (glob)
    #[arg(short, long)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: PathBuf,

    /// Correction strength (0.0-1.0)
    #[arg(short, long, default_value_t = castor_ops::DEFAULT_AMOUNT)]
    amount: f32,

    /// Output format extension (keeps input extension if unset)
    #[arg(short, long)]
    format: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Correct(args) => commands::correct::run(args, cli.verbose),
        Commands::Info(args) => commands::info::run(args, cli.verbose),
        Commands::Batch(args) => commands::batch::run(args, cli.verbose),
    }
}

/// Sets up the tracing subscriber on stderr.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects debug level.
fn init_logging(verbose: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        tracing_subscriber::EnvFilter::new(level)
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
