//! Command-line interface for fuzzcomb
//!
//! # Usage Examples
//!
//! ```bash
//! # Ten integers in [0, 100)
//! fuzzcomb sample int
//!
//! # Reproducible words of up to 6 letters
//! fuzzcomb sample word --seed 42 --count 5 --max-len 6
//!
//! # Hangul strings
//! fuzzcomb sample unicode --block "Hangul Syllables" --max-len 4
//!
//! # Dates since 2020-01-01, seed and filter settings from a file
//! fuzzcomb sample date --from 2020-01-01 --config fuzz.yaml
//! ```
//!
//! Every sample is printed as one JSON value per line.

use clap::{Parser, Subcommand};
use fuzzcomb::sample::{run_sample, SampleArgs};
use std::io::Write;

#[derive(Parser)]
#[command(name = "fuzzcomb")]
#[command(about = "Print random samples from composable value generators")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and print samples
    Sample {
        #[command(flatten)]
        args: SampleArgs,
    },
}

fn main() -> anyhow::Result<()> {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sample { args } => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            run_sample(&args, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}
