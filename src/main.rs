//! `floorplan` command-line entry point.
//!
//! Usage:
//! ```text
//! floorplan demos/apartment.txt
//! floorplan --furniture WPSCT plan.txt
//! RUST_LOG=floorplan=debug floorplan plan.txt
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use floorplan::{Alphabet, FloorPlan};

/// Counts rooms and furniture in an ASCII floor plan
#[derive(Parser)]
#[command(name = "floorplan")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Floor plan file to read
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Furniture symbols to count, replacing the default WPSC
    #[arg(long, value_name = "SYMBOLS")]
    furniture: Option<String>,
}

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for floorplan.
    // Override with RUST_LOG env var (e.g. RUST_LOG=floorplan=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("floorplan=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(path) = cli.input else {
        println!("Missing input file argument");
        return ExitCode::FAILURE;
    };

    let alphabet = match cli.furniture {
        Some(symbols) => match Alphabet::default().with_furniture(symbols.chars()) {
            Ok(alphabet) => alphabet,
            Err(err) => {
                println!("Invalid furniture symbols: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => Alphabet::default(),
    };

    let file = match File::open(&path) {
        Ok(file) => file,
        Err(err) => {
            println!("Could not open file {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    };

    let mut plan = FloorPlan::with_alphabet(alphabet);
    // A parse failure is reported but, like a successful run, exits 0.
    if let Err(err) = plan.ingest_all(BufReader::new(file)) {
        println!("Error processing input: {err}");
        return ExitCode::SUCCESS;
    }

    if plan.has_open_rooms() {
        tracing::warn!(
            lines = plan.line(),
            "input ended with rooms still open; they are left out of the report"
        );
    }

    println!("{plan}");
    ExitCode::SUCCESS
}
