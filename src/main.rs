//! Command-line interface for spatial-fixtures
//!
//! # Usage Examples
//!
//! ```bash
//! # List registered field types
//! spatial-fixtures fields
//!
//! # Ten random points as EWKT, SIRGAS 2000
//! spatial-fixtures generate PointField --count 10 --srid 4674 --format ewkt
//!
//! # Three-dimensional line strings as GeoJSON
//! spatial-fixtures generate line_string --dim 3
//!
//! # Populate rows for a model from a fixture schema
//! spatial-fixtures make --schema fixtures.yaml --model Parcel --count 100 --seed 7
//! ```
//!
//! Set `RUST_LOG=spatial_fixtures=info` for progress logging on stderr.

use clap::Parser;
use spatial_fixtures::commands::{run_fields, run_generate, run_make};
use spatial_fixtures::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Fields => run_fields(&mut out),
        Commands::Generate(args) => run_generate(&args, &mut out),
        Commands::Make(args) => run_make(&args, &mut out),
    }
}
