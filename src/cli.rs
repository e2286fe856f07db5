//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use spatial_core::FieldKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "spatial-fixtures")]
#[command(about = "Generate random geometry values for spatial test fixtures")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the registered geometry field types
    Fields,

    /// Generate values for a single geometry field type
    Generate(GenerateArgs),

    /// Populate fixture rows for a model in a schema file
    Make(MakeArgs),
}

/// Output encoding for generated values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// GeoJSON geometry object per line
    Geojson,
    /// EWKT (`SRID=4326;POINT(1 2)`) per line
    Ewkt,
}

#[derive(Args, Clone)]
pub struct GenerateArgs {
    /// Field type identifier or alias (e.g. PointField, multi_polygon)
    pub field_type: FieldKind,

    /// Number of values to generate
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: u64,

    /// Seed for reproducible output
    #[arg(long, env = "SPATIAL_FIXTURES_SEED", default_value_t = 42)]
    pub seed: u64,

    /// SRID to generate (generator default when omitted)
    #[arg(long)]
    pub srid: Option<i32>,

    /// Coordinate dimension; 3 adds a z ordinate to point-based shapes
    #[arg(long, value_parser = clap::value_parser!(u8).range(2..=3))]
    pub dim: Option<u8>,

    /// Output encoding
    #[arg(long, short = 'f', value_enum, default_value = "geojson")]
    pub format: OutputFormat,
}

#[derive(Args, Clone)]
pub struct MakeArgs {
    /// Path to fixture schema YAML file
    #[arg(long)]
    pub schema: PathBuf,

    /// Model to populate
    #[arg(long)]
    pub model: String,

    /// Number of rows to make
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: u64,

    /// Seed (overrides the schema's seed)
    #[arg(long, env = "SPATIAL_FIXTURES_SEED")]
    pub seed: Option<u64>,

    /// Index of the first row
    #[arg(long, default_value_t = 0)]
    pub start_index: u64,
}
