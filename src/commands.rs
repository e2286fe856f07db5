//! Command handlers.
//!
//! Handlers write their output to the given writer so they can be driven
//! from tests as well as from `main`.

use crate::cli::{GenerateArgs, MakeArgs, OutputFormat};
use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spatial_core::{FieldDefinition, FieldKind, FixtureSchema, SpatialValue};
use spatial_generator::{generate_for_field, spatial_fields, FixtureMaker};
use std::io::Write;

/// Seed used when neither the command line nor the schema sets one.
pub const DEFAULT_SEED: u64 = 42;

/// List the registered field types with their aliases.
pub fn run_fields<W: Write>(out: &mut W) -> anyhow::Result<()> {
    let registry = spatial_fields();
    for kind in FieldKind::ALL {
        if registry.contains(kind.identifier()) {
            writeln!(out, "{}\t{}", kind.identifier(), kind.alias())?;
        }
    }
    Ok(())
}

/// Generate `count` values for one field type.
pub fn run_generate<W: Write>(args: &GenerateArgs, out: &mut W) -> anyhow::Result<()> {
    tracing::info!(
        "Generating {} {} value(s) (seed={})",
        args.count,
        args.field_type,
        args.seed
    );

    let mut field = FieldDefinition::new("value", args.field_type);
    if let Some(srid) = args.srid {
        field = field.with_srid(srid);
    }
    if let Some(dim) = args.dim {
        field = field.with_dim(dim);
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    for _ in 0..args.count {
        let result = if field.uses_defaults() {
            spatial_fields().generate(args.field_type.identifier(), &mut rng)
        } else {
            generate_for_field(&field, &mut rng)
        };
        let value =
            result.with_context(|| format!("Failed to generate {} value", args.field_type))?;

        write_value(out, &value, args.format)?;
    }

    Ok(())
}

/// Populate `count` rows of a schema model as JSON lines.
pub fn run_make<W: Write>(args: &MakeArgs, out: &mut W) -> anyhow::Result<()> {
    let schema = FixtureSchema::from_file(&args.schema)
        .with_context(|| format!("Failed to load fixture schema from {:?}", args.schema))?;
    let seed = args.seed.or(schema.seed).unwrap_or(DEFAULT_SEED);

    tracing::info!(
        "Making {} {} row(s) from index {} (seed={})",
        args.count,
        args.model,
        args.start_index,
        seed
    );

    let mut maker = FixtureMaker::new(schema, seed).with_start_index(args.start_index);
    for row in maker.make_many(&args.model, args.count)? {
        let row = row.with_context(|| format!("Failed to make {} row", args.model))?;
        writeln!(out, "{}", serde_json::to_string(&row)?)?;
    }

    tracing::info!("Make completed successfully");
    Ok(())
}

fn write_value<W: Write>(
    out: &mut W,
    value: &SpatialValue,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Geojson => writeln!(out, "{}", value.to_geojson())?,
        OutputFormat::Ewkt => writeln!(out, "{value}")?,
    }
    Ok(())
}
