//! Random geometry generators for spatial test fixtures.
//!
//! This crate provides one generator per geometry shape, a [`FieldRegistry`]
//! mapping geometry field kinds to those generators, and a [`FixtureMaker`]
//! that fills the geometry fields of models described by a YAML schema.
//! Every generator takes its random source as an argument, so output is
//! reproducible under a seeded RNG.
//!
//! # Architecture
//!
//! ```text
//! FixtureSchema (YAML)
//!        │
//!        ▼
//! ┌─────────────────┐      ┌────────────────┐
//! │  FixtureMaker   │─────▶│ FieldRegistry  │ PointField ─▶ gen_point
//! │                 │      └────────────────┘ ...
//! │  - seed         │
//! │  - rng (StdRng) │─────▶ generate_for_field (srid / dim / generator)
//! │  - index        │
//! └────────┬────────┘
//!          │
//!          ▼
//!    FixtureRow { model, index, fields }
//! ```
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use spatial_generator::{gen_point, spatial_fields, PointOptions};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let point = gen_point(&mut rng, &PointOptions::with_bounds(0.0, 0.0, 10.0, 10.0)).unwrap();
//! assert!((0.0..=10.0).contains(&point.x()));
//!
//! let value = spatial_fields().generate("PolygonField", &mut rng).unwrap();
//! assert_eq!(value.srid(), 4326);
//! ```
//!
//! # Generators
//!
//! - `gen_point` - Point within x/y bounds, optional z
//! - `gen_multipoint` - Between `min_points` and `max_points` points
//! - `gen_linestring` - Line string through `number_of_points` points
//! - `gen_multilinestring` - Between `min_linestrings` and `max_linestrings` line strings
//! - `gen_rectangular_polygon` - Rectangle spanning the bounds
//! - `gen_rectangular_multipolygon` - Between `min_polys` and `max_polys` rectangles

pub mod error;
pub mod generators;
pub mod maker;
pub mod registry;

// Re-exports for convenience
pub use error::{Axis, GeneratorError};
pub use generators::{
    gen_linestring, gen_multilinestring, gen_multipoint, gen_point, gen_rectangular_multipolygon,
    gen_rectangular_polygon, generate_for_field, generate_geometry, LineStringOptions,
    MultiLineStringOptions, MultiPointOptions, MultiPolygonOptions, PointOptions, PolygonOptions,
};
pub use maker::{FixtureMaker, FixtureRow, FixtureRowIterator};
pub use registry::{default_generator, spatial_fields, FieldRegistry, GeneratorFn};
