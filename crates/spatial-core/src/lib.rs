//! Core types for the spatial-fixtures framework.
//!
//! This crate provides the foundational types shared by the generators and
//! the command-line tool:
//!
//! - [`SpatialValue`] - A generated geometry (point, line string, polygon and
//!   their multi-variants) with its SRID
//! - [`FieldKind`] - Geometry field kinds, the keys of the field registry
//! - [`FixtureSchema`] - Model definitions loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! spatial-core (this crate)
//!    │
//!    └─── spatial-generator  (generators, registry, fixture maker)
//!             │
//!             └─── spatial-fixtures  (CLI)
//! ```
//!
//! # Example
//!
//! ```rust
//! use spatial_core::{Coord, Point, SpatialValue};
//!
//! let value = SpatialValue::from(Point::new(Coord::xy(1.5, -2.0), 4326));
//! assert_eq!(value.to_string(), "SRID=4326;POINT(1.5 -2)");
//! ```

pub mod schema;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use schema::{
    BoundsConfig, FieldDefinition, FixtureSchema, GeometryGeneratorConfig, ModelDefinition,
    SchemaError,
};
pub use types::{FieldKind, GeometryType, UnknownFieldKind, DEFAULT_SRID};
pub use values::{
    Coord, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, SpatialValue,
};
