//! Individual geometry generators.
//!
//! Every generator takes the random source as an argument and an options
//! struct whose `Default` carries the documented default arguments. Nothing
//! here holds state between calls.
//!
//! Coordinates are drawn as uniform integers over the bounds scaled by a
//! granularity factor and divided back down, so with the default granularity
//! of 1000 the smallest step between two coordinates is 0.001.

pub mod line;
pub mod point;
pub mod polygon;

use crate::error::{Axis, GeneratorError};
use rand::Rng;
use spatial_core::{BoundsConfig, FieldDefinition, GeometryGeneratorConfig, SpatialValue};

pub use line::{gen_linestring, gen_multilinestring, LineStringOptions, MultiLineStringOptions};
pub use point::{gen_multipoint, gen_point, MultiPointOptions, PointOptions};
pub use polygon::{
    gen_rectangular_multipolygon, gen_rectangular_polygon, MultiPolygonOptions, PolygonOptions,
};

/// Default granularity (0.001 as the smallest coordinate step).
pub const DEFAULT_GRANULARITY: u32 = 1000;

/// Z bounds applied to fields declared with `dim: 3` and no explicit z range.
pub const DEFAULT_Z_RANGE: (f64, f64) = (0.0, 1000.0);

// Scaled bounds must stay exactly representable as both f64 and i64.
const MAX_SCALED: f64 = 9.0e15;

// Relative distance under which a scaled bound counts as sitting on the grid.
const SNAP_EPSILON: f64 = 1e-12;

/// Pull a scaled bound onto the nearest integer when it is only off by
/// floating-point error, e.g. `-131.069 * 1000 == -131068.99999999999`.
fn snap(scaled: f64) -> f64 {
    let nearest = scaled.round();
    if (scaled - nearest).abs() <= SNAP_EPSILON * nearest.abs().max(1.0) {
        nearest
    } else {
        scaled
    }
}

/// Draw a coordinate in `[min, max]` on a `1 / granularity` grid.
pub(crate) fn draw_scaled<R: Rng + ?Sized>(
    rng: &mut R,
    axis: Axis,
    min: f64,
    max: f64,
    granularity: u32,
) -> Result<f64, GeneratorError> {
    if granularity == 0 {
        return Err(GeneratorError::InvalidGranularity(granularity));
    }
    let g = f64::from(granularity);
    let lo = snap(min * g).ceil();
    let hi = snap(max * g).floor();

    let representable =
        lo.is_finite() && hi.is_finite() && lo.abs() <= MAX_SCALED && hi.abs() <= MAX_SCALED;
    if !representable || lo > hi {
        return Err(GeneratorError::InvalidBounds { axis, min, max });
    }

    let scaled = rng.gen_range(lo as i64..=hi as i64);
    // Snapping may move a grid point a rounding error outside the bounds.
    Ok((scaled as f64 / g).clamp(min, max))
}

/// Draw a collection size in `[min, max]`; collections are never empty.
pub(crate) fn draw_count<R: Rng + ?Sized>(
    rng: &mut R,
    what: &'static str,
    min: usize,
    max: usize,
) -> Result<usize, GeneratorError> {
    if min == 0 || min > max {
        return Err(GeneratorError::InvalidCount { what, min, max });
    }
    Ok(rng.gen_range(min..=max))
}

/// Generate a value from a generator configuration.
pub fn generate_geometry<R: Rng + ?Sized>(
    config: &GeometryGeneratorConfig,
    rng: &mut R,
) -> Result<SpatialValue, GeneratorError> {
    generate_with_bounds(config, config.bounds(), rng)
}

/// Generate a value for a schema field that does not use plain defaults.
///
/// The field's explicit generator (or the default one for its kind) is used,
/// with the field's `srid` and `dim: 3` filling in anything the generator
/// configuration leaves unset.
pub fn generate_for_field<R: Rng + ?Sized>(
    field: &FieldDefinition,
    rng: &mut R,
) -> Result<SpatialValue, GeneratorError> {
    let config = field
        .generator
        .clone()
        .unwrap_or_else(|| default_config(field.field_type.geometry_type()));

    let mut bounds = config.bounds().clone();
    if bounds.srid.is_none() {
        bounds.srid = field.srid;
    }
    if field.dim == Some(3) && bounds.min_z.is_none() && bounds.max_z.is_none() {
        bounds.min_z = Some(DEFAULT_Z_RANGE.0);
        bounds.max_z = Some(DEFAULT_Z_RANGE.1);
    }

    generate_with_bounds(&config, &bounds, rng)
}

fn default_config(geometry_type: spatial_core::GeometryType) -> GeometryGeneratorConfig {
    use spatial_core::GeometryType;

    let bounds = BoundsConfig::default();
    match geometry_type {
        GeometryType::Point => GeometryGeneratorConfig::Point { bounds },
        GeometryType::MultiPoint => GeometryGeneratorConfig::MultiPoint {
            bounds,
            min_points: None,
            max_points: None,
        },
        GeometryType::LineString => GeometryGeneratorConfig::LineString {
            bounds,
            number_of_points: None,
        },
        GeometryType::MultiLineString => GeometryGeneratorConfig::MultiLineString {
            bounds,
            number_of_points: None,
            min_linestrings: None,
            max_linestrings: None,
        },
        GeometryType::Polygon => GeometryGeneratorConfig::Polygon { bounds },
        GeometryType::MultiPolygon => GeometryGeneratorConfig::MultiPolygon {
            bounds,
            min_polys: None,
            max_polys: None,
        },
    }
}

fn generate_with_bounds<R: Rng + ?Sized>(
    config: &GeometryGeneratorConfig,
    bounds: &BoundsConfig,
    rng: &mut R,
) -> Result<SpatialValue, GeneratorError> {
    let point = PointOptions::from_config(bounds);

    match config {
        GeometryGeneratorConfig::Point { .. } => gen_point(rng, &point).map(Into::into),

        GeometryGeneratorConfig::MultiPoint {
            min_points,
            max_points,
            ..
        } => {
            let defaults = MultiPointOptions::default();
            let options = MultiPointOptions {
                point,
                min_points: min_points.unwrap_or(defaults.min_points),
                max_points: max_points.unwrap_or(defaults.max_points),
            };
            gen_multipoint(rng, &options).map(Into::into)
        }

        GeometryGeneratorConfig::LineString {
            number_of_points, ..
        } => {
            let options = LineStringOptions {
                point,
                number_of_points: number_of_points
                    .unwrap_or(LineStringOptions::default().number_of_points),
            };
            gen_linestring(rng, &options).map(Into::into)
        }

        GeometryGeneratorConfig::MultiLineString {
            number_of_points,
            min_linestrings,
            max_linestrings,
            ..
        } => {
            let defaults = MultiLineStringOptions::default();
            let options = MultiLineStringOptions {
                line: LineStringOptions {
                    point,
                    number_of_points: number_of_points
                        .unwrap_or(defaults.line.number_of_points),
                },
                min_linestrings: min_linestrings.unwrap_or(defaults.min_linestrings),
                max_linestrings: max_linestrings.unwrap_or(defaults.max_linestrings),
            };
            gen_multilinestring(rng, &options).map(Into::into)
        }

        GeometryGeneratorConfig::Polygon { .. } => {
            gen_rectangular_polygon(rng, &PolygonOptions::from_config(bounds)).map(Into::into)
        }

        GeometryGeneratorConfig::MultiPolygon {
            min_polys,
            max_polys,
            ..
        } => {
            let defaults = MultiPolygonOptions::default();
            let options = MultiPolygonOptions {
                polygon: PolygonOptions::from_config(bounds),
                min_polys: min_polys.unwrap_or(defaults.min_polys),
                max_polys: max_polys.unwrap_or(defaults.max_polys),
            };
            gen_rectangular_multipolygon(rng, &options).map(Into::into)
        }
    }
}
