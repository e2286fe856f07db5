//! Rectangular polygon and multi-polygon generators.
//!
//! Polygons are axis-aligned rectangles whose corners are the configured
//! bounds. The ring runs `(min_x, min_y) (min_x, max_y) (max_x, max_y)
//! (max_x, min_y)` and closes on its first corner.

use super::draw_count;
use crate::error::{Axis, GeneratorError};
use rand::Rng;
use spatial_core::{BoundsConfig, Coord, MultiPolygon, Polygon, DEFAULT_SRID};

/// Options for [`gen_rectangular_polygon`].
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonOptions {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub srid: i32,
}

impl Default for PolygonOptions {
    fn default() -> Self {
        Self {
            min_x: -1.0,
            min_y: -1.0,
            max_x: 1.0,
            max_y: 1.0,
            srid: DEFAULT_SRID,
        }
    }
}

impl PolygonOptions {
    pub fn with_bounds(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            ..Self::default()
        }
    }

    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = srid;
        self
    }

    /// Defaults overridden by the configuration; z and granularity do not apply.
    pub fn from_config(config: &BoundsConfig) -> Self {
        let d = Self::default();
        Self {
            min_x: config.min_x.unwrap_or(d.min_x),
            min_y: config.min_y.unwrap_or(d.min_y),
            max_x: config.max_x.unwrap_or(d.max_x),
            max_y: config.max_y.unwrap_or(d.max_y),
            srid: config.srid.unwrap_or(d.srid),
        }
    }

    fn ring(&self) -> Result<Vec<Coord>, GeneratorError> {
        check_span(Axis::X, self.min_x, self.max_x)?;
        check_span(Axis::Y, self.min_y, self.max_y)?;

        let anchor = Coord::xy(self.min_x, self.min_y);
        Ok(vec![
            anchor,
            Coord::xy(self.min_x, self.max_y),
            Coord::xy(self.max_x, self.max_y),
            Coord::xy(self.max_x, self.min_y),
            anchor,
        ])
    }
}

// A zero-width rectangle would collapse the ring.
fn check_span(axis: Axis, min: f64, max: f64) -> Result<(), GeneratorError> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(GeneratorError::InvalidBounds { axis, min, max })
    }
}

/// Options for [`gen_rectangular_multipolygon`].
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygonOptions {
    pub polygon: PolygonOptions,
    pub min_polys: usize,
    pub max_polys: usize,
}

impl Default for MultiPolygonOptions {
    fn default() -> Self {
        Self {
            polygon: PolygonOptions::default(),
            min_polys: 1,
            max_polys: 2,
        }
    }
}

/// Generate a rectangular polygon spanning the configured bounds.
///
/// Draws nothing from `rng`; the parameter keeps the signature uniform with
/// the other generators so it can sit in the field registry.
pub fn gen_rectangular_polygon<R: Rng + ?Sized>(
    _rng: &mut R,
    options: &PolygonOptions,
) -> Result<Polygon, GeneratorError> {
    Ok(Polygon {
        exterior: options.ring()?,
        srid: options.srid,
    })
}

/// Generate between `min_polys` and `max_polys` rectangular polygons.
///
/// Every member is the same rectangle, so with more than one member the
/// polygons overlap completely and the result is not a valid OGC
/// MultiPolygon. Use it as fixture data only, not as input to validity or
/// overlay checks.
pub fn gen_rectangular_multipolygon<R: Rng + ?Sized>(
    rng: &mut R,
    options: &MultiPolygonOptions,
) -> Result<MultiPolygon, GeneratorError> {
    let count = draw_count(rng, "polygon", options.min_polys, options.max_polys)?;
    let ring = options.polygon.ring()?;

    Ok(MultiPolygon {
        polygons: vec![ring; count],
        srid: options.polygon.srid,
    })
}
