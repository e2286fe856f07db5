//! Point and multi-point generators.

use super::{draw_count, draw_scaled, DEFAULT_GRANULARITY};
use crate::error::{Axis, GeneratorError};
use rand::Rng;
use spatial_core::{BoundsConfig, Coord, MultiPoint, Point, DEFAULT_SRID};

/// Options for [`gen_point`].
///
/// A z ordinate is drawn only when both `min_z` and `max_z` are set.
#[derive(Debug, Clone, PartialEq)]
pub struct PointOptions {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub min_z: Option<f64>,
    pub max_z: Option<f64>,
    pub granularity: u32,
    pub srid: i32,
}

impl Default for PointOptions {
    fn default() -> Self {
        Self {
            min_x: -180.0,
            min_y: -90.0,
            max_x: 180.0,
            max_y: 90.0,
            min_z: None,
            max_z: None,
            granularity: DEFAULT_GRANULARITY,
            srid: DEFAULT_SRID,
        }
    }
}

impl PointOptions {
    /// Default options with the given x/y bounds.
    pub fn with_bounds(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
            ..Self::default()
        }
    }

    pub fn with_z(mut self, min_z: f64, max_z: f64) -> Self {
        self.min_z = Some(min_z);
        self.max_z = Some(max_z);
        self
    }

    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = srid;
        self
    }

    pub fn with_granularity(mut self, granularity: u32) -> Self {
        self.granularity = granularity;
        self
    }

    /// Defaults overridden by whatever the configuration sets.
    pub fn from_config(config: &BoundsConfig) -> Self {
        let d = Self::default();
        Self {
            min_x: config.min_x.unwrap_or(d.min_x),
            min_y: config.min_y.unwrap_or(d.min_y),
            max_x: config.max_x.unwrap_or(d.max_x),
            max_y: config.max_y.unwrap_or(d.max_y),
            min_z: config.min_z,
            max_z: config.max_z,
            granularity: config.granularity.unwrap_or(d.granularity),
            srid: config.srid.unwrap_or(d.srid),
        }
    }

    fn z_bounds(&self) -> Option<(f64, f64)> {
        match (self.min_z, self.max_z) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        }
    }

    pub(crate) fn draw_coord<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Coord, GeneratorError> {
        let x = draw_scaled(rng, Axis::X, self.min_x, self.max_x, self.granularity)?;
        let y = draw_scaled(rng, Axis::Y, self.min_y, self.max_y, self.granularity)?;
        let z = match self.z_bounds() {
            Some((min, max)) => Some(draw_scaled(rng, Axis::Z, min, max, self.granularity)?),
            None => None,
        };
        Ok(Coord { x, y, z })
    }
}

/// Options for [`gen_multipoint`].
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPointOptions {
    pub point: PointOptions,
    pub min_points: usize,
    pub max_points: usize,
}

impl Default for MultiPointOptions {
    fn default() -> Self {
        Self {
            point: PointOptions::default(),
            min_points: 1,
            max_points: 2,
        }
    }
}

/// Generate a random point with x, y, optional z and the requested SRID.
pub fn gen_point<R: Rng + ?Sized>(
    rng: &mut R,
    options: &PointOptions,
) -> Result<Point, GeneratorError> {
    let coord = options.draw_coord(rng)?;
    tracing::trace!(x = coord.x, y = coord.y, z = ?coord.z, srid = options.srid, "generated point");
    Ok(Point::new(coord, options.srid))
}

/// Generate between `min_points` and `max_points` random points.
pub fn gen_multipoint<R: Rng + ?Sized>(
    rng: &mut R,
    options: &MultiPointOptions,
) -> Result<MultiPoint, GeneratorError> {
    let count = draw_count(rng, "point", options.min_points, options.max_points)?;
    let points = (0..count)
        .map(|_| options.point.draw_coord(rng))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MultiPoint {
        points,
        srid: options.point.srid,
    })
}
