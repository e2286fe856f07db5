//! Line string and multi-line-string generators.

use super::{draw_count, PointOptions};
use crate::error::GeneratorError;
use rand::Rng;
use spatial_core::{LineString, MultiLineString};

/// Options for [`gen_linestring`].
#[derive(Debug, Clone, PartialEq)]
pub struct LineStringOptions {
    /// Bounds, z bounds, granularity and SRID for every vertex
    pub point: PointOptions,
    pub number_of_points: usize,
}

impl Default for LineStringOptions {
    fn default() -> Self {
        Self {
            point: PointOptions::default(),
            number_of_points: 2,
        }
    }
}

/// Options for [`gen_multilinestring`].
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineStringOptions {
    pub line: LineStringOptions,
    pub min_linestrings: usize,
    pub max_linestrings: usize,
}

impl Default for MultiLineStringOptions {
    fn default() -> Self {
        Self {
            line: LineStringOptions::default(),
            min_linestrings: 1,
            max_linestrings: 2,
        }
    }
}

/// Generate a line string through `number_of_points` random vertices.
pub fn gen_linestring<R: Rng + ?Sized>(
    rng: &mut R,
    options: &LineStringOptions,
) -> Result<LineString, GeneratorError> {
    if options.number_of_points < 2 {
        return Err(GeneratorError::TooFewPoints(options.number_of_points));
    }

    let coords = (0..options.number_of_points)
        .map(|_| options.point.draw_coord(rng))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LineString {
        coords,
        srid: options.point.srid,
    })
}

/// Generate between `min_linestrings` and `max_linestrings` random line strings.
pub fn gen_multilinestring<R: Rng + ?Sized>(
    rng: &mut R,
    options: &MultiLineStringOptions,
) -> Result<MultiLineString, GeneratorError> {
    let count = draw_count(
        rng,
        "line string",
        options.min_linestrings,
        options.max_linestrings,
    )?;

    let lines = (0..count)
        .map(|_| gen_linestring(rng, &options.line).map(|line| line.coords))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MultiLineString {
        lines,
        srid: options.line.point.srid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_linestring_number_of_points() {
        let mut rng = StdRng::seed_from_u64(42);

        for n in 2..12 {
            let options = LineStringOptions {
                number_of_points: n,
                ..LineStringOptions::default()
            };
            let line = gen_linestring(&mut rng, &options).unwrap();
            assert_eq!(line.num_points(), n);
            assert_eq!(line.srid, 4326);
        }
    }

    #[test]
    fn test_linestring_too_few_points() {
        let mut rng = StdRng::seed_from_u64(42);
        let options = LineStringOptions {
            number_of_points: 1,
            ..LineStringOptions::default()
        };

        assert!(matches!(
            gen_linestring(&mut rng, &options),
            Err(GeneratorError::TooFewPoints(1))
        ));
    }

    #[test]
    fn test_linestring_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let options = LineStringOptions {
            point: PointOptions::with_bounds(-1.0, 2.0, 1.0, 3.0).with_z(-10.0, -5.0),
            number_of_points: 5,
        };

        for _ in 0..100 {
            let line = gen_linestring(&mut rng, &options).unwrap();
            for c in &line.coords {
                assert!((-1.0..=1.0).contains(&c.x));
                assert!((2.0..=3.0).contains(&c.y));
                assert!((-10.0..=-5.0).contains(&c.z.unwrap()));
            }
        }
    }

    #[test]
    fn test_multilinestring_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let options = MultiLineStringOptions {
            min_linestrings: 2,
            max_linestrings: 5,
            ..MultiLineStringOptions::default()
        };

        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            let mls = gen_multilinestring(&mut rng, &options).unwrap();
            assert!((2..=5).contains(&mls.lines.len()));
            assert!(mls.lines.iter().all(|l| l.len() == 2));
            seen.insert(mls.lines.len());
        }
        // Both ends of the inclusive range show up
        assert!(seen.contains(&2));
        assert!(seen.contains(&5));
    }

    #[test]
    fn test_multilinestring_honours_z_and_srid() {
        let mut rng = StdRng::seed_from_u64(42);
        let options = MultiLineStringOptions {
            line: LineStringOptions {
                point: PointOptions::default().with_z(0.0, 1.0).with_srid(4674),
                number_of_points: 3,
            },
            ..MultiLineStringOptions::default()
        };

        let mls = gen_multilinestring(&mut rng, &options).unwrap();
        assert_eq!(mls.srid, 4674);
        for line in &mls.lines {
            assert_eq!(line.len(), 3);
            assert!(line.iter().all(|c| c.z.is_some()));
        }
    }

    #[test]
    fn test_multilinestring_inverted_count() {
        let mut rng = StdRng::seed_from_u64(42);
        let options = MultiLineStringOptions {
            min_linestrings: 3,
            max_linestrings: 1,
            ..MultiLineStringOptions::default()
        };

        assert!(matches!(
            gen_multilinestring(&mut rng, &options),
            Err(GeneratorError::InvalidCount { min: 3, max: 1, .. })
        ));
    }
}
