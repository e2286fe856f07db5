//! Field registry: field-type identifier to generator function.
//!
//! A fixture-population mechanism looks a field's type up here and calls the
//! generator with default arguments. The process-wide table returned by
//! [`spatial_fields`] is built once on first use and never mutated; callers
//! that need custom entries build their own [`FieldRegistry`].

use crate::error::GeneratorError;
use crate::generators::{
    gen_linestring, gen_multilinestring, gen_multipoint, gen_point, gen_rectangular_multipolygon,
    gen_rectangular_polygon, LineStringOptions, MultiLineStringOptions, MultiPointOptions,
    MultiPolygonOptions, PointOptions, PolygonOptions,
};
use rand::RngCore;
use spatial_core::{FieldKind, SpatialValue};
use std::collections::HashMap;
use std::sync::LazyLock;

/// A registered generator, called with default arguments.
pub type GeneratorFn = fn(&mut dyn RngCore) -> Result<SpatialValue, GeneratorError>;

static SPATIAL_FIELDS: LazyLock<FieldRegistry> = LazyLock::new(FieldRegistry::spatial);

/// The default registry with one generator per geometry field kind.
pub fn spatial_fields() -> &'static FieldRegistry {
    &SPATIAL_FIELDS
}

/// Mapping from field-type identifier to generator function.
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    entries: HashMap<String, GeneratorFn>,
}

impl FieldRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the default generator for every field kind.
    pub fn spatial() -> Self {
        let mut registry = Self::new();
        for kind in FieldKind::ALL {
            registry.register(kind.identifier(), default_generator(kind));
        }
        registry
    }

    /// Register a generator, returning the one it replaced.
    pub fn register(
        &mut self,
        identifier: impl Into<String>,
        generator: GeneratorFn,
    ) -> Option<GeneratorFn> {
        self.entries.insert(identifier.into(), generator)
    }

    pub fn get(&self, identifier: &str) -> Option<GeneratorFn> {
        self.entries.get(identifier).copied()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    /// Look up `identifier` and generate a value with default arguments.
    pub fn generate(
        &self,
        identifier: &str,
        rng: &mut dyn RngCore,
    ) -> Result<SpatialValue, GeneratorError> {
        let generator = self
            .get(identifier)
            .ok_or_else(|| GeneratorError::UnknownFieldType(identifier.to_string()))?;
        generator(rng)
    }

    /// Registered identifiers, sorted.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The default-argument generator for a field kind.
pub fn default_generator(kind: FieldKind) -> GeneratorFn {
    match kind {
        FieldKind::PointField => default_point,
        FieldKind::MultiPointField => default_multipoint,
        FieldKind::LineStringField => default_linestring,
        FieldKind::MultiLineStringField => default_multilinestring,
        FieldKind::PolygonField => default_polygon,
        FieldKind::MultiPolygonField => default_multipolygon,
    }
}

fn default_point(rng: &mut dyn RngCore) -> Result<SpatialValue, GeneratorError> {
    gen_point(rng, &PointOptions::default()).map(Into::into)
}

fn default_multipoint(rng: &mut dyn RngCore) -> Result<SpatialValue, GeneratorError> {
    gen_multipoint(rng, &MultiPointOptions::default()).map(Into::into)
}

fn default_linestring(rng: &mut dyn RngCore) -> Result<SpatialValue, GeneratorError> {
    gen_linestring(rng, &LineStringOptions::default()).map(Into::into)
}

fn default_multilinestring(rng: &mut dyn RngCore) -> Result<SpatialValue, GeneratorError> {
    gen_multilinestring(rng, &MultiLineStringOptions::default()).map(Into::into)
}

fn default_polygon(rng: &mut dyn RngCore) -> Result<SpatialValue, GeneratorError> {
    gen_rectangular_polygon(rng, &PolygonOptions::default()).map(Into::into)
}

fn default_multipolygon(rng: &mut dyn RngCore) -> Result<SpatialValue, GeneratorError> {
    gen_rectangular_multipolygon(rng, &MultiPolygonOptions::default()).map(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use spatial_core::{Coord, Point};

    #[test]
    fn test_one_entry_per_field_kind() {
        let registry = spatial_fields();

        assert_eq!(registry.len(), 6);
        for kind in FieldKind::ALL {
            assert!(registry.contains(kind.identifier()), "missing {kind}");
        }
    }

    #[test]
    fn test_generators_match_field_kind() {
        let mut rng = StdRng::seed_from_u64(42);

        for kind in FieldKind::ALL {
            let value = spatial_fields()
                .generate(kind.identifier(), &mut rng)
                .unwrap();
            assert_eq!(value.geometry_type(), kind.geometry_type());
            assert_eq!(value.srid(), 4326);
            assert!(!value.is_empty());
        }
    }

    #[test]
    fn test_unknown_field_type() {
        let mut rng = StdRng::seed_from_u64(42);
        let result = spatial_fields().generate("RasterField", &mut rng);
        assert!(matches!(result, Err(GeneratorError::UnknownFieldType(_))));
        assert!(spatial_fields().get("RasterField").is_none());
    }

    #[test]
    fn test_register_last_write_wins() {
        fn origin(_rng: &mut dyn RngCore) -> Result<SpatialValue, GeneratorError> {
            Ok(Point::new(Coord::xy(0.0, 0.0), 4326).into())
        }

        let mut registry = FieldRegistry::spatial();
        let previous = registry.register(FieldKind::PointField.identifier(), origin);
        assert!(previous.is_some());
        assert_eq!(registry.len(), 6);

        let mut rng = StdRng::seed_from_u64(42);
        let value = registry.generate("PointField", &mut rng).unwrap();
        assert_eq!(value.coords(), vec![Coord::xy(0.0, 0.0)]);
    }

    #[test]
    fn test_identifiers_sorted() {
        assert_eq!(
            spatial_fields().identifiers(),
            vec![
                "LineStringField",
                "MultiLineStringField",
                "MultiPointField",
                "MultiPolygonField",
                "PointField",
                "PolygonField",
            ]
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = FieldRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.identifiers().is_empty());
    }
}
