//! Fixture maker: populates the geometry fields of schema models.

use crate::error::GeneratorError;
use crate::generators::generate_for_field;
use crate::registry::{spatial_fields, FieldRegistry};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use spatial_core::{FixtureSchema, SpatialValue};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// A populated fixture record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FixtureRow {
    /// Model name
    pub model: String,
    /// Position of this row in the generated sequence
    pub index: u64,
    /// Generated value per field, serialized as GeoJSON
    pub fields: BTreeMap<String, SpatialValue>,
}

impl FixtureRow {
    pub fn get_field(&self, name: &str) -> Option<&SpatialValue> {
        self.fields.get(name)
    }
}

/// Produces fixture rows for the models of a schema.
///
/// The maker owns a seeded random number generator so the same schema and
/// seed always yield the same rows. Fields that only name a kind are filled
/// through the field registry with default arguments; fields with an
/// `srid`, `dim: 3` or explicit generator go through their configuration.
pub struct FixtureMaker {
    schema: FixtureSchema,
    registry: Cow<'static, FieldRegistry>,
    seed: u64,
    rng: StdRng,
    index: u64,
}

impl FixtureMaker {
    /// Create a new maker with the given schema and seed.
    pub fn new(schema: FixtureSchema, seed: u64) -> Self {
        Self {
            schema,
            registry: Cow::Borrowed(spatial_fields()),
            seed,
            rng: StdRng::seed_from_u64(seed),
            index: 0,
        }
    }

    /// Use a custom registry instead of the default spatial one.
    pub fn with_registry(mut self, registry: FieldRegistry) -> Self {
        self.registry = Cow::Owned(registry);
        self
    }

    /// Set the starting index for row generation.
    ///
    /// Re-seeds the RNG from the base seed and the index so a run can be
    /// resumed at any point deterministically.
    pub fn with_start_index(mut self, index: u64) -> Self {
        self.index = index;
        let seed = self
            .seed
            .wrapping_add(index.wrapping_mul(0x9E3779B97F4A7C15));
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn current_index(&self) -> u64 {
        self.index
    }

    pub fn schema(&self) -> &FixtureSchema {
        &self.schema
    }

    /// Make the next row for the given model.
    pub fn make(&mut self, model: &str) -> Result<FixtureRow, GeneratorError> {
        let model_def = self
            .schema
            .get_model(model)
            .ok_or_else(|| GeneratorError::ModelNotFound(model.to_string()))?;

        let mut fields = BTreeMap::new();
        for field in &model_def.fields {
            let value = if field.uses_defaults() {
                self.registry
                    .generate(field.field_type.identifier(), &mut self.rng)?
            } else {
                generate_for_field(field, &mut self.rng)?
            };
            fields.insert(field.name.clone(), value);
        }

        let index = self.index;
        self.index += 1;
        tracing::debug!(model, index, fields = fields.len(), "made fixture row");

        Ok(FixtureRow {
            model: model_def.name.clone(),
            index,
            fields,
        })
    }

    /// Make `count` rows for the given model, lazily.
    pub fn make_many(
        &mut self,
        model: &str,
        count: u64,
    ) -> Result<FixtureRowIterator<'_>, GeneratorError> {
        if self.schema.get_model(model).is_none() {
            return Err(GeneratorError::ModelNotFound(model.to_string()));
        }

        Ok(FixtureRowIterator {
            maker: self,
            model: model.to_string(),
            remaining: count,
        })
    }
}

/// Iterator that lazily makes fixture rows.
pub struct FixtureRowIterator<'a> {
    maker: &'a mut FixtureMaker,
    model: String,
    remaining: u64,
}

impl Iterator for FixtureRowIterator<'_> {
    type Item = Result<FixtureRow, GeneratorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.maker.make(&self.model))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FixtureRowIterator<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use spatial_core::GeometryType;

    fn test_schema() -> FixtureSchema {
        let yaml = r#"
version: 1
seed: 42

models:
  - name: PointModel
    fields:
      - name: geometry
        type: PointField

  - name: NonDefaultSridModel
    fields:
      - name: geometry
        type: PointField
        srid: 4674

  - name: NonDefaultDimModel
    fields:
      - name: geometry
        type: PointField
        dim: 3

  - name: Site
    fields:
      - name: location
        type: point
      - name: footprint
        type: MultiPolygonField
        generator:
          type: multi_polygon
          min_x: 10
          min_y: 10
          max_x: 20
          max_y: 20
          min_polys: 2
          max_polys: 2
      - name: access
        type: LineStringField
        generator:
          type: line_string
          number_of_points: 4
"#;
        FixtureSchema::from_yaml(yaml).unwrap()
    }

    #[test]
    fn test_point_is_not_empty() {
        let mut maker = FixtureMaker::new(test_schema(), 42);
        let row = maker.make("PointModel").unwrap();

        assert_eq!(row.model, "PointModel");
        assert_eq!(row.index, 0);
        let geometry = row.get_field("geometry").unwrap();
        assert!(!geometry.is_empty());
        assert_eq!(geometry.geometry_type(), GeometryType::Point);
        assert_eq!(geometry.srid(), 4326);
    }

    #[test]
    fn test_field_srid_honoured() {
        let mut maker = FixtureMaker::new(test_schema(), 42);
        let row = maker.make("NonDefaultSridModel").unwrap();
        assert_eq!(row.get_field("geometry").unwrap().srid(), 4674);
    }

    #[test]
    fn test_field_dim_honoured() {
        let mut maker = FixtureMaker::new(test_schema(), 42);
        let row = maker.make("NonDefaultDimModel").unwrap();
        assert!(row.get_field("geometry").unwrap().has_z());
    }

    #[test]
    fn test_generator_config_honoured() {
        let mut maker = FixtureMaker::new(test_schema(), 42);
        let row = maker.make("Site").unwrap();

        assert_eq!(row.fields.len(), 3);
        match row.get_field("footprint").unwrap() {
            SpatialValue::MultiPolygon(mp) => {
                assert_eq!(mp.polygons.len(), 2);
                assert!(mp.all_closed());
                assert!(mp.polygons[0]
                    .iter()
                    .all(|c| (10.0..=20.0).contains(&c.x) && (10.0..=20.0).contains(&c.y)));
            }
            other => panic!("Expected MultiPolygon, got {other:?}"),
        }
        assert_eq!(row.get_field("access").unwrap().coords().len(), 4);
    }

    #[test]
    fn test_deterministic_generation() {
        let mut maker1 = FixtureMaker::new(test_schema(), 42);
        let mut maker2 = FixtureMaker::new(test_schema(), 42);

        assert_eq!(maker1.make("Site").unwrap(), maker2.make("Site").unwrap());
    }

    #[test]
    fn test_make_many() {
        let mut maker = FixtureMaker::new(test_schema(), 42);

        let rows: Vec<FixtureRow> = maker
            .make_many("PointModel", 10)
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(rows.len(), 10);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.index, i as u64);
        }
        assert_ne!(rows[0].get_field("geometry"), rows[1].get_field("geometry"));
        assert_eq!(maker.current_index(), 10);
    }

    #[test]
    fn test_model_not_found() {
        let mut maker = FixtureMaker::new(test_schema(), 42);

        assert!(matches!(
            maker.make("Nope"),
            Err(GeneratorError::ModelNotFound(_))
        ));
        assert!(maker.make_many("Nope", 1).is_err());
    }

    #[test]
    fn test_with_start_index() {
        let mut maker = FixtureMaker::new(test_schema(), 42).with_start_index(5);
        let row = maker.make("PointModel").unwrap();
        assert_eq!(row.index, 5);

        let mut again = FixtureMaker::new(test_schema(), 42).with_start_index(5);
        assert_eq!(again.make("PointModel").unwrap(), row);
    }

    #[test]
    fn test_custom_registry() {
        let mut registry = FieldRegistry::new();
        registry.register(
            "PointField",
            crate::registry::default_generator(spatial_core::FieldKind::PolygonField),
        );

        let mut maker = FixtureMaker::new(test_schema(), 42).with_registry(registry);
        let row = maker.make("PointModel").unwrap();
        assert_eq!(
            row.get_field("geometry").unwrap().geometry_type(),
            GeometryType::Polygon
        );
    }

    #[test]
    fn test_row_serializes_fields_as_geojson() {
        let mut maker = FixtureMaker::new(test_schema(), 42);
        let row = maker.make("PointModel").unwrap();

        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["model"], "PointModel");
        assert_eq!(json["fields"]["geometry"]["type"], "Point");
    }
}
