//! Fixture schema definitions.
//!
//! A fixture schema lists models and their geometry fields. It is loaded from
//! YAML and drives the fixture maker: every field is populated either through
//! the field registry (default arguments) or through an explicit generator
//! configuration.
//!
//! ```yaml
//! version: 1
//! seed: 42
//! models:
//!   - name: NonDefaultSridModel
//!     fields:
//!       - name: geometry
//!         type: PointField
//!         srid: 4674
//!   - name: Parcel
//!     fields:
//!       - name: boundary
//!         type: MultiPolygonField
//!         generator:
//!           type: multi_polygon
//!           min_x: 10
//!           max_x: 20
//! ```

use crate::types::{FieldKind, GeometryType};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for schema operations.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Model not found in schema
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Field not found in model
    #[error("Field '{field}' not found in model '{model}'")]
    FieldNotFound { model: String, field: String },

    /// Two models share a name
    #[error("Duplicate model: {0}")]
    DuplicateModel(String),

    /// Generator shape disagrees with the field kind
    #[error("Field '{model}.{field}' is a {kind} but its generator produces {generator:?}")]
    GeneratorMismatch {
        model: String,
        field: String,
        kind: FieldKind,
        generator: GeometryType,
    },

    /// Unsupported coordinate dimension
    #[error("Field '{model}.{field}' has unsupported dim {dim} (expected 2 or 3)")]
    InvalidDim { model: String, field: String, dim: u8 },

    /// Generator configuration key that no generator understands
    #[error("Field '{model}.{field}' has unknown generator option '{key}'")]
    UnknownGeneratorOption {
        model: String,
        field: String,
        key: String,
    },
}

// ============================================================================
// Generator Configuration
// ============================================================================

/// Optional overrides shared by every geometry generator.
///
/// Anything left unset falls back to the generator's default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundsConfig {
    pub min_x: Option<f64>,
    pub min_y: Option<f64>,
    pub max_x: Option<f64>,
    pub max_y: Option<f64>,
    pub min_z: Option<f64>,
    pub max_z: Option<f64>,
    pub granularity: Option<u32>,
    pub srid: Option<i32>,

    /// Keys not recognised by the generator; rejected by schema validation.
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_yaml::Value>,
}

/// Generator configuration for a geometry field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeometryGeneratorConfig {
    /// Random point within bounds
    Point {
        #[serde(flatten)]
        bounds: BoundsConfig,
    },

    /// Random number of random points
    MultiPoint {
        #[serde(flatten)]
        bounds: BoundsConfig,
        min_points: Option<usize>,
        max_points: Option<usize>,
    },

    /// Line string through random points
    LineString {
        #[serde(flatten)]
        bounds: BoundsConfig,
        number_of_points: Option<usize>,
    },

    /// Random number of random line strings
    MultiLineString {
        #[serde(flatten)]
        bounds: BoundsConfig,
        number_of_points: Option<usize>,
        min_linestrings: Option<usize>,
        max_linestrings: Option<usize>,
    },

    /// Axis-aligned rectangle spanning the bounds
    Polygon {
        #[serde(flatten)]
        bounds: BoundsConfig,
    },

    /// Random number of rectangles
    MultiPolygon {
        #[serde(flatten)]
        bounds: BoundsConfig,
        min_polys: Option<usize>,
        max_polys: Option<usize>,
    },
}

impl GeometryGeneratorConfig {
    /// Shape this configuration generates.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Point { .. } => GeometryType::Point,
            Self::MultiPoint { .. } => GeometryType::MultiPoint,
            Self::LineString { .. } => GeometryType::LineString,
            Self::MultiLineString { .. } => GeometryType::MultiLineString,
            Self::Polygon { .. } => GeometryType::Polygon,
            Self::MultiPolygon { .. } => GeometryType::MultiPolygon,
        }
    }

    pub fn bounds(&self) -> &BoundsConfig {
        match self {
            Self::Point { bounds }
            | Self::MultiPoint { bounds, .. }
            | Self::LineString { bounds, .. }
            | Self::MultiLineString { bounds, .. }
            | Self::Polygon { bounds }
            | Self::MultiPolygon { bounds, .. } => bounds,
        }
    }
}

// ============================================================================
// Models
// ============================================================================

/// A geometry field of a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Field name
    pub name: String,

    /// Field kind; also the registry key
    #[serde(rename = "type")]
    pub field_type: FieldKind,

    /// SRID declared on the field (generator default when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srid: Option<i32>,

    /// Coordinate dimension, 2 or 3
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dim: Option<u8>,

    /// Explicit generator configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<GeometryGeneratorConfig>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, field_type: FieldKind) -> Self {
        Self {
            name: name.into(),
            field_type,
            srid: None,
            dim: None,
            generator: None,
        }
    }

    pub fn with_srid(mut self, srid: i32) -> Self {
        self.srid = Some(srid);
        self
    }

    pub fn with_dim(mut self, dim: u8) -> Self {
        self.dim = Some(dim);
        self
    }

    pub fn with_generator(mut self, generator: GeometryGeneratorConfig) -> Self {
        self.generator = Some(generator);
        self
    }

    /// Whether this field can be populated straight from the registry.
    pub fn uses_defaults(&self) -> bool {
        self.srid.is_none() && self.dim.unwrap_or(2) == 2 && self.generator.is_none()
    }
}

/// A model with geometry fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub name: String,
    pub fields: Vec<FieldDefinition>,
}

impl ModelDefinition {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDefinition>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}

/// Full fixture schema, usually loaded from YAML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixtureSchema {
    /// Schema format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Default seed for reproducible generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Model definitions
    pub models: Vec<ModelDefinition>,

    /// Cached model lookup (not serialized)
    #[serde(skip)]
    model_map: HashMap<String, usize>,
}

fn default_version() -> u32 {
    1
}

impl FixtureSchema {
    /// Build a schema from model definitions, validating it.
    pub fn new(models: Vec<ModelDefinition>) -> Result<Self, SchemaError> {
        let mut schema = Self {
            version: default_version(),
            seed: None,
            models,
            model_map: HashMap::new(),
        };
        schema.validate()?;
        schema.build_model_map();
        Ok(schema)
    }

    /// Load schema from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse schema from YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, SchemaError> {
        let mut schema: FixtureSchema = serde_yaml::from_str(yaml)?;
        schema.validate()?;
        schema.build_model_map();
        Ok(schema)
    }

    fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = std::collections::HashSet::new();
        for model in &self.models {
            if !seen.insert(model.name.as_str()) {
                return Err(SchemaError::DuplicateModel(model.name.clone()));
            }
            for field in &model.fields {
                if let Some(dim) = field.dim {
                    if dim != 2 && dim != 3 {
                        return Err(SchemaError::InvalidDim {
                            model: model.name.clone(),
                            field: field.name.clone(),
                            dim,
                        });
                    }
                }
                if let Some(generator) = &field.generator {
                    if let Some(key) = generator.bounds().unknown.keys().next() {
                        return Err(SchemaError::UnknownGeneratorOption {
                            model: model.name.clone(),
                            field: field.name.clone(),
                            key: key.clone(),
                        });
                    }
                    if generator.geometry_type() != field.field_type.geometry_type() {
                        return Err(SchemaError::GeneratorMismatch {
                            model: model.name.clone(),
                            field: field.name.clone(),
                            kind: field.field_type,
                            generator: generator.geometry_type(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn build_model_map(&mut self) {
        self.model_map = self
            .models
            .iter()
            .enumerate()
            .map(|(idx, model)| (model.name.clone(), idx))
            .collect();
    }

    /// Get a model by name.
    pub fn get_model(&self, name: &str) -> Option<&ModelDefinition> {
        self.model_map
            .get(name)
            .and_then(|&idx| self.models.get(idx))
    }

    /// Get a field of a model.
    pub fn get_field(&self, model: &str, field: &str) -> Result<&FieldDefinition, SchemaError> {
        let model_def = self
            .get_model(model)
            .ok_or_else(|| SchemaError::ModelNotFound(model.to_string()))?;

        model_def
            .get_field(field)
            .ok_or_else(|| SchemaError::FieldNotFound {
                model: model.to_string(),
                field: field.to_string(),
            })
    }

    /// Get all model names in the schema.
    pub fn model_names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.name.as_str()).collect()
    }
}
