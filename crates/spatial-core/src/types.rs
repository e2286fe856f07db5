//! Geometry and field kinds for the spatial-fixtures framework.
//!
//! `GeometryType` names the shape of a generated value. `FieldKind` names the
//! kind of model field a value is generated for, and is the key used by the
//! field registry.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Default spatial reference identifier (WGS84 latitude/longitude).
pub const DEFAULT_SRID: i32 = 4326;

/// Geometry type variants for spatial data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeometryType {
    /// Point geometry
    Point,
    /// Multi-point geometry
    MultiPoint,
    /// Line string geometry
    LineString,
    /// Multi-line string geometry
    MultiLineString,
    /// Polygon geometry
    Polygon,
    /// Multi-polygon geometry
    MultiPolygon,
}

impl GeometryType {
    /// The GeoJSON `type` member for this geometry.
    pub fn geojson_name(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::MultiPoint => "MultiPoint",
            Self::LineString => "LineString",
            Self::MultiLineString => "MultiLineString",
            Self::Polygon => "Polygon",
            Self::MultiPolygon => "MultiPolygon",
        }
    }

    /// The WKT tag for this geometry.
    pub fn wkt_name(&self) -> &'static str {
        match self {
            Self::Point => "POINT",
            Self::MultiPoint => "MULTIPOINT",
            Self::LineString => "LINESTRING",
            Self::MultiLineString => "MULTILINESTRING",
            Self::Polygon => "POLYGON",
            Self::MultiPolygon => "MULTIPOLYGON",
        }
    }
}

/// Kind of geometry field a fixture value is generated for.
///
/// # YAML Format
///
/// Either the canonical identifier or its snake_case alias:
/// ```yaml
/// type: PointField
/// type: multi_polygon
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    PointField,
    MultiPointField,
    LineStringField,
    MultiLineStringField,
    PolygonField,
    MultiPolygonField,
}

impl FieldKind {
    /// Every supported field kind, in declaration order.
    pub const ALL: [FieldKind; 6] = [
        FieldKind::PointField,
        FieldKind::MultiPointField,
        FieldKind::LineStringField,
        FieldKind::MultiLineStringField,
        FieldKind::PolygonField,
        FieldKind::MultiPolygonField,
    ];

    /// Canonical identifier used as the registry key.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::PointField => "PointField",
            Self::MultiPointField => "MultiPointField",
            Self::LineStringField => "LineStringField",
            Self::MultiLineStringField => "MultiLineStringField",
            Self::PolygonField => "PolygonField",
            Self::MultiPolygonField => "MultiPolygonField",
        }
    }

    /// Short snake_case alias accepted wherever an identifier is.
    pub fn alias(&self) -> &'static str {
        match self {
            Self::PointField => "point",
            Self::MultiPointField => "multi_point",
            Self::LineStringField => "line_string",
            Self::MultiLineStringField => "multi_line_string",
            Self::PolygonField => "polygon",
            Self::MultiPolygonField => "multi_polygon",
        }
    }

    /// Geometry shape stored in a field of this kind.
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Self::PointField => GeometryType::Point,
            Self::MultiPointField => GeometryType::MultiPoint,
            Self::LineStringField => GeometryType::LineString,
            Self::MultiLineStringField => GeometryType::MultiLineString,
            Self::PolygonField => GeometryType::Polygon,
            Self::MultiPolygonField => GeometryType::MultiPolygon,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Error returned when a string names no known field kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field type: {0}")]
pub struct UnknownFieldKind(pub String);

impl FromStr for FieldKind {
    type Err = UnknownFieldKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::ALL
            .into_iter()
            .find(|kind| kind.identifier() == s || kind.alias() == s)
            .ok_or_else(|| UnknownFieldKind(s.to_string()))
    }
}

impl Serialize for FieldKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.identifier())
    }
}

impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_kind_parse_identifier_and_alias() {
        assert_eq!(
            "PointField".parse::<FieldKind>().unwrap(),
            FieldKind::PointField
        );
        assert_eq!(
            "multi_line_string".parse::<FieldKind>().unwrap(),
            FieldKind::MultiLineStringField
        );
        assert!("GeometryCollectionField".parse::<FieldKind>().is_err());
    }

    #[test]
    fn test_field_kind_identifiers_unique() {
        let mut ids: Vec<&str> = FieldKind::ALL.iter().map(|k| k.identifier()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), FieldKind::ALL.len());
    }

    #[test]
    fn test_field_kind_serde() {
        let yaml = serde_yaml::to_string(&FieldKind::PolygonField).unwrap();
        assert_eq!(yaml.trim(), "PolygonField");

        let parsed: FieldKind = serde_yaml::from_str("multi_polygon").unwrap();
        assert_eq!(parsed, FieldKind::MultiPolygonField);

        let err = serde_yaml::from_str::<FieldKind>("raster").unwrap_err();
        assert!(err.to_string().contains("unknown field type"));
    }

    #[test]
    fn test_geometry_type_names() {
        assert_eq!(
            FieldKind::MultiLineStringField.geometry_type(),
            GeometryType::MultiLineString
        );
        assert_eq!(GeometryType::MultiLineString.geojson_name(), "MultiLineString");
        assert_eq!(GeometryType::MultiPolygon.wkt_name(), "MULTIPOLYGON");
    }
}
