//! Geometry value representations.
//!
//! Values are plain owned data: a coordinate list plus the SRID the caller
//! asked for. They render as GeoJSON (with a named `crs` member), as EWKT via
//! `Display`, and convert into `geo_types` geometries for use with the `geo`
//! algorithm crates. Conversion to `geo_types` drops the z ordinate.

use crate::types::GeometryType;
use serde::{Serialize, Serializer};
use serde_json::{json, Value};
use std::fmt;

/// A single coordinate with an optional z ordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Coord {
    /// Create a 2D coordinate.
    pub fn xy(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    /// Create a 3D coordinate.
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    fn to_json(self) -> Value {
        match self.z {
            Some(z) => json!([self.x, self.y, z]),
            None => json!([self.x, self.y]),
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.z {
            Some(z) => write!(f, "{} {} {}", self.x, self.y, z),
            None => write!(f, "{} {}", self.x, self.y),
        }
    }
}

impl From<Coord> for geo_types::Coord<f64> {
    fn from(c: Coord) -> Self {
        geo_types::coord! { x: c.x, y: c.y }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub coord: Coord,
    pub srid: i32,
}

impl Point {
    pub fn new(coord: Coord, srid: i32) -> Self {
        Self { coord, srid }
    }

    pub fn x(&self) -> f64 {
        self.coord.x
    }

    pub fn y(&self) -> f64 {
        self.coord.y
    }

    pub fn z(&self) -> Option<f64> {
        self.coord.z
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint {
    pub points: Vec<Coord>,
    pub srid: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineString {
    pub coords: Vec<Coord>,
    pub srid: i32,
}

impl LineString {
    pub fn num_points(&self) -> usize {
        self.coords.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString {
    pub lines: Vec<Vec<Coord>>,
    pub srid: i32,
}

/// A polygon with a single exterior ring and no holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub exterior: Vec<Coord>,
    pub srid: i32,
}

impl Polygon {
    /// Whether the exterior ring starts and ends on the same coordinate.
    pub fn is_closed(&self) -> bool {
        ring_is_closed(&self.exterior)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon {
    pub polygons: Vec<Vec<Coord>>,
    pub srid: i32,
}

impl MultiPolygon {
    pub fn all_closed(&self) -> bool {
        self.polygons.iter().all(|ring| ring_is_closed(ring))
    }
}

fn ring_is_closed(ring: &[Coord]) -> bool {
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) => ring.len() >= 4 && first == last,
        _ => false,
    }
}

/// A generated geometry value of any supported shape.
#[derive(Debug, Clone, PartialEq)]
pub enum SpatialValue {
    Point(Point),
    MultiPoint(MultiPoint),
    LineString(LineString),
    MultiLineString(MultiLineString),
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl SpatialValue {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Self::Point(_) => GeometryType::Point,
            Self::MultiPoint(_) => GeometryType::MultiPoint,
            Self::LineString(_) => GeometryType::LineString,
            Self::MultiLineString(_) => GeometryType::MultiLineString,
            Self::Polygon(_) => GeometryType::Polygon,
            Self::MultiPolygon(_) => GeometryType::MultiPolygon,
        }
    }

    pub fn srid(&self) -> i32 {
        match self {
            Self::Point(g) => g.srid,
            Self::MultiPoint(g) => g.srid,
            Self::LineString(g) => g.srid,
            Self::MultiLineString(g) => g.srid,
            Self::Polygon(g) => g.srid,
            Self::MultiPolygon(g) => g.srid,
        }
    }

    /// All coordinates in the value, in storage order.
    pub fn coords(&self) -> Vec<Coord> {
        match self {
            Self::Point(g) => vec![g.coord],
            Self::MultiPoint(g) => g.points.clone(),
            Self::LineString(g) => g.coords.clone(),
            Self::MultiLineString(g) => g.lines.concat(),
            Self::Polygon(g) => g.exterior.clone(),
            Self::MultiPolygon(g) => g.polygons.concat(),
        }
    }

    pub fn has_z(&self) -> bool {
        self.coords().iter().any(|c| c.z.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.coords().is_empty()
    }

    /// Render as a GeoJSON geometry object carrying the SRID as a named CRS.
    pub fn to_geojson(&self) -> Value {
        let coordinates = match self {
            Self::Point(g) => g.coord.to_json(),
            Self::MultiPoint(g) => coords_json(&g.points),
            Self::LineString(g) => coords_json(&g.coords),
            Self::MultiLineString(g) => {
                Value::Array(g.lines.iter().map(|l| coords_json(l)).collect())
            }
            Self::Polygon(g) => json!([coords_json(&g.exterior)]),
            Self::MultiPolygon(g) => Value::Array(
                g.polygons
                    .iter()
                    .map(|ring| json!([coords_json(ring)]))
                    .collect(),
            ),
        };

        json!({
            "type": self.geometry_type().geojson_name(),
            "coordinates": coordinates,
            "crs": {
                "type": "name",
                "properties": { "name": format!("EPSG:{}", self.srid()) }
            }
        })
    }

    /// Convert into a `geo_types` geometry (2D only).
    pub fn to_geo(&self) -> geo_types::Geometry<f64> {
        use geo_types as gt;

        fn line(coords: &[Coord]) -> gt::LineString<f64> {
            coords.iter().copied().map(gt::Coord::from).collect()
        }

        match self {
            Self::Point(g) => gt::Point::from(gt::Coord::from(g.coord)).into(),
            Self::MultiPoint(g) => gt::MultiPoint::new(
                g.points
                    .iter()
                    .map(|c| gt::Point::from(gt::Coord::from(*c)))
                    .collect(),
            )
            .into(),
            Self::LineString(g) => line(&g.coords).into(),
            Self::MultiLineString(g) => {
                gt::MultiLineString::new(g.lines.iter().map(|l| line(l)).collect()).into()
            }
            Self::Polygon(g) => gt::Polygon::new(line(&g.exterior), vec![]).into(),
            Self::MultiPolygon(g) => gt::MultiPolygon::new(
                g.polygons
                    .iter()
                    .map(|ring| gt::Polygon::new(line(ring), vec![]))
                    .collect(),
            )
            .into(),
        }
    }
}

fn coords_json(coords: &[Coord]) -> Value {
    Value::Array(coords.iter().map(|c| c.to_json()).collect())
}

fn write_list(f: &mut fmt::Formatter<'_>, coords: &[Coord]) -> fmt::Result {
    f.write_str("(")?;
    for (i, c) in coords.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{c}")?;
    }
    f.write_str(")")
}

/// EWKT, e.g. `SRID=4326;POINT(1.5 -2)`. A z ordinate is written as a third
/// number (`POINT(1 2 3)`) without the ISO `Z` marker.
impl fmt::Display for SpatialValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SRID={};{}", self.srid(), self.geometry_type().wkt_name())?;
        match self {
            Self::Point(g) => write!(f, "({})", g.coord),
            Self::MultiPoint(g) => write_list(f, &g.points),
            Self::LineString(g) => write_list(f, &g.coords),
            Self::Polygon(g) => {
                f.write_str("(")?;
                write_list(f, &g.exterior)?;
                f.write_str(")")
            }
            Self::MultiLineString(g) => {
                f.write_str("(")?;
                for (i, l) in g.lines.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write_list(f, l)?;
                }
                f.write_str(")")
            }
            Self::MultiPolygon(g) => {
                f.write_str("(")?;
                for (i, ring) in g.polygons.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str("(")?;
                    write_list(f, ring)?;
                    f.write_str(")")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl Serialize for SpatialValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_geojson().serialize(serializer)
    }
}

impl From<Point> for SpatialValue {
    fn from(g: Point) -> Self {
        Self::Point(g)
    }
}

impl From<MultiPoint> for SpatialValue {
    fn from(g: MultiPoint) -> Self {
        Self::MultiPoint(g)
    }
}

impl From<LineString> for SpatialValue {
    fn from(g: LineString) -> Self {
        Self::LineString(g)
    }
}

impl From<MultiLineString> for SpatialValue {
    fn from(g: MultiLineString) -> Self {
        Self::MultiLineString(g)
    }
}

impl From<Polygon> for SpatialValue {
    fn from(g: Polygon) -> Self {
        Self::Polygon(g)
    }
}

impl From<MultiPolygon> for SpatialValue {
    fn from(g: MultiPolygon) -> Self {
        Self::MultiPolygon(g)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square(srid: i32) -> Polygon {
        Polygon {
            exterior: vec![
                Coord::xy(0.0, 0.0),
                Coord::xy(0.0, 1.0),
                Coord::xy(1.0, 1.0),
                Coord::xy(1.0, 0.0),
                Coord::xy(0.0, 0.0),
            ],
            srid,
        }
    }

    #[test]
    fn test_point_ewkt() {
        let p = SpatialValue::from(Point::new(Coord::xy(1.5, -2.0), 4326));
        assert_eq!(p.to_string(), "SRID=4326;POINT(1.5 -2)");

        let p = SpatialValue::from(Point::new(Coord::xyz(1.0, 2.0, 3.0), 4674));
        assert_eq!(p.to_string(), "SRID=4674;POINT(1 2 3)");
    }

    #[test]
    fn test_multipolygon_ewkt() {
        let square = unit_square(4326);
        let mp = SpatialValue::from(MultiPolygon {
            polygons: vec![square.exterior.clone()],
            srid: 4326,
        });
        assert_eq!(
            mp.to_string(),
            "SRID=4326;MULTIPOLYGON(((0 0,0 1,1 1,1 0,0 0)))"
        );
    }

    #[test]
    fn test_polygon_geojson() {
        let value = SpatialValue::from(unit_square(3857)).to_geojson();
        assert_eq!(value["type"], "Polygon");
        assert_eq!(value["coordinates"][0].as_array().unwrap().len(), 5);
        assert_eq!(value["coordinates"][0][2], json!([1.0, 1.0]));
        assert_eq!(value["crs"]["properties"]["name"], "EPSG:3857");
    }

    #[test]
    fn test_point_geojson_with_z() {
        let value = SpatialValue::from(Point::new(Coord::xyz(1.0, 2.0, 0.5), 4326)).to_geojson();
        assert_eq!(value["coordinates"], json!([1.0, 2.0, 0.5]));
    }

    #[test]
    fn test_closure() {
        assert!(unit_square(4326).is_closed());

        let mut open = unit_square(4326);
        open.exterior.pop();
        assert!(!open.is_closed());
    }

    #[test]
    fn test_to_geo_drops_z() {
        let line = SpatialValue::from(LineString {
            coords: vec![Coord::xyz(0.0, 0.0, 9.0), Coord::xyz(2.0, 3.0, 9.0)],
            srid: 4326,
        });
        match line.to_geo() {
            geo_types::Geometry::LineString(ls) => {
                assert_eq!(ls.0.len(), 2);
                assert_eq!(ls.0[1], geo_types::coord! { x: 2.0, y: 3.0 });
            }
            other => panic!("Expected LineString, got {other:?}"),
        }
        assert!(line.has_z());
    }

    #[test]
    fn test_serialize_as_geojson() {
        let p = SpatialValue::from(Point::new(Coord::xy(0.0, 0.0), 4326));
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["type"], "Point");
    }
}
