//! Decoding of GeoJSON values.
//!
//! The `"type"` tag is always checked before any coordinates are looked at, and decoding stops
//! at the first failure.

use std::io::Read;

use serde_json::{Map, Value};

use crate::coord::{Coordinate, Xy, Xyz, Xyzm};
use crate::error::{GeoBridgeError, Result};
use crate::io::geojson::{FeatureCollection, GeoJson, GeoJsonType};
use crate::scalar::{
    AnyGeometry, Geometry, GeometryCollection, GeometryType, LineString, LinearRing,
    MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

/// Read a GeoJSON FeatureCollection from `reader`.
pub fn read_geojson<C: Coordinate, R: Read>(reader: R) -> Result<FeatureCollection<C>> {
    let value: Value = serde_json::from_reader(reader)?;
    FeatureCollection::from_geojson(&value)
}

pub(crate) fn read_type(value: &Value) -> Result<GeoJsonType> {
    let object = value.as_object().ok_or_else(|| {
        GeoBridgeError::InvalidGeoJsonType("GeoJSON value is not an object".to_string())
    })?;
    let tag = match object.get("type") {
        Some(Value::String(tag)) => tag,
        Some(other) => return Err(GeoBridgeError::InvalidGeoJsonType(other.to_string())),
        None => {
            return Err(GeoBridgeError::InvalidGeoJsonType(
                "missing \"type\" member".to_string(),
            ))
        }
    };
    GeoJsonType::from_tag(tag).ok_or_else(|| GeoBridgeError::InvalidGeoJsonType(tag.clone()))
}

/// Check the tag of `value` against `expected` and return its members.
pub(crate) fn expect_type<'a>(
    value: &'a Value,
    expected: GeoJsonType,
) -> Result<&'a Map<String, Value>> {
    let found = read_type(value)?;
    if found != expected {
        return Err(GeoBridgeError::MismatchedGeoJsonType {
            expected: expected.to_string(),
            found: found.to_string(),
        });
    }
    // read_type has already checked that this is an object
    value.as_object().ok_or_else(|| {
        GeoBridgeError::InvalidGeoJsonType("GeoJSON value is not an object".to_string())
    })
}

fn coordinates<'a>(object: &'a Map<String, Value>) -> Result<&'a Value> {
    object.get("coordinates").ok_or_else(|| {
        GeoBridgeError::InvalidCoordinates("missing \"coordinates\" member".to_string())
    })
}

fn array<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| GeoBridgeError::InvalidCoordinates(format!("{what} must be an array")))
}

/// A `null` ordinate reads as NaN, which is how non-finite values are written.
fn read_position<C: Coordinate>(value: &Value) -> Result<C> {
    let values = array(value, "position")?
        .iter()
        .map(|number| match number {
            Value::Number(n) => n.as_f64().ok_or_else(|| {
                GeoBridgeError::InvalidCoordinates(format!("{n} is not representable as f64"))
            }),
            Value::Null => Ok(f64::NAN),
            other => Err(GeoBridgeError::InvalidCoordinates(format!(
                "position entries must be numbers, got {other}"
            ))),
        })
        .collect::<Result<Vec<_>>>()?;
    C::from_values(&values)
}

fn read_positions<C: Coordinate>(value: &Value) -> Result<Vec<C>> {
    array(value, "position list")?
        .iter()
        .map(read_position)
        .collect()
}

fn read_line_string_coords<C: Coordinate>(value: &Value) -> Result<LineString<C>> {
    LineString::try_new(read_positions(value)?)
}

fn read_polygon_coords<C: Coordinate>(value: &Value) -> Result<Polygon<C>> {
    let rings = array(value, "ring list")?
        .iter()
        .map(|ring| LinearRing::try_new(read_positions(ring)?))
        .collect::<Result<Vec<_>>>()?;
    Polygon::try_from_rings(rings)
}

fn read_variant<C: Coordinate>(
    geometry_type: GeometryType,
    object: &Map<String, Value>,
) -> Result<Geometry<C>> {
    let geometry: Geometry<C> = match geometry_type {
        GeometryType::Point => Point::<C>::new(read_position(coordinates(object)?)?).into(),
        GeometryType::LineString => read_line_string_coords::<C>(coordinates(object)?)?.into(),
        GeometryType::Polygon => read_polygon_coords::<C>(coordinates(object)?)?.into(),
        GeometryType::MultiPoint => {
            let points = read_positions::<C>(coordinates(object)?)?;
            MultiPoint::new(points.into_iter().map(Point::new).collect()).into()
        }
        GeometryType::MultiLineString => {
            let line_strings = array(coordinates(object)?, "line string list")?
                .iter()
                .map(read_line_string_coords)
                .collect::<Result<Vec<_>>>()?;
            MultiLineString::new(line_strings).into()
        }
        GeometryType::MultiPolygon => {
            let polygons = array(coordinates(object)?, "polygon list")?
                .iter()
                .map(read_polygon_coords)
                .collect::<Result<Vec<_>>>()?;
            MultiPolygon::new(polygons).into()
        }
        GeometryType::GeometryCollection => {
            let members = object.get("geometries").ok_or_else(|| {
                GeoBridgeError::InvalidCoordinates("missing \"geometries\" member".to_string())
            })?;
            let geometries = array(members, "geometries")?
                .iter()
                .map(read_geometry)
                .collect::<Result<Vec<_>>>()?;
            GeometryCollection::new(geometries).into()
        }
    };
    Ok(geometry)
}

/// Decode a geometry of any variant.
pub(crate) fn read_geometry<C: Coordinate>(value: &Value) -> Result<Geometry<C>> {
    match read_type(value)? {
        GeoJsonType::Geometry(geometry_type) => {
            let object = expect_type(value, geometry_type.into())?;
            read_variant(geometry_type, object)
        }
        other => Err(GeoBridgeError::MismatchedGeoJsonType {
            expected: "Geometry".to_string(),
            found: other.to_string(),
        }),
    }
}

/// Decode a geometry that must have the given variant.
pub(crate) fn read_geometry_of<C: Coordinate>(
    value: &Value,
    geometry_type: GeometryType,
) -> Result<Geometry<C>> {
    let object = expect_type(value, geometry_type.into())?;
    read_variant(geometry_type, object)
}

fn first_position(value: &Value) -> Option<&Vec<Value>> {
    let object = value.as_object()?;
    if let Some(coordinates) = object.get("coordinates") {
        let mut current = coordinates.as_array()?;
        while let Some(first) = current.first() {
            match first {
                Value::Array(inner) => current = inner,
                _ => return Some(current),
            }
        }
        return None;
    }
    object
        .get("geometries")?
        .as_array()?
        .iter()
        .find_map(first_position)
}

/// Decode a geometry whose kind is taken from the length of its first position: 2 numbers
/// read as XY, 3 as XYZ and 4 as XYZM. A geometry without positions reads as XY.
pub(crate) fn read_any_geometry(value: &Value) -> Result<AnyGeometry> {
    // validate the tag before looking at any coordinates
    read_type(value)?;
    let geometry = match first_position(value).map(Vec::len) {
        None | Some(2) => AnyGeometry::Xy(read_geometry::<Xy>(value)?),
        Some(3) => AnyGeometry::Xyz(read_geometry::<Xyz>(value)?),
        Some(4) => AnyGeometry::Xyzm(read_geometry::<Xyzm>(value)?),
        Some(n) => {
            return Err(GeoBridgeError::InvalidCoordinates(format!(
                "position has {n} numbers"
            )))
        }
    };
    Ok(geometry)
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::coord::Xym;

    #[test]
    fn planar_point() {
        let value = json!({"coordinates": [1, 2], "type": "Point"});
        let geometry = read_geometry::<Xy>(&value).unwrap();
        assert_eq!(geometry, Point::new(Xy::new(1., 2.)).into());
    }

    #[test]
    fn measure_point_reads_fourth_number() {
        let value = json!({"coordinates": [1, 2, 3, 4], "type": "Point"});
        let geometry = read_geometry::<Xym>(&value).unwrap();
        assert_eq!(geometry, Point::new(Xym::new(1., 2., 4.)).into());
    }

    #[test]
    fn short_position() {
        let value = json!({"coordinates": [1], "type": "Point"});
        assert!(matches!(
            read_geometry::<Xy>(&value),
            Err(GeoBridgeError::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn unknown_tag_before_coordinates() {
        let value = json!({"type": "p", "coordinates": [1]});
        assert!(matches!(
            read_geometry::<Xy>(&value),
            Err(GeoBridgeError::InvalidGeoJsonType(tag)) if tag == "p"
        ));
    }

    #[test]
    fn missing_or_non_string_tag() {
        for value in [json!({"coordinates": [1, 2]}), json!({"type": 1})] {
            assert!(matches!(
                read_geometry::<Xy>(&value),
                Err(GeoBridgeError::InvalidGeoJsonType(_))
            ));
        }
    }

    #[test]
    fn mismatched_tag() {
        let value = json!({"type": "Point", "coordinates": [1, 2]});
        let err = read_geometry_of::<Xy>(&value, GeometryType::LineString).unwrap_err();
        assert!(matches!(
            err,
            GeoBridgeError::MismatchedGeoJsonType { expected, found }
                if expected == "LineString" && found == "Point"
        ));

        let feature = json!({"type": "Feature", "geometry": null, "properties": null});
        assert!(matches!(
            read_geometry::<Xy>(&feature),
            Err(GeoBridgeError::MismatchedGeoJsonType { .. })
        ));
    }

    #[test]
    fn kind_length_rules() {
        let three = json!({"type": "Point", "coordinates": [1, 2, 3]});
        assert!(read_geometry::<Xyz>(&three).is_ok());
        assert!(read_geometry::<Xy>(&three).is_ok());
        assert!(read_geometry::<Xym>(&three).is_err());
        assert!(read_geometry::<Xyzm>(&three).is_err());

        let two = json!({"type": "Point", "coordinates": [1, 2]});
        assert!(read_geometry::<Xyz>(&two).is_err());
    }

    #[test]
    fn open_ring_is_rejected() {
        let value = json!({
            "type": "Polygon",
            "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1]]]
        });
        assert!(matches!(
            read_geometry::<Xy>(&value),
            Err(GeoBridgeError::RingNotClosed)
        ));
    }

    #[test]
    fn nested_collection() {
        let value = json!({
            "type": "GeometryCollection",
            "geometries": [
                {"type": "Point", "coordinates": [0, 1]},
                {"type": "MultiLineString", "coordinates": [[[0, 0], [1, 1]]]}
            ]
        });
        let geometry = read_geometry::<Xy>(&value).unwrap();
        assert_eq!(geometry.coord_count(), 3);
    }

    #[test]
    fn any_geometry_infers_kind() {
        let value = json!({"type": "LineString", "coordinates": [[0, 1, 2], [1, 2, 3]]});
        let any = read_any_geometry(&value).unwrap();
        assert_eq!(any.dimension(), crate::datatypes::Dimension::XYZ);

        let value = json!({
            "type": "GeometryCollection",
            "geometries": [{"type": "Point", "coordinates": [0, 1, 2, 3]}]
        });
        let any = read_any_geometry(&value).unwrap();
        assert_eq!(any.dimension(), crate::datatypes::Dimension::XYZM);
    }

    #[test]
    fn null_ordinate_reads_as_nan() {
        let value = json!({"type": "Point", "coordinates": [1, 2, null]});
        let Geometry::Point(point) = read_geometry::<Xyz>(&value).unwrap() else {
            panic!("expected point");
        };
        assert!(point.coord().z().is_nan());
    }
}
