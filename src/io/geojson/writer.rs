//! Encoding to GeoJSON values.
//!
//! Positions list a coordinate's values in `[x, y, z?, m?]` order; an XYM position leaves its
//! Z slot `null`. Non-finite ordinates, such as the NaN of a coordinate the engine never
//! computed, are written as `null`, which reads back as `f64::NAN`. Infinities and NaNs with
//! another bit pattern therefore come back as that canonical NaN.

use std::io::Write;

use serde_json::{json, Value};

use crate::coord::Coordinate;
use crate::error::Result;
use crate::io::geojson::{FeatureCollection, GeoJson};
use crate::scalar::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

/// Write a FeatureCollection to `writer` as GeoJSON.
pub fn write_geojson<C: Coordinate, W: Write>(
    collection: &FeatureCollection<C>,
    writer: W,
) -> Result<()> {
    serde_json::to_writer(writer, &collection.to_geojson())?;
    Ok(())
}

fn position<C: Coordinate>(coord: &C) -> Value {
    coord.position().into_iter().map(Value::from).collect()
}

fn positions<C: Coordinate>(coords: &[C]) -> Value {
    coords.iter().map(position).collect()
}

fn ring_positions<C: Coordinate>(ring: &LinearRing<C>) -> Value {
    positions(ring.coords())
}

fn polygon_positions<C: Coordinate>(polygon: &Polygon<C>) -> Value {
    polygon.rings().map(ring_positions).collect()
}

fn tagged(geometry_type: &str, coordinates: Value) -> Value {
    json!({
        "type": geometry_type,
        "coordinates": coordinates,
    })
}

pub(crate) fn write_point<C: Coordinate>(point: &Point<C>) -> Value {
    tagged("Point", position(&point.coord()))
}

pub(crate) fn write_line_string<C: Coordinate>(line_string: &LineString<C>) -> Value {
    tagged("LineString", positions(line_string.coords()))
}

pub(crate) fn write_polygon<C: Coordinate>(polygon: &Polygon<C>) -> Value {
    tagged("Polygon", polygon_positions(polygon))
}

pub(crate) fn write_multi_point<C: Coordinate>(multi_point: &MultiPoint<C>) -> Value {
    let coordinates = multi_point
        .points()
        .iter()
        .map(|point| position(&point.coord()))
        .collect();
    tagged("MultiPoint", coordinates)
}

pub(crate) fn write_multi_line_string<C: Coordinate>(
    multi_line_string: &MultiLineString<C>,
) -> Value {
    let coordinates = multi_line_string
        .line_strings()
        .iter()
        .map(|line_string| positions(line_string.coords()))
        .collect();
    tagged("MultiLineString", coordinates)
}

pub(crate) fn write_multi_polygon<C: Coordinate>(multi_polygon: &MultiPolygon<C>) -> Value {
    let coordinates = multi_polygon
        .polygons()
        .iter()
        .map(polygon_positions)
        .collect();
    tagged("MultiPolygon", coordinates)
}

pub(crate) fn write_geometry_collection<C: Coordinate>(
    collection: &GeometryCollection<C>,
) -> Value {
    let geometries: Vec<Value> = collection.geometries().iter().map(write_geometry).collect();
    json!({
        "type": "GeometryCollection",
        "geometries": geometries,
    })
}

pub(crate) fn write_geometry<C: Coordinate>(geometry: &Geometry<C>) -> Value {
    match geometry {
        Geometry::Point(g) => write_point(g),
        Geometry::LineString(g) => write_line_string(g),
        Geometry::Polygon(g) => write_polygon(g),
        Geometry::MultiPoint(g) => write_multi_point(g),
        Geometry::MultiLineString(g) => write_multi_line_string(g),
        Geometry::MultiPolygon(g) => write_multi_polygon(g),
        Geometry::GeometryCollection(g) => write_geometry_collection(g),
    }
}
