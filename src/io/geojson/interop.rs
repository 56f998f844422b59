//! Conversion to and from the [`geojson`] crate's geometry types.

use geojson::{LineStringType, PolygonType, Position};

use crate::coord::Coordinate;
use crate::error::{GeoBridgeError, Result};
use crate::scalar::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

fn to_positions<C: Coordinate>(coords: &[C]) -> LineStringType {
    coords.iter().map(Coordinate::position).collect()
}

fn to_polygon_type<C: Coordinate>(polygon: &Polygon<C>) -> PolygonType {
    polygon.rings().map(|ring| to_positions(ring.coords())).collect()
}

fn geometry_to_value<C: Coordinate>(geometry: &Geometry<C>) -> geojson::Value {
    match geometry {
        Geometry::Point(g) => geojson::Value::Point(g.coord().position()),
        Geometry::LineString(g) => geojson::Value::LineString(to_positions(g.coords())),
        Geometry::Polygon(g) => geojson::Value::Polygon(to_polygon_type(g)),
        Geometry::MultiPoint(g) => geojson::Value::MultiPoint(
            g.points().iter().map(|point| point.coord().position()).collect(),
        ),
        Geometry::MultiLineString(g) => geojson::Value::MultiLineString(
            g.line_strings()
                .iter()
                .map(|line_string| to_positions(line_string.coords()))
                .collect(),
        ),
        Geometry::MultiPolygon(g) => {
            geojson::Value::MultiPolygon(g.polygons().iter().map(to_polygon_type).collect())
        }
        Geometry::GeometryCollection(g) => geojson::Value::GeometryCollection(
            g.geometries().iter().map(geojson::Geometry::from).collect(),
        ),
    }
}

impl<C: Coordinate> From<&Geometry<C>> for geojson::Geometry {
    fn from(value: &Geometry<C>) -> Self {
        geojson::Geometry::new(geometry_to_value(value))
    }
}

fn from_positions<C: Coordinate>(positions: &[Position]) -> Result<Vec<C>> {
    positions
        .iter()
        .map(|position| C::from_values(position))
        .collect()
}

fn from_polygon_type<C: Coordinate>(polygon: &PolygonType) -> Result<Polygon<C>> {
    let rings = polygon
        .iter()
        .map(|ring| LinearRing::try_new(from_positions(ring)?))
        .collect::<Result<Vec<_>>>()?;
    Polygon::try_from_rings(rings)
}

/// Positions are checked against the length rules of `C`.
impl<C: Coordinate> TryFrom<&geojson::Geometry> for Geometry<C> {
    type Error = GeoBridgeError;

    fn try_from(value: &geojson::Geometry) -> Result<Self> {
        let geometry: Geometry<C> = match &value.value {
            geojson::Value::Point(position) => Point::new(C::from_values(position)?).into(),
            geojson::Value::LineString(positions) => {
                LineString::<C>::try_new(from_positions(positions)?)?.into()
            }
            geojson::Value::Polygon(polygon) => from_polygon_type::<C>(polygon)?.into(),
            geojson::Value::MultiPoint(positions) => {
                let points = from_positions::<C>(positions)?;
                MultiPoint::new(points.into_iter().map(Point::new).collect()).into()
            }
            geojson::Value::MultiLineString(lines) => {
                let line_strings = lines
                    .iter()
                    .map(|line| LineString::<C>::try_new(from_positions(line)?))
                    .collect::<Result<Vec<_>>>()?;
                MultiLineString::new(line_strings).into()
            }
            geojson::Value::MultiPolygon(polygons) => {
                let polygons = polygons
                    .iter()
                    .map(from_polygon_type::<C>)
                    .collect::<Result<Vec<_>>>()?;
                MultiPolygon::new(polygons).into()
            }
            geojson::Value::GeometryCollection(geometries) => geometries
                .iter()
                .map(Geometry::<C>::try_from)
                .collect::<Result<GeometryCollection<C>>>()?
                .into(),
        };
        Ok(geometry)
    }
}
