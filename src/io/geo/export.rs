use crate::coord::Coordinate;
use crate::scalar::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

/// Convert any coordinate to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn coord_to_geo<C: Coordinate>(coord: &C) -> geo::Coord {
    geo::Coord {
        x: coord.x(),
        y: coord.y(),
    }
}

/// Convert a Point to a [`geo::Point`].
///
/// Only the first two dimensions will be kept.
pub fn point_to_geo<C: Coordinate>(point: &Point<C>) -> geo::Point {
    geo::Point(coord_to_geo(&point.coord()))
}

fn coords_to_geo<C: Coordinate>(coords: &[C]) -> geo::LineString {
    geo::LineString::new(coords.iter().map(coord_to_geo).collect())
}

/// Convert a LineString to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo<C: Coordinate>(line_string: &LineString<C>) -> geo::LineString {
    coords_to_geo(line_string.coords())
}

fn ring_to_geo<C: Coordinate>(ring: &LinearRing<C>) -> geo::LineString {
    coords_to_geo(ring.coords())
}

/// Convert a Polygon to a [`geo::Polygon`].
///
/// Only the first two dimensions will be kept.
pub fn polygon_to_geo<C: Coordinate>(polygon: &Polygon<C>) -> geo::Polygon {
    let exterior = ring_to_geo(polygon.exterior());
    let interiors = polygon.interiors().iter().map(ring_to_geo).collect();
    geo::Polygon::new(exterior, interiors)
}

/// Convert a MultiPoint to a [`geo::MultiPoint`].
///
/// Only the first two dimensions will be kept.
pub fn multi_point_to_geo<C: Coordinate>(multi_point: &MultiPoint<C>) -> geo::MultiPoint {
    geo::MultiPoint::new(multi_point.points().iter().map(point_to_geo).collect())
}

/// Convert a MultiLineString to a [`geo::MultiLineString`].
///
/// Only the first two dimensions will be kept.
pub fn multi_line_string_to_geo<C: Coordinate>(
    multi_line_string: &MultiLineString<C>,
) -> geo::MultiLineString {
    geo::MultiLineString::new(
        multi_line_string
            .line_strings()
            .iter()
            .map(line_string_to_geo)
            .collect(),
    )
}

/// Convert a MultiPolygon to a [`geo::MultiPolygon`].
///
/// Only the first two dimensions will be kept.
pub fn multi_polygon_to_geo<C: Coordinate>(
    multi_polygon: &MultiPolygon<C>,
) -> geo::MultiPolygon {
    geo::MultiPolygon::new(
        multi_polygon
            .polygons()
            .iter()
            .map(polygon_to_geo)
            .collect(),
    )
}

/// Convert a GeometryCollection to a [`geo::GeometryCollection`].
///
/// Only the first two dimensions will be kept.
pub fn geometry_collection_to_geo<C: Coordinate>(
    geometry_collection: &GeometryCollection<C>,
) -> geo::GeometryCollection {
    geo::GeometryCollection::new_from(
        geometry_collection
            .geometries()
            .iter()
            .map(geometry_to_geo)
            .collect(),
    )
}

/// Convert any Geometry to a [`geo::Geometry`].
///
/// Only the first two dimensions will be kept.
pub fn geometry_to_geo<C: Coordinate>(geometry: &Geometry<C>) -> geo::Geometry {
    match geometry {
        Geometry::Point(geom) => geo::Geometry::Point(point_to_geo(geom)),
        Geometry::LineString(geom) => geo::Geometry::LineString(line_string_to_geo(geom)),
        Geometry::Polygon(geom) => geo::Geometry::Polygon(polygon_to_geo(geom)),
        Geometry::MultiPoint(geom) => geo::Geometry::MultiPoint(multi_point_to_geo(geom)),
        Geometry::MultiLineString(geom) => {
            geo::Geometry::MultiLineString(multi_line_string_to_geo(geom))
        }
        Geometry::MultiPolygon(geom) => geo::Geometry::MultiPolygon(multi_polygon_to_geo(geom)),
        Geometry::GeometryCollection(geom) => {
            geo::Geometry::GeometryCollection(geometry_collection_to_geo(geom))
        }
    }
}

impl<C: Coordinate> From<&Geometry<C>> for geo::Geometry {
    fn from(value: &Geometry<C>) -> Self {
        geometry_to_geo(value)
    }
}

#[cfg(test)]
mod test {
    use geo::Area;

    use super::*;
    use crate::coord::{Xy, Xyz};
    use crate::test::polygon;

    #[test]
    fn drops_z() {
        let p = Point::new(Xyz::new(1., 2., 3.));
        assert_eq!(point_to_geo(&p), geo::point!(x: 1., y: 2.));
    }

    #[test]
    fn polygon_area() {
        let p: Geometry<Xy> = polygon::p1().into();
        let geo_polygon = geo::Geometry::from(&p);
        approx::assert_relative_eq!(geo_polygon.unsigned_area(), 96.);
    }
}
