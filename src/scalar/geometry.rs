use std::fmt::Display;

use crate::coord::Coordinate;
use crate::datatypes::Dimension;
use crate::scalar::{
    GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

/// The seven geometry variants, without their contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryType {
    /// The variant's name as written in GeoJSON `"type"` members.
    pub const fn as_str(&self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A geometry of any variant, generic over its coordinate kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry<C> {
    Point(Point<C>),
    LineString(LineString<C>),
    Polygon(Polygon<C>),
    MultiPoint(MultiPoint<C>),
    MultiLineString(MultiLineString<C>),
    MultiPolygon(MultiPolygon<C>),
    GeometryCollection(GeometryCollection<C>),
}

impl<C: Coordinate> Geometry<C> {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    pub fn dimension(&self) -> Dimension {
        C::DIMENSION
    }

    /// Total number of coordinates, counting ring closures and nested members.
    pub fn coord_count(&self) -> usize {
        match self {
            Geometry::Point(_) => 1,
            Geometry::LineString(g) => g.num_coords(),
            Geometry::Polygon(g) => g.rings().map(|r| r.num_coords()).sum(),
            Geometry::MultiPoint(g) => g.num_points(),
            Geometry::MultiLineString(g) => {
                g.line_strings().iter().map(|ls| ls.num_coords()).sum()
            }
            Geometry::MultiPolygon(g) => g
                .polygons()
                .iter()
                .flat_map(|p| p.rings())
                .map(|r| r.num_coords())
                .sum(),
            Geometry::GeometryCollection(g) => {
                g.geometries().iter().map(|g| g.coord_count()).sum()
            }
        }
    }

    /// Convert to another coordinate kind, filling missing ordinates with `fill`.
    pub fn convert<T: Coordinate>(&self, fill: f64) -> Geometry<T> {
        match self {
            Geometry::Point(g) => Geometry::Point(g.convert(fill)),
            Geometry::LineString(g) => Geometry::LineString(g.convert(fill)),
            Geometry::Polygon(g) => Geometry::Polygon(g.convert(fill)),
            Geometry::MultiPoint(g) => Geometry::MultiPoint(g.convert(fill)),
            Geometry::MultiLineString(g) => Geometry::MultiLineString(g.convert(fill)),
            Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.convert(fill)),
            Geometry::GeometryCollection(g) => Geometry::GeometryCollection(g.convert(fill)),
        }
    }
}

macro_rules! impl_from_variant {
    ($geometry_type:ident) => {
        impl<C: Coordinate> From<$geometry_type<C>> for Geometry<C> {
            fn from(value: $geometry_type<C>) -> Self {
                Geometry::$geometry_type(value)
            }
        }
    };
}

impl_from_variant!(Point);
impl_from_variant!(LineString);
impl_from_variant!(Polygon);
impl_from_variant!(MultiPoint);
impl_from_variant!(MultiLineString);
impl_from_variant!(MultiPolygon);
impl_from_variant!(GeometryCollection);

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::{Xy, Xyzm};
    use crate::test::{geometrycollection, multipolygon, polygon};

    #[test]
    fn coord_count() {
        let p: Geometry<Xy> = polygon::p1().into();
        assert_eq!(p.coord_count(), 10);

        let mp: Geometry<Xy> = multipolygon::mp0().into();
        assert_eq!(mp.coord_count(), 15);

        let gc: Geometry<Xy> = geometrycollection::gc0().into();
        assert_eq!(gc.coord_count(), 1 + 3 + 10 + 1);
    }

    #[test]
    fn convert_round_trip() {
        let g: Geometry<Xy> = geometrycollection::gc0().into();
        let widened: Geometry<Xyzm> = g.convert(0.);
        assert_eq!(widened.dimension(), Dimension::XYZM);
        assert_eq!(widened.geometry_type(), GeometryType::GeometryCollection);
        assert_eq!(widened.convert::<Xy>(0.), g);
    }
}
