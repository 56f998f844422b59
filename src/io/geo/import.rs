use crate::coord::Xy;
use crate::error::{GeoBridgeError, Result};
use crate::scalar::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

fn coords_from_geo(line_string: &geo::LineString) -> Vec<Xy> {
    line_string.coords().copied().map(Xy::from).collect()
}

impl From<geo::Point> for Point<Xy> {
    fn from(value: geo::Point) -> Self {
        Point::new(value.0.into())
    }
}

impl TryFrom<geo::LineString> for LineString<Xy> {
    type Error = GeoBridgeError;

    fn try_from(value: geo::LineString) -> Result<Self> {
        LineString::try_new(coords_from_geo(&value))
    }
}

impl TryFrom<geo::Polygon> for Polygon<Xy> {
    type Error = GeoBridgeError;

    /// Rings of a [`geo::Polygon`] are closed on construction, so only an empty or degenerate
    /// ring can fail here.
    fn try_from(value: geo::Polygon) -> Result<Self> {
        let exterior = LinearRing::try_new(coords_from_geo(value.exterior()))?;
        let interiors = value
            .interiors()
            .iter()
            .map(|ring| LinearRing::try_new(coords_from_geo(ring)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Polygon::new(exterior, interiors))
    }
}

impl From<geo::MultiPoint> for MultiPoint<Xy> {
    fn from(value: geo::MultiPoint) -> Self {
        MultiPoint::new(value.into_iter().map(Point::<Xy>::from).collect())
    }
}

impl TryFrom<geo::MultiLineString> for MultiLineString<Xy> {
    type Error = GeoBridgeError;

    fn try_from(value: geo::MultiLineString) -> Result<Self> {
        let line_strings = value
            .into_iter()
            .map(LineString::<Xy>::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(MultiLineString::new(line_strings))
    }
}

impl TryFrom<geo::MultiPolygon> for MultiPolygon<Xy> {
    type Error = GeoBridgeError;

    fn try_from(value: geo::MultiPolygon) -> Result<Self> {
        let polygons = value
            .into_iter()
            .map(Polygon::<Xy>::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(MultiPolygon::new(polygons))
    }
}

impl TryFrom<geo::GeometryCollection> for GeometryCollection<Xy> {
    type Error = GeoBridgeError;

    fn try_from(value: geo::GeometryCollection) -> Result<Self> {
        value.into_iter().map(Geometry::<Xy>::try_from).collect()
    }
}

/// [`geo::Line`], [`geo::Rect`] and [`geo::Triangle`] become a LineString or Polygon.
impl TryFrom<geo::Geometry> for Geometry<Xy> {
    type Error = GeoBridgeError;

    fn try_from(value: geo::Geometry) -> Result<Self> {
        let geometry: Geometry<Xy> = match value {
            geo::Geometry::Point(g) => Point::<Xy>::from(g).into(),
            geo::Geometry::Line(g) => LineString::<Xy>::try_from(geo::LineString::from(g))?.into(),
            geo::Geometry::LineString(g) => LineString::<Xy>::try_from(g)?.into(),
            geo::Geometry::Polygon(g) => Polygon::<Xy>::try_from(g)?.into(),
            geo::Geometry::MultiPoint(g) => MultiPoint::<Xy>::from(g).into(),
            geo::Geometry::MultiLineString(g) => MultiLineString::<Xy>::try_from(g)?.into(),
            geo::Geometry::MultiPolygon(g) => MultiPolygon::<Xy>::try_from(g)?.into(),
            geo::Geometry::GeometryCollection(g) => GeometryCollection::<Xy>::try_from(g)?.into(),
            geo::Geometry::Rect(g) => Polygon::<Xy>::try_from(g.to_polygon())?.into(),
            geo::Geometry::Triangle(g) => Polygon::<Xy>::try_from(g.to_polygon())?.into(),
        };
        Ok(geometry)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::io::geo::geometry_to_geo;
    use crate::test::geometrycollection;

    #[test]
    fn round_trip_collection() {
        let gc: Geometry<Xy> = geometrycollection::gc0().into();
        let back = Geometry::<Xy>::try_from(geometry_to_geo(&gc)).unwrap();
        assert_eq!(back, gc);
    }

    #[test]
    fn rect_becomes_polygon() {
        let rect = geo::Rect::new(geo::coord! { x: 0., y: 0. }, geo::coord! { x: 1., y: 1. });
        let geometry = Geometry::<Xy>::try_from(geo::Geometry::Rect(rect)).unwrap();
        assert_eq!(geometry.coord_count(), 5);
    }

    #[test]
    fn empty_line_string_fails() {
        let err = LineString::<Xy>::try_from(geo::LineString::new(vec![])).unwrap_err();
        assert!(matches!(err, GeoBridgeError::TooFewPoints { actual: 0, .. }));
    }
}
