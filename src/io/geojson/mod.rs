//! Read from and write to [GeoJSON](https://geojson.org/).
//!
//! Every geometry encodes as an object with a `"type"` tag and a `"coordinates"` array nested
//! to the depth of its variant: a Point holds one position, a LineString or MultiPoint a list
//! of positions, a Polygon or MultiLineString a list of lists, and a MultiPolygon one level
//! more. A GeometryCollection holds a `"geometries"` array instead.
//!
//! Decoding checks the tag first. An unknown tag fails with
//! [`InvalidGeoJsonType`][crate::error::GeoBridgeError::InvalidGeoJsonType], a known tag of
//! the wrong variant with
//! [`MismatchedGeoJsonType`][crate::error::GeoBridgeError::MismatchedGeoJsonType]. Only then
//! are positions checked against the length rules of the coordinate kind.

mod feature;
mod interop;
mod reader;
mod serialize;
mod types;
mod writer;

pub use feature::{Feature, FeatureCollection, FeatureId};
pub use reader::read_geojson;
pub use types::GeoJsonType;
pub use writer::write_geojson;

use serde_json::Value;

use crate::coord::Coordinate;
use crate::error::{GeoBridgeError, Result};
use crate::scalar::{
    AnyGeometry, Geometry, GeometryCollection, GeometryType, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};

/// Conversion to and from GeoJSON values.
pub trait GeoJson: Sized {
    /// Encode as a GeoJSON object.
    fn to_geojson(&self) -> Value;

    /// Decode from a GeoJSON object.
    fn from_geojson(value: &Value) -> Result<Self>;

    fn to_geojson_string(&self) -> String {
        self.to_geojson().to_string()
    }

    /// Parse GeoJSON text. Malformed JSON fails with
    /// [`GeoBridgeError::Json`] before any GeoJSON rule applies.
    fn from_geojson_str(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_geojson(&value)
    }
}

macro_rules! impl_geojson_variant {
    ($type:ident, $write:ident) => {
        impl<C: Coordinate> GeoJson for $type<C> {
            fn to_geojson(&self) -> Value {
                writer::$write(self)
            }

            fn from_geojson(value: &Value) -> Result<Self> {
                match reader::read_geometry_of::<C>(value, GeometryType::$type)? {
                    Geometry::$type(geometry) => Ok(geometry),
                    other => Err(GeoBridgeError::MismatchedGeoJsonType {
                        expected: GeometryType::$type.to_string(),
                        found: other.geometry_type().to_string(),
                    }),
                }
            }
        }
    };
}

impl_geojson_variant!(Point, write_point);
impl_geojson_variant!(LineString, write_line_string);
impl_geojson_variant!(Polygon, write_polygon);
impl_geojson_variant!(MultiPoint, write_multi_point);
impl_geojson_variant!(MultiLineString, write_multi_line_string);
impl_geojson_variant!(MultiPolygon, write_multi_polygon);
impl_geojson_variant!(GeometryCollection, write_geometry_collection);

impl<C: Coordinate> GeoJson for Geometry<C> {
    fn to_geojson(&self) -> Value {
        writer::write_geometry(self)
    }

    fn from_geojson(value: &Value) -> Result<Self> {
        reader::read_geometry(value)
    }
}

/// Decoding picks the kind from the length of the first position.
impl GeoJson for AnyGeometry {
    fn to_geojson(&self) -> Value {
        match self {
            AnyGeometry::Xy(g) => g.to_geojson(),
            AnyGeometry::Xyz(g) => g.to_geojson(),
            AnyGeometry::Xym(g) => g.to_geojson(),
            AnyGeometry::Xyzm(g) => g.to_geojson(),
        }
    }

    fn from_geojson(value: &Value) -> Result<Self> {
        reader::read_any_geometry(value)
    }
}

impl<C: Coordinate> GeoJson for Feature<C> {
    fn to_geojson(&self) -> Value {
        self.write()
    }

    fn from_geojson(value: &Value) -> Result<Self> {
        Feature::read(value)
    }
}

impl<C: Coordinate> GeoJson for FeatureCollection<C> {
    fn to_geojson(&self) -> Value {
        self.write()
    }

    fn from_geojson(value: &Value) -> Result<Self> {
        FeatureCollection::read(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::{Xy, Xym, Xyz, Xyzm};
    use crate::test::{
        geometries, geometrycollection, linestring, multilinestring, multipoint, multipolygon,
        point, polygon,
    };

    fn round_trip<G: GeoJson + PartialEq + std::fmt::Debug>(geometry: G) {
        let text = geometry.to_geojson_string();
        assert_eq!(G::from_geojson_str(&text).unwrap(), geometry);
    }

    #[test]
    fn round_trip_variants() {
        round_trip(point::p0());
        round_trip(linestring::ls0());
        round_trip(polygon::p1());
        round_trip(multipoint::mp0());
        round_trip(multilinestring::ml0());
        round_trip(multipolygon::mp0());
        round_trip(geometrycollection::gc0());
    }

    #[test]
    fn round_trip_kinds() {
        for geometry in geometries() {
            round_trip(geometry.convert::<Xyz>(5.));
            round_trip(geometry.convert::<Xym>(5.));
            round_trip(geometry.convert::<Xyzm>(5.));
            round_trip(AnyGeometry::from(geometry.clone()));
            round_trip(AnyGeometry::from(geometry.convert::<Xyz>(5.)));
            round_trip(AnyGeometry::from(geometry.convert::<Xyzm>(5.)));
            round_trip(geometry);
        }
    }

    #[test]
    fn xym_any_geometry_reads_as_xyzm() {
        // a 4-number position is taken to carry both Z and M
        let geometry = Geometry::from(point::p_xym());
        let any = AnyGeometry::from_geojson(&geometry.to_geojson()).unwrap();
        assert_eq!(any.dimension(), crate::datatypes::Dimension::XYZM);
        let Geometry::Point(p) = any.into_kind::<Xyzm>().unwrap() else {
            panic!("expected point");
        };
        assert!(p.coord().z().is_nan());
        assert_eq!(p.coord().m(), 4.);
    }

    #[test]
    fn mismatched_variant() {
        let text = point::p0().to_geojson_string();
        assert!(matches!(
            LineString::<Xy>::from_geojson_str(&text),
            Err(GeoBridgeError::MismatchedGeoJsonType { .. })
        ));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            Point::<Xy>::from_geojson_str("{"),
            Err(GeoBridgeError::Json(_))
        ));
    }

    #[test]
    fn read_feature_collection() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "id": "a",
                    "geometry": {"type": "Point", "coordinates": [1, 2]},
                    "properties": {"n": 1}
                },
                {"type": "Feature", "id": 2, "geometry": null, "properties": null}
            ]
        }"#;
        let collection: FeatureCollection<Xy> = read_geojson(text.as_bytes()).unwrap();
        assert_eq!(collection.len(), 2);
        assert_eq!(collection.features[0].id, Some(FeatureId::String("a".to_string())));
        assert_eq!(collection.features[1].id, Some(FeatureId::Number(2u64.into())));
    }

    #[test]
    fn non_finite_ordinates_read_back_as_canonical_nan() {
        let negative_nan = -f64::NAN;
        for z in [negative_nan, f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            let geometry = Geometry::from(Point::new(Xyz::new(1., 2., z)));
            let back = Geometry::<Xyz>::from_geojson_str(&geometry.to_geojson_string()).unwrap();
            assert_eq!(back, Geometry::from(Point::new(Xyz::new(1., 2., f64::NAN))));
        }
    }
}
