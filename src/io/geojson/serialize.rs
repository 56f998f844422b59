//! `serde` support for geometries and features, through their GeoJSON representation.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::coord::Coordinate;
use crate::io::geojson::{Feature, FeatureCollection, GeoJson};
use crate::scalar::{
    AnyGeometry, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

macro_rules! impl_serde {
    ($type:ident) => {
        impl<C: Coordinate> Serialize for $type<C> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.to_geojson().serialize(serializer)
            }
        }

        impl<'de, C: Coordinate> Deserialize<'de> for $type<C> {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = Value::deserialize(deserializer)?;
                Self::from_geojson(&value).map_err(D::Error::custom)
            }
        }
    };
}

impl_serde!(Point);
impl_serde!(LineString);
impl_serde!(Polygon);
impl_serde!(MultiPoint);
impl_serde!(MultiLineString);
impl_serde!(MultiPolygon);
impl_serde!(GeometryCollection);
impl_serde!(Geometry);
impl_serde!(Feature);
impl_serde!(FeatureCollection);

impl Serialize for AnyGeometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_geojson().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AnyGeometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_geojson(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::{Xy, Xyz};

    #[derive(Serialize, Deserialize)]
    struct Record {
        name: String,
        geometry: Geometry<Xyz>,
    }

    #[test]
    fn nested_in_struct() {
        let text = r#"{"name":"a","geometry":{"type":"Point","coordinates":[1,2,3]}}"#;
        let record: Record = serde_json::from_str(text).unwrap();
        assert_eq!(record.geometry, Point::new(Xyz::new(1., 2., 3.)).into());
        let back: Record = serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
        assert_eq!(back.geometry, record.geometry);
    }

    #[test]
    fn error_surfaces_through_serde() {
        let err = serde_json::from_str::<Point<Xy>>(r#"{"type":"p","coordinates":[1]}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Invalid GeoJSON type"));
    }
}
