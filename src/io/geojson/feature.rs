//! Features and feature collections.
//!
//! The envelope (`id`, `properties`, `bbox` and foreign members) is read and written by the
//! [`geojson`] crate. Geometries go through this crate's codec so that every coordinate kind
//! keeps its own decoding rules.

use geojson::{Bbox, JsonObject};
use serde_json::Value;

use crate::coord::Coordinate;
use crate::error::{GeoBridgeError, Result};
use crate::io::geojson::reader::{expect_type, read_geometry};
use crate::io::geojson::writer::write_geometry;
use crate::io::geojson::GeoJsonType;
use crate::scalar::Geometry;

/// The `"id"` of a feature: a string or a number.
pub use geojson::feature::Id as FeatureId;

fn envelope_error(err: geojson::Error) -> GeoBridgeError {
    match err {
        geojson::Error::FeatureInvalidIdentifierType(_) => GeoBridgeError::InvalidFeatureId,
        other => GeoBridgeError::InvalidGeoJsonType(other.to_string()),
    }
}

/// A geometry with an optional id and properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature<C> {
    pub id: Option<FeatureId>,
    pub geometry: Option<Geometry<C>>,
    pub properties: Option<JsonObject>,
    pub bbox: Option<Bbox>,
    /// Members other than the ones GeoJSON defines, kept as they were read.
    pub foreign_members: Option<JsonObject>,
}

impl<C: Coordinate> Feature<C> {
    pub fn new(geometry: Geometry<C>) -> Self {
        Self {
            id: None,
            geometry: Some(geometry),
            properties: None,
            bbox: None,
            foreign_members: None,
        }
    }

    pub fn with_id(mut self, id: FeatureId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_properties(mut self, properties: JsonObject) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Look up a single property.
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref()?.get(key)
    }

    fn envelope(&self) -> geojson::Feature {
        geojson::Feature {
            bbox: self.bbox.clone(),
            geometry: None,
            id: self.id.clone(),
            properties: self.properties.clone(),
            foreign_members: self.foreign_members.clone(),
        }
    }

    pub(crate) fn read(value: &Value) -> Result<Self> {
        let mut object = expect_type(value, GeoJsonType::Feature)?.clone();
        let geometry = match object.insert("geometry".to_string(), Value::Null) {
            None | Some(Value::Null) => None,
            Some(geometry) => Some(read_geometry(&geometry)?),
        };
        let envelope = geojson::Feature::try_from(object).map_err(envelope_error)?;
        Ok(Self {
            id: envelope.id,
            geometry,
            properties: envelope.properties,
            bbox: envelope.bbox,
            foreign_members: envelope.foreign_members,
        })
    }

    pub(crate) fn write(&self) -> Value {
        let mut object = JsonObject::from(&self.envelope());
        let geometry = self.geometry.as_ref().map_or(Value::Null, write_geometry);
        object.insert("geometry".to_string(), geometry);
        Value::Object(object)
    }
}

/// An ordered list of features.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureCollection<C> {
    pub features: Vec<Feature<C>>,
    pub bbox: Option<Bbox>,
    pub foreign_members: Option<JsonObject>,
}

impl<C> Default for FeatureCollection<C> {
    fn default() -> Self {
        Self {
            features: Vec::new(),
            bbox: None,
            foreign_members: None,
        }
    }
}

impl<C: Coordinate> FeatureCollection<C> {
    pub fn new(features: Vec<Feature<C>>) -> Self {
        Self {
            features,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub(crate) fn read(value: &Value) -> Result<Self> {
        let mut object = expect_type(value, GeoJsonType::FeatureCollection)?.clone();
        let features = match object.insert("features".to_string(), Value::Array(Vec::new())) {
            Some(Value::Array(features)) => features,
            _ => {
                return Err(GeoBridgeError::InvalidGeoJsonType(
                    "FeatureCollection requires a \"features\" array".to_string(),
                ))
            }
        };
        let envelope = geojson::FeatureCollection::try_from(object).map_err(envelope_error)?;
        let features = features
            .iter()
            .map(Feature::read)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            features,
            bbox: envelope.bbox,
            foreign_members: envelope.foreign_members,
        })
    }

    pub(crate) fn write(&self) -> Value {
        let envelope = geojson::FeatureCollection {
            bbox: self.bbox.clone(),
            features: Vec::new(),
            foreign_members: self.foreign_members.clone(),
        };
        let mut object = JsonObject::from(&envelope);
        let features = self.features.iter().map(Feature::write).collect();
        object.insert("features".to_string(), Value::Array(features));
        Value::Object(object)
    }
}

impl<C: Coordinate> FromIterator<Feature<C>> for FeatureCollection<C> {
    fn from_iter<T: IntoIterator<Item = Feature<C>>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;
    use crate::coord::Xy;
    use crate::test::point;

    #[test]
    fn id_shapes() {
        for id in [json!("a"), json!(1), json!(1.5)] {
            let value = json!({"type": "Feature", "id": id, "geometry": null, "properties": {}});
            assert!(Feature::<Xy>::read(&value).is_ok());
        }
        for id in [json!(null), json!([1]), json!({"a": 1}), json!(true)] {
            let value = json!({"type": "Feature", "id": id, "geometry": null, "properties": {}});
            assert!(matches!(
                Feature::<Xy>::read(&value),
                Err(GeoBridgeError::InvalidFeatureId)
            ));
        }
    }

    #[test]
    fn round_trip() {
        let mut properties = JsonObject::new();
        properties.insert("name".to_string(), json!("a"));
        let feature = Feature::new(point::p0().into())
            .with_id(FeatureId::Number(7u64.into()))
            .with_properties(properties);
        let back = Feature::<Xy>::read(&feature.write()).unwrap();
        assert_eq!(back, feature);
        assert_eq!(back.property("name"), Some(&json!("a")));
    }

    #[test]
    fn null_geometry() {
        let value = json!({"type": "Feature", "geometry": null, "properties": null});
        let feature = Feature::<Xy>::read(&value).unwrap();
        assert!(feature.geometry.is_none());
        assert!(feature.properties.is_none());
    }

    #[test]
    fn collection_rejects_wrong_tag() {
        let value = json!({"type": "Feature", "geometry": null, "properties": null});
        assert!(matches!(
            FeatureCollection::<Xy>::read(&value),
            Err(GeoBridgeError::MismatchedGeoJsonType { .. })
        ));
    }

    #[test]
    fn properties_must_be_an_object() {
        let value = json!({"type": "Feature", "geometry": null, "properties": [1]});
        assert!(matches!(
            Feature::<Xy>::read(&value),
            Err(GeoBridgeError::InvalidGeoJsonType(_))
        ));
    }

    #[test]
    fn missing_geometry_is_none() {
        let value = json!({"type": "Feature", "id": "a"});
        let feature = Feature::<Xy>::read(&value).unwrap();
        assert!(feature.geometry.is_none());
        assert_eq!(feature.id, Some(FeatureId::String("a".to_string())));
    }

    #[test]
    fn bbox_and_foreign_members_survive() {
        let value = json!({
            "type": "Feature",
            "bbox": [0.0, 1.0, 0.0, 1.0],
            "geometry": {"type": "Point", "coordinates": [0.0, 1.0]},
            "properties": null,
            "source": "survey"
        });
        let feature = Feature::<Xy>::read(&value).unwrap();
        assert_eq!(feature.bbox, Some(vec![0., 1., 0., 1.]));
        let foreign = feature.foreign_members.as_ref().unwrap();
        assert_eq!(foreign.get("source"), Some(&json!("survey")));
        assert_eq!(feature.write(), value);
    }

    #[test]
    fn collection_round_trip() {
        let mut collection: FeatureCollection<Xy> = [point::p0(), point::p1()]
            .into_iter()
            .map(|p| Feature::new(p.into()))
            .collect();
        collection.bbox = Some(vec![0., 1., 1., 2.]);
        let back = FeatureCollection::<Xy>::read(&collection.write()).unwrap();
        assert_eq!(back, collection);
    }

    #[test]
    fn collection_requires_features() {
        let value = json!({"type": "FeatureCollection"});
        assert!(matches!(
            FeatureCollection::<Xy>::read(&value),
            Err(GeoBridgeError::InvalidGeoJsonType(_))
        ));
    }
}
