use std::fmt::Display;

use phf::phf_map;

use crate::scalar::GeometryType;

/// A GeoJSON `"type"` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoJsonType {
    Geometry(GeometryType),
    Feature,
    FeatureCollection,
}

static GEOJSON_TYPES: phf::Map<&'static str, GeoJsonType> = phf_map! {
    "Point" => GeoJsonType::Geometry(GeometryType::Point),
    "LineString" => GeoJsonType::Geometry(GeometryType::LineString),
    "Polygon" => GeoJsonType::Geometry(GeometryType::Polygon),
    "MultiPoint" => GeoJsonType::Geometry(GeometryType::MultiPoint),
    "MultiLineString" => GeoJsonType::Geometry(GeometryType::MultiLineString),
    "MultiPolygon" => GeoJsonType::Geometry(GeometryType::MultiPolygon),
    "GeometryCollection" => GeoJsonType::Geometry(GeometryType::GeometryCollection),
    "Feature" => GeoJsonType::Feature,
    "FeatureCollection" => GeoJsonType::FeatureCollection,
};

impl GeoJsonType {
    /// Look up a tag. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<Self> {
        GEOJSON_TYPES.get(tag).copied()
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            GeoJsonType::Geometry(geometry_type) => geometry_type.as_str(),
            GeoJsonType::Feature => "Feature",
            GeoJsonType::FeatureCollection => "FeatureCollection",
        }
    }
}

impl From<GeometryType> for GeoJsonType {
    fn from(value: GeometryType) -> Self {
        GeoJsonType::Geometry(value)
    }
}

impl Display for GeoJsonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
