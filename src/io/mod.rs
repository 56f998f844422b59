//! Conversions between this crate's geometries and other representations: the native engine,
//! GeoJSON text, and the `geo` crate.

pub mod geo;
pub mod geojson;
pub mod native;
