//! Geometry values.
//!
//! Every type here is a plain owned value generic over its [`Coordinate`](crate::coord::Coordinate)
//! kind. Constructors that can violate a structural invariant are fallible and validate up
//! front, so an existing value is always well formed.

pub use any::AnyGeometry;
pub use geometry::{Geometry, GeometryType};
pub use geometrycollection::GeometryCollection;
pub use linearring::LinearRing;
pub use linestring::LineString;
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::Polygon;

pub(crate) mod any;
mod geometry;
mod geometrycollection;
mod linearring;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;
