//! Convert to and from [`geo`] scalars.
//!
//! `geo` geometries are planar: converting to them keeps x and y only, and converting from
//! them yields [`Xy`][crate::coord::Xy] geometries.

mod export;
mod import;

pub use export::{
    coord_to_geo, geometry_collection_to_geo, geometry_to_geo, line_string_to_geo,
    multi_line_string_to_geo, multi_point_to_geo, multi_polygon_to_geo, point_to_geo,
    polygon_to_geo,
};
