//! Dimension-aware geometry values bridged to a native geometry engine.
//!
//! Geometries are generic over one of four coordinate kinds ([`coord::Xy`], [`coord::Xyz`],
//! [`coord::Xym`] and [`coord::Xyzm`]). They convert to and from an external engine through
//! [`io::native`], where every native geometry is owned by exactly one
//! [`NativeGeometryHandle`](io::native::NativeGeometryHandle). Operations over two inputs
//! promote the result to the join of both dimensions ([`algorithm::Promote`]). GeoJSON
//! encoding and decoding live in [`io::geojson`].

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use error::{GeoBridgeError, Result};

pub mod algorithm;
pub mod coord;
pub mod datatypes;
pub mod error;
pub mod io;
pub mod scalar;
#[cfg(test)]
pub(crate) mod test;
