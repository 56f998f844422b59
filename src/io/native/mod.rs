//! Bridge to an external geometry engine.
//!
//! Geometries are written into the engine with [`to_native`] and read back with
//! [`from_native`]. Every native geometry this crate creates is owned by exactly one
//! [`NativeGeometryHandle`] and released when that handle drops.

mod context;
mod engine;
mod export;
#[cfg(feature = "geos")]
mod geos;
mod handle;
mod import;

pub use context::{ContextOptions, NativeContext};
pub use engine::{type_id, Engine, NativeNode, NativeParts, Ordinate, RawTypeId};
pub use export::to_native;
#[cfg(feature = "geos")]
pub use self::geos::GeosEngine;
pub use handle::NativeGeometryHandle;
pub use import::{from_native, from_native_dyn};
