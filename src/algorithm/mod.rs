//! Algorithms on geometries: dimension promotion and operations run by the native engine.

pub mod native;
mod promote;

pub use promote::{Promote, Promoted};
