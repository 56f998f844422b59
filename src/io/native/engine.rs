//! The call convention of the external geometry engine.
//!
//! Every call takes the engine handle plus opaque geometry or coordinate-sequence values and
//! returns either a new opaque value or a primitive. Failure is signalled by a sentinel
//! (`None`/`false`) and the message is fetched out of band with [`Engine::last_error`].

use crate::algorithm::native::{BinaryOperation, UnaryOperation};

/// Raw geometry type tag as reported by the engine.
pub type RawTypeId = i32;

/// Type tags in the engine's numbering.
pub mod type_id {
    use super::RawTypeId;

    pub const POINT: RawTypeId = 0;
    pub const LINE_STRING: RawTypeId = 1;
    pub const LINEAR_RING: RawTypeId = 2;
    pub const POLYGON: RawTypeId = 3;
    pub const MULTI_POINT: RawTypeId = 4;
    pub const MULTI_LINE_STRING: RawTypeId = 5;
    pub const MULTI_POLYGON: RawTypeId = 6;
    pub const GEOMETRY_COLLECTION: RawTypeId = 7;
}

/// One ordinate slot of a native coordinate.
///
/// `M` is a separate channel: a 3-wide sequence holds either `Z` or `M`, depending on which
/// ordinate the caller writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordinate {
    X,
    Y,
    Z,
    M,
}

/// Structure of a native geometry as handed back by [`Engine::inspect`].
///
/// Coordinate sequences are copies owned by the caller.
#[derive(Debug)]
pub struct NativeNode<S> {
    /// The engine's type tag for this geometry.
    pub type_id: RawTypeId,
    /// The geometry's contents.
    pub parts: NativeParts<S>,
}

/// Contents of a [`NativeNode`].
#[derive(Debug)]
pub enum NativeParts<S> {
    /// Points, line strings and linear rings.
    Sequence(S),
    /// Polygon rings, exterior first.
    Rings(Vec<S>),
    /// Members of a multi-geometry or collection.
    Members(Vec<NativeNode<S>>),
}

/// Handle to an external geometry engine.
///
/// Implementations are not required to be reentrant: callers serialize all calls on one
/// engine value.
pub trait Engine {
    /// Opaque native geometry.
    type Geometry;

    /// Opaque native coordinate sequence.
    type CoordSeq;

    /// Take the message of the most recent failed call, if any.
    fn last_error(&self) -> Option<String>;

    /// Allocate a sequence of `size` coordinates, each `width` ordinates wide (2, 3 or 4).
    fn coord_seq_create(&self, size: usize, width: usize) -> Option<Self::CoordSeq>;

    /// Number of coordinates in the sequence.
    fn coord_seq_size(&self, seq: &Self::CoordSeq) -> Option<usize>;

    /// Write one ordinate. Returns `false` on failure.
    fn coord_seq_set(
        &self,
        seq: &mut Self::CoordSeq,
        index: usize,
        ordinate: Ordinate,
        value: f64,
    ) -> bool;

    /// Read one ordinate. Ordinates the sequence does not store read as NaN.
    fn coord_seq_get(&self, seq: &Self::CoordSeq, index: usize, ordinate: Ordinate)
        -> Option<f64>;

    /// Create a point, taking ownership of `seq`.
    fn create_point(&self, seq: Self::CoordSeq) -> Option<Self::Geometry>;

    /// Create a line string, taking ownership of `seq`.
    fn create_line_string(&self, seq: Self::CoordSeq) -> Option<Self::Geometry>;

    /// Create a linear ring, taking ownership of `seq`.
    fn create_linear_ring(&self, seq: Self::CoordSeq) -> Option<Self::Geometry>;

    /// Create a polygon, taking ownership of all rings.
    fn create_polygon(
        &self,
        shell: Self::Geometry,
        holes: Vec<Self::Geometry>,
    ) -> Option<Self::Geometry>;

    /// Create a multi-geometry or collection of the given type, taking ownership of `parts`.
    fn create_collection(
        &self,
        type_id: RawTypeId,
        parts: Vec<Self::Geometry>,
    ) -> Option<Self::Geometry>;

    /// Describe a geometry's type and coordinates.
    fn inspect(&self, geometry: &Self::Geometry) -> Option<NativeNode<Self::CoordSeq>>;

    /// Release a geometry.
    fn destroy(&self, geometry: Self::Geometry);

    /// Run a single-input operation.
    fn unary(&self, op: &UnaryOperation, geometry: &Self::Geometry) -> Option<Self::Geometry>;

    /// Run a two-input operation.
    fn binary(
        &self,
        op: &BinaryOperation,
        a: &Self::Geometry,
        b: &Self::Geometry,
    ) -> Option<Self::Geometry>;

    /// Minimum cartesian distance between two geometries.
    fn distance(&self, a: &Self::Geometry, b: &Self::Geometry) -> Option<f64>;
}
