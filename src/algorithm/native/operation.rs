/// A single-input engine operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOperation {
    ConvexHull,
    Envelope,
    Boundary,
    Centroid,
    PointOnSurface,
    UnaryUnion,
    Buffer { width: f64, quadrant_segments: i32 },
    Simplify { tolerance: f64 },
    ClipByRect { xmin: f64, ymin: f64, xmax: f64, ymax: f64 },
    Polygonize,
}

impl UnaryOperation {
    /// Name used as the key of the output policy map and in diagnostics.
    pub const fn name(&self) -> &'static str {
        match self {
            UnaryOperation::ConvexHull => "convex_hull",
            UnaryOperation::Envelope => "envelope",
            UnaryOperation::Boundary => "boundary",
            UnaryOperation::Centroid => "centroid",
            UnaryOperation::PointOnSurface => "point_on_surface",
            UnaryOperation::UnaryUnion => "unary_union",
            UnaryOperation::Buffer { .. } => "buffer",
            UnaryOperation::Simplify { .. } => "simplify",
            UnaryOperation::ClipByRect { .. } => "clip_by_rect",
            UnaryOperation::Polygonize => "polygonize",
        }
    }
}

/// A two-input engine operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOperation {
    Intersection,
    Union,
    Difference,
    SymDifference,
    Snap { tolerance: f64 },
}

impl BinaryOperation {
    pub const fn name(&self) -> &'static str {
        match self {
            BinaryOperation::Intersection => "intersection",
            BinaryOperation::Union => "union",
            BinaryOperation::Difference => "difference",
            BinaryOperation::SymDifference => "sym_difference",
            BinaryOperation::Snap { .. } => "snap",
        }
    }
}
