use phf::phf_map;

use crate::datatypes::Dimension;

/// How the output dimension of an operation relates to the dimensions of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputPolicy {
    /// The promotion of all input dimensions.
    Promoted,

    /// Always XY: the engine computes the result in the plane only.
    Planar,
}

impl OutputPolicy {
    pub fn resolve(self, promoted: Dimension) -> Dimension {
        match self {
            OutputPolicy::Promoted => promoted,
            OutputPolicy::Planar => Dimension::XY,
        }
    }
}

static OUTPUT_POLICIES: phf::Map<&'static str, OutputPolicy> = phf_map! {
    "convex_hull" => OutputPolicy::Planar,
    "envelope" => OutputPolicy::Planar,
    "buffer" => OutputPolicy::Planar,
    "centroid" => OutputPolicy::Planar,
    "polygonize" => OutputPolicy::Planar,
    "boundary" => OutputPolicy::Promoted,
    "unary_union" => OutputPolicy::Promoted,
    "point_on_surface" => OutputPolicy::Promoted,
    "clip_by_rect" => OutputPolicy::Promoted,
    "simplify" => OutputPolicy::Promoted,
    "intersection" => OutputPolicy::Promoted,
    "union" => OutputPolicy::Promoted,
    "difference" => OutputPolicy::Promoted,
    "sym_difference" => OutputPolicy::Promoted,
    "snap" => OutputPolicy::Promoted,
};

/// The output policy of the named operation. Operations not listed are promoted.
pub fn output_policy(operation: &str) -> OutputPolicy {
    OUTPUT_POLICIES
        .get(operation)
        .copied()
        .unwrap_or(OutputPolicy::Promoted)
}

/// Output dimension of `operation` given the promotion of its input dimensions.
pub fn output_dimension(operation: &str, promoted: Dimension) -> Dimension {
    let dimension = output_policy(operation).resolve(promoted);
    if dimension != promoted {
        log::debug!("{operation} narrows {promoted} input to {dimension}");
    }
    dimension
}
