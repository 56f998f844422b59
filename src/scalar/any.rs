use crate::coord::{Coordinate, Xy, Xym, Xyz, Xyzm};
use crate::datatypes::Dimension;
use crate::error::{GeoBridgeError, Result};
use crate::scalar::{Geometry, GeometryType};

/// A geometry whose coordinate kind is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyGeometry {
    Xy(Geometry<Xy>),
    Xyz(Geometry<Xyz>),
    Xym(Geometry<Xym>),
    Xyzm(Geometry<Xyzm>),
}

impl AnyGeometry {
    pub fn dimension(&self) -> Dimension {
        match self {
            AnyGeometry::Xy(_) => Dimension::XY,
            AnyGeometry::Xyz(_) => Dimension::XYZ,
            AnyGeometry::Xym(_) => Dimension::XYM,
            AnyGeometry::Xyzm(_) => Dimension::XYZM,
        }
    }

    pub fn geometry_type(&self) -> GeometryType {
        match self {
            AnyGeometry::Xy(g) => g.geometry_type(),
            AnyGeometry::Xyz(g) => g.geometry_type(),
            AnyGeometry::Xym(g) => g.geometry_type(),
            AnyGeometry::Xyzm(g) => g.geometry_type(),
        }
    }

    /// Take the geometry out if it has coordinate kind `C`.
    ///
    /// # Errors
    ///
    /// [`GeoBridgeError::DimensionMismatch`] if it has another kind. Use
    /// [`AnyGeometry::convert`] to change kinds.
    pub fn into_kind<C: Coordinate>(self) -> Result<Geometry<C>> {
        C::from_any(self)
    }

    /// Convert to coordinate kind `C` regardless of the current kind.
    pub fn convert<C: Coordinate>(&self, fill: f64) -> Geometry<C> {
        match self {
            AnyGeometry::Xy(g) => g.convert(fill),
            AnyGeometry::Xyz(g) => g.convert(fill),
            AnyGeometry::Xym(g) => g.convert(fill),
            AnyGeometry::Xyzm(g) => g.convert(fill),
        }
    }
}

macro_rules! impl_any_kind {
    ($kind:ident) => {
        impl From<Geometry<$kind>> for AnyGeometry {
            fn from(value: Geometry<$kind>) -> Self {
                AnyGeometry::$kind(value)
            }
        }
    };
}

impl_any_kind!(Xy);
impl_any_kind!(Xyz);
impl_any_kind!(Xym);
impl_any_kind!(Xyzm);

pub(crate) fn mismatch(expected: Dimension, any: &AnyGeometry) -> GeoBridgeError {
    GeoBridgeError::DimensionMismatch {
        expected,
        found: any.dimension(),
    }
}
