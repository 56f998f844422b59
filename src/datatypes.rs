use std::fmt::Display;

use crate::error::{GeoBridgeError, Result};

/// The coordinate dimension of a geometry.
///
/// The four variants are closed under [`Dimension::promote`]: combining any two of them
/// yields one of them again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Two-dimensional.
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Build a dimension from its z and m flags.
    pub const fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    /// Returns the number of dimensions.
    pub const fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    /// Whether coordinates of this dimension carry an elevation.
    pub const fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    /// Whether coordinates of this dimension carry a measure.
    pub const fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }

    /// The join of two dimensions: z if either has z, m if either has m.
    pub const fn promote(self, other: Dimension) -> Dimension {
        Dimension::from_flags(
            self.has_z() || other.has_z(),
            self.has_m() || other.has_m(),
        )
    }
}

impl From<Dimension> for geo_traits::Dimensions {
    fn from(value: Dimension) -> Self {
        match value {
            Dimension::XY => geo_traits::Dimensions::Xy,
            Dimension::XYZ => geo_traits::Dimensions::Xyz,
            Dimension::XYM => geo_traits::Dimensions::Xym,
            Dimension::XYZM => geo_traits::Dimensions::Xyzm,
        }
    }
}

impl TryFrom<geo_traits::Dimensions> for Dimension {
    type Error = GeoBridgeError;

    fn try_from(value: geo_traits::Dimensions) -> Result<Self> {
        match value {
            geo_traits::Dimensions::Xy | geo_traits::Dimensions::Unknown(2) => Ok(Dimension::XY),
            geo_traits::Dimensions::Xyz | geo_traits::Dimensions::Unknown(3) => Ok(Dimension::XYZ),
            geo_traits::Dimensions::Xym => Ok(Dimension::XYM),
            geo_traits::Dimensions::Xyzm | geo_traits::Dimensions::Unknown(4) => {
                Ok(Dimension::XYZM)
            }
            _ => Err(GeoBridgeError::InvalidCoordinates(format!(
                "Unsupported dimension {value:?}"
            ))),
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

#[cfg(test)]
mod test {
    use std::iter::zip;

    use super::*;

    const ALL: [Dimension; 4] = [
        Dimension::XY,
        Dimension::XYZ,
        Dimension::XYM,
        Dimension::XYZM,
    ];

    #[test]
    fn flags_round_trip() {
        for dim in ALL {
            assert_eq!(Dimension::from_flags(dim.has_z(), dim.has_m()), dim);
        }
    }

    #[test]
    fn promotion_lattice() {
        assert_eq!(Dimension::XY.promote(Dimension::XY), Dimension::XY);
        assert_eq!(Dimension::XY.promote(Dimension::XYZ), Dimension::XYZ);
        assert_eq!(Dimension::XYZ.promote(Dimension::XYM), Dimension::XYZM);
        for dim in ALL {
            assert_eq!(Dimension::XYZM.promote(dim), Dimension::XYZM);
        }
    }

    #[test]
    fn promotion_laws() {
        for a in ALL {
            assert_eq!(a.promote(a), a);
            for b in ALL {
                let r = a.promote(b);
                assert_eq!(r.has_z(), a.has_z() || b.has_z());
                assert_eq!(r.has_m(), a.has_m() || b.has_m());
                assert_eq!(r, b.promote(a));
                for c in ALL {
                    assert_eq!(a.promote(b).promote(c), a.promote(b.promote(c)));
                }
            }
        }
    }

    #[test]
    fn geotraits_dimensions() {
        let geotraits_dims = [
            geo_traits::Dimensions::Xy,
            geo_traits::Dimensions::Xyz,
            geo_traits::Dimensions::Xym,
            geo_traits::Dimensions::Xyzm,
        ];

        for (dim, geotraits_dim) in zip(ALL, geotraits_dims) {
            let into_geotraits_dim: geo_traits::Dimensions = dim.into();
            assert_eq!(into_geotraits_dim, geotraits_dim);

            let back: Dimension = geotraits_dim.try_into().unwrap();
            assert_eq!(back, dim);
            assert_eq!(dim.size(), geotraits_dim.size());
        }

        let dims3: Dimension = geo_traits::Dimensions::Unknown(3).try_into().unwrap();
        assert_eq!(dims3, Dimension::XYZ);

        let dims_err: Result<Dimension> = geo_traits::Dimensions::Unknown(0).try_into();
        assert!(dims_err.is_err());
    }
}
