//! Coordinate kinds.
//!
//! Four kinds exist: [`Xy`], [`Xyz`], [`Xym`] and [`Xyzm`]. Each implements [`Coordinate`],
//! which carries its dimension, its canonical value order, its GeoJSON decoding tolerance and
//! the getter/setter pair that is the only code aware of the native sequence layout.

use std::fmt::Debug;

use crate::datatypes::Dimension;
use crate::error::Result;
use crate::io::native::Engine;
use crate::scalar::{AnyGeometry, Geometry};

mod xy;
mod xym;
mod xyz;
mod xyzm;

pub use xy::Xy;
pub use xym::Xym;
pub use xyz::Xyz;
pub use xyzm::Xyzm;

/// Capability contract shared by the four coordinate kinds.
pub trait Coordinate: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// Dimension of this kind.
    const DIMENSION: Dimension;

    /// Ordinates allocated per coordinate in a native sequence.
    const NATIVE_WIDTH: usize;

    /// Horizontal component.
    fn x(&self) -> f64;

    /// Vertical component.
    fn y(&self) -> f64;

    /// Elevation, for kinds that have one.
    fn z(&self) -> Option<f64>;

    /// Measure, for kinds that have one.
    fn m(&self) -> Option<f64>;

    /// Present components in canonical order `[x, y, z?, m?]`.
    fn values(&self) -> Vec<f64> {
        let mut values = Vec::with_capacity(Self::DIMENSION.size());
        values.push(self.x());
        values.push(self.y());
        values.extend(self.z());
        values.extend(self.m());
        values
    }

    /// Numbers of this coordinate's GeoJSON position.
    ///
    /// Equal to [`Coordinate::values`] except for XYM, whose Z slot is padded with NaN so that
    /// M stays in fourth place where [`Coordinate::from_values`] reads it.
    fn position(&self) -> Vec<f64> {
        self.values()
    }

    /// Build from components. Components this kind lacks are dropped; components it needs
    /// but that are `None` are set to `fill`.
    fn from_parts(x: f64, y: f64, z: Option<f64>, m: Option<f64>, fill: f64) -> Self;

    /// Explicit widening or narrowing conversion into another kind.
    fn convert<T: Coordinate>(&self, fill: f64) -> T {
        T::from_parts(self.x(), self.y(), self.z(), self.m(), fill)
    }

    /// Decode a GeoJSON position, applying this kind's length rules.
    fn from_values(values: &[f64]) -> Result<Self>;

    /// Read the coordinate at `index` of a native sequence.
    fn read_native<E: Engine>(engine: &E, seq: &E::CoordSeq, index: usize) -> Option<Self>;

    /// Write this coordinate at `index` of a native sequence.
    fn write_native<E: Engine>(&self, engine: &E, seq: &mut E::CoordSeq, index: usize) -> bool;

    /// Unwrap a runtime-kind geometry of this kind.
    fn from_any(any: AnyGeometry) -> Result<Geometry<Self>>;

    /// Wrap a geometry of this kind into its runtime-kind form.
    fn into_any(geometry: Geometry<Self>) -> AnyGeometry;
}

/// Bitwise float equality, so NaN sentinels compare equal to themselves.
#[inline]
pub(crate) fn same_bits(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits()
}

/// Implement bitwise `PartialEq`, `Eq` and `Hash` over the listed fields.
macro_rules! impl_bitwise_eq {
    ($kind:ident, $($field:ident),+) => {
        impl PartialEq for $kind {
            fn eq(&self, other: &Self) -> bool {
                $(crate::coord::same_bits(self.$field, other.$field))&&+
            }
        }

        impl Eq for $kind {}

        impl std::hash::Hash for $kind {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $(std::hash::Hash::hash(&self.$field.to_bits(), state);)+
            }
        }
    };
}

pub(crate) use impl_bitwise_eq;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn values_order() {
        assert_eq!(Xy::new(1., 2.).values(), vec![1., 2.]);
        assert_eq!(Xyz::new(1., 2., 3.).values(), vec![1., 2., 3.]);
        assert_eq!(Xym::new(1., 2., 4.).values(), vec![1., 2., 4.]);
        assert_eq!(Xyzm::new(1., 2., 3., 4.).values(), vec![1., 2., 3., 4.]);
    }

    #[test]
    fn widen_fills() {
        let c = Xy::new(1., 2.);
        let widened: Xyzm = c.convert(0.);
        assert_eq!(widened, Xyzm::new(1., 2., 0., 0.));

        let nan: Xyz = c.convert(f64::NAN);
        assert!(nan.z().is_nan());
    }

    #[test]
    fn narrow_drops() {
        let c = Xyzm::new(1., 2., 3., 4.);
        assert_eq!(c.convert::<Xy>(0.), Xy::new(1., 2.));
        assert_eq!(c.convert::<Xyz>(0.), Xyz::new(1., 2., 3.));
        assert_eq!(c.convert::<Xym>(0.), Xym::new(1., 2., 4.));
    }

    #[test]
    fn cross_conversion_keeps_shared_fields() {
        let zm: Xyzm = Xym::new(1., 2., 4.).convert(9.);
        assert_eq!(zm, Xyzm::new(1., 2., 9., 4.));
        let m: Xym = Xyz::new(1., 2., 3.).convert(9.);
        assert_eq!(m, Xym::new(1., 2., 9.));
    }

    #[test]
    fn nan_equality_is_bitwise() {
        assert_eq!(Xyz::new(1., 2., f64::NAN), Xyz::new(1., 2., f64::NAN));
        assert_ne!(Xy::new(0., 0.), Xy::new(-0., 0.));
    }
}
