use geo_traits::CoordTrait;

use crate::coord::{impl_bitwise_eq, Coordinate};
use crate::datatypes::Dimension;
use crate::error::{GeoBridgeError, Result};
use crate::io::native::{Engine, Ordinate};
use crate::scalar::any::mismatch;
use crate::scalar::{AnyGeometry, Geometry};

/// A planar coordinate with a measure.
#[derive(Debug, Clone, Copy)]
pub struct Xym {
    x: f64,
    y: f64,
    m: f64,
}

impl Xym {
    /// Create a new coordinate.
    pub const fn new(x: f64, y: f64, m: f64) -> Self {
        Self { x, y, m }
    }

    /// Horizontal component.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical component.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Measure.
    pub fn m(&self) -> f64 {
        self.m
    }
}

impl_bitwise_eq!(Xym, x, y, m);

impl Coordinate for Xym {
    const DIMENSION: Dimension = Dimension::XYM;
    // The engine has no M-only layout; M travels in its own channel of a 3-wide sequence.
    const NATIVE_WIDTH: usize = 3;

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> Option<f64> {
        None
    }

    fn m(&self) -> Option<f64> {
        Some(self.m)
    }

    fn position(&self) -> Vec<f64> {
        vec![self.x, self.y, f64::NAN, self.m]
    }

    fn from_parts(x: f64, y: f64, _z: Option<f64>, m: Option<f64>, fill: f64) -> Self {
        Self::new(x, y, m.unwrap_or(fill))
    }

    /// Only the 4-number form is accepted: a 3-number position is indistinguishable from
    /// XYZ. The third number is ignored and the fourth read as M.
    fn from_values(values: &[f64]) -> Result<Self> {
        match values {
            [x, y, _, m] => Ok(Self::new(*x, *y, *m)),
            _ => Err(GeoBridgeError::InvalidCoordinates(format!(
                "XYM position needs exactly 4 numbers, got {}",
                values.len()
            ))),
        }
    }

    fn read_native<E: Engine>(engine: &E, seq: &E::CoordSeq, index: usize) -> Option<Self> {
        let x = engine.coord_seq_get(seq, index, Ordinate::X)?;
        let y = engine.coord_seq_get(seq, index, Ordinate::Y)?;
        let m = engine.coord_seq_get(seq, index, Ordinate::M)?;
        Some(Self::new(x, y, m))
    }

    fn write_native<E: Engine>(&self, engine: &E, seq: &mut E::CoordSeq, index: usize) -> bool {
        engine.coord_seq_set(seq, index, Ordinate::X, self.x)
            && engine.coord_seq_set(seq, index, Ordinate::Y, self.y)
            && engine.coord_seq_set(seq, index, Ordinate::M, self.m)
    }

    fn from_any(any: AnyGeometry) -> Result<Geometry<Self>> {
        match any {
            AnyGeometry::Xym(g) => Ok(g),
            other => Err(mismatch(Self::DIMENSION, &other)),
        }
    }

    fn into_any(geometry: Geometry<Self>) -> AnyGeometry {
        AnyGeometry::Xym(geometry)
    }
}

impl CoordTrait for Xym {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xym
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            2 => self.m,
            _ => panic!("XYM coordinate has no ordinate {n}"),
        }
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_reads_fourth_as_measure() {
        assert_eq!(
            Xym::from_values(&[1., 2., 3., 4.]).unwrap(),
            Xym::new(1., 2., 4.)
        );
    }

    #[test]
    fn decode_rejects_three_numbers() {
        assert!(matches!(
            Xym::from_values(&[1., 2., 3.]),
            Err(GeoBridgeError::InvalidCoordinates(_))
        ));
        assert!(Xym::from_values(&[1., 2.]).is_err());
    }

    #[test]
    fn measure_is_third_value() {
        let c = Xym::new(1., 2., 7.);
        assert_eq!(c.values()[2], 7.);
        assert_eq!(c.nth(2), Some(7.));
    }
}
