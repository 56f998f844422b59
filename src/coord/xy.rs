use geo_traits::CoordTrait;

use crate::coord::{impl_bitwise_eq, Coordinate};
use crate::datatypes::Dimension;
use crate::error::{GeoBridgeError, Result};
use crate::io::native::{Engine, Ordinate};
use crate::scalar::any::mismatch;
use crate::scalar::{AnyGeometry, Geometry};

/// A planar coordinate.
#[derive(Debug, Clone, Copy)]
pub struct Xy {
    x: f64,
    y: f64,
}

impl Xy {
    /// Create a new coordinate.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal component.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical component.
    pub fn y(&self) -> f64 {
        self.y
    }
}

impl_bitwise_eq!(Xy, x, y);

impl Coordinate for Xy {
    const DIMENSION: Dimension = Dimension::XY;
    const NATIVE_WIDTH: usize = 2;

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
        None
    }

    fn from_parts(x: f64, y: f64, _z: Option<f64>, _m: Option<f64>, _fill: f64) -> Self {
        Self::new(x, y)
    }

    /// Accepts 2 to 4 numbers; anything past `y` is ignored so that foreign 3D data still
    /// decodes as planar.
    fn from_values(values: &[f64]) -> Result<Self> {
        match values {
            [x, y] | [x, y, _] | [x, y, _, _] => Ok(Self::new(*x, *y)),
            _ => Err(GeoBridgeError::InvalidCoordinates(format!(
                "XY position needs 2 to 4 numbers, got {}",
                values.len()
            ))),
        }
    }

    fn read_native<E: Engine>(engine: &E, seq: &E::CoordSeq, index: usize) -> Option<Self> {
        let x = engine.coord_seq_get(seq, index, Ordinate::X)?;
        let y = engine.coord_seq_get(seq, index, Ordinate::Y)?;
        Some(Self::new(x, y))
    }

    fn write_native<E: Engine>(&self, engine: &E, seq: &mut E::CoordSeq, index: usize) -> bool {
        engine.coord_seq_set(seq, index, Ordinate::X, self.x)
            && engine.coord_seq_set(seq, index, Ordinate::Y, self.y)
    }

    fn from_any(any: AnyGeometry) -> Result<Geometry<Self>> {
        match any {
            AnyGeometry::Xy(g) => Ok(g),
            other => Err(mismatch(Self::DIMENSION, &other)),
        }
    }

    fn into_any(geometry: Geometry<Self>) -> AnyGeometry {
        AnyGeometry::Xy(geometry)
    }
}

impl CoordTrait for Xy {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("XY coordinate has no ordinate {n}"),
        }
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}

impl From<geo::Coord> for Xy {
    fn from(value: geo::Coord) -> Self {
        Self::new(value.x, value.y)
    }
}

impl From<Xy> for geo::Coord {
    fn from(value: Xy) -> Self {
        geo::Coord {
            x: value.x,
            y: value.y,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_tolerance() {
        assert_eq!(Xy::from_values(&[1., 2.]).unwrap(), Xy::new(1., 2.));
        assert_eq!(Xy::from_values(&[1., 2., 3.]).unwrap(), Xy::new(1., 2.));
        assert_eq!(Xy::from_values(&[1., 2., 3., 4.]).unwrap(), Xy::new(1., 2.));
        assert!(matches!(
            Xy::from_values(&[1.]),
            Err(GeoBridgeError::InvalidCoordinates(_))
        ));
        assert!(matches!(
            Xy::from_values(&[1., 2., 3., 4., 5.]),
            Err(GeoBridgeError::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn geo_traits_access() {
        let c = Xy::new(3., 4.);
        assert_eq!(c.nth(1), Some(4.));
        assert_eq!(c.nth(2), None);
        assert_eq!(CoordTrait::dim(&c), geo_traits::Dimensions::Xy);
    }
}
