use geo_traits::CoordTrait;

use crate::coord::{impl_bitwise_eq, Coordinate};
use crate::datatypes::Dimension;
use crate::error::{GeoBridgeError, Result};
use crate::io::native::{Engine, Ordinate};
use crate::scalar::any::mismatch;
use crate::scalar::{AnyGeometry, Geometry};

/// A coordinate with elevation.
#[derive(Debug, Clone, Copy)]
pub struct Xyz {
    x: f64,
    y: f64,
    z: f64,
}

impl Xyz {
    /// Create a new coordinate.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Horizontal component.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical component.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Elevation.
    pub fn z(&self) -> f64 {
        self.z
    }
}

impl_bitwise_eq!(Xyz, x, y, z);

impl Coordinate for Xyz {
    const DIMENSION: Dimension = Dimension::XYZ;
    const NATIVE_WIDTH: usize = 3;

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> Option<f64> {
        Some(self.z)
    }

    fn m(&self) -> Option<f64> {
        None
    }

    fn from_parts(x: f64, y: f64, z: Option<f64>, _m: Option<f64>, fill: f64) -> Self {
        Self::new(x, y, z.unwrap_or(fill))
    }

    fn from_values(values: &[f64]) -> Result<Self> {
        match values {
            [x, y, z] | [x, y, z, _] => Ok(Self::new(*x, *y, *z)),
            _ => Err(GeoBridgeError::InvalidCoordinates(format!(
                "XYZ position needs 3 or 4 numbers, got {}",
                values.len()
            ))),
        }
    }

    fn read_native<E: Engine>(engine: &E, seq: &E::CoordSeq, index: usize) -> Option<Self> {
        let x = engine.coord_seq_get(seq, index, Ordinate::X)?;
        let y = engine.coord_seq_get(seq, index, Ordinate::Y)?;
        let z = engine.coord_seq_get(seq, index, Ordinate::Z)?;
        Some(Self::new(x, y, z))
    }

    fn write_native<E: Engine>(&self, engine: &E, seq: &mut E::CoordSeq, index: usize) -> bool {
        engine.coord_seq_set(seq, index, Ordinate::X, self.x)
            && engine.coord_seq_set(seq, index, Ordinate::Y, self.y)
            && engine.coord_seq_set(seq, index, Ordinate::Z, self.z)
    }

    fn from_any(any: AnyGeometry) -> Result<Geometry<Self>> {
        match any {
            AnyGeometry::Xyz(g) => Ok(g),
            other => Err(mismatch(Self::DIMENSION, &other)),
        }
    }

    fn into_any(geometry: Geometry<Self>) -> AnyGeometry {
        AnyGeometry::Xyz(geometry)
    }
}

impl CoordTrait for Xyz {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xyz
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("XYZ coordinate has no ordinate {n}"),
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
    fn decode_tolerance() {
        assert_eq!(Xyz::from_values(&[1., 2., 3.]).unwrap(), Xyz::new(1., 2., 3.));
        assert_eq!(
            Xyz::from_values(&[1., 2., 3., 4.]).unwrap(),
            Xyz::new(1., 2., 3.)
        );
        assert!(Xyz::from_values(&[1., 2.]).is_err());
        assert!(Xyz::from_values(&[1., 2., 3., 4., 5.]).is_err());
    }
}
