use geo_traits::CoordTrait;

use crate::coord::{impl_bitwise_eq, Coordinate};
use crate::datatypes::Dimension;
use crate::error::{GeoBridgeError, Result};
use crate::io::native::{Engine, Ordinate};
use crate::scalar::any::mismatch;
use crate::scalar::{AnyGeometry, Geometry};

/// A coordinate with elevation and measure.
#[derive(Debug, Clone, Copy)]
pub struct Xyzm {
    x: f64,
    y: f64,
    z: f64,
    m: f64,
}

impl Xyzm {
    /// Create a new coordinate.
    pub const fn new(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self { x, y, z, m }
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

    /// Measure.
    pub fn m(&self) -> f64 {
        self.m
    }
}

impl_bitwise_eq!(Xyzm, x, y, z, m);

impl Coordinate for Xyzm {
    const DIMENSION: Dimension = Dimension::XYZM;
    const NATIVE_WIDTH: usize = 4;

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
        Some(self.m)
    }

    fn from_parts(x: f64, y: f64, z: Option<f64>, m: Option<f64>, fill: f64) -> Self {
        Self::new(x, y, z.unwrap_or(fill), m.unwrap_or(fill))
    }

    fn from_values(values: &[f64]) -> Result<Self> {
        match values {
            [x, y, z, m] => Ok(Self::new(*x, *y, *z, *m)),
            _ => Err(GeoBridgeError::InvalidCoordinates(format!(
                "XYZM position needs exactly 4 numbers, got {}",
                values.len()
            ))),
        }
    }

    fn read_native<E: Engine>(engine: &E, seq: &E::CoordSeq, index: usize) -> Option<Self> {
        let x = engine.coord_seq_get(seq, index, Ordinate::X)?;
        let y = engine.coord_seq_get(seq, index, Ordinate::Y)?;
        let z = engine.coord_seq_get(seq, index, Ordinate::Z)?;
        let m = engine.coord_seq_get(seq, index, Ordinate::M)?;
        Some(Self::new(x, y, z, m))
    }

    fn write_native<E: Engine>(&self, engine: &E, seq: &mut E::CoordSeq, index: usize) -> bool {
        engine.coord_seq_set(seq, index, Ordinate::X, self.x)
            && engine.coord_seq_set(seq, index, Ordinate::Y, self.y)
            && engine.coord_seq_set(seq, index, Ordinate::Z, self.z)
            && engine.coord_seq_set(seq, index, Ordinate::M, self.m)
    }

    fn from_any(any: AnyGeometry) -> Result<Geometry<Self>> {
        match any {
            AnyGeometry::Xyzm(g) => Ok(g),
            other => Err(mismatch(Self::DIMENSION, &other)),
        }
    }

    fn into_any(geometry: Geometry<Self>) -> AnyGeometry {
        AnyGeometry::Xyzm(geometry)
    }
}

impl CoordTrait for Xyzm {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xyzm
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            3 => self.m,
            _ => panic!("XYZM coordinate has no ordinate {n}"),
        }
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }
}
