use crate::coord::Coordinate;

/// A single position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<C>(C);

impl<C: Coordinate> Point<C> {
    /// Create a point from its coordinate.
    pub fn new(coord: C) -> Self {
        Self(coord)
    }

    /// The point's coordinate.
    pub fn coord(&self) -> C {
        self.0
    }

    /// Convert to another coordinate kind, filling missing ordinates with `fill`.
    pub fn convert<T: Coordinate>(&self, fill: f64) -> Point<T> {
        Point(self.0.convert(fill))
    }
}

impl<C: Coordinate> From<C> for Point<C> {
    fn from(value: C) -> Self {
        Self(value)
    }
}
