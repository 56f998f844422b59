use crate::coord::Coordinate;
use crate::scalar::Point;

/// A set of points.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint<C> {
    points: Vec<Point<C>>,
}

impl<C: Coordinate> MultiPoint<C> {
    pub fn new(points: Vec<Point<C>>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point<C>] {
        &self.points
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn into_inner(self) -> Vec<Point<C>> {
        self.points
    }

    /// Convert to another coordinate kind, filling missing ordinates with `fill`.
    pub fn convert<T: Coordinate>(&self, fill: f64) -> MultiPoint<T> {
        MultiPoint::new(self.points.iter().map(|p| p.convert(fill)).collect())
    }
}

impl<C: Coordinate> From<Vec<C>> for MultiPoint<C> {
    fn from(value: Vec<C>) -> Self {
        Self::new(value.into_iter().map(Point::new).collect())
    }
}
