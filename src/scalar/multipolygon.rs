use crate::coord::Coordinate;
use crate::scalar::Polygon;

/// A set of polygons.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPolygon<C> {
    polygons: Vec<Polygon<C>>,
}

impl<C: Coordinate> MultiPolygon<C> {
    pub fn new(polygons: Vec<Polygon<C>>) -> Self {
        Self { polygons }
    }

    pub fn polygons(&self) -> &[Polygon<C>] {
        &self.polygons
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    pub fn into_inner(self) -> Vec<Polygon<C>> {
        self.polygons
    }

    /// Convert to another coordinate kind, filling missing ordinates with `fill`.
    pub fn convert<T: Coordinate>(&self, fill: f64) -> MultiPolygon<T> {
        MultiPolygon::new(self.polygons.iter().map(|p| p.convert(fill)).collect())
    }
}
