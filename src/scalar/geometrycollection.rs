use crate::coord::Coordinate;
use crate::scalar::Geometry;

/// An ordered, possibly nested, collection of geometries of one coordinate kind.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryCollection<C> {
    geometries: Vec<Geometry<C>>,
}

impl<C: Coordinate> GeometryCollection<C> {
    pub fn new(geometries: Vec<Geometry<C>>) -> Self {
        Self { geometries }
    }

    pub fn geometries(&self) -> &[Geometry<C>] {
        &self.geometries
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn into_inner(self) -> Vec<Geometry<C>> {
        self.geometries
    }

    /// Convert to another coordinate kind, filling missing ordinates with `fill`.
    pub fn convert<T: Coordinate>(&self, fill: f64) -> GeometryCollection<T> {
        GeometryCollection::new(self.geometries.iter().map(|g| g.convert(fill)).collect())
    }
}

impl<C: Coordinate> FromIterator<Geometry<C>> for GeometryCollection<C> {
    fn from_iter<I: IntoIterator<Item = Geometry<C>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
