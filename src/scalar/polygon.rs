use crate::coord::Coordinate;
use crate::error::{GeoBridgeError, Result};
use crate::scalar::LinearRing;

/// An exterior ring with zero or more holes.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<C> {
    exterior: LinearRing<C>,
    interiors: Vec<LinearRing<C>>,
}

impl<C: Coordinate> Polygon<C> {
    pub fn new(exterior: LinearRing<C>, interiors: Vec<LinearRing<C>>) -> Self {
        Self {
            exterior,
            interiors,
        }
    }

    /// Create a polygon from its rings, exterior first.
    ///
    /// # Errors
    ///
    /// [`GeoBridgeError::TooFewRings`] if `rings` is empty.
    pub fn try_from_rings(rings: Vec<LinearRing<C>>) -> Result<Self> {
        let mut rings = rings.into_iter();
        let exterior = rings.next().ok_or(GeoBridgeError::TooFewRings)?;
        Ok(Self::new(exterior, rings.collect()))
    }

    pub fn exterior(&self) -> &LinearRing<C> {
        &self.exterior
    }

    pub fn interiors(&self) -> &[LinearRing<C>] {
        &self.interiors
    }

    pub fn num_interiors(&self) -> usize {
        self.interiors.len()
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> impl Iterator<Item = &LinearRing<C>> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    pub fn into_inner(self) -> (LinearRing<C>, Vec<LinearRing<C>>) {
        (self.exterior, self.interiors)
    }

    /// Convert to another coordinate kind, filling missing ordinates with `fill`.
    pub fn convert<T: Coordinate>(&self, fill: f64) -> Polygon<T> {
        Polygon {
            exterior: self.exterior.convert(fill),
            interiors: self.interiors.iter().map(|r| r.convert(fill)).collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Xy;

    #[test]
    fn no_rings() {
        assert!(matches!(
            Polygon::<Xy>::try_from_rings(vec![]),
            Err(GeoBridgeError::TooFewRings)
        ));
    }

    #[test]
    fn rings_order() {
        let polygon = crate::test::polygon::p1();
        let rings: Vec<_> = polygon.rings().collect();
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[0], polygon.exterior());
    }
}
