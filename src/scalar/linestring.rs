use crate::coord::Coordinate;
use crate::error::{GeoBridgeError, Result};

/// An open or closed sequence of at least two coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct LineString<C> {
    coords: Vec<C>,
}

impl<C: Coordinate> LineString<C> {
    /// Minimum number of coordinates.
    pub const MIN_POINTS: usize = 2;

    /// Create a new line string.
    ///
    /// # Errors
    ///
    /// [`GeoBridgeError::TooFewPoints`] for fewer than two coordinates.
    pub fn try_new(coords: Vec<C>) -> Result<Self> {
        if coords.len() < Self::MIN_POINTS {
            return Err(GeoBridgeError::TooFewPoints {
                geometry: "LineString",
                required: Self::MIN_POINTS,
                actual: coords.len(),
            });
        }
        Ok(Self { coords })
    }

    pub fn coords(&self) -> &[C] {
        &self.coords
    }

    pub fn num_coords(&self) -> usize {
        self.coords.len()
    }

    /// Whether the first and last coordinates are equal.
    pub fn is_closed(&self) -> bool {
        self.coords.first() == self.coords.last()
    }

    pub fn into_inner(self) -> Vec<C> {
        self.coords
    }

    /// Convert to another coordinate kind, filling missing ordinates with `fill`.
    pub fn convert<T: Coordinate>(&self, fill: f64) -> LineString<T> {
        LineString {
            coords: self.coords.iter().map(|c| c.convert(fill)).collect(),
        }
    }
}

impl<C: Coordinate> TryFrom<Vec<C>> for LineString<C> {
    type Error = GeoBridgeError;

    fn try_from(value: Vec<C>) -> Result<Self> {
        Self::try_new(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Xy;

    #[test]
    fn rejects_single_point() {
        let err = LineString::try_new(vec![Xy::new(0., 0.)]).unwrap_err();
        assert!(matches!(
            err,
            GeoBridgeError::TooFewPoints {
                required: 2,
                actual: 1,
                ..
            }
        ));
    }

    #[test]
    fn closed() {
        let ls = crate::test::linestring::ls0();
        assert!(!ls.is_closed());
        assert_eq!(ls.num_coords(), 3);
    }
}
