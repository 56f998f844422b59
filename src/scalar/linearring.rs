use crate::coord::Coordinate;
use crate::error::{GeoBridgeError, Result};

/// A closed line string of at least four coordinates, used as a polygon ring.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRing<C> {
    coords: Vec<C>,
}

impl<C: Coordinate> LinearRing<C> {
    /// Minimum number of coordinates, counting the closing one.
    pub const MIN_POINTS: usize = 4;

    /// Create a new ring.
    ///
    /// # Errors
    ///
    /// [`GeoBridgeError::TooFewPoints`] for fewer than four coordinates, then
    /// [`GeoBridgeError::RingNotClosed`] if the first and last coordinates differ.
    pub fn try_new(coords: Vec<C>) -> Result<Self> {
        if coords.len() < Self::MIN_POINTS {
            return Err(GeoBridgeError::TooFewPoints {
                geometry: "LinearRing",
                required: Self::MIN_POINTS,
                actual: coords.len(),
            });
        }
        if coords.first() != coords.last() {
            return Err(GeoBridgeError::RingNotClosed);
        }
        Ok(Self { coords })
    }

    pub fn coords(&self) -> &[C] {
        &self.coords
    }

    pub fn num_coords(&self) -> usize {
        self.coords.len()
    }

    pub fn into_inner(self) -> Vec<C> {
        self.coords
    }

    /// Convert to another coordinate kind, filling missing ordinates with `fill`.
    ///
    /// Closure survives: the first and last coordinates convert identically.
    pub fn convert<T: Coordinate>(&self, fill: f64) -> LinearRing<T> {
        LinearRing {
            coords: self.coords.iter().map(|c| c.convert(fill)).collect(),
        }
    }
}

impl<C: Coordinate> TryFrom<Vec<C>> for LinearRing<C> {
    type Error = GeoBridgeError;

    fn try_from(value: Vec<C>) -> Result<Self> {
        Self::try_new(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::{Xy, Xyz};

    #[test]
    fn three_points_is_too_few() {
        let coords = vec![Xy::new(0., 0.), Xy::new(1., 0.), Xy::new(0., 0.)];
        assert!(matches!(
            LinearRing::try_new(coords),
            Err(GeoBridgeError::TooFewPoints {
                required: 4,
                actual: 3,
                ..
            })
        ));
    }

    #[test]
    fn open_ring() {
        let coords = vec![
            Xy::new(0., 0.),
            Xy::new(1., 0.),
            Xy::new(1., 1.),
            Xy::new(0., 1.),
        ];
        assert!(matches!(
            LinearRing::try_new(coords),
            Err(GeoBridgeError::RingNotClosed)
        ));
    }

    #[test]
    fn closure_compares_all_ordinates() {
        let coords = vec![
            Xyz::new(0., 0., 0.),
            Xyz::new(1., 0., 0.),
            Xyz::new(1., 1., 0.),
            Xyz::new(0., 0., 5.),
        ];
        assert!(matches!(
            LinearRing::try_new(coords),
            Err(GeoBridgeError::RingNotClosed)
        ));
    }

    #[test]
    fn convert_stays_closed() {
        let ring = crate::test::polygon::exterior();
        let widened = ring.convert::<Xyz>(f64::NAN);
        assert_eq!(widened.coords().first(), widened.coords().last());
    }
}
