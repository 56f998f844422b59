use geo::polygon;

use crate::coord::Xy;
use crate::scalar::{LinearRing, Polygon};

pub(crate) fn exterior() -> LinearRing<Xy> {
    p0().exterior().clone()
}

pub(crate) fn p0() -> Polygon<Xy> {
    polygon![
        (x: -111., y: 45.),
        (x: -111., y: 41.),
        (x: -104., y: 41.),
        (x: -104., y: 45.),
    ]
    .try_into()
    .unwrap()
}

pub(crate) fn p1() -> Polygon<Xy> {
    polygon!(
        exterior: [
            (x: 0., y: 0.),
            (x: 10., y: 0.),
            (x: 10., y: 10.),
            (x: 0., y: 10.),
        ],
        interiors: [
            [
                (x: 4., y: 4.),
                (x: 6., y: 4.),
                (x: 6., y: 6.),
                (x: 4., y: 6.),
            ],
        ],
    )
    .try_into()
    .unwrap()
}
