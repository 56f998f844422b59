use geo::point;

use crate::coord::{Xy, Xym, Xyz, Xyzm};
use crate::scalar::Point;

pub(crate) fn p0() -> Point<Xy> {
    point!(
        x: 0., y: 1.
    )
    .into()
}

pub(crate) fn p1() -> Point<Xy> {
    point!(
        x: 1., y: 2.
    )
    .into()
}

pub(crate) fn p_xyz() -> Point<Xyz> {
    Point::new(Xyz::new(1., 2., 3.))
}

pub(crate) fn p_xym() -> Point<Xym> {
    Point::new(Xym::new(1., 2., 4.))
}

pub(crate) fn p_xyzm() -> Point<Xyzm> {
    Point::new(Xyzm::new(1., 2., 3., 4.))
}
