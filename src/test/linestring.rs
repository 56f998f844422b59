use geo::line_string;

use crate::coord::Xy;
use crate::scalar::LineString;

pub(crate) fn ls0() -> LineString<Xy> {
    line_string![
        (x: 0., y: 1.),
        (x: 1., y: 2.),
        (x: 2., y: 4.)
    ]
    .try_into()
    .unwrap()
}

pub(crate) fn ls1() -> LineString<Xy> {
    line_string![
        (x: 3., y: 4.),
        (x: 5., y: 6.)
    ]
    .try_into()
    .unwrap()
}
