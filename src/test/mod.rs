use crate::coord::Xy;
use crate::scalar::Geometry;

pub(crate) mod linestring;
pub(crate) mod point;
pub(crate) mod polygon;

/// One fixture of each of the seven variants.
pub(crate) fn geometries() -> Vec<Geometry<Xy>> {
    vec![
        point::p0().into(),
        linestring::ls0().into(),
        polygon::p1().into(),
        multipoint::mp0().into(),
        multilinestring::ml0().into(),
        multipolygon::mp0().into(),
        geometrycollection::gc0().into(),
    ]
}

/// Route `log` output through the test harness. Safe to call from every test.
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
