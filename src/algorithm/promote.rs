use crate::coord::{Coordinate, Xy, Xym, Xyz, Xyzm};

/// Compile-time dimension promotion.
///
/// `<A as Promote<B>>::Output` is the coordinate kind of the result of a promoted operation on
/// inputs of kinds `A` and `B`: it has Z if either input has Z and M if either has M. It
/// always agrees with [`Dimension::promote`][crate::datatypes::Dimension::promote].
pub trait Promote<Rhs: Coordinate>: Coordinate {
    type Output: Coordinate;
}

/// The promoted kind of `A` and `B`.
pub type Promoted<A, B> = <A as Promote<B>>::Output;

macro_rules! impl_promote {
    ($($lhs:ty, $rhs:ty => $output:ty;)+) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $output;
            }
        )+
    };
}

impl_promote! {
    Xy, Xy => Xy;
    Xy, Xyz => Xyz;
    Xy, Xym => Xym;
    Xy, Xyzm => Xyzm;
    Xyz, Xy => Xyz;
    Xyz, Xyz => Xyz;
    Xyz, Xym => Xyzm;
    Xyz, Xyzm => Xyzm;
    Xym, Xy => Xym;
    Xym, Xyz => Xyzm;
    Xym, Xym => Xym;
    Xym, Xyzm => Xyzm;
    Xyzm, Xy => Xyzm;
    Xyzm, Xyz => Xyzm;
    Xyzm, Xym => Xyzm;
    Xyzm, Xyzm => Xyzm;
}
