use crate::algorithm::native::{output_dimension, BinaryOperation};
use crate::algorithm::{Promote, Promoted};
use crate::coord::Coordinate;
use crate::error::Result;
use crate::io::native::{
    from_native_dyn, to_native, Engine, NativeContext, NativeGeometryHandle,
};
use crate::scalar::{AnyGeometry, Geometry};

/// Run `op` on two geometries already in the engine.
pub fn apply_binary<'ctx, E: Engine>(
    a: &NativeGeometryHandle<'_, E>,
    b: &NativeGeometryHandle<'_, E>,
    op: &BinaryOperation,
    ctx: &'ctx NativeContext<E>,
) -> Result<NativeGeometryHandle<'ctx, E>> {
    ctx.ensure_owned(a)?;
    ctx.ensure_owned(b)?;
    let raw = ctx.check(ctx.engine().binary(op, a.as_raw(), b.as_raw()), op.name())?;
    Ok(ctx.wrap(raw))
}

/// Two-input engine operations.
///
/// Results have the promoted kind of both inputs. A coordinate the engine never had a value
/// for, such as the Z of a point that came from an XY input, reads back as NaN.
pub trait BinaryOps<Rhs> {
    /// Coordinate kind of the results.
    type Output: Coordinate;

    /// Run `op`, returning the result at the promoted dimension of both inputs.
    fn binary_op<E: Engine>(
        &self,
        other: &Rhs,
        op: BinaryOperation,
        ctx: &NativeContext<E>,
    ) -> Result<AnyGeometry>;

    /// Minimum planar distance between the two geometries.
    fn distance<E: Engine>(&self, other: &Rhs, ctx: &NativeContext<E>) -> Result<f64>;

    fn intersection<E: Engine>(
        &self,
        other: &Rhs,
        ctx: &NativeContext<E>,
    ) -> Result<Geometry<Self::Output>> {
        self.binary_op(other, BinaryOperation::Intersection, ctx)?
            .into_kind()
    }

    fn union<E: Engine>(
        &self,
        other: &Rhs,
        ctx: &NativeContext<E>,
    ) -> Result<Geometry<Self::Output>> {
        self.binary_op(other, BinaryOperation::Union, ctx)?
            .into_kind()
    }

    fn difference<E: Engine>(
        &self,
        other: &Rhs,
        ctx: &NativeContext<E>,
    ) -> Result<Geometry<Self::Output>> {
        self.binary_op(other, BinaryOperation::Difference, ctx)?
            .into_kind()
    }

    fn sym_difference<E: Engine>(
        &self,
        other: &Rhs,
        ctx: &NativeContext<E>,
    ) -> Result<Geometry<Self::Output>> {
        self.binary_op(other, BinaryOperation::SymDifference, ctx)?
            .into_kind()
    }

    fn snap<E: Engine>(
        &self,
        other: &Rhs,
        tolerance: f64,
        ctx: &NativeContext<E>,
    ) -> Result<Geometry<Self::Output>> {
        self.binary_op(other, BinaryOperation::Snap { tolerance }, ctx)?
            .into_kind()
    }
}

impl<A, B> BinaryOps<Geometry<B>> for Geometry<A>
where
    A: Promote<B>,
    B: Coordinate,
{
    type Output = Promoted<A, B>;

    fn binary_op<E: Engine>(
        &self,
        other: &Geometry<B>,
        op: BinaryOperation,
        ctx: &NativeContext<E>,
    ) -> Result<AnyGeometry> {
        let dimension = output_dimension(op.name(), A::DIMENSION.promote(B::DIMENSION));
        let a = to_native(self, ctx)?;
        let b = to_native(other, ctx)?;
        let output = apply_binary(&a, &b, &op, ctx)?;
        from_native_dyn(&output, ctx, dimension)
    }

    fn distance<E: Engine>(&self, other: &Geometry<B>, ctx: &NativeContext<E>) -> Result<f64> {
        let a = to_native(self, ctx)?;
        let b = to_native(other, ctx)?;
        ctx.check(ctx.engine().distance(a.as_raw(), b.as_raw()), "distance")
    }
}
