use crate::algorithm::native::{output_dimension, UnaryOperation};
use crate::coord::{Coordinate, Xy};
use crate::error::Result;
use crate::io::native::{
    from_native_dyn, to_native, Engine, NativeContext, NativeGeometryHandle,
};
use crate::scalar::{AnyGeometry, Geometry};

/// Run `op` on a geometry already in the engine.
pub fn apply_unary<'ctx, E: Engine>(
    geometry: &NativeGeometryHandle<'_, E>,
    op: &UnaryOperation,
    ctx: &'ctx NativeContext<E>,
) -> Result<NativeGeometryHandle<'ctx, E>> {
    ctx.ensure_owned(geometry)?;
    let raw = ctx.check(ctx.engine().unary(op, geometry.as_raw()), op.name())?;
    Ok(ctx.wrap(raw))
}

/// Single-input engine operations.
///
/// Planar operations return [`Xy`] geometries whatever the input kind; all others keep the
/// input kind.
pub trait UnaryOps<C: Coordinate> {
    /// Run `op`, returning the result at the dimension given by its
    /// [`OutputPolicy`][crate::algorithm::native::OutputPolicy].
    fn unary_op<E: Engine>(&self, op: UnaryOperation, ctx: &NativeContext<E>)
        -> Result<AnyGeometry>;

    fn convex_hull<E: Engine>(&self, ctx: &NativeContext<E>) -> Result<Geometry<Xy>> {
        self.unary_op(UnaryOperation::ConvexHull, ctx)?.into_kind()
    }

    fn envelope<E: Engine>(&self, ctx: &NativeContext<E>) -> Result<Geometry<Xy>> {
        self.unary_op(UnaryOperation::Envelope, ctx)?.into_kind()
    }

    fn centroid<E: Engine>(&self, ctx: &NativeContext<E>) -> Result<Geometry<Xy>> {
        self.unary_op(UnaryOperation::Centroid, ctx)?.into_kind()
    }

    fn buffer<E: Engine>(
        &self,
        width: f64,
        quadrant_segments: i32,
        ctx: &NativeContext<E>,
    ) -> Result<Geometry<Xy>> {
        let op = UnaryOperation::Buffer {
            width,
            quadrant_segments,
        };
        self.unary_op(op, ctx)?.into_kind()
    }

    fn polygonize<E: Engine>(&self, ctx: &NativeContext<E>) -> Result<Geometry<Xy>> {
        self.unary_op(UnaryOperation::Polygonize, ctx)?.into_kind()
    }

    fn boundary<E: Engine>(&self, ctx: &NativeContext<E>) -> Result<Geometry<C>> {
        self.unary_op(UnaryOperation::Boundary, ctx)?.into_kind()
    }

    fn point_on_surface<E: Engine>(&self, ctx: &NativeContext<E>) -> Result<Geometry<C>> {
        self.unary_op(UnaryOperation::PointOnSurface, ctx)?.into_kind()
    }

    fn unary_union<E: Engine>(&self, ctx: &NativeContext<E>) -> Result<Geometry<C>> {
        self.unary_op(UnaryOperation::UnaryUnion, ctx)?.into_kind()
    }

    fn simplify<E: Engine>(&self, tolerance: f64, ctx: &NativeContext<E>) -> Result<Geometry<C>> {
        self.unary_op(UnaryOperation::Simplify { tolerance }, ctx)?
            .into_kind()
    }

    fn clip_by_rect<E: Engine>(
        &self,
        xmin: f64,
        ymin: f64,
        xmax: f64,
        ymax: f64,
        ctx: &NativeContext<E>,
    ) -> Result<Geometry<C>> {
        let op = UnaryOperation::ClipByRect {
            xmin,
            ymin,
            xmax,
            ymax,
        };
        self.unary_op(op, ctx)?.into_kind()
    }
}

impl<C: Coordinate> UnaryOps<C> for Geometry<C> {
    fn unary_op<E: Engine>(
        &self,
        op: UnaryOperation,
        ctx: &NativeContext<E>,
    ) -> Result<AnyGeometry> {
        let dimension = output_dimension(op.name(), C::DIMENSION);
        let input = to_native(self, ctx)?;
        let output = apply_unary(&input, &op, ctx)?;
        from_native_dyn(&output, ctx, dimension)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::{Xym, Xyz, Xyzm};
    use crate::datatypes::Dimension;
    use crate::error::GeoBridgeError;
    use crate::scalar::GeometryType;
    use crate::test::engine::MockEngine;
    use crate::test::{linestring, polygon};

    #[test]
    fn planar_operations_return_xy() {
        let ctx = NativeContext::new(MockEngine::default());
        let geometry = Geometry::from(polygon::p1().convert::<Xyz>(3.));
        let hull = geometry.convex_hull(&ctx).unwrap();
        assert_eq!(hull.dimension(), Dimension::XY);
        assert_eq!(geometry.envelope(&ctx).unwrap().dimension(), Dimension::XY);
        assert_eq!(
            geometry.buffer(1., 8, &ctx).unwrap().geometry_type(),
            GeometryType::Polygon
        );
        assert_eq!(
            geometry.centroid(&ctx).unwrap().geometry_type(),
            GeometryType::Point
        );
        assert!(geometry.polygonize(&ctx).is_ok());
        assert_eq!(ctx.engine().live(), 0);
    }

    #[test]
    fn preserving_operations_keep_kind() {
        let ctx = NativeContext::new(MockEngine::default());
        let geometry = Geometry::from(linestring::ls0().convert::<Xyzm>(3.));
        let boundary: Geometry<Xyzm> = geometry.boundary(&ctx).unwrap();
        assert_eq!(boundary.dimension(), Dimension::XYZM);
        assert_eq!(geometry.simplify(0.5, &ctx).unwrap(), geometry);
        assert!(geometry.unary_union(&ctx).is_ok());
        assert!(geometry.point_on_surface(&ctx).is_ok());
        assert!(geometry.clip_by_rect(0., 0., 10., 10., &ctx).is_ok());
        assert_eq!(ctx.engine().live(), 0);
    }

    #[test]
    fn dynamic_output_follows_policy() {
        let ctx = NativeContext::new(MockEngine::default());
        let geometry = Geometry::from(polygon::p0().convert::<Xym>(1.));
        let hull = geometry.unary_op(UnaryOperation::ConvexHull, &ctx).unwrap();
        assert_eq!(hull.dimension(), Dimension::XY);
        let boundary = geometry.unary_op(UnaryOperation::Boundary, &ctx).unwrap();
        assert_eq!(boundary.dimension(), Dimension::XYM);
    }

    #[test]
    fn engine_failure_is_reported() {
        let ctx = NativeContext::new(MockEngine::default());
        ctx.engine().fail_call_after("convex_hull", 0);
        let geometry = Geometry::from(polygon::p0());
        let err = geometry.convex_hull(&ctx).unwrap_err();
        let GeoBridgeError::Engine(text) = err else {
            panic!("expected engine error");
        };
        assert!(text.contains("convex_hull"));
        assert_eq!(ctx.engine().live(), 0);
    }
}
