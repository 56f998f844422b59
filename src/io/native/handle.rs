use std::fmt::Debug;

use crate::io::native::{Engine, NativeContext};

/// Exclusive owner of one native geometry.
///
/// The handle borrows the context that created it, so it can neither outlive the context nor
/// move to another one. The native geometry is released exactly once, when the handle drops,
/// unless ownership is handed back to the engine with [`NativeGeometryHandle::into_raw`].
pub struct NativeGeometryHandle<'ctx, E: Engine> {
    context: &'ctx NativeContext<E>,
    // `Some` for the whole life of the handle; emptied only by `into_raw` or `drop`
    raw: Option<E::Geometry>,
}

impl<'ctx, E: Engine> NativeGeometryHandle<'ctx, E> {
    pub(crate) fn new(context: &'ctx NativeContext<E>, raw: E::Geometry) -> Self {
        log::trace!("acquired native geometry in context {}", context.id());
        Self {
            context,
            raw: Some(raw),
        }
    }

    /// Id of the owning context.
    pub fn context_id(&self) -> u64 {
        self.context.id()
    }

    pub fn as_raw(&self) -> &E::Geometry {
        match &self.raw {
            Some(raw) => raw,
            None => unreachable!("native geometry handle used after release"),
        }
    }

    /// Give up ownership, typically to pass the geometry into an engine call that consumes
    /// it.
    pub fn into_raw(mut self) -> E::Geometry {
        match self.raw.take() {
            Some(raw) => raw,
            None => unreachable!("native geometry handle used after release"),
        }
    }
}

impl<E: Engine> Drop for NativeGeometryHandle<'_, E> {
    fn drop(&mut self) {
        if let Some(raw) = self.raw.take() {
            log::trace!("released native geometry in context {}", self.context.id());
            self.context.engine().destroy(raw);
        }
    }
}

impl<E: Engine> Debug for NativeGeometryHandle<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeGeometryHandle")
            .field("context", &self.context.id())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use crate::coord::Xy;
    use crate::io::native::{to_native, NativeContext};
    use crate::scalar::Geometry;
    use crate::test::engine::MockEngine;
    use crate::test::point;

    #[test]
    fn released_once_on_drop() {
        let ctx = NativeContext::new(MockEngine::default());
        {
            let g: Geometry<Xy> = point::p0().into();
            let _handle = to_native(&g, &ctx).unwrap();
            assert_eq!(ctx.engine().live(), 1);
        }
        assert_eq!(ctx.engine().live(), 0);
        assert_eq!(ctx.engine().destroyed(), 1);
    }

    #[test]
    fn into_raw_skips_release() {
        let ctx = NativeContext::new(MockEngine::default());
        let g: Geometry<Xy> = point::p0().into();
        let raw = to_native(&g, &ctx).unwrap().into_raw();
        assert_eq!(ctx.engine().destroyed(), 0);
        crate::io::native::Engine::destroy(ctx.engine(), raw);
        assert_eq!(ctx.engine().live(), 0);
        assert_eq!(ctx.engine().destroyed(), 1);
    }
}
