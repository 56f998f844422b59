use crate::coord::Coordinate;
use crate::error::Result;
use crate::io::native::{type_id, Engine, NativeContext, NativeGeometryHandle, RawTypeId};
use crate::scalar::{
    Geometry, GeometryCollection, LineString, LinearRing, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon,
};

/// Build the native equivalent of `geometry`.
///
/// Sequences are allocated [`Coordinate::NATIVE_WIDTH`] ordinates wide and filled through the
/// coordinate kind's own setter. Every intermediate native object is owned by a handle until
/// it is consumed by its parent, so nothing leaks when a call fails midway.
pub fn to_native<'ctx, C: Coordinate, E: Engine>(
    geometry: &Geometry<C>,
    ctx: &'ctx NativeContext<E>,
) -> Result<NativeGeometryHandle<'ctx, E>> {
    let handle = geometry_to_native(geometry, ctx)?;
    ctx.succeeded();
    Ok(handle)
}

fn geometry_to_native<'ctx, C: Coordinate, E: Engine>(
    geometry: &Geometry<C>,
    ctx: &'ctx NativeContext<E>,
) -> Result<NativeGeometryHandle<'ctx, E>> {
    match geometry {
        Geometry::Point(g) => point_to_native(g, ctx),
        Geometry::LineString(g) => line_string_to_native(g, ctx),
        Geometry::Polygon(g) => polygon_to_native(g, ctx),
        Geometry::MultiPoint(g) => multi_point_to_native(g, ctx),
        Geometry::MultiLineString(g) => multi_line_string_to_native(g, ctx),
        Geometry::MultiPolygon(g) => multi_polygon_to_native(g, ctx),
        Geometry::GeometryCollection(g) => geometry_collection_to_native(g, ctx),
    }
}

fn coords_to_native<C: Coordinate, E: Engine>(
    coords: &[C],
    ctx: &NativeContext<E>,
) -> Result<E::CoordSeq> {
    let engine = ctx.engine();
    let mut seq = ctx.check(
        engine.coord_seq_create(coords.len(), C::NATIVE_WIDTH),
        "coord_seq_create",
    )?;
    for (index, coord) in coords.iter().enumerate() {
        ctx.check_status(coord.write_native(engine, &mut seq, index), "coord_seq_set")?;
    }
    Ok(seq)
}

fn point_to_native<'ctx, C: Coordinate, E: Engine>(
    point: &Point<C>,
    ctx: &'ctx NativeContext<E>,
) -> Result<NativeGeometryHandle<'ctx, E>> {
    let seq = coords_to_native(&[point.coord()], ctx)?;
    let raw = ctx.check(ctx.engine().create_point(seq), "create_point")?;
    Ok(ctx.wrap(raw))
}

fn line_string_to_native<'ctx, C: Coordinate, E: Engine>(
    line_string: &LineString<C>,
    ctx: &'ctx NativeContext<E>,
) -> Result<NativeGeometryHandle<'ctx, E>> {
    let seq = coords_to_native(line_string.coords(), ctx)?;
    let raw = ctx.check(ctx.engine().create_line_string(seq), "create_line_string")?;
    Ok(ctx.wrap(raw))
}

fn ring_to_native<'ctx, C: Coordinate, E: Engine>(
    ring: &LinearRing<C>,
    ctx: &'ctx NativeContext<E>,
) -> Result<NativeGeometryHandle<'ctx, E>> {
    let seq = coords_to_native(ring.coords(), ctx)?;
    let raw = ctx.check(ctx.engine().create_linear_ring(seq), "create_linear_ring")?;
    Ok(ctx.wrap(raw))
}

fn polygon_to_native<'ctx, C: Coordinate, E: Engine>(
    polygon: &Polygon<C>,
    ctx: &'ctx NativeContext<E>,
) -> Result<NativeGeometryHandle<'ctx, E>> {
    let shell = ring_to_native(polygon.exterior(), ctx)?;
    let holes = polygon
        .interiors()
        .iter()
        .map(|ring| ring_to_native(ring, ctx))
        .collect::<Result<Vec<_>>>()?;

    let raw = ctx.check(
        ctx.engine().create_polygon(
            shell.into_raw(),
            holes.into_iter().map(NativeGeometryHandle::into_raw).collect(),
        ),
        "create_polygon",
    )?;
    Ok(ctx.wrap(raw))
}

fn collection_to_native<'ctx, E: Engine>(
    type_id: RawTypeId,
    parts: Vec<NativeGeometryHandle<'ctx, E>>,
    ctx: &'ctx NativeContext<E>,
) -> Result<NativeGeometryHandle<'ctx, E>> {
    let raw = ctx.check(
        ctx.engine().create_collection(
            type_id,
            parts.into_iter().map(NativeGeometryHandle::into_raw).collect(),
        ),
        "create_collection",
    )?;
    Ok(ctx.wrap(raw))
}

fn multi_point_to_native<'ctx, C: Coordinate, E: Engine>(
    multi_point: &MultiPoint<C>,
    ctx: &'ctx NativeContext<E>,
) -> Result<NativeGeometryHandle<'ctx, E>> {
    let parts = multi_point
        .points()
        .iter()
        .map(|point| point_to_native(point, ctx))
        .collect::<Result<Vec<_>>>()?;
    collection_to_native(type_id::MULTI_POINT, parts, ctx)
}

fn multi_line_string_to_native<'ctx, C: Coordinate, E: Engine>(
    multi_line_string: &MultiLineString<C>,
    ctx: &'ctx NativeContext<E>,
) -> Result<NativeGeometryHandle<'ctx, E>> {
    let parts = multi_line_string
        .line_strings()
        .iter()
        .map(|line_string| line_string_to_native(line_string, ctx))
        .collect::<Result<Vec<_>>>()?;
    collection_to_native(type_id::MULTI_LINE_STRING, parts, ctx)
}

fn multi_polygon_to_native<'ctx, C: Coordinate, E: Engine>(
    multi_polygon: &MultiPolygon<C>,
    ctx: &'ctx NativeContext<E>,
) -> Result<NativeGeometryHandle<'ctx, E>> {
    let parts = multi_polygon
        .polygons()
        .iter()
        .map(|polygon| polygon_to_native(polygon, ctx))
        .collect::<Result<Vec<_>>>()?;
    collection_to_native(type_id::MULTI_POLYGON, parts, ctx)
}

fn geometry_collection_to_native<'ctx, C: Coordinate, E: Engine>(
    collection: &GeometryCollection<C>,
    ctx: &'ctx NativeContext<E>,
) -> Result<NativeGeometryHandle<'ctx, E>> {
    let parts = collection
        .geometries()
        .iter()
        .map(|geometry| geometry_to_native(geometry, ctx))
        .collect::<Result<Vec<_>>>()?;
    collection_to_native(type_id::GEOMETRY_COLLECTION, parts, ctx)
}
