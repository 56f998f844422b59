use crate::coord::Coordinate;
use crate::datatypes::Dimension;
use crate::error::{GeoBridgeError, Result};
use crate::io::native::{
    type_id, Engine, NativeContext, NativeGeometryHandle, NativeNode, NativeParts, RawTypeId,
};
use crate::scalar::{
    AnyGeometry, Geometry, GeometryCollection, LineString, LinearRing, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon,
};

/// Read a native geometry back as a geometry of kind `C`.
///
/// Every coordinate is read through `C`'s getter. The engine's type tag selects the variant.
/// These fail with [`GeoBridgeError::Engine`]:
///
/// - a tag without a variant, such as a bare linear ring;
/// - an empty point, line string or polygon, such as the empty intersection of two disjoint
///   polygons;
/// - a native geometry that is not a valid value, such as a line string with one point.
///
/// Empty multi-geometries and collections are valid values and read back as such.
pub fn from_native<C: Coordinate, E: Engine>(
    handle: &NativeGeometryHandle<'_, E>,
    ctx: &NativeContext<E>,
) -> Result<Geometry<C>> {
    ctx.ensure_owned(handle)?;
    let node = ctx.check(ctx.engine().inspect(handle.as_raw()), "inspect")?;
    let geometry = node_to_geometry(node, ctx)?;
    ctx.succeeded();
    Ok(geometry)
}

/// Read a native geometry back with a dimension chosen at runtime.
pub fn from_native_dyn<E: Engine>(
    handle: &NativeGeometryHandle<'_, E>,
    ctx: &NativeContext<E>,
    dimension: Dimension,
) -> Result<AnyGeometry> {
    let geometry = match dimension {
        Dimension::XY => AnyGeometry::Xy(from_native(handle, ctx)?),
        Dimension::XYZ => AnyGeometry::Xyz(from_native(handle, ctx)?),
        Dimension::XYM => AnyGeometry::Xym(from_native(handle, ctx)?),
        Dimension::XYZM => AnyGeometry::Xyzm(from_native(handle, ctx)?),
    };
    Ok(geometry)
}

fn layout_error(expected: &str, type_id: RawTypeId) -> GeoBridgeError {
    GeoBridgeError::Engine(format!(
        "native geometry of type {type_id} does not have the layout of a {expected}"
    ))
}

fn empty_result(variant: &str) -> GeoBridgeError {
    GeoBridgeError::Engine(format!("engine returned an empty {variant}"))
}

fn invalid_result(variant: &'static str) -> impl Fn(GeoBridgeError) -> GeoBridgeError {
    move |err| GeoBridgeError::Engine(format!("engine returned an invalid {variant}: {err}"))
}

fn read_coords<C: Coordinate, E: Engine>(
    seq: &E::CoordSeq,
    ctx: &NativeContext<E>,
) -> Result<Vec<C>> {
    let engine = ctx.engine();
    let size = ctx.check(engine.coord_seq_size(seq), "coord_seq_size")?;
    (0..size)
        .map(|index| ctx.check(C::read_native(engine, seq, index), "coord_seq_get"))
        .collect()
}

fn node_to_geometry<C: Coordinate, E: Engine>(
    node: NativeNode<E::CoordSeq>,
    ctx: &NativeContext<E>,
) -> Result<Geometry<C>> {
    let geometry: Geometry<C> = match node.type_id {
        type_id::POINT => node_to_point(node, ctx)?.into(),
        type_id::LINE_STRING => node_to_line_string(node, ctx)?.into(),
        type_id::POLYGON => node_to_polygon(node, ctx)?.into(),
        type_id::MULTI_POINT => {
            let points = members(node, "MultiPoint")?
                .into_iter()
                .map(|member| node_to_point(member, ctx))
                .collect::<Result<Vec<_>>>()?;
            MultiPoint::new(points).into()
        }
        type_id::MULTI_LINE_STRING => {
            let line_strings = members(node, "MultiLineString")?
                .into_iter()
                .map(|member| node_to_line_string(member, ctx))
                .collect::<Result<Vec<_>>>()?;
            MultiLineString::new(line_strings).into()
        }
        type_id::MULTI_POLYGON => {
            let polygons = members(node, "MultiPolygon")?
                .into_iter()
                .map(|member| node_to_polygon(member, ctx))
                .collect::<Result<Vec<_>>>()?;
            MultiPolygon::new(polygons).into()
        }
        type_id::GEOMETRY_COLLECTION => {
            let geometries = members(node, "GeometryCollection")?
                .into_iter()
                .map(|member| node_to_geometry(member, ctx))
                .collect::<Result<Vec<_>>>()?;
            GeometryCollection::new(geometries).into()
        }
        other => {
            return Err(GeoBridgeError::Engine(format!(
                "native geometry type {other} has no geometry variant"
            )))
        }
    };
    Ok(geometry)
}

fn members<S>(node: NativeNode<S>, expected: &str) -> Result<Vec<NativeNode<S>>> {
    match node.parts {
        NativeParts::Members(members) => Ok(members),
        _ => Err(layout_error(expected, node.type_id)),
    }
}

fn node_to_point<C: Coordinate, E: Engine>(
    node: NativeNode<E::CoordSeq>,
    ctx: &NativeContext<E>,
) -> Result<Point<C>> {
    match (node.type_id, node.parts) {
        (type_id::POINT, NativeParts::Sequence(seq)) => {
            let coords = read_coords::<C, E>(&seq, ctx)?;
            match coords.as_slice() {
                [] => Err(empty_result("Point")),
                [coord] => Ok(Point::new(*coord)),
                _ => Err(GeoBridgeError::Engine(format!(
                    "native point has {} coordinates",
                    coords.len()
                ))),
            }
        }
        (type_id, _) => Err(layout_error("Point", type_id)),
    }
}

fn node_to_line_string<C: Coordinate, E: Engine>(
    node: NativeNode<E::CoordSeq>,
    ctx: &NativeContext<E>,
) -> Result<LineString<C>> {
    match (node.type_id, node.parts) {
        (type_id::LINE_STRING, NativeParts::Sequence(seq)) => {
            let coords = read_coords(&seq, ctx)?;
            if coords.is_empty() {
                return Err(empty_result("LineString"));
            }
            LineString::try_new(coords).map_err(invalid_result("LineString"))
        }
        (type_id, _) => Err(layout_error("LineString", type_id)),
    }
}

fn node_to_polygon<C: Coordinate, E: Engine>(
    node: NativeNode<E::CoordSeq>,
    ctx: &NativeContext<E>,
) -> Result<Polygon<C>> {
    match (node.type_id, node.parts) {
        (type_id::POLYGON, NativeParts::Rings(rings)) => {
            let rings = rings
                .iter()
                .map(|seq| read_coords(seq, ctx))
                .collect::<Result<Vec<Vec<C>>>>()?;
            // an empty polygon has no rings or an empty exterior
            if rings.first().map_or(true, Vec::is_empty) {
                return Err(empty_result("Polygon"));
            }
            let rings = rings
                .into_iter()
                .map(LinearRing::try_new)
                .collect::<Result<Vec<_>>>()
                .map_err(invalid_result("Polygon"))?;
            Polygon::try_from_rings(rings).map_err(invalid_result("Polygon"))
        }
        (type_id, _) => Err(layout_error("Polygon", type_id)),
    }
}
