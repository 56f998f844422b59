//! [`Engine`] backed by GEOS.

use std::cell::RefCell;

use geos::{CoordDimensions, CoordSeq, Geom, GeometryTypes};

use crate::algorithm::native::{BinaryOperation, UnaryOperation};
use crate::io::native::{type_id, Engine, NativeNode, NativeParts, Ordinate, RawTypeId};

/// GEOS through the `geos` crate.
///
/// GEOS sequences are two or three ordinates wide and store no measure. Writing
/// [`Ordinate::M`] fails, so XYM and XYZM geometries cannot be sent to GEOS. Reading
/// [`Ordinate::M`] returns NaN, as for any ordinate a sequence does not store.
#[derive(Debug, Default)]
pub struct GeosEngine {
    last_error: RefCell<Option<String>>,
}

impl GeosEngine {
    pub fn new() -> Self {
        Self::default()
    }

    fn sentinel<T>(&self, result: geos::GResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                *self.last_error.borrow_mut() = Some(err.to_string());
                None
            }
        }
    }

    fn inspect_geometry<G: Geom>(&self, geometry: &G) -> geos::GResult<NativeNode<CoordSeq>> {
        let node = match geometry.geometry_type() {
            GeometryTypes::Point => NativeNode {
                type_id: type_id::POINT,
                parts: NativeParts::Sequence(geometry.get_coord_seq()?),
            },
            GeometryTypes::LineString => NativeNode {
                type_id: type_id::LINE_STRING,
                parts: NativeParts::Sequence(geometry.get_coord_seq()?),
            },
            GeometryTypes::LinearRing => NativeNode {
                type_id: type_id::LINEAR_RING,
                parts: NativeParts::Sequence(geometry.get_coord_seq()?),
            },
            GeometryTypes::Polygon => {
                let mut rings = vec![geometry.get_exterior_ring()?.get_coord_seq()?];
                for i in 0..geometry.get_num_interior_rings()? {
                    let i = u32::try_from(i)
                        .map_err(|err| geos::Error::GenericError(err.to_string()))?;
                    rings.push(geometry.get_interior_ring_n(i)?.get_coord_seq()?);
                }
                NativeNode {
                    type_id: type_id::POLYGON,
                    parts: NativeParts::Rings(rings),
                }
            }
            GeometryTypes::MultiPoint => self.inspect_members(geometry, type_id::MULTI_POINT)?,
            GeometryTypes::MultiLineString => {
                self.inspect_members(geometry, type_id::MULTI_LINE_STRING)?
            }
            GeometryTypes::MultiPolygon => {
                self.inspect_members(geometry, type_id::MULTI_POLYGON)?
            }
            GeometryTypes::GeometryCollection => {
                self.inspect_members(geometry, type_id::GEOMETRY_COLLECTION)?
            }
            other => {
                return Err(geos::Error::GenericError(format!(
                    "unsupported GEOS geometry type {other:?}"
                )))
            }
        };
        Ok(node)
    }

    fn inspect_members<G: Geom>(
        &self,
        geometry: &G,
        type_id: RawTypeId,
    ) -> geos::GResult<NativeNode<CoordSeq>> {
        let members = (0..geometry.get_num_geometries()?)
            .map(|i| self.inspect_geometry(&geometry.get_geometry_n(i)?))
            .collect::<geos::GResult<Vec<_>>>()?;
        Ok(NativeNode {
            type_id,
            parts: NativeParts::Members(members),
        })
    }
}

impl Engine for GeosEngine {
    type Geometry = geos::Geometry;
    type CoordSeq = CoordSeq;

    fn last_error(&self) -> Option<String> {
        self.last_error.borrow_mut().take()
    }

    fn coord_seq_create(&self, size: usize, width: usize) -> Option<CoordSeq> {
        let dims = if width >= 3 {
            CoordDimensions::ThreeD
        } else {
            CoordDimensions::TwoD
        };
        let size = self.sentinel(
            u32::try_from(size).map_err(|err| geos::Error::GenericError(err.to_string())),
        )?;
        self.sentinel(CoordSeq::new(size, dims))
    }

    fn coord_seq_size(&self, seq: &CoordSeq) -> Option<usize> {
        self.sentinel(seq.size())
    }

    fn coord_seq_set(
        &self,
        seq: &mut CoordSeq,
        index: usize,
        ordinate: Ordinate,
        value: f64,
    ) -> bool {
        let result = match ordinate {
            Ordinate::X => seq.set_x(index, value),
            Ordinate::Y => seq.set_y(index, value),
            Ordinate::Z => seq.set_z(index, value),
            Ordinate::M => Err(geos::Error::GenericError(
                "GEOS coordinate sequences do not store M".to_string(),
            )),
        };
        self.sentinel(result).is_some()
    }

    fn coord_seq_get(&self, seq: &CoordSeq, index: usize, ordinate: Ordinate) -> Option<f64> {
        match ordinate {
            Ordinate::X => self.sentinel(seq.get_x(index)),
            Ordinate::Y => self.sentinel(seq.get_y(index)),
            // GEOS reads an unset or absent Z as NaN.
            Ordinate::Z => self.sentinel(seq.get_z(index)),
            Ordinate::M => Some(f64::NAN),
        }
    }

    fn create_point(&self, seq: CoordSeq) -> Option<geos::Geometry> {
        self.sentinel(geos::Geometry::create_point(seq))
    }

    fn create_line_string(&self, seq: CoordSeq) -> Option<geos::Geometry> {
        self.sentinel(geos::Geometry::create_line_string(seq))
    }

    fn create_linear_ring(&self, seq: CoordSeq) -> Option<geos::Geometry> {
        self.sentinel(geos::Geometry::create_linear_ring(seq))
    }

    fn create_polygon(
        &self,
        shell: geos::Geometry,
        holes: Vec<geos::Geometry>,
    ) -> Option<geos::Geometry> {
        self.sentinel(geos::Geometry::create_polygon(shell, holes))
    }

    fn create_collection(
        &self,
        type_id: RawTypeId,
        parts: Vec<geos::Geometry>,
    ) -> Option<geos::Geometry> {
        let result = match type_id {
            type_id::MULTI_POINT => geos::Geometry::create_multipoint(parts),
            type_id::MULTI_LINE_STRING => geos::Geometry::create_multiline_string(parts),
            type_id::MULTI_POLYGON => geos::Geometry::create_multipolygon(parts),
            type_id::GEOMETRY_COLLECTION => geos::Geometry::create_geometry_collection(parts),
            other => Err(geos::Error::GenericError(format!(
                "type {other} is not a collection type"
            ))),
        };
        self.sentinel(result)
    }

    fn inspect(&self, geometry: &geos::Geometry) -> Option<NativeNode<CoordSeq>> {
        let node = self.inspect_geometry(geometry);
        self.sentinel(node)
    }

    fn destroy(&self, geometry: geos::Geometry) {
        drop(geometry);
    }

    fn unary(&self, op: &UnaryOperation, geometry: &geos::Geometry) -> Option<geos::Geometry> {
        let result = match *op {
            UnaryOperation::ConvexHull => geometry.convex_hull(),
            UnaryOperation::Envelope => geometry.envelope(),
            UnaryOperation::Boundary => geometry.boundary(),
            UnaryOperation::Centroid => geometry.get_centroid(),
            UnaryOperation::PointOnSurface => geometry.point_on_surface(),
            UnaryOperation::UnaryUnion => geometry.unary_union(),
            UnaryOperation::Buffer {
                width,
                quadrant_segments,
            } => geometry.buffer(width, quadrant_segments),
            UnaryOperation::Simplify { tolerance } => geometry.simplify(tolerance),
            UnaryOperation::ClipByRect {
                xmin,
                ymin,
                xmax,
                ymax,
            } => geometry.clip_by_rect(xmin, ymin, xmax, ymax),
            UnaryOperation::Polygonize => {
                geos::Geometry::polygonize(std::slice::from_ref(geometry))
            }
        };
        self.sentinel(result)
    }

    fn binary(
        &self,
        op: &BinaryOperation,
        a: &geos::Geometry,
        b: &geos::Geometry,
    ) -> Option<geos::Geometry> {
        let result = match *op {
            BinaryOperation::Intersection => a.intersection(b),
            BinaryOperation::Union => a.union(b),
            BinaryOperation::Difference => a.difference(b),
            BinaryOperation::SymDifference => a.sym_difference(b),
            BinaryOperation::Snap { tolerance } => a.snap(b, tolerance),
        };
        self.sentinel(result)
    }

    fn distance(&self, a: &geos::Geometry, b: &geos::Geometry) -> Option<f64> {
        self.sentinel(a.distance(b))
    }
}
