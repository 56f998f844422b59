use crate::coord::Coordinate;
use crate::scalar::LineString;

/// A set of line strings.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLineString<C> {
    line_strings: Vec<LineString<C>>,
}

impl<C: Coordinate> MultiLineString<C> {
    pub fn new(line_strings: Vec<LineString<C>>) -> Self {
        Self { line_strings }
    }

    pub fn line_strings(&self) -> &[LineString<C>] {
        &self.line_strings
    }

    pub fn num_line_strings(&self) -> usize {
        self.line_strings.len()
    }

    pub fn into_inner(self) -> Vec<LineString<C>> {
        self.line_strings
    }

    /// Convert to another coordinate kind, filling missing ordinates with `fill`.
    pub fn convert<T: Coordinate>(&self, fill: f64) -> MultiLineString<T> {
        MultiLineString::new(
            self.line_strings
                .iter()
                .map(|ls| ls.convert(fill))
                .collect(),
        )
    }
}
