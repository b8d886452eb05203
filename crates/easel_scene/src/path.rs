//! Sampled polyline paths

use smallvec::SmallVec;

use crate::geometry::Point;

/// A polyline sampled from a continuous curve.
///
/// Segment count and ordering are fixed once built; animation rewrites
/// coordinates in place through [`segments_mut`](SampledPath::segments_mut).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampledPath {
    segments: SmallVec<[Point; 16]>,
}

impl SampledPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            segments: points.into_iter().collect(),
        }
    }

    /// Append a segment point to the end of the path
    pub fn push(&mut self, point: Point) {
        self.segments.push(point);
    }

    pub fn segments(&self) -> &[Point] {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> &mut [Point] {
        &mut self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}
