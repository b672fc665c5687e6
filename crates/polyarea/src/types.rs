//! Basic 2D types for vertex sequences and the parser configuration.
//!
//! - `Vec2`: a coordinate `(x, y)`.
//! - `VertexSeq`: ordered, immutable boundary traversal.
//! - `Segment`: consecutive pair of vertices, derived on demand.
//! - `Orientation`: winding order read off the sign of the area.
//! - `ParseCfg`: delimiter and whitespace handling for the parser.

use nalgebra::Vector2;
use std::fmt;

/// Coordinate in the plane.
pub type Vec2 = Vector2<f64>;

/// Parser configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseCfg {
    /// Field separator byte (ASCII).
    pub delimiter: u8,
    /// Ignore whitespace around numeric literals.
    pub trim: bool,
}

impl Default for ParseCfg {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

/// Ordered vertex list of a closed polygon.
///
/// Invariants:
/// - Order is the traversal order of the boundary; it fixes the sign of the area.
/// - No mutable access once built. Empty sequences are allowed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexSeq {
    verts: Vec<Vec2>,
}

impl VertexSeq {
    #[inline]
    pub fn new(verts: Vec<Vec2>) -> Self {
        Self { verts }
    }
    #[inline]
    pub fn as_slice(&self) -> &[Vec2] {
        &self.verts
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }
    /// Boundary segments, closing pair included.
    pub fn segments(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        segments(&self.verts)
    }
}

impl From<Vec<Vec2>> for VertexSeq {
    fn from(verts: Vec<Vec2>) -> Self {
        Self::new(verts)
    }
}

impl FromIterator<Vec2> for VertexSeq {
    fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<(f64, f64)> for VertexSeq {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        iter.into_iter().map(|(x, y)| Vec2::new(x, y)).collect()
    }
}

/// Directed boundary segment `start → end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    #[inline]
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }
}

/// N segments for N ≥ 1 vertices; the last one closes back to vertex 0.
pub fn segments(verts: &[Vec2]) -> impl ExactSizeIterator<Item = Segment> + '_ {
    let n = verts.len();
    (0..n).map(move |i| Segment::new(verts[i], verts[(i + 1) % n]))
}

/// Winding order of a vertex sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    /// Zero (or NaN) area: fewer than 3 vertices, collinear, or cancelling loops.
    Degenerate,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::CounterClockwise => "counterclockwise",
            Orientation::Clockwise => "clockwise",
            Orientation::Degenerate => "degenerate",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_wrap_around() {
        let seq: VertexSeq = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)].into_iter().collect();
        let segs: Vec<_> = seq.segments().collect();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[2].start, Vec2::new(0.0, 1.0));
        assert_eq!(segs[2].end, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn segments_of_tiny_sequences() {
        assert_eq!(segments(&[]).len(), 0);
        let one = [Vec2::new(2.0, 3.0)];
        let segs: Vec<_> = segments(&one).collect();
        assert_eq!(segs, vec![Segment::new(one[0], one[0])]);
    }

    #[test]
    fn default_cfg_is_comma_trimmed() {
        let cfg = ParseCfg::default();
        assert_eq!(cfg.delimiter, b',');
        assert!(cfg.trim);
    }
}
