//! Area integrator.
//!
//! Model
//! - Green's theorem with the field F = (−y, x)/2 turns the enclosed area into
//!   a boundary integral. On a straight segment the integrand is linear, so the
//!   midpoint rule is exact: `(x̄·Δy − ȳ·Δx) / 2` per segment.
//! - Summing over all segments (closing one included) gives the signed area,
//!   equal to the shoelace sum `Σ (xᵢ yᵢ₊₁ − xᵢ₊₁ yᵢ) / 2`.
//!
//! Conventions
//! - Counterclockwise traversal yields a positive area, clockwise a negative one.
//!   No `abs()` is applied; callers that need the magnitude take it themselves.
//! - Total over any input: 0, 1 or 2 vertices give 0.0. No tolerance handling
//!   for coincident or collinear vertices; they contribute 0 (or rounding noise).

use crate::error::{PolyAreaError, Result};
use crate::types::{segments, Orientation, Segment, Vec2, VertexSeq};

impl Segment {
    /// Line integral of (−y, x)/2 along this segment.
    #[inline]
    pub fn integral(&self) -> f64 {
        let (x1, y1) = (self.start.x, self.start.y);
        let (x2, y2) = (self.end.x, self.end.y);
        let xavg = (x1 + x2) / 2.0;
        let yavg = (y1 + y2) / 2.0;
        let dx = x2 - x1;
        let dy = y2 - y1;
        (xavg * dy - yavg * dx) / 2.0
    }

    /// Build from two untyped endpoints; each must hold exactly `[x, y]`.
    pub fn from_flat(p1: &[f64], p2: &[f64]) -> Result<Self> {
        Ok(Self::new(point_from_flat(p1)?, point_from_flat(p2)?))
    }
}

#[inline]
fn point_from_flat(p: &[f64]) -> Result<Vec2> {
    match *p {
        [x, y] => Ok(Vec2::new(x, y)),
        _ => Err(PolyAreaError::InvalidSegment { len: p.len() }),
    }
}

/// Signed area of the closed polygon through `vertices` (in order).
///
/// Accumulates from `+0.0` (not `f64::sum`, which starts at `-0.0`), so empty
/// and single-vertex input yield positive zero.
pub fn signed_area(vertices: &[Vec2]) -> f64 {
    segments(vertices).fold(0.0, |acc, s| acc + s.integral())
}

/// Signed area of an interleaved buffer `[x0, y0, x1, y1, ...]`.
///
/// Fails with `InvalidSegment` when the buffer does not split into pairs.
pub fn signed_area_flat(coords: &[f64]) -> Result<f64> {
    let points: Vec<&[f64]> = coords.chunks(2).collect();
    let n = points.len();
    let mut area = 0.0;
    for i in 0..n {
        area += Segment::from_flat(points[i], points[(i + 1) % n])?.integral();
    }
    Ok(area)
}

/// Winding order implied by a signed area.
#[inline]
pub fn orientation(area: f64) -> Orientation {
    if area > 0.0 {
        Orientation::CounterClockwise
    } else if area < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Degenerate
    }
}

impl VertexSeq {
    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area(self.as_slice())
    }
    #[inline]
    pub fn orientation(&self) -> Orientation {
        orientation(self.signed_area())
    }
}
