//! Signed polygon area from ordered vertex lists.
//!
//! Pipeline
//! - `parse`: delimited text rows → validated `VertexSeq` (fail-fast, no skipping).
//! - `area`: `VertexSeq` → signed area via the discretized line integral
//!   (Green's theorem on the field (−y, x)/2, a.k.a. the shoelace formula).
//!
//! Sign convention
//! - Positive for counterclockwise traversal, negative for clockwise. The
//!   integrator never takes the absolute value.

pub mod area;
pub mod error;
pub mod parse;
pub mod rand;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use area::{orientation, signed_area, signed_area_flat};
pub use error::{PolyAreaError, Result};
pub use parse::{parse_vertices, read_vertices, split_record};
pub use types::{Orientation, ParseCfg, Segment, Vec2, VertexSeq};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::area::{orientation, signed_area, signed_area_flat};
    pub use crate::parse::{parse_vertices, read_vertices};
    pub use crate::rand::{draw_polygon_radial, RadialCfg, ReplayToken, VertexCount};
    pub use crate::types::{Orientation, ParseCfg, Segment, Vec2, VertexSeq};
    pub use crate::{PolyAreaError, Result};
}
