//! Planar primitives and the segment kernel.
//!
//! Purpose
//! - Provide the value objects the rest of the crate computes with: `Point`,
//!   `Rect`, `Polygon`, plus segment-level predicates.
//! - Keep every tolerance decision on the single constant [`EPS`]; callers
//!   scale coordinates if they need more dynamic range.
//!
//! Why this design
//! - Primitives are plain `Copy`/`Clone` value objects, created by callers,
//!   copied into the index, never mutated by the core.
//! - Containment and overlap tests are closed: boundaries and touching edges
//!   count. The segment kernel agrees with itself on touches (an endpoint
//!   lying on the other segment both crosses and yields a point).

mod point;
mod polygon;
mod rect;
mod seg;

pub use point::{Point, EPS};
pub use polygon::Polygon;
pub use rect::Rect;
pub use seg::{
    closest_endpoints, orientation, segment_distance, segment_intersection, segments_cross,
    Orientation,
};
