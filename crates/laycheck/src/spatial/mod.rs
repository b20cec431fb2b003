//! Spatial indexing: adaptive quadtree plus an id-assigning façade.
//!
//! Purpose
//! - Keep range, point, and candidate-pair queries sub-quadratic on layouts
//!   with highly non-uniform component densities.
//! - Hand out the monotone object ids that every downstream scan orders by.
//!
//! Why this design
//! - Nodes are exclusively owned by their parent; no back-pointers, no
//!   rebalancing. Removal is a side map on the façade, never a tree edit,
//!   so query consumers must tolerate stale handles (the façade filters
//!   them before they escape).
//! - The tree stores `(ObjectId, Rect)` pairs only. Polygon bodies live with
//!   the analyzer; the index sees them through their bounding rectangles.

mod index;
mod quadtree;

pub use index::{ShapeKind, SpatialIndex};
pub use quadtree::{IndexCfg, ObjectId, QuadTree};
