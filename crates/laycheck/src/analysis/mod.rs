//! Polygon scans: sharp angles, narrow regions, edge intersections.
//!
//! Purpose
//! - Run the three geometric analyses over the registered polygon set,
//!   cooperating with the spatial index to keep pairwise work near-linear
//!   in the number of close pairs.
//!
//! Determinism
//! - Polygons iterate by ascending id, edges by ascending vertex index, and
//!   candidate ids are sorted before pairing, so reported lists are
//!   byte-identical across runs on the same input.

mod analyzer;
mod report;

pub use analyzer::PolygonAnalyzer;
pub use report::{
    IntersectionReport, NarrowDistanceReport, NarrowRegion, SharpAngle, SharpAngleReport,
};
