//! Core of a 2D layout-geometry checker for EDA-style layouts.
//!
//! Purpose
//! - Index axis-aligned bounding rectangles in an adaptive quadtree for fast
//!   range, point, and candidate-pair queries.
//! - Scan polygon sets for sharp angles, narrow regions, and edge crossings,
//!   using the index to prune candidate pairs.
//! - Roll the scan results into a deterministic 0-100 quality score with
//!   human-readable suggestions.
//!
//! Layout
//! - `geom`: planar primitives (points, rectangles, polygons) and the
//!   segment kernel.
//! - `spatial`: the quadtree and the id-assigning index façade.
//! - `analysis`: the three polygon scans and their report records.
//! - `process`: the processor façade and scoring.
//! - `gen`: reproducible random layouts for benches and stress tests.

pub mod analysis;
pub mod error;
pub mod gen;
pub mod geom;
pub mod process;
pub mod spatial;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::analysis::{
        IntersectionReport, NarrowDistanceReport, NarrowRegion, PolygonAnalyzer, SharpAngle,
        SharpAngleReport,
    };
    pub use crate::error::LayoutError;
    pub use crate::geom::{Point, Polygon, Rect, EPS};
    pub use crate::process::{
        Component, GeometryProcessor, LayoutAnalysis, OptimizationReport,
    };
    pub use crate::spatial::{IndexCfg, ObjectId, QuadTree, ShapeKind, SpatialIndex};
}
