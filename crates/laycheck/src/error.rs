//! Error taxonomy for construction and ingestion.
//!
//! InvalidArgument conditions (`TooFewVertices`, `NonFiniteCoordinate`,
//! `NegativeExtent`) are raised at the construction site and keep the object
//! out of the system entirely. `OutOfBounds` is a soft refusal: the insert
//! is declined, the id counter is untouched, and the caller may continue.

use thiserror::Error;

use crate::geom::Rect;

/// Errors surfaced by primitive construction and component ingestion.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum LayoutError {
    /// Polygon constructed with fewer than 3 vertices.
    #[error("polygon must have at least 3 vertices, got {got}")]
    TooFewVertices { got: usize },

    /// NaN or infinite coordinate anywhere in the input.
    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    /// Rectangle with a negative (or non-finite) extent.
    #[error("rectangle extents must be non-negative: width={width}, height={height}")]
    NegativeExtent { width: f64, height: f64 },

    /// Soft refusal: the object's bounding box misses the world rectangle.
    #[error("bounding box {bbox:?} does not intersect world {world:?}")]
    OutOfBounds { bbox: Rect, world: Rect },
}
