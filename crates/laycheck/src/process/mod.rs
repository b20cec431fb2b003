//! Processor façade: ingestion, analysis, scoring.
//!
//! Purpose
//! - Own exactly one spatial index and one analyzer, route incoming
//!   components to both, and drive the three scans into a single scored
//!   report.
//!
//! Single-threaded by design: nothing here suspends or blocks, every
//! processor is a fully self-contained instance, and `analyze` mutates
//! nothing, so repeated runs on an unchanged processor return equal
//! records.

mod score;

pub use score::{layout_score, suggestions};

use crate::analysis::{
    IntersectionReport, NarrowDistanceReport, PolygonAnalyzer, SharpAngleReport,
};
use crate::error::LayoutError;
use crate::geom::{Polygon, Rect};
use crate::spatial::{IndexCfg, ObjectId, SpatialIndex};

/// Default sharp-angle threshold for [`GeometryProcessor::optimize`], degrees.
pub const DEFAULT_SHARP_THRESHOLD_DEG: f64 = 30.0;
/// Default narrow-distance threshold for [`GeometryProcessor::optimize`],
/// world units.
pub const DEFAULT_NARROW_THRESHOLD: f64 = 1.0;

/// Geometry accepted by [`GeometryProcessor::add_component`].
#[derive(Clone, Debug)]
pub enum Component {
    Rect(Rect),
    Polygon(Polygon),
}

impl From<Rect> for Component {
    fn from(rect: Rect) -> Self {
        Component::Rect(rect)
    }
}

impl From<Polygon> for Component {
    fn from(polygon: Polygon) -> Self {
        Component::Polygon(polygon)
    }
}

/// The three scan reports of one `analyze` run.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LayoutAnalysis {
    pub sharp_angles: SharpAngleReport,
    pub narrow_distances: NarrowDistanceReport,
    pub intersections: IntersectionReport,
}

/// `analyze` with defaults, plus the score and suggestion strings.
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizationReport {
    pub analysis: LayoutAnalysis,
    pub score: f64,
    pub suggestions: Vec<String>,
}

/// Façade owning one spatial index and one polygon analyzer.
#[derive(Clone, Debug)]
pub struct GeometryProcessor {
    index: SpatialIndex,
    analyzer: PolygonAnalyzer,
}

impl GeometryProcessor {
    pub fn new(world: Rect) -> Self {
        Self::with_cfg(world, IndexCfg::default())
    }

    pub fn with_cfg(world: Rect, cfg: IndexCfg) -> Self {
        Self {
            index: SpatialIndex::with_cfg(world, cfg),
            analyzer: PolygonAnalyzer::new(),
        }
    }

    /// Ingest a component. Rectangles go to the index only; polygons are
    /// indexed by bounding box and registered with the analyzer. On error
    /// the processor is left untouched — a component is never partially
    /// ingested.
    pub fn add_component(
        &mut self,
        component: impl Into<Component>,
    ) -> Result<ObjectId, LayoutError> {
        match component.into() {
            Component::Rect(rect) => self.index.add_rect(rect),
            Component::Polygon(polygon) => {
                let id = self.index.add_polygon(&polygon)?;
                self.analyzer.register(id, polygon);
                Ok(id)
            }
        }
    }

    #[inline]
    pub fn index(&self) -> &SpatialIndex {
        &self.index
    }

    /// Live components of either kind.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.analyzer.polygon_count()
    }

    /// Run all three scans with the given thresholds.
    pub fn analyze(&self, sharp_threshold_deg: f64, narrow_threshold: f64) -> LayoutAnalysis {
        log::debug!(
            "analyzing {} polygons ({} indexed objects)",
            self.analyzer.polygon_count(),
            self.index.len()
        );
        LayoutAnalysis {
            sharp_angles: self.analyzer.find_sharp_angles(sharp_threshold_deg),
            narrow_distances: self
                .analyzer
                .find_narrow_distances(&self.index, narrow_threshold),
            intersections: self.analyzer.find_edge_intersections(&self.index),
        }
    }

    /// [`Self::analyze`] with the default thresholds, rolled into a score
    /// and suggestion list.
    pub fn optimize(&self) -> OptimizationReport {
        let analysis = self.analyze(DEFAULT_SHARP_THRESHOLD_DEG, DEFAULT_NARROW_THRESHOLD);
        let score = layout_score(&analysis);
        let suggestions = suggestions(&analysis);
        OptimizationReport {
            analysis,
            score,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests;
