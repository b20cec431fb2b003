//! The analyzer: polygon registry plus the three scans.

use crate::geom::{closest_endpoints, segment_distance, segment_intersection, Point, Polygon};
use crate::spatial::{ObjectId, SpatialIndex};

use super::report::{
    IntersectionReport, NarrowDistanceReport, NarrowRegion, SharpAngle, SharpAngleReport,
};

/// Holds the registered polygon bodies in insertion order and runs the
/// scans against a spatial index owned elsewhere.
#[derive(Clone, Debug, Default)]
pub struct PolygonAnalyzer {
    polygons: Vec<(ObjectId, Polygon)>,
}

impl PolygonAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a polygon under the id the index assigned it. Ids must
    /// arrive in increasing order; every scan's iteration order relies on
    /// it.
    pub fn register(&mut self, id: ObjectId, polygon: Polygon) {
        debug_assert!(
            self.polygons.last().map_or(true, |(last, _)| *last < id),
            "polygon ids must be registered in increasing order"
        );
        self.polygons.push((id, polygon));
    }

    #[inline]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// The registered body for `id`, if it is a polygon this analyzer knows.
    pub fn body(&self, id: ObjectId) -> Option<&Polygon> {
        self.polygons
            .binary_search_by_key(&id, |(i, _)| *i)
            .ok()
            .map(|k| &self.polygons[k].1)
    }

    /// Scan every vertex of every polygon; a vertex is sharp iff its
    /// interior angle is strictly below `threshold_deg`. O(total vertices).
    pub fn find_sharp_angles(&self, threshold_deg: f64) -> SharpAngleReport {
        let mut report = SharpAngleReport::default();
        let mut sum = 0.0;
        for (id, polygon) in &self.polygons {
            for vertex in polygon.sharp_vertices(threshold_deg) {
                let degrees = polygon.interior_angle(vertex);
                report.sharpest = report.sharpest.min(degrees);
                sum += degrees;
                report.angles.push(SharpAngle {
                    polygon: *id,
                    vertex,
                    degrees,
                });
            }
        }
        if !report.angles.is_empty() {
            report.mean_sharp = sum / report.angles.len() as f64;
        }
        report
    }

    /// Scan for edge pairs closer than `threshold`.
    ///
    /// Inter-polygon candidates come from a range query with the polygon's
    /// bounding box expanded by the threshold in every direction; only
    /// id-ordered polygon pairs from that candidate set are examined. Every
    /// polygon is additionally scanned against itself over non-adjacent
    /// edge pairs, with the (first, last) pair skipped as adjacent.
    pub fn find_narrow_distances(
        &self,
        index: &SpatialIndex,
        threshold: f64,
    ) -> NarrowDistanceReport {
        let mut report = NarrowDistanceReport::default();
        let mut stats = DistanceStats::new();

        for (id1, poly1) in &self.polygons {
            if !index.is_polygon(*id1) {
                continue;
            }
            let query = poly1.bounding_box().expand(threshold);
            let mut candidates = index.query_region(&query);
            candidates.sort_unstable();
            candidates.dedup();
            for id2 in candidates {
                if id2 <= *id1 {
                    continue;
                }
                let Some(poly2) = self.body(id2) else {
                    continue;
                };
                for (a1, a2) in poly1.edges() {
                    for (b1, b2) in poly2.edges() {
                        examine_edge_pair(
                            (a1, a2),
                            (b1, b2),
                            threshold,
                            &mut stats,
                            &mut report.regions,
                        );
                    }
                }
            }
        }

        for (id, polygon) in &self.polygons {
            if !index.is_polygon(*id) {
                continue;
            }
            let edges: Vec<(Point, Point)> = polygon.edges().collect();
            let n = edges.len();
            for i in 0..n {
                for j in (i + 2)..n {
                    if i == 0 && j == n - 1 {
                        continue;
                    }
                    examine_edge_pair(edges[i], edges[j], threshold, &mut stats, &mut report.regions);
                }
            }
        }

        stats.fill(&mut report);
        report
    }

    /// Scan index-candidate polygon pairs for intersecting edges. A pair is
    /// listed once iff at least one edge pair intersects; every
    /// intersection point is appended in scan order.
    pub fn find_edge_intersections(&self, index: &SpatialIndex) -> IntersectionReport {
        let mut report = IntersectionReport::default();
        for (id1, poly1) in &self.polygons {
            if !index.is_polygon(*id1) {
                continue;
            }
            let mut candidates = index.query_region(&poly1.bounding_box());
            candidates.sort_unstable();
            candidates.dedup();
            for id2 in candidates {
                if id2 <= *id1 {
                    continue;
                }
                let Some(poly2) = self.body(id2) else {
                    continue;
                };
                let before = report.points.len();
                for (a1, a2) in poly1.edges() {
                    for (b1, b2) in poly2.edges() {
                        if let Some(p) = segment_intersection(a1, a2, b1, b2) {
                            report.points.push(p);
                        }
                    }
                }
                if report.points.len() > before {
                    report.pairs.push((*id1, id2));
                }
            }
        }
        report.total_points = report.points.len();
        report
    }
}

/// Running min/max/mean over every distance a narrow scan examines.
struct DistanceStats {
    min: f64,
    max: f64,
    sum: f64,
    count: usize,
}

impl DistanceStats {
    fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: 0.0,
            sum: 0.0,
            count: 0,
        }
    }

    #[inline]
    fn observe(&mut self, d: f64) {
        self.min = self.min.min(d);
        self.max = self.max.max(d);
        self.sum += d;
        self.count += 1;
    }

    fn fill(&self, report: &mut NarrowDistanceReport) {
        if self.count > 0 {
            report.min_distance = self.min;
            report.max_distance = self.max;
            report.mean_distance = self.sum / self.count as f64;
        }
    }
}

fn examine_edge_pair(
    a: (Point, Point),
    b: (Point, Point),
    threshold: f64,
    stats: &mut DistanceStats,
    regions: &mut Vec<NarrowRegion>,
) {
    let d = segment_distance(a.0, a.1, b.0, b.1);
    stats.observe(d);
    if d < threshold {
        let (p, q) = closest_endpoints(a.0, a.1, b.0, b.1);
        regions.push(NarrowRegion {
            a: p,
            b: q,
            distance: d,
        });
    }
}
