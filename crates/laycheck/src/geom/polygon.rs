use crate::error::LayoutError;

use super::point::{Point, EPS};
use super::rect::Rect;

/// Closed simple polygon: ordered vertices, the edge from the last vertex
/// back to the first is implicit. Simplicity is assumed, not enforced.
///
/// The vertex list is private: once constructed, the count never drops
/// below 3 and every coordinate is finite.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Validated construction: at least 3 vertices, all finite.
    pub fn new(vertices: Vec<Point>) -> Result<Self, LayoutError> {
        if vertices.len() < 3 {
            return Err(LayoutError::TooFewVertices {
                got: vertices.len(),
            });
        }
        if let Some(p) = vertices.iter().find(|p| !p.is_finite()) {
            return Err(LayoutError::NonFiniteCoordinate { x: p.x, y: p.y });
        }
        Ok(Self { vertices })
    }

    /// Caller guarantees at least 3 finite vertices.
    pub fn new_unchecked(vertices: Vec<Point>) -> Self {
        debug_assert!(vertices.len() >= 3, "polygon needs >= 3 vertices");
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Edges as (start, end) pairs in vertex order; the closing edge
    /// (last, first) comes last.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Smallest axis-aligned rectangle containing every vertex.
    pub fn bounding_box(&self) -> Rect {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for v in &self.vertices {
            min_x = min_x.min(v.x);
            min_y = min_y.min(v.y);
            max_x = max_x.max(v.x);
            max_y = max_y.max(v.y);
        }
        Rect {
            x: min_x,
            y: min_y,
            width: max_x - min_x,
            height: max_y - min_y,
        }
    }

    /// Shoelace area, magnitude halved.
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        let mut acc = 0.0;
        for i in 0..n {
            let a = self.vertices[i].to_vector();
            let b = self.vertices[(i + 1) % n].to_vector();
            acc += a.perp(&b);
        }
        acc.abs() / 2.0
    }

    /// Convex iff the consecutive cross products that are conclusive
    /// (|cross| > EPS) all share one sign. A triangle is always convex.
    pub fn is_convex(&self) -> bool {
        let n = self.vertices.len();
        let mut sign: Option<bool> = None;
        for i in 0..n {
            let o = self.vertices[i];
            let a = self.vertices[(i + 1) % n];
            let b = self.vertices[(i + 2) % n];
            let cross = o.vector_to(a).perp(&o.vector_to(b));
            if cross.abs() > EPS {
                let positive = cross > 0.0;
                match sign {
                    None => sign = Some(positive),
                    Some(s) if s != positive => return false,
                    Some(_) => {}
                }
            }
        }
        true
    }

    /// Ray casting in the +x direction; a point within EPS of any edge
    /// counts as inside.
    pub fn contains_point(&self, p: Point) -> bool {
        for (a, b) in self.edges() {
            if p.distance_to_segment(a, b) < EPS {
                return true;
            }
        }
        let n = self.vertices.len();
        let mut inside = false;
        let mut a = self.vertices[0];
        for i in 1..=n {
            let b = self.vertices[i % n];
            if p.y > a.y.min(b.y) && p.y <= a.y.max(b.y) && p.x <= a.x.max(b.x) {
                // The y-window is empty for horizontal edges, so b.y != a.y.
                let x_cross = (p.y - a.y) * (b.x - a.x) / (b.y - a.y) + a.x;
                if (a.x - b.x).abs() < EPS || p.x <= x_cross {
                    inside = !inside;
                }
            }
            a = b;
        }
        inside
    }

    /// Interior angle at vertex `i` in degrees, in [0, 180].
    ///
    /// Computed from the atan2 of the two edge vectors leaving the vertex,
    /// folded so the winding direction (CW vs CCW) does not change the
    /// result.
    pub fn interior_angle(&self, i: usize) -> f64 {
        let n = self.vertices.len();
        let prev = self.vertices[(i + n - 1) % n];
        let curr = self.vertices[i];
        let next = self.vertices[(i + 1) % n];
        let v1 = curr.vector_to(prev);
        let v2 = curr.vector_to(next);
        let mut deg = v1.perp(&v2).atan2(v1.dot(&v2)).to_degrees();
        if deg < 0.0 {
            deg += 360.0;
        }
        if deg > 180.0 {
            deg = 360.0 - deg;
        }
        deg
    }

    /// Indices of vertices whose interior angle is strictly below
    /// `threshold_deg`.
    pub fn sharp_vertices(&self, threshold_deg: f64) -> Vec<usize> {
        (0..self.vertices.len())
            .filter(|&i| self.interior_angle(i) < threshold_deg)
            .collect()
    }
}
