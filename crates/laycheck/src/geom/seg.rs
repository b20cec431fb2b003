//! Segment kernel: orientation tests and segment-segment predicates.
//!
//! The crossing predicate and the intersection-point computation agree
//! whenever the inputs are not colinear: `segments_cross` is true iff
//! `segment_intersection` returns a point, endpoint touches included.
//! Colinear overlap is the one split: the predicate reports the touch while
//! the parametric solve has no unique point and returns `None`.

use super::point::{Point, EPS};

/// Orientation of the ordered triplet (p, q, r). The cross product is
/// conclusive only beyond EPS; smaller magnitudes are colinear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Colinear,
    Clockwise,
    CounterClockwise,
}

#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let val = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if val.abs() < EPS {
        Orientation::Colinear
    } else if val > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// For colinear (p, q, r): does q lie within the bounding box of p-r?
#[inline]
fn on_segment(p: Point, q: Point, r: Point) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Fast crossing predicate: four orientation tests plus the colinear
/// containment special cases. Endpoint touches cross.
pub fn segments_cross(a1: Point, a2: Point, b1: Point, b2: Point) -> bool {
    let o1 = orientation(a1, a2, b1);
    let o2 = orientation(a1, a2, b2);
    let o3 = orientation(b1, b2, a1);
    let o4 = orientation(b1, b2, a2);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Colinear && on_segment(a1, b1, a2))
        || (o2 == Orientation::Colinear && on_segment(a1, b2, a2))
        || (o3 == Orientation::Colinear && on_segment(b1, a1, b2))
        || (o4 == Orientation::Colinear && on_segment(b1, a2, b2))
}

/// Intersection point of the closed segments a1-a2 and b1-b2, if the
/// parametric solution lies in [0, 1] × [0, 1]. Parallel and colinear
/// inputs (|denominator| < EPS) yield `None`.
pub fn segment_intersection(a1: Point, a2: Point, b1: Point, b2: Point) -> Option<Point> {
    let denom = (a1.x - a2.x) * (b1.y - b2.y) - (a1.y - a2.y) * (b1.x - b2.x);
    if denom.abs() < EPS {
        return None;
    }
    let t = ((a1.x - b1.x) * (b1.y - b2.y) - (a1.y - b1.y) * (b1.x - b2.x)) / denom;
    let u = -((a1.x - a2.x) * (a1.y - b1.y) - (a1.y - a2.y) * (a1.x - b1.x)) / denom;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(Point::new(
            a1.x + t * (a2.x - a1.x),
            a1.y + t * (a2.y - a1.y),
        ))
    } else {
        None
    }
}

/// Minimum distance between two closed segments.
///
/// Crossing segments are at distance 0. Otherwise the minimum is taken over
/// the four endpoint-to-opposite-segment distances, which is exact when the
/// closest points lie at an endpoint and may under-estimate by the
/// projection offset for nearly parallel segments.
pub fn segment_distance(a1: Point, a2: Point, b1: Point, b2: Point) -> f64 {
    if segments_cross(a1, a2, b1, b2) {
        return 0.0;
    }
    [
        a1.distance_to_segment(b1, b2),
        a2.distance_to_segment(b1, b2),
        b1.distance_to_segment(a1, a2),
        b2.distance_to_segment(a1, a2),
    ]
    .into_iter()
    .fold(f64::INFINITY, f64::min)
}

/// Endpoint pair (one per segment) at minimum point-to-point distance.
/// Scanned in the fixed order (a1,b1), (a1,b2), (a2,b1), (a2,b2); the first
/// minimum wins. No interior-projection point is ever reported.
pub fn closest_endpoints(a1: Point, a2: Point, b1: Point, b2: Point) -> (Point, Point) {
    let mut best = (a1, b1);
    let mut best_d = a1.distance_to(b1);
    for (p, q) in [(a1, b2), (a2, b1), (a2, b2)] {
        let d = p.distance_to(q);
        if d < best_d {
            best_d = d;
            best = (p, q);
        }
    }
    best
}
