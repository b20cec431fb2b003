use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

/// The single numeric tolerance used throughout the core, in world units.
///
/// Policy
/// - One constant, no higher-precision fallback. Point equality, hashing,
///   colinearity checks, and degenerate-segment detection all go through it.
pub const EPS: f64 = 1e-10;

/// 2D point. Equality is tolerant (`|Δ| < EPS` per axis) and the hash
/// quantizes to the same grid so equal points hash alike.
#[derive(Clone, Copy, Debug)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Vector from `self` to `other`.
    #[inline]
    pub fn vector_to(self, other: Point) -> Vector2<f64> {
        Vector2::new(other.x - self.x, other.y - self.y)
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        self.vector_to(other).norm()
    }

    /// Distance to the closed segment `a`-`b`: project onto the carrier
    /// line, clamp the parameter to [0, 1], measure to the clamped point.
    /// A degenerate segment (`|b - a|² < EPS`) degrades to `distance_to(a)`.
    pub fn distance_to_segment(self, a: Point, b: Point) -> f64 {
        let ab = a.vector_to(b);
        let len_sq = ab.norm_squared();
        if len_sq < EPS {
            return self.distance_to(a);
        }
        let t = (a.vector_to(self).dot(&ab) / len_sq).clamp(0.0, 1.0);
        let closest = Point::new(a.x + t * ab.x, a.y + t * ab.y);
        self.distance_to(closest)
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPS && (self.y - other.y).abs() < EPS
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        quantize(self.x).hash(state);
        quantize(self.y).hash(state);
    }
}

/// Round onto the EPS grid; keeps the hash consistent with the tolerant
/// equality (up to grid-boundary cases, which the equality itself has too).
#[inline]
fn quantize(v: f64) -> i64 {
    (v / EPS).round() as i64
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}
