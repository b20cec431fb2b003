use crate::error::LayoutError;

use super::point::Point;
use super::polygon::Polygon;

/// Axis-aligned rectangle: origin plus non-negative extents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Validated construction: rejects non-finite input and negative extents.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, LayoutError> {
        if !x.is_finite() || !y.is_finite() {
            return Err(LayoutError::NonFiniteCoordinate { x, y });
        }
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(LayoutError::NegativeExtent { width, height });
        }
        Ok(Self { x, y, width, height })
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Closed containment: the boundary belongs to the rectangle.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        self.left() <= p.x && p.x <= self.right() && self.bottom() <= p.y && p.y <= self.top()
    }

    /// Closed overlap test: true iff neither rectangle lies strictly to one
    /// side of the other, so touching edges count as intersecting.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        !(self.right() < other.left()
            || other.right() < self.left()
            || self.top() < other.bottom()
            || other.top() < self.bottom())
    }

    /// Closed containment of a whole rectangle.
    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.left() <= other.left()
            && other.right() <= self.right()
            && self.bottom() <= other.bottom()
            && other.top() <= self.top()
    }

    /// Grow by `margin` in every direction (negative margins shrink).
    #[inline]
    pub fn expand(&self, margin: f64) -> Rect {
        Rect {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + 2.0 * margin,
            height: self.height + 2.0 * margin,
        }
    }

    /// The four corners as a CCW polygon, starting at bottom-left.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new_unchecked(vec![
            Point::new(self.left(), self.bottom()),
            Point::new(self.right(), self.bottom()),
            Point::new(self.right(), self.top()),
            Point::new(self.left(), self.top()),
        ])
    }
}
