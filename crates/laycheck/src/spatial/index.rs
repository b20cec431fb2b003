//! Id-assigning façade over the quadtree.

use crate::error::LayoutError;
use crate::geom::{Point, Polygon, Rect};

use super::quadtree::{IndexCfg, ObjectId, QuadTree};

/// What an id refers to. Polygon bodies are held by the analyzer; the index
/// keeps only the bounding rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Rect,
    Polygon,
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    bbox: Rect,
    kind: ShapeKind,
    removed: bool,
}

/// Spatial index façade: assigns ids, tracks per-id state, and filters
/// stale handles out of everything it returns.
#[derive(Clone, Debug)]
pub struct SpatialIndex {
    tree: QuadTree,
    entries: Vec<Entry>,
}

impl SpatialIndex {
    pub fn new(world: Rect) -> Self {
        Self::with_cfg(world, IndexCfg::default())
    }

    pub fn with_cfg(world: Rect, cfg: IndexCfg) -> Self {
        Self {
            tree: QuadTree::new(world, cfg),
            entries: Vec::new(),
        }
    }

    /// World rectangle all inserted geometry must intersect.
    #[inline]
    pub fn world(&self) -> Rect {
        self.tree.boundary()
    }

    fn add(&mut self, bbox: Rect, kind: ShapeKind) -> Result<ObjectId, LayoutError> {
        let id = ObjectId(self.entries.len());
        if !self.tree.insert(id, bbox) {
            log::debug!("insert refused: {:?} outside world {:?}", bbox, self.world());
            return Err(LayoutError::OutOfBounds {
                bbox,
                world: self.world(),
            });
        }
        self.entries.push(Entry {
            bbox,
            kind,
            removed: false,
        });
        Ok(id)
    }

    pub fn add_rect(&mut self, rect: Rect) -> Result<ObjectId, LayoutError> {
        self.add(rect, ShapeKind::Rect)
    }

    /// Index a polygon through its bounding rectangle. The body is not
    /// retained here.
    pub fn add_polygon(&mut self, polygon: &Polygon) -> Result<ObjectId, LayoutError> {
        self.add(polygon.bounding_box(), ShapeKind::Polygon)
    }

    /// Soft removal: the tree keeps the stale handle, queries filter it.
    /// Returns `false` for unknown or already-removed ids.
    pub fn remove(&mut self, id: ObjectId) -> bool {
        match self.entries.get_mut(id.0) {
            Some(e) if !e.removed => {
                e.removed = true;
                true
            }
            _ => false,
        }
    }

    #[inline]
    fn live(&self, id: ObjectId) -> bool {
        self.entries.get(id.0).is_some_and(|e| !e.removed)
    }

    pub fn bbox(&self, id: ObjectId) -> Option<Rect> {
        self.entries
            .get(id.0)
            .filter(|e| !e.removed)
            .map(|e| e.bbox)
    }

    pub fn kind(&self, id: ObjectId) -> Option<ShapeKind> {
        self.entries
            .get(id.0)
            .filter(|e| !e.removed)
            .map(|e| e.kind)
    }

    #[inline]
    pub fn is_polygon(&self, id: ObjectId) -> bool {
        self.kind(id) == Some(ShapeKind::Polygon)
    }

    /// Live ids whose stored rectangle intersects `region`.
    pub fn query_region(&self, region: &Rect) -> Vec<ObjectId> {
        self.tree
            .query_range(region)
            .into_iter()
            .map(|(id, _)| id)
            .filter(|&id| self.live(id))
            .collect()
    }

    /// Live ids whose stored rectangle contains `p`.
    pub fn query_point(&self, p: Point) -> Vec<ObjectId> {
        self.tree
            .query_point(p)
            .into_iter()
            .map(|(id, _)| id)
            .filter(|&id| self.live(id))
            .collect()
    }

    /// Bbox-proximity candidate pairs over live objects, id-ordered within
    /// each pair.
    pub fn candidate_pairs(&self) -> Vec<(ObjectId, ObjectId)> {
        self.tree
            .candidate_pairs()
            .into_iter()
            .filter(|&(a, b)| self.live(a) && self.live(b))
            .collect()
    }

    /// Live ids whose rectangle falls within `distance` of `id`'s rectangle
    /// (measured by expanding the query box in every direction).
    pub fn neighbors_within(&self, id: ObjectId, distance: f64) -> Vec<ObjectId> {
        let Some(bbox) = self.bbox(id) else {
            return Vec::new();
        };
        self.query_region(&bbox.expand(distance))
            .into_iter()
            .filter(|&other| other != id)
            .collect()
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| !e.removed).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total ids ever assigned, removed ones included.
    #[inline]
    pub fn assigned(&self) -> usize {
        self.entries.len()
    }
}
