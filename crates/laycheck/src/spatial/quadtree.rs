//! Region quadtree over (handle, bounding rectangle) pairs.

use crate::geom::{Point, Rect};

/// Opaque handle for indexed objects, assigned monotonically by the owning
/// index starting at 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub usize);

/// Node split policy.
#[derive(Clone, Copy, Debug)]
pub struct IndexCfg {
    /// Items a node may hold before it subdivides.
    pub capacity: usize,
    /// Remaining subdivision budget; 0 disables further splits.
    pub max_depth: usize,
}

impl Default for IndexCfg {
    fn default() -> Self {
        Self {
            capacity: 10,
            max_depth: 8,
        }
    }
}

#[derive(Clone, Debug)]
struct Node {
    boundary: Rect,
    cfg: IndexCfg,
    items: Vec<(ObjectId, Rect)>,
    /// NW, NE, SW, SE once subdivided.
    children: Option<Box<[Node; 4]>>,
}

impl Node {
    fn new(boundary: Rect, cfg: IndexCfg) -> Self {
        Self {
            boundary,
            cfg,
            items: Vec::new(),
            children: None,
        }
    }

    /// Cut at the midpoint into four equal-area quadrants. Items already
    /// stored here stay here.
    fn subdivide(&mut self) {
        if self.children.is_some() {
            return;
        }
        let (x, y) = (self.boundary.x, self.boundary.y);
        let w = self.boundary.width / 2.0;
        let h = self.boundary.height / 2.0;
        let child_cfg = IndexCfg {
            capacity: self.cfg.capacity,
            max_depth: self.cfg.max_depth - 1,
        };
        let quadrant = |qx: f64, qy: f64| {
            Node::new(
                Rect {
                    x: qx,
                    y: qy,
                    width: w,
                    height: h,
                },
                child_cfg,
            )
        };
        self.children = Some(Box::new([
            quadrant(x, y + h),     // NW
            quadrant(x + w, y + h), // NE
            quadrant(x, y),         // SW
            quadrant(x + w, y),     // SE
        ]));
    }

    fn insert(&mut self, id: ObjectId, bbox: Rect) -> bool {
        if !self.boundary.intersects(&bbox) {
            return false;
        }
        if self.children.is_none() && self.items.len() < self.cfg.capacity {
            self.items.push((id, bbox));
            return true;
        }
        if self.children.is_none() && self.cfg.max_depth > 0 {
            self.subdivide();
        }
        if let Some(children) = self.children.as_mut() {
            // A child accepts only what fits entirely inside its boundary;
            // point queries prune by child boundary, so a box leaking out of
            // its node would become unreachable.
            for child in children.iter_mut() {
                if child.boundary.contains_rect(&bbox) {
                    return child.insert(id, bbox);
                }
            }
            // Straddles the child boundaries: keep it at this level.
            self.items.push((id, bbox));
        } else {
            // Depth budget exhausted: the leaf stacks beyond capacity.
            log::debug!(
                "quadtree leaf at depth limit stacking {:?} ({} already held)",
                id,
                self.items.len()
            );
            self.items.push((id, bbox));
        }
        true
    }

    fn query_range(&self, range: &Rect, out: &mut Vec<(ObjectId, Rect)>) {
        if !self.boundary.intersects(range) {
            return;
        }
        for &(id, bbox) in &self.items {
            if bbox.intersects(range) {
                out.push((id, bbox));
            }
        }
        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.query_range(range, out);
            }
        }
    }

    fn query_point(&self, p: Point, out: &mut Vec<(ObjectId, Rect)>) {
        if !self.boundary.contains_point(p) {
            return;
        }
        for &(id, bbox) in &self.items {
            if bbox.contains_point(p) {
                out.push((id, bbox));
            }
        }
        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.query_point(p, out);
            }
        }
    }

    fn collect(&self, out: &mut Vec<(ObjectId, Rect)>) {
        out.extend_from_slice(&self.items);
        if let Some(children) = self.children.as_deref() {
            for child in children {
                child.collect(out);
            }
        }
    }
}

/// Adaptive 4-way spatial index over bounding rectangles.
///
/// Insertion protocol per node: refuse if the box misses the boundary;
/// store here while under capacity and unsplit; otherwise subdivide (depth
/// budget permitting) and hand the box to the first child that fully
/// contains it, in the fixed NW, NE, SW, SE order; stack at this node when
/// the box straddles the children or the depth budget is gone.
#[derive(Clone, Debug)]
pub struct QuadTree {
    root: Node,
    len: usize,
}

impl QuadTree {
    pub fn new(boundary: Rect, cfg: IndexCfg) -> Self {
        Self {
            root: Node::new(boundary, cfg),
            len: 0,
        }
    }

    /// World rectangle the tree covers.
    #[inline]
    pub fn boundary(&self) -> Rect {
        self.root.boundary
    }

    /// Insert a handle under its bounding rectangle. `false` means the box
    /// does not intersect the tree boundary; nothing is stored and the
    /// object counter stays put.
    pub fn insert(&mut self, id: ObjectId, bbox: Rect) -> bool {
        let accepted = self.root.insert(id, bbox);
        if accepted {
            self.len += 1;
        }
        accepted
    }

    /// Every stored pair whose rectangle intersects `range` (closed test).
    /// Repeated calls on an unchanged tree return identical vectors.
    pub fn query_range(&self, range: &Rect) -> Vec<(ObjectId, Rect)> {
        let mut out = Vec::new();
        self.root.query_range(range, &mut out);
        out
    }

    /// Every stored pair whose rectangle contains `p` (boundary included).
    pub fn query_point(&self, p: Point) -> Vec<(ObjectId, Rect)> {
        let mut out = Vec::new();
        self.root.query_point(p, &mut out);
        out
    }

    /// Candidate pairs by bounding-box proximity, deduplicated by id order.
    /// No exact geometric overlap is verified; callers refine with exact
    /// predicates.
    pub fn candidate_pairs(&self) -> Vec<(ObjectId, ObjectId)> {
        let mut items = Vec::with_capacity(self.len);
        self.root.collect(&mut items);
        let mut pairs = Vec::new();
        for &(id, bbox) in &items {
            for (other, _) in self.query_range(&bbox) {
                if id < other {
                    pairs.push((id, other));
                }
            }
        }
        pairs
    }

    /// Number of accepted inserts.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every stored item; boundary and split policy stay.
    pub fn clear(&mut self) {
        self.root = Node::new(self.root.boundary, self.root.cfg);
        self.len = 0;
    }
}
