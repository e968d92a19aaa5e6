use std::cmp::Ordering;
use std::mem;

use crate::error::{KdIndexError, Result};
use crate::kdtree::node::{axis_for, KDNode};
use crate::kdtree::KDTree;
use crate::r#type::IndexableFloat;

/// A builder to create a [`KDTree`].
///
/// Points are added one by one and the tree is assembled by [`finish`], which
/// recursively splits the point set at the median of a rotating axis. The
/// split sorts stably, so points with equal coordinates on the active axis
/// keep their insertion order, and the lower median is chosen for even-length
/// subsets.
///
/// Construction recursion is `O(log n)` deep for well distributed points but
/// can reach `O(n)` when many points share coordinate values that defeat
/// balanced splitting.
///
/// [`finish`]: KDTreeBuilder::finish
pub struct KDTreeBuilder<N: IndexableFloat> {
    points: Vec<Vec<N>>,
    dim: usize,
    initial_depth: i64,
}

impl<N: IndexableFloat> KDTreeBuilder<N> {
    /// Create a new builder for points of the provided dimensionality.
    pub fn new(dim: usize) -> Self {
        Self::new_with_initial_depth(dim, 0)
    }

    /// Create a new builder whose build recursion starts at `initial_depth`
    /// instead of `0`.
    ///
    /// The depth only shifts which axis each tree level splits on; any value
    /// is valid, negative ones included. Queries against the finished tree
    /// use the same starting depth automatically.
    pub fn new_with_initial_depth(dim: usize, initial_depth: i64) -> Self {
        assert!(dim >= 1, "dimension must be at least 1");

        Self {
            points: Vec::new(),
            dim,
            initial_depth,
        }
    }

    /// Add a point to the index. Returns the insertion index of the point.
    ///
    /// Fails with [`KdIndexError::DimensionMismatch`] if the point's
    /// dimensionality differs from the one this builder was created with.
    pub fn add(&mut self, point: &[N]) -> Result<usize> {
        if point.len() != self.dim {
            return Err(KdIndexError::DimensionMismatch {
                expected: self.dim,
                actual: point.len(),
            });
        }

        let index = self.points.len();
        self.points.push(point.to_vec());
        Ok(index)
    }

    /// Consume this builder, performing the recursive median split and
    /// generating a KDTree ready for queries.
    ///
    /// A builder with no points produces an empty tree, not an error.
    pub fn finish(self) -> KDTree<N> {
        let Self {
            mut points,
            dim,
            initial_depth,
        } = self;

        let num_items = points.len();
        let root = build_recursive(&mut points, initial_depth, dim);

        KDTree {
            root,
            dim,
            initial_depth,
            num_items,
        }
    }
}

/// Build the subtree for one sub-slice of the point buffer.
///
/// Sorts the sub-slice in place by the active axis, takes the lower median as
/// the node point and recurses into the halves strictly before and after it,
/// so the median itself appears in neither subtree.
fn build_recursive<N: IndexableFloat>(
    points: &mut [Vec<N>],
    depth: i64,
    dim: usize,
) -> Option<Box<KDNode<N>>> {
    if points.is_empty() {
        return None;
    }

    let axis = axis_for(depth, dim);

    // Stable sort: equal coordinates keep their relative input order, which
    // determines the side of the split that ties land on.
    points.sort_by(|a, b| a[axis].partial_cmp(&b[axis]).unwrap_or(Ordering::Equal));

    let median = points.len() / 2;
    let (before, rest) = points.split_at_mut(median);
    let (median_point, after) = rest.split_at_mut(1);

    Some(Box::new(KDNode {
        point: mem::take(&mut median_point[0]),
        left: build_recursive(before, depth + 1, dim),
        right: build_recursive(after, depth + 1, dim),
    }))
}
