use crate::r#type::IndexableFloat;

/// A node in a [`KDTree`][crate::kdtree::KDTree].
///
/// Each node stores one of the original input points and exclusively owns its
/// two child subtrees, so the tree is a strict binary tree with no sharing.
/// A node does not store its own depth or splitting axis; both are derived
/// during traversal.
#[derive(Debug, Clone, PartialEq)]
pub struct KDNode<N: IndexableFloat> {
    pub(crate) point: Vec<N>,
    pub(crate) left: Option<Box<KDNode<N>>>,
    pub(crate) right: Option<Box<KDNode<N>>>,
}

impl<N: IndexableFloat> KDNode<N> {
    /// The point stored at this node.
    #[inline]
    pub fn point(&self) -> &[N] {
        &self.point
    }

    /// The subtree on the lower side of this node's splitting hyperplane.
    ///
    /// Note that this **does not include** this node's own point.
    #[inline]
    pub fn left(&self) -> Option<&KDNode<N>> {
        self.left.as_deref()
    }

    /// The subtree on the upper side of this node's splitting hyperplane.
    ///
    /// Note that this **does not include** this node's own point.
    #[inline]
    pub fn right(&self) -> Option<&KDNode<N>> {
        self.right.as_deref()
    }
}

/// The splitting axis used at `depth` in a tree of `dim`-dimensional points.
///
/// Floor modulo, so the result lies in `[0, dim)` for any depth, negative
/// depths included. Construction and search both resolve axes through this
/// one function and therefore can never disagree on the axis of a node.
#[inline]
pub(crate) fn axis_for(depth: i64, dim: usize) -> usize {
    debug_assert!(dim >= 1);
    depth.rem_euclid(dim as i64) as usize
}
