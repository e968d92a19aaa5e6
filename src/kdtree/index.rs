use crate::error::{KdIndexError, Result};
use crate::kdtree::node::KDNode;
use crate::kdtree::KDTreeBuilder;
use crate::r#type::IndexableFloat;

/// An owned KD-tree over `dim`-dimensional points.
///
/// Usually this will be created via a [`KDTreeBuilder`] or
/// [`from_points`][KDTree::from_points]. Once built, the tree is immutable:
/// queries never mutate tree state, so one tree may be queried concurrently
/// from any number of threads.
#[derive(Debug, Clone, PartialEq)]
pub struct KDTree<N: IndexableFloat> {
    pub(crate) root: Option<Box<KDNode<N>>>,
    pub(crate) dim: usize,
    pub(crate) initial_depth: i64,
    pub(crate) num_items: usize,
}

impl<N: IndexableFloat> KDTree<N> {
    /// Build a tree from a slice of points.
    ///
    /// The dimensionality is taken from the first point; every other point
    /// must match it or the build fails with
    /// [`KdIndexError::DimensionMismatch`]. An empty slice produces an empty
    /// tree, not an error.
    pub fn from_points(points: &[Vec<N>]) -> Result<Self> {
        Self::from_points_at_depth(points, 0)
    }

    /// Build a tree from a slice of points, starting the build recursion at
    /// `depth` instead of `0`.
    pub fn from_points_at_depth(points: &[Vec<N>], depth: i64) -> Result<Self> {
        let first = match points.first() {
            Some(first) => first,
            None => {
                return Ok(Self {
                    root: None,
                    dim: 0,
                    initial_depth: depth,
                    num_items: 0,
                })
            }
        };
        if first.is_empty() {
            return Err(KdIndexError::ZeroDimension);
        }

        let mut builder = KDTreeBuilder::new_with_initial_depth(first.len(), depth);
        for point in points {
            builder.add(point)?;
        }
        Ok(builder.finish())
    }

    /// The number of points in this tree.
    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// The dimensionality of the points in this tree.
    ///
    /// `0` only for an empty tree built without a declared dimensionality.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns `true` if this tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Access the root node of the tree for manual traversal.
    pub fn root(&self) -> Option<&KDNode<N>> {
        self.root.as_deref()
    }
}
