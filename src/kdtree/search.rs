use crate::error::{KdIndexError, Result};
use crate::kdtree::node::{axis_for, KDNode};
use crate::kdtree::KDTree;
use crate::r#type::IndexableFloat;

/// The result of a nearest-neighbor query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<'a, N: IndexableFloat> {
    /// The stored point closest to the query, or `None` if the tree is empty.
    pub point: Option<&'a [N]>,

    /// The Euclidean distance from the query to [`point`][Nearest::point],
    /// or infinity if the tree is empty.
    pub distance: N,

    /// The number of tree nodes examined while answering the query.
    ///
    /// Subtrees skipped by the hyperplane pruning test contribute nothing to
    /// this count, so for well distributed points it stays far below
    /// [`num_items`][KDTree::num_items].
    pub nodes_visited: usize,
}

/// Running best candidate threaded through the recursive descent.
struct BestMatch<'a, N: IndexableFloat> {
    point: Option<&'a [N]>,
    dist_sq: N,
    visited: usize,
}

impl<N: IndexableFloat> KDTree<N> {
    /// Search the tree for the point nearest to `query`.
    ///
    /// Querying an empty tree is not an error; it returns no point, an
    /// infinite distance, and zero visited nodes. On a non-empty tree the
    /// query must match the tree's dimensionality or the search fails with
    /// [`KdIndexError::DimensionMismatch`].
    ///
    /// For a fixed tree and query the result is fully deterministic: among
    /// points at exactly equal distance, the first one found wins.
    pub fn nearest(&self, query: &[N]) -> Result<Nearest<'_, N>> {
        let root = match self.root.as_deref() {
            Some(root) => root,
            None => {
                return Ok(Nearest {
                    point: None,
                    distance: N::infinity(),
                    nodes_visited: 0,
                })
            }
        };

        if query.len() != self.dim {
            return Err(KdIndexError::DimensionMismatch {
                expected: self.dim,
                actual: query.len(),
            });
        }

        let mut best = BestMatch {
            point: None,
            dist_sq: N::infinity(),
            visited: 0,
        };
        descend(root, query, self.initial_depth, self.dim, &mut best);

        Ok(Nearest {
            point: best.point,
            // Distances are compared squared throughout the descent; only
            // the reported distance is the true Euclidean one.
            distance: best.dist_sq.sqrt(),
            nodes_visited: best.visited,
        })
    }
}

fn descend<'a, N: IndexableFloat>(
    node: &'a KDNode<N>,
    query: &[N],
    depth: i64,
    dim: usize,
    best: &mut BestMatch<'a, N>,
) {
    best.visited += 1;

    let dist_sq = sq_dist(node.point(), query);
    if dist_sq < best.dist_sq {
        best.point = Some(node.point());
        best.dist_sq = dist_sq;
    }

    let axis = axis_for(depth, dim);
    let planar_dist = query[axis] - node.point()[axis];

    // The near child lies on the same side of the splitting hyperplane as
    // the query; it is searched unconditionally, the far child only if the
    // hyperplane is closer than the best point found so far.
    let (near, far) = if query[axis] <= node.point()[axis] {
        (node.left(), node.right())
    } else {
        (node.right(), node.left())
    };

    if let Some(child) = near {
        descend(child, query, depth + 1, dim, best);
    }

    if let Some(child) = far {
        if planar_dist * planar_dist < best.dist_sq {
            descend(child, query, depth + 1, dim, best);
        }
    }
}

#[inline]
pub(crate) fn sq_dist<N: IndexableFloat>(a: &[N], b: &[N]) -> N {
    a.iter().zip(b).fold(N::zero(), |acc, (&ai, &bi)| {
        let d = ai - bi;
        acc + d * d
    })
}
