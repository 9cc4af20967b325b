//! K-d tree implementation of the closest-point capability.

use kiddo::{KdTree, SquaredEuclidean};
use log::debug;
use nalgebra::Point3;

use super::{ClosestPointIndex, PointMatch};

/// K-d tree index over a reference point cloud.
///
/// Built once per reference cloud and queried many times, once per target
/// point per candidate transform. Queries are read-only and safe to issue
/// concurrently.
pub struct KdTreeIndex {
    tree: KdTree<f32, 3>,
    len: usize,
}

impl KdTreeIndex {
    /// Build an index from a slice of reference points.
    pub fn build(points: &[Point3<f32>]) -> Self {
        let mut tree: KdTree<f32, 3> = KdTree::new();
        for (i, p) in points.iter().enumerate() {
            tree.add(&[p.x, p.y, p.z], i as u64);
        }
        debug!("built kd-tree index over {} reference points", points.len());
        Self {
            tree,
            len: points.len(),
        }
    }

    /// Number of indexed points.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl ClosestPointIndex for KdTreeIndex {
    fn restricted_closest_point(
        &self,
        query: &Point3<f32>,
        max_sq_distance: f32,
    ) -> Option<PointMatch> {
        if self.len == 0 {
            return None;
        }

        let nearest = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x, query.y, query.z]);

        if nearest.distance <= max_sq_distance {
            Some(PointMatch {
                index: nearest.item as usize,
                sq_distance: nearest.distance,
            })
        } else {
            None
        }
    }
}
