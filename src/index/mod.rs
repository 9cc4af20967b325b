//! Spatial index capability over the reference cloud.
//!
//! The metric layer consumes the reference point set exclusively through the
//! [`ClosestPointIndex`] trait: a nearest-neighbor query bounded to a maximum
//! squared radius. [`KdTreeIndex`] is the provided implementation; callers
//! with an existing spatial structure (voxel grid, R-tree) can implement the
//! trait over it instead.

mod kdtree;
mod traits;

pub use kdtree::KdTreeIndex;
pub use traits::{ClosestPointIndex, PointMatch};
