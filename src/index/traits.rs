//! Trait for restricted closest-point queries.

use nalgebra::Point3;

/// A successful restricted closest-point query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointMatch {
    /// Index of the matched point in the reference cloud.
    pub index: usize,
    /// Squared distance from the query point to the match.
    pub sq_distance: f32,
}

/// Read-only nearest-neighbor queries bounded to a search radius.
///
/// Implementations answer: *which reference point is closest to `query`,
/// provided it lies within `max_sq_distance`?* The returned match must be
/// the true nearest reference point within that radius; `None` means no
/// reference point lies within it.
///
/// The `Send + Sync` bound is part of the contract: the scorers only read
/// the index, and the parallel scorer queries it concurrently from multiple
/// worker threads within a single scoring call.
pub trait ClosestPointIndex: Send + Sync {
    /// Find the closest reference point within `max_sq_distance` of `query`.
    ///
    /// # Arguments
    /// * `query` - The query position
    /// * `max_sq_distance` - Squared search radius; matches farther than
    ///   this are treated as not found
    ///
    /// # Returns
    /// The nearest match within the radius, or `None`.
    fn restricted_closest_point(
        &self,
        query: &Point3<f32>,
        max_sq_distance: f32,
    ) -> Option<PointMatch>;
}
