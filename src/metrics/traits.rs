//! Trait for overlap-scoring strategies.

use nalgebra::{Matrix4, Point3};

use crate::index::ClosestPointIndex;

/// Scores how well a candidate transform overlaps a target cloud onto a
/// reference cloud.
///
/// One metric object is configured with a support radius `epsilon` at
/// construction and applied to many `(index, target, transform)` triples
/// over its lifetime; each call is independent and side-effect-free.
///
/// # Example
///
/// ```ignore
/// use tulana_align::{LcpMetric, OverlapMetric};
///
/// fn best_candidate<M: OverlapMetric>(
///     metric: &M,
///     index: &KdTreeIndex,
///     target: &[Point3<f32>],
///     candidates: &[Matrix4<f32>],
/// ) -> f32 {
///     let mut best = 0.0;
///     for mat in candidates {
///         // Pass the running best so hopeless candidates exit early.
///         best = best.max(metric.score(index, target, mat, best));
///     }
///     best
/// }
/// ```
pub trait OverlapMetric: Send + Sync {
    /// Score a candidate transform.
    ///
    /// # Arguments
    /// * `reference` - Spatial index over the reference cloud
    /// * `target` - Target points, transformed by `transform` before querying
    /// * `transform` - Candidate 4x4 homogeneous transform
    /// * `terminate_value` - Lower bound in `[0, 1]` used as a pruning hint:
    ///   once the final score provably cannot reach it, the scan may stop
    ///   and return the (strictly smaller) partial score. Pass `0.0` to
    ///   force a full scan. Scorers without early exit accept and ignore it.
    ///
    /// # Returns
    /// The overlap score in `[0, 1]`.
    ///
    /// # Panics
    /// Panics if `target` is empty.
    fn score(
        &self,
        reference: &dyn ClosestPointIndex,
        target: &[Point3<f32>],
        transform: &Matrix4<f32>,
        terminate_value: f32,
    ) -> f32;

    /// Name of this metric for logging/debugging.
    fn name(&self) -> &str;

    /// The configured support radius.
    fn epsilon(&self) -> f32;
}
