//! Distance-weighted LCP overlap scorer.

use log::trace;
use nalgebra::{Matrix4, Point3};

use crate::core::transform_point;
use crate::index::ClosestPointIndex;

use super::kernel::proximity_weight;
use super::{MetricConfig, OverlapMetric};

/// Largest Common Pointset metric with continuous proximity weighting.
///
/// Same scan as [`LcpMetric`](super::LcpMetric), but a match contributes
/// `kernel(distance / epsilon)` instead of 1, so near-coincident points are
/// rewarded more than matches close to the support radius. The accumulated
/// weight sum is pruned against `terminate_value` exactly like the
/// unweighted count.
#[derive(Debug, Clone)]
pub struct WeightedLcpMetric {
    epsilon: f32,
}

impl WeightedLcpMetric {
    /// Create a scorer with the given support radius.
    pub fn new(epsilon: f32) -> Self {
        debug_assert!(epsilon > 0.0, "support radius must be positive");
        Self { epsilon }
    }

    /// Create a scorer from a configuration.
    pub fn from_config(config: &MetricConfig) -> Self {
        Self::new(config.epsilon)
    }
}

impl OverlapMetric for WeightedLcpMetric {
    fn score(
        &self,
        reference: &dyn ClosestPointIndex,
        target: &[Point3<f32>],
        transform: &Matrix4<f32>,
        terminate_value: f32,
    ) -> f32 {
        assert!(!target.is_empty(), "cannot score an empty target cloud");

        let n = target.len();
        let n_f = n as f32;
        let sq_eps = self.epsilon * self.epsilon;
        let cutoff = terminate_value * n_f;

        let mut total_weight = 0.0f32;
        for (i, point) in target.iter().enumerate() {
            let query = transform_point(transform, point);
            if let Some(found) = reference.restricted_closest_point(&query, sq_eps) {
                debug_assert!(
                    found.sq_distance <= sq_eps,
                    "index returned a match outside the query radius"
                );
                total_weight += proximity_weight(found.sq_distance, self.epsilon);
            }

            // Best achievable sum if every remaining point matched exactly.
            let best_possible = total_weight + (n - i - 1) as f32;
            if best_possible < cutoff {
                trace!(
                    "weighted lcp scan terminated after {} of {} points",
                    i + 1,
                    n
                );
                return total_weight / n_f;
            }
        }

        total_weight / n_f
    }

    fn name(&self) -> &str {
        "lcp-weighted"
    }

    fn epsilon(&self) -> f32 {
        self.epsilon
    }
}
