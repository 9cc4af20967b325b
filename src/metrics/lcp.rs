//! Sequential LCP overlap scorer.

use log::trace;
use nalgebra::{Matrix4, Point3};

use crate::core::transform_point;
use crate::index::ClosestPointIndex;

use super::{MetricConfig, OverlapMetric};

/// Largest Common Pointset metric, scanned in sequence order.
///
/// Counts the target points whose transformed position has a reference
/// neighbor within `epsilon`, and returns the matched fraction. Supports
/// early termination: once the final score provably cannot reach the
/// caller's `terminate_value`, the scan stops and the partial score is
/// returned as a rejection signal.
#[derive(Debug, Clone)]
pub struct LcpMetric {
    epsilon: f32,
}

impl LcpMetric {
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

impl OverlapMetric for LcpMetric {
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

        let mut good = 0u32;
        for (i, point) in target.iter().enumerate() {
            let query = transform_point(transform, point);
            if reference
                .restricted_closest_point(&query, sq_eps)
                .is_some()
            {
                good += 1;
            }

            // Best achievable count if every remaining point matched.
            // Float arithmetic: the count stays well inside f32's exact
            // integer range and the comparison cannot wrap.
            let best_possible = good as f32 + (n - i - 1) as f32;
            if best_possible < cutoff {
                trace!(
                    "lcp scan terminated after {} of {} points ({} matched)",
                    i + 1,
                    n,
                    good
                );
                return good as f32 / n_f;
            }
        }

        good as f32 / n_f
    }

    fn name(&self) -> &str {
        "lcp"
    }

    fn epsilon(&self) -> f32 {
        self.epsilon
    }
}
