//! Parallel-reduction LCP overlap scorer.

use nalgebra::{Matrix4, Point3};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "parallel")]
use crate::core::transform_point;
use crate::index::ClosestPointIndex;

#[cfg(not(feature = "parallel"))]
use super::LcpMetric;
use super::{MetricConfig, OverlapMetric};

/// Largest Common Pointset metric computed as a parallel map/reduce.
///
/// Semantically identical to [`LcpMetric`](super::LcpMetric) with
/// `terminate_value = 0`: every target point is mapped to 0 or 1 (reference
/// neighbor within `epsilon` or not) and the matches are summed. The sum is
/// associative and commutative, so the result is independent of how rayon
/// partitions the scan; the map step only reads the index, the transform,
/// and the threshold.
///
/// The whole sequence is always scanned, so `terminate_value` is accepted
/// for interface compatibility and ignored. Without the `parallel` cargo
/// feature this type delegates to the sequential scan, which does honor the
/// bound.
#[derive(Debug, Clone)]
pub struct ParallelLcpMetric {
    epsilon: f32,
}

impl ParallelLcpMetric {
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

#[cfg(feature = "parallel")]
impl OverlapMetric for ParallelLcpMetric {
    fn score(
        &self,
        reference: &dyn ClosestPointIndex,
        target: &[Point3<f32>],
        transform: &Matrix4<f32>,
        _terminate_value: f32,
    ) -> f32 {
        assert!(!target.is_empty(), "cannot score an empty target cloud");

        let sq_eps = self.epsilon * self.epsilon;

        let good: u32 = target
            .par_iter()
            .map(|point| {
                let query = transform_point(transform, point);
                u32::from(
                    reference
                        .restricted_closest_point(&query, sq_eps)
                        .is_some(),
                )
            })
            .sum();

        good as f32 / target.len() as f32
    }

    fn name(&self) -> &str {
        "lcp-parallel"
    }

    fn epsilon(&self) -> f32 {
        self.epsilon
    }
}

#[cfg(not(feature = "parallel"))]
impl OverlapMetric for ParallelLcpMetric {
    fn score(
        &self,
        reference: &dyn ClosestPointIndex,
        target: &[Point3<f32>],
        transform: &Matrix4<f32>,
        terminate_value: f32,
    ) -> f32 {
        // No parallel primitive available: fall back to the sequential
        // scan, early-exit bound included.
        LcpMetric::new(self.epsilon).score(reference, target, transform, terminate_value)
    }

    fn name(&self) -> &str {
        "lcp-parallel(sequential fallback)"
    }

    fn epsilon(&self) -> f32 {
        self.epsilon
    }
}
