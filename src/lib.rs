//! # TulanaAlign
//!
//! Alignment-quality metrics for 3D point-cloud registration.
//!
//! Given a reference cloud (behind a spatial index), a target cloud, and a
//! candidate 4x4 transform, the crate answers one question: *what fraction of
//! the transformed target has a near neighbor in the reference within a
//! distance threshold?* This is the Largest Common Pointset (LCP) family of
//! overlap scores, the dominant per-candidate cost of congruent-set and
//! RANSAC-style registration searches.
//!
//! # Architecture
//!
//! The crate is organized into 3 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                    metrics/                         │  ← LCP scorers
//! │      (sequential, parallel-reduce, weighted)        │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     index/                          │  ← Spatial queries
//! │        (closest-point capability, kd-tree)          │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │            (point cloud, transforms)                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use nalgebra::Matrix4;
//! use tulana_align::{KdTreeIndex, LcpMetric, OverlapMetric, PointCloud3};
//!
//! let reference = PointCloud3::from_xyz(&[
//!     [0.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//!     [0.0, 0.0, 1.0],
//! ]);
//! let index = KdTreeIndex::build(reference.as_slice());
//!
//! let metric = LcpMetric::new(0.01);
//! let score = metric.score(
//!     &index,
//!     reference.as_slice(),
//!     &Matrix4::identity(),
//!     0.0,
//! );
//! assert_eq!(score, 1.0);
//! ```
//!
//! # Choosing a scorer
//!
//! | Scorer | Early exit | Execution |
//! |--------|-----------|-----------|
//! | [`LcpMetric`] | yes | calling thread |
//! | [`ParallelLcpMetric`] | no (full scan) | rayon worker pool |
//! | [`WeightedLcpMetric`] | yes | calling thread |
//!
//! [`ParallelLcpMetric`] requires the `parallel` cargo feature (enabled by
//! default); without it, the type delegates to the sequential scan and
//! honors the early-exit bound.

#![warn(missing_docs)]

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Spatial index capability (depends on core)
// ============================================================================
pub mod index;

// ============================================================================
// Layer 3: Overlap metrics (depends on core, index)
// ============================================================================
pub mod metrics;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

pub use crate::core::{transform_point, PointCloud3};
pub use crate::index::{ClosestPointIndex, KdTreeIndex, PointMatch};
pub use crate::metrics::{
    LcpMetric, MetricConfig, MetricConfigError, OverlapMetric, ParallelLcpMetric,
    WeightedLcpMetric,
};
