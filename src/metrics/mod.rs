//! Overlap-quality (LCP) scoring of candidate transforms.
//!
//! Three interchangeable strategies implement the [`OverlapMetric`] trait:
//!
//! | Strategy | Accumulation | Early exit |
//! |----------|--------------|-----------|
//! | [`LcpMetric`] | 0/1 per match | yes |
//! | [`ParallelLcpMetric`] | 0/1 per match, parallel sum | no |
//! | [`WeightedLcpMetric`] | quartic proximity weight | yes |
//!
//! All three share the same scan structure: transform each target point by
//! the candidate matrix, query the reference index within squared radius
//! `epsilon^2`, accumulate, and divide by the target size. They are kept as
//! separate implementations rather than one parameterized loop so each can
//! be tuned independently.
//!
//! # Example
//!
//! ```
//! use nalgebra::{Matrix4, Point3};
//! use tulana_align::{KdTreeIndex, OverlapMetric, WeightedLcpMetric};
//!
//! let reference = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
//! let index = KdTreeIndex::build(&reference);
//!
//! let metric = WeightedLcpMetric::new(0.05);
//! let score = metric.score(&index, &reference, &Matrix4::identity(), 0.0);
//! assert!(score > 0.99);
//! ```

mod config;
mod lcp;
mod parallel;
mod traits;
mod weighted;

pub mod kernel;

pub use config::{MetricConfig, MetricConfigError};
pub use lcp::LcpMetric;
pub use parallel::ParallelLcpMetric;
pub use traits::OverlapMetric;
pub use weighted::WeightedLcpMetric;
