//! Metric configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration shared by all overlap metrics.
///
/// A single support radius: target points whose nearest reference neighbor
/// lies within `epsilon` count toward the overlap. The right value depends
/// on sensor noise and cloud scale; for clouds normalized to a unit box a
/// few percent of the extent is typical.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MetricConfig {
    /// Support radius (same unit as the point coordinates).
    #[serde(default = "default_epsilon")]
    pub epsilon: f32,
}

fn default_epsilon() -> f32 {
    0.01
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self {
            epsilon: default_epsilon(),
        }
    }
}

impl MetricConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the support radius.
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MetricConfigError> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(MetricConfigError::InvalidEpsilon(self.epsilon));
        }
        Ok(())
    }
}

/// Metric configuration error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricConfigError {
    /// The support radius must be finite and positive.
    #[error("support radius must be finite and positive, got {0}")]
    InvalidEpsilon(f32),
}
