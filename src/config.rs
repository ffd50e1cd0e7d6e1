//! Matching parameters, resolved once at startup and passed into the
//! matcher by value.

use crate::util::math::linspace;

/// Inclusive scale range sampled during the per-template sweep.
#[derive(Clone, Copy, Debug)]
pub struct ScaleRange {
    /// Smallest scale factor.
    pub start: f32,
    /// Largest scale factor.
    pub end: f32,
    /// Number of linearly spaced samples, endpoints included.
    pub samples: usize,
}

impl ScaleRange {
    /// Returns the ascending scale samples.
    pub fn values(&self) -> Vec<f32> {
        linspace(self.start, self.end, self.samples)
    }
}

impl Default for ScaleRange {
    fn default() -> Self {
        Self {
            start: 1.0,
            end: 3.0,
            samples: 10,
        }
    }
}

/// Matcher configuration.
///
/// Out-of-range values are not validated; a threshold above 1 simply never
/// detects, which is the accepted degraded behavior.
#[derive(Clone, Copy, Debug)]
pub struct MatchParams {
    /// Scale sweep applied to every template.
    pub scales: ScaleRange,
    /// Detection threshold on `1 - min(correlation map)`.
    pub probability_threshold: f32,
}

impl Default for MatchParams {
    fn default() -> Self {
        Self {
            scales: ScaleRange::default(),
            probability_threshold: 0.7,
        }
    }
}
