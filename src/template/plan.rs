//! Precomputed template statistics for the squared-difference metric.

use crate::image::ImageView;
use crate::util::{GestMatchError, GestMatchResult};

/// Template buffer prepared for normalized squared-difference scanning.
///
/// Holds the pixels as `f32` plus the precomputed energy term of the
/// normalization denominator, so a scan touches the template exactly once
/// per window.
pub struct SqdiffPlan {
    width: usize,
    height: usize,
    values: Vec<f32>,
    sum_sq: f32,
}

impl SqdiffPlan {
    /// Builds a plan from a template view.
    pub fn from_view(tpl: ImageView<'_, u8>) -> GestMatchResult<Self> {
        let width = tpl.width();
        let height = tpl.height();
        let count = width
            .checked_mul(height)
            .ok_or(GestMatchError::InvalidDimensions { width, height })?;

        let mut values = Vec::with_capacity(count);
        let mut sum_sq = 0.0f64;
        for y in 0..height {
            let row = tpl.row(y).ok_or(GestMatchError::BufferTooSmall {
                needed: (y + 1) * tpl.stride(),
                got: tpl.as_slice().len(),
            })?;
            for &value in row {
                let v = value as f64;
                sum_sq += v * v;
                values.push(value as f32);
            }
        }

        // The normalized score divides by sqrt(sum_sq * window energy); an
        // all-black template has no defined score anywhere.
        if sum_sq <= 1e-8 {
            return Err(GestMatchError::DegenerateTemplate {
                reason: "zero energy",
            });
        }

        Ok(Self {
            width,
            height,
            values,
            sum_sq: sum_sq as f32,
        })
    }

    /// Returns the template width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the template height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the template pixels as `f32` in row-major order.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Returns the sum of squared template intensities.
    pub fn sum_sq(&self) -> f32 {
        self.sum_sq
    }
}
