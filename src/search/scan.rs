//! Normalized squared-difference correlation scan.

use crate::template::SqdiffPlan;
use crate::util::{GestMatchError, GestMatchResult};
use crate::ImageView;

/// Windows whose energy denominator falls below this are skipped; the
/// normalized score is undefined there.
const MIN_DENOM: f32 = 1e-12;

/// Global minimum of a correlation map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapMinimum {
    /// X coordinate (column) of the minimum placement.
    pub x: usize,
    /// Y coordinate (row) of the minimum placement.
    pub y: usize,
    /// Normalized squared-difference score at the minimum, in `[0, 1]`.
    pub score: f32,
}

/// Scans every valid placement of `plan` over `image` and returns the global
/// minimum of `sum((t - i)^2) / sqrt(sum(t^2) * sum(i^2))`.
///
/// Ties keep the first placement in row-major scan order. Returns `None`
/// when every window was skipped for lack of energy. Errors if the template
/// does not fit inside the image; callers are expected to pre-check
/// dimensions.
pub fn scan_sqdiff_min(
    image: ImageView<'_, u8>,
    plan: &SqdiffPlan,
) -> GestMatchResult<Option<MapMinimum>> {
    let img_width = image.width();
    let img_height = image.height();
    let tpl_width = plan.width();
    let tpl_height = plan.height();

    if img_width < tpl_width || img_height < tpl_height {
        return Err(GestMatchError::RoiOutOfBounds {
            x: 0,
            y: 0,
            width: tpl_width,
            height: tpl_height,
            img_width,
            img_height,
        });
    }

    let max_x = img_width - tpl_width;
    let max_y = img_height - tpl_height;
    let tpl = plan.values();
    let sum_t2 = plan.sum_sq();

    let mut best: Option<MapMinimum> = None;
    for y in 0..=max_y {
        for x in 0..=max_x {
            let mut diff_sq = 0.0f32;
            let mut sum_i2 = 0.0f32;

            for ty in 0..tpl_height {
                let img_row = image.row(y + ty).expect("row within bounds for scan");
                let base = ty * tpl_width;
                for tx in 0..tpl_width {
                    let value = img_row[x + tx] as f32;
                    let diff = value - tpl[base + tx];
                    diff_sq += diff * diff;
                    sum_i2 += value * value;
                }
            }

            let denom = (sum_t2 * sum_i2).sqrt();
            if denom <= MIN_DENOM {
                continue;
            }
            let score = diff_sq / denom;
            if !score.is_finite() {
                continue;
            }
            if best.map_or(true, |b| score < b.score) {
                best = Some(MapMinimum { x, y, score });
            }
        }
    }

    Ok(best)
}
