//! Position and depth estimation for a detected gesture.

use crate::search::MatchResult;
use crate::util::math::median_u8;
use crate::ImageView;

/// Derived per-frame outputs: the three publish channels of the node.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureReport {
    /// Detected gesture label (empty when none).
    pub label: String,
    /// Horizontal offset of the match center from the frame center, as a
    /// fraction of half the frame width; negative is left.
    pub offset: f32,
    /// Median intensity of the match sub-block, read as depth.
    pub depth: f32,
}

/// Derives the gesture report from a match result and its frame.
///
/// Without a detection the offset and depth are exactly zero; they are
/// neutral defaults, not "unknown" markers.
pub fn report_from_match(result: &MatchResult, frame: ImageView<'_, u8>) -> GestureReport {
    if !result.detected {
        return GestureReport {
            label: result.label.clone(),
            offset: 0.0,
            depth: 0.0,
        };
    }

    let w = result.box_width();
    let h = result.box_height();
    let frame_width = frame.width() as f32;
    let center_x = result.top_left.0 as f32 + w as f32 / 2.0;
    let offset = 2.0 * (center_x - frame_width / 2.0) / frame_width;

    GestureReport {
        label: result.label.clone(),
        offset,
        depth: block_median(frame, result, w, h),
    }
}

/// Median intensity over the bottom `h` rows and left `w` columns of the
/// match bounding box, clipped to the frame.
fn block_median(frame: ImageView<'_, u8>, result: &MatchResult, w: usize, h: usize) -> f32 {
    let y0 = result.bottom_right.1.saturating_sub(h).min(frame.height());
    let y1 = result.bottom_right.1.min(frame.height());
    let x0 = result.top_left.0.min(frame.width());
    let x1 = (result.top_left.0 + w).min(frame.width());

    let mut values = Vec::with_capacity((y1 - y0) * (x1.saturating_sub(x0)));
    for y in y0..y1 {
        if let Some(row) = frame.row(y) {
            values.extend_from_slice(&row[x0..x1]);
        }
    }
    median_u8(&mut values)
}
