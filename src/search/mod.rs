//! The gesture matching loop.
//!
//! One call processes one frame to completion: every template is swept over
//! the configured scale sequence, each evaluated scale produces a
//! correlation-map minimum, and the running maximum probability across
//! templates is compared against the threshold.
//!
//! The control flow reproduces the deployed node exactly, including two
//! quirks kept for behavioral compatibility: the resize target width is
//! derived from the template's *height*, and both threshold branches leave
//! the scale loop after the first evaluated sample, so larger scales only
//! ever participate through the dimension early-exit.

pub mod scan;

use crate::config::MatchParams;
use crate::image::resize::resize_u8_to_width;
use crate::search::scan::scan_sqdiff_min;
use crate::template::{SqdiffPlan, TemplateStore};
use crate::trace::{trace_event, trace_span};
use crate::util::GestMatchResult;
use crate::ImageView;

/// Outcome of matching one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchResult {
    /// True when the running maximum probability exceeded the threshold.
    pub detected: bool,
    /// Winning gesture label; empty after an undetected sweep, and the
    /// previous frame's label when nothing was evaluated at all.
    pub label: String,
    /// Top-left corner of the winning placement.
    pub top_left: (usize, usize),
    /// Bottom-right corner (top-left plus resized template size).
    pub bottom_right: (usize, usize),
    /// Last running maximum of `1 - min(correlation map)`; 0 when no
    /// template was evaluated.
    pub probability: f32,
}

impl MatchResult {
    /// Width of the detected bounding box.
    pub fn box_width(&self) -> usize {
        self.bottom_right.0.saturating_sub(self.top_left.0)
    }

    /// Height of the detected bounding box.
    pub fn box_height(&self) -> usize {
        self.bottom_right.1.saturating_sub(self.top_left.1)
    }
}

/// Per-template candidate state for the current sweep.
#[derive(Clone, Copy, Default)]
struct Candidate {
    probability: Option<f32>,
    loc: (usize, usize),
    size: (usize, usize),
}

/// Gesture matcher owning the template store, the resolved parameters, and
/// the label carried over between frames.
pub struct GestureMatcher {
    store: TemplateStore,
    params: MatchParams,
    last_label: String,
}

impl GestureMatcher {
    /// Creates a matcher over a loaded store.
    pub fn new(store: TemplateStore, params: MatchParams) -> Self {
        Self {
            store,
            params,
            last_label: String::new(),
        }
    }

    /// Returns the template store.
    pub fn store(&self) -> &TemplateStore {
        &self.store
    }

    /// Returns the matcher parameters.
    pub fn params(&self) -> &MatchParams {
        &self.params
    }

    /// Matches one frame against the template store.
    ///
    /// Candidate state lives only for this call; the winning (or cleared)
    /// label is carried into the next call as the default value.
    pub fn match_frame(&mut self, frame: ImageView<'_, u8>) -> GestMatchResult<MatchResult> {
        let _span = trace_span!("match_frame", templates = self.store.len()).entered();

        let scales = self.params.scales.values();
        let threshold = self.params.probability_threshold;

        let mut candidates = vec![Candidate::default(); self.store.len()];
        let mut detected = false;
        let mut label = self.last_label.clone();
        let mut top_left = (0, 0);
        let mut bottom_right = (0, 0);
        let mut probability = 0.0f32;

        for (index, template) in self.store.iter().enumerate() {
            for &scale in &scales {
                // Target width comes from the template height, kept verbatim
                // from the deployed node.
                let target_width = (template.height() as f32 * scale) as usize;
                let resized = resize_u8_to_width(template.view(), target_width)?;
                let (w, h) = (resized.width(), resized.height());
                candidates[index].size = (w, h);

                // Scales are ascending, so once the resized template no
                // longer fits, none of the remaining samples will.
                if frame.height() < h {
                    break;
                }
                if frame.width() < w {
                    break;
                }

                let plan = SqdiffPlan::from_view(resized.view())?;
                let Some(minimum) = scan_sqdiff_min(frame, &plan)? else {
                    break;
                };
                candidates[index].probability = Some(1.0 - minimum.score);
                candidates[index].loc = (minimum.x, minimum.y);

                // Running maximum over every template evaluated so far, not
                // just the current one.
                let (best_index, best_prob) = running_max(&candidates);
                probability = best_prob;

                if best_prob > threshold {
                    detected = true;
                    label = self
                        .store
                        .get(best_index)
                        .map(|t| t.label().to_string())
                        .unwrap_or_default();
                    top_left = candidates[best_index].loc;
                    bottom_right = (
                        top_left.0 + candidates[best_index].size.0,
                        top_left.1 + candidates[best_index].size.1,
                    );
                    break;
                } else {
                    label.clear();
                    break;
                }
            }
        }

        trace_event!(
            "gesture_match",
            detected = detected,
            probability = probability
        );

        self.last_label = label.clone();
        Ok(MatchResult {
            detected,
            label,
            top_left,
            bottom_right,
            probability,
        })
    }
}

/// Index and value of the highest evaluated probability; first index wins
/// ties. Only called after at least one candidate has been evaluated.
fn running_max(candidates: &[Candidate]) -> (usize, f32) {
    let mut best_index = 0;
    let mut best_prob = f32::NEG_INFINITY;
    for (index, candidate) in candidates.iter().enumerate() {
        if let Some(prob) = candidate.probability {
            if prob > best_prob {
                best_index = index;
                best_prob = prob;
            }
        }
    }
    (best_index, best_prob)
}
