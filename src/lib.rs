//! GestMatch detects a hand gesture in grayscale depth-camera frames via
//! multi-scale template matching.
//!
//! A [`TemplateStore`] is loaded once at startup (one template per gesture
//! folder); per frame, the [`GestureMatcher`] sweeps every template over a
//! scale range with normalized squared-difference scoring and reports the
//! winning label with its bounding box. [`report_from_match`] then derives
//! the normalized horizontal offset and a median-intensity depth estimate —
//! the three values the surrounding node publishes.
//!
//! Image decoding lives behind the `image-io` feature; span/event
//! instrumentation behind the `tracing` feature.

pub mod config;
pub mod image;
pub mod report;
pub mod search;
pub mod template;
pub mod util;

mod trace;

pub use config::{MatchParams, ScaleRange};
pub use image::{ImageView, OwnedImage};
pub use report::{report_from_match, GestureReport};
pub use search::scan::{scan_sqdiff_min, MapMinimum};
pub use search::{GestureMatcher, MatchResult};
pub use template::{SqdiffPlan, Template, TemplateStore};
pub use util::{GestMatchError, GestMatchResult};
