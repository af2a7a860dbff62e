//! Popup anchor computation from the caret position.

use serde::Serialize;

use super::wrap::measure_wrapped;
use super::{HostMetrics, TextMeasurer};
use crate::unicode::{char_len, char_slice};

/// Estimated popup footprint, used for clamping before the popup's real
/// size is known.
pub const POPUP_WIDTH_ESTIMATE: f32 = 200.0;
pub const POPUP_HEIGHT_ESTIMATE: f32 = 150.0;
/// Fixed vertical offset below the caret row.
pub const OFFSET_Y: f32 = 40.0;

/// Pixel offsets of the popup anchor relative to the host's content box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PopupAnchor {
    pub x: f32,
    pub y: f32,
}

/// Compute the popup anchor for the caret at char offset `caret`.
///
/// The text before the caret is laid out with the host's own metrics; the
/// final row's width gives the caret's x, the cumulative height its y. The
/// anchor is then clamped so the estimated popup footprint stays inside
/// the content box. Pure and idempotent; recompute on every text, caret,
/// or host-size change. Out-of-range carets clamp to the text length.
pub fn locate<M: TextMeasurer>(text: &str, caret: usize, host: &HostMetrics<M>) -> PopupAnchor {
    let caret = caret.min(char_len(text));
    let before = char_slice(text, 0, caret);
    let measure = measure_wrapped(before, host.content_width, &host.font);

    let x = (measure.last_line_width + host.padding_left)
        .min(host.content_width - POPUP_WIDTH_ESTIMATE)
        .max(0.0);
    let y = (OFFSET_Y
        + (measure.total_height + host.padding_top)
            .min(host.content_height - POPUP_HEIGHT_ESTIMATE))
    .max(0.0);

    PopupAnchor { x, y }
}
