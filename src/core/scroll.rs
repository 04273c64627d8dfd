use super::constants::{PARALLAX_FACTOR, PROGRESS_MAX_PERCENT};

/// Width of the reading-progress bar, in percent.
///
/// Clamped to [0, 100]. A page that does not scroll (or non-finite input)
/// reports 0.
#[inline]
pub fn progress_percent(offset: f32, scroll_height: f32, client_height: f32) -> f32 {
    let range = scroll_height - client_height;
    if !(range > 0.0) || !offset.is_finite() || !range.is_finite() {
        return 0.0;
    }
    (offset / range * PROGRESS_MAX_PERCENT).clamp(0.0, PROGRESS_MAX_PERCENT)
}

/// Vertical shift of the hero background for a given scroll offset.
#[inline]
pub fn parallax_offset(offset: f32) -> f32 {
    if offset.is_finite() {
        offset * PARALLAX_FACTOR
    } else {
        0.0
    }
}

/// Progress of a scroll-linked animation running from `start` to `end`
/// (both absolute scroll offsets).
#[inline]
pub fn range_progress(offset: f32, start: f32, end: f32) -> f32 {
    let span = end - start;
    if !(span > 0.0) {
        return if offset >= end { 1.0 } else { 0.0 };
    }
    ((offset - start) / span).clamp(0.0, 1.0)
}
