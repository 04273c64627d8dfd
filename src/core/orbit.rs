// Scroll-scrubbed orbit rings on the stories section.

use super::constants::*;
use super::easing::Ease;
use super::scroll::range_progress;
use super::timeline::{Position, Timeline};
use super::tween::{StyleTarget, VisualState};
use std::hash::Hash;

/// Resting state of a ring before its orb scrolls into range.
pub fn ring_start_state() -> VisualState {
    VisualState {
        opacity: 0.0,
        x_percent: ORBIT_ENTER_X_PERCENT,
        rotate: ORBIT_ENTER_ROTATE_DEG,
        ..VisualState::default()
    }
}

/// Scroll offsets between which an orb's timeline is scrubbed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrubRange {
    pub start: f32,
    pub end: f32,
}

impl ScrubRange {
    /// Starts when the orb's top reaches 80% of the viewport height and ends
    /// when its bottom reaches 40%. `orb_top` is the document-relative top.
    /// An orb with no height is not laid out (its page is hidden) and has no
    /// range until it is measured again.
    pub fn for_orb(orb_top: f32, orb_height: f32, viewport_height: f32) -> Option<ScrubRange> {
        if !(orb_height > 0.0) || !orb_top.is_finite() || !(viewport_height > 0.0) {
            return None;
        }
        Some(ScrubRange {
            start: orb_top - viewport_height * ORBIT_START_VIEWPORT,
            end: orb_top + orb_height - viewport_height * ORBIT_END_VIEWPORT,
        })
    }

    #[inline]
    pub fn progress(&self, scroll_offset: f32) -> f32 {
        range_progress(scroll_offset, self.start, self.end)
    }
}

/// Two keyframes: swing the ring in to neutral, then on past it.
pub fn orbit_timeline<K: Copy + Eq + Hash>(ring: K) -> Timeline<K> {
    let mut tl = Timeline::new();
    tl.base(ring, ring_start_state())
        .to(
            &[ring],
            StyleTarget::default().x_percent(0.0).rotate(0.0).opacity(1.0),
            ORBIT_PHASE_SEC,
            Ease::Power2Out,
            0.0,
            Position::End,
        )
        .to(
            &[ring],
            StyleTarget::default()
                .x_percent(ORBIT_EXIT_X_PERCENT)
                .rotate(ORBIT_EXIT_ROTATE_DEG)
                .opacity(ORBIT_EXIT_OPACITY),
            ORBIT_PHASE_SEC,
            Ease::Power2In,
            0.0,
            Position::End,
        );
    tl
}

/// One ring bound to its orb's scroll range.
#[derive(Clone, Debug)]
pub struct Orbit<K> {
    pub ring: K,
    pub range: Option<ScrubRange>,
    timeline: Timeline<K>,
}

impl<K: Copy + Eq + Hash> Orbit<K> {
    pub fn new(ring: K, range: Option<ScrubRange>) -> Self {
        Self {
            ring,
            range,
            timeline: orbit_timeline(ring),
        }
    }

    /// Ring state for a scroll offset. Depends only on the offset, never on
    /// the direction the page was scrolled from. Unmeasured rings rest in
    /// their starting pose.
    pub fn sample(&self, scroll_offset: f32) -> VisualState {
        let Some(range) = self.range else {
            return ring_start_state();
        };
        let t = range.progress(scroll_offset) * self.timeline.duration();
        self.timeline
            .sample_key(self.ring, t)
            .unwrap_or_else(ring_start_state)
    }
}
