// One-shot reveal-on-scroll bookkeeping.
//
// `RevealRegistry` is the explicit pending set of armed elements. It never
// talks to a browser: an `IntersectionSource` is told which keys to watch
// and stop watching, and intersection samples are fed back in through
// `on_intersections`. Tests drive it with a fake source.

use super::constants::*;
use super::easing::Ease;
use super::timeline::{Position, Timeline};
use super::tween::{StyleTarget, TweenSpec, VisualState};
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::hash::Hash;

/// What a revealed element turns into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealKind {
    /// Fade up to full opacity.
    Fade,
    /// Stat card: reveal and start its number counter.
    Stat,
}

/// Action to perform for an element that just qualified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal<K> {
    pub key: K,
    pub kind: RevealKind,
}

/// Something that can watch elements for intersection.
pub trait IntersectionSource<K> {
    fn observe(&mut self, key: K);
    fn unobserve(&mut self, key: K);
}

/// One observer callback entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionSample<K> {
    pub key: K,
    pub is_intersecting: bool,
    /// Visible fraction of the element.
    pub ratio: f32,
    /// Fraction of the root's height covered by the visible part.
    pub root_fill: f32,
}

// Observers report ratios with float noise right at the threshold crossing.
const RATIO_EPSILON: f32 = 1e-3;

/// Whether a sample is enough to trigger a reveal: a tenth of the element is
/// visible, or it covers a tenth of the root. Elements taller than ten roots
/// can only ever meet the second.
#[inline]
pub fn qualifies(is_intersecting: bool, ratio: f32, root_fill: f32) -> bool {
    is_intersecting
        && (ratio + RATIO_EPSILON >= REVEAL_THRESHOLD
            || root_fill + RATIO_EPSILON >= REVEAL_ROOT_FILL)
}

/// Fraction of an element (vertical extent only) inside the viewport once the
/// bottom margin is taken off, mirroring the observer's root margin.
pub fn visible_ratio(element_top: f32, element_height: f32, viewport_height: f32) -> f32 {
    if !(element_height > 0.0) {
        return 0.0;
    }
    let root_bottom = viewport_height - REVEAL_BOTTOM_MARGIN_PX;
    let top = element_top.max(0.0);
    let bottom = (element_top + element_height).min(root_bottom);
    ((bottom - top) / element_height).clamp(0.0, 1.0)
}

/// Visible height of an element as a fraction of the (margin-shrunk) root.
pub fn visible_fill(element_top: f32, element_height: f32, viewport_height: f32) -> f32 {
    let root_bottom = viewport_height - REVEAL_BOTTOM_MARGIN_PX;
    if !(root_bottom > 0.0) || !(element_height > 0.0) {
        return 0.0;
    }
    let top = element_top.max(0.0);
    let bottom = (element_top + element_height).min(root_bottom);
    ((bottom - top) / root_bottom).clamp(0.0, 1.0)
}

pub struct RevealRegistry<K> {
    pending: FnvHashMap<K, RevealKind>,
}

impl<K> Default for RevealRegistry<K> {
    fn default() -> Self {
        Self {
            pending: FnvHashMap::default(),
        }
    }
}

impl<K: Copy + Eq + Hash> RevealRegistry<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `key` for a single reveal. Re-arming a pending key is a no-op.
    pub fn arm(&mut self, key: K, kind: RevealKind, source: &mut impl IntersectionSource<K>) {
        if self.pending.insert(key, kind).is_none() {
            source.observe(key);
        }
    }

    /// Remove `key` without revealing it (the caller animates it directly).
    pub fn disarm(&mut self, key: K, source: &mut impl IntersectionSource<K>) -> bool {
        let was = self.pending.remove(&key).is_some();
        if was {
            source.unobserve(key);
        }
        was
    }

    /// Reveal `key` now instead of waiting for it to scroll in (page
    /// entrances). A pending arming is consumed, so the observer can no
    /// longer fire it.
    pub fn replay(
        &mut self,
        key: K,
        kind: RevealKind,
        source: &mut impl IntersectionSource<K>,
    ) -> Reveal<K> {
        self.disarm(key, source);
        Reveal { key, kind }
    }

    pub fn is_armed(&self, key: K) -> bool {
        self.pending.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Handle one observer callback. Each qualifying armed key is returned
    /// once and stops being watched; everything else is ignored.
    pub fn on_intersections(
        &mut self,
        samples: impl IntoIterator<Item = IntersectionSample<K>>,
        source: &mut impl IntersectionSource<K>,
    ) -> SmallVec<[Reveal<K>; 4]> {
        let mut fired = SmallVec::new();
        for sample in samples {
            if !qualifies(sample.is_intersecting, sample.ratio, sample.root_fill) {
                continue;
            }
            if let Some(kind) = self.pending.remove(&sample.key) {
                source.unobserve(sample.key);
                fired.push(Reveal {
                    key: sample.key,
                    kind,
                });
            }
        }
        fired
    }
}

/// State an element is put in when armed for a scroll reveal.
pub fn armed_target() -> StyleTarget {
    StyleTarget::default().opacity(0.0).y(REVEAL_OFFSET_Y)
}

/// State page elements are reset to before replaying their entrance.
pub fn page_reset_target() -> StyleTarget {
    StyleTarget::default().opacity(0.0).y(PAGE_REVEAL_OFFSET_Y)
}

/// Settled state every reveal animates to.
pub fn revealed_target() -> StyleTarget {
    StyleTarget::default().opacity(1.0).y(0.0)
}

pub fn scroll_reveal_spec() -> TweenSpec {
    TweenSpec::new(REVEAL_DURATION_SEC, Ease::Power3Out)
}

pub fn page_reveal_spec() -> TweenSpec {
    TweenSpec::new(REVEAL_DURATION_SEC, Ease::Power3Out).delayed(PAGE_REVEAL_DELAY_SEC)
}

/// Container half of a stat card reveal; the number runs separately.
pub fn stat_card_spec() -> TweenSpec {
    TweenSpec::new(STAT_CARD_DURATION_SEC, Ease::default())
}

/// Hero entrance: staggered text rise, then staggered fades overlapping its
/// tail. Runs once on load regardless of scroll position.
pub fn hero_timeline<K: Copy + Eq + Hash>(text: &[K], fade: &[K]) -> Timeline<K> {
    let mut tl = Timeline::new();
    let hidden_text = VisualState {
        opacity: 0.0,
        y: REVEAL_OFFSET_Y,
        ..VisualState::default()
    };
    let hidden_fade = VisualState {
        opacity: 0.0,
        ..VisualState::default()
    };
    for &k in text {
        tl.base(k, hidden_text);
    }
    for &k in fade {
        tl.base(k, hidden_fade);
    }
    tl.to(
        text,
        revealed_target(),
        HERO_TEXT_DURATION_SEC,
        Ease::Power4Out,
        HERO_STAGGER_SEC,
        Position::End,
    )
    .to(
        fade,
        StyleTarget::default().opacity(1.0),
        HERO_FADE_DURATION_SEC,
        Ease::Power2Out,
        HERO_STAGGER_SEC,
        Position::FromEnd(-HERO_FADE_OVERLAP_SEC),
    );
    tl
}
