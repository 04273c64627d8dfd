// Property tweening for animatable elements.
//
// Elements are identified by an opaque key `K` (the web layer uses indices
// into its element table). `Tweens` tracks the last written `VisualState` of
// every key and advances running tweens, timelines and counters once per
// animation frame, reporting what changed as a `FrameUpdate`.

use super::easing::{lerp, Ease};
use super::stats::CountUp;
use super::timeline::Timeline;
use fnv::FnvHashMap;
use std::hash::Hash;

/// Animatable style of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f32,
    /// Vertical translation in px.
    pub y: f32,
    /// Horizontal translation as a percentage of the element's own width.
    pub x_percent: f32,
    /// Rotation in degrees.
    pub rotate: f32,
    pub scale: f32,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            y: 0.0,
            x_percent: 0.0,
            rotate: 0.0,
            scale: 1.0,
        }
    }
}

impl VisualState {
    pub fn lerp(&self, other: &VisualState, t: f32) -> VisualState {
        VisualState {
            opacity: lerp(self.opacity, other.opacity, t),
            y: lerp(self.y, other.y, t),
            x_percent: lerp(self.x_percent, other.x_percent, t),
            rotate: lerp(self.rotate, other.rotate, t),
            scale: lerp(self.scale, other.scale, t),
        }
    }

    /// Copy of `self` with every property named by `target` overridden.
    pub fn merged(&self, target: &StyleTarget) -> VisualState {
        VisualState {
            opacity: target.opacity.unwrap_or(self.opacity),
            y: target.y.unwrap_or(self.y),
            x_percent: target.x_percent.unwrap_or(self.x_percent),
            rotate: target.rotate.unwrap_or(self.rotate),
            scale: target.scale.unwrap_or(self.scale),
        }
    }

    /// CSS `transform` value for this state.
    pub fn css_transform(&self) -> String {
        format!(
            "translate({}%, {}px) rotate({}deg) scale({})",
            self.x_percent, self.y, self.rotate, self.scale
        )
    }
}

/// Partial set of properties to animate towards; unset fields are left alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StyleTarget {
    pub opacity: Option<f32>,
    pub y: Option<f32>,
    pub x_percent: Option<f32>,
    pub rotate: Option<f32>,
    pub scale: Option<f32>,
}

impl StyleTarget {
    pub fn opacity(mut self, v: f32) -> Self {
        self.opacity = Some(v);
        self
    }
    pub fn y(mut self, v: f32) -> Self {
        self.y = Some(v);
        self
    }
    pub fn x_percent(mut self, v: f32) -> Self {
        self.x_percent = Some(v);
        self
    }
    pub fn rotate(mut self, v: f32) -> Self {
        self.rotate = Some(v);
        self
    }
    pub fn scale(mut self, v: f32) -> Self {
        self.scale = Some(v);
        self
    }

    /// Whether both targets animate at least one common property.
    pub fn overlaps(&self, other: &StyleTarget) -> bool {
        (self.opacity.is_some() && other.opacity.is_some())
            || (self.y.is_some() && other.y.is_some())
            || (self.x_percent.is_some() && other.x_percent.is_some())
            || (self.rotate.is_some() && other.rotate.is_some())
            || (self.scale.is_some() && other.scale.is_some())
    }

    /// Properties named by either target; values from `other` win.
    pub fn union(&self, other: &StyleTarget) -> StyleTarget {
        StyleTarget {
            opacity: other.opacity.or(self.opacity),
            y: other.y.or(self.y),
            x_percent: other.x_percent.or(self.x_percent),
            rotate: other.rotate.or(self.rotate),
            scale: other.scale.or(self.scale),
        }
    }

    /// CSS properties a write of this target touches.
    pub fn mask(&self) -> StyleMask {
        StyleMask {
            opacity: self.opacity.is_some(),
            transform: self.y.is_some()
                || self.x_percent.is_some()
                || self.rotate.is_some()
                || self.scale.is_some(),
        }
    }

    /// The properties named by `self`, with values taken from `state`.
    pub fn pick(&self, state: &VisualState) -> StyleTarget {
        StyleTarget {
            opacity: self.opacity.map(|_| state.opacity),
            y: self.y.map(|_| state.y),
            x_percent: self.x_percent.map(|_| state.x_percent),
            rotate: self.rotate.map(|_| state.rotate),
            scale: self.scale.map(|_| state.scale),
        }
    }
}

/// Which inline style properties a write must set. Untouched properties keep
/// whatever the stylesheet gives them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StyleMask {
    pub opacity: bool,
    pub transform: bool,
}

impl StyleMask {
    pub const ALL: StyleMask = StyleMask {
        opacity: true,
        transform: true,
    };

    pub fn is_empty(&self) -> bool {
        !self.opacity && !self.transform
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenSpec {
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
}

impl TweenSpec {
    pub fn new(duration: f32, ease: Ease) -> Self {
        Self {
            duration,
            delay: 0.0,
            ease,
        }
    }

    pub fn delayed(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Eased progress after `elapsed` seconds, or `None` while still delayed.
    #[inline]
    pub fn progress(&self, elapsed: f32) -> Option<f32> {
        let local = elapsed - self.delay;
        if local < 0.0 {
            return None;
        }
        let t = if self.duration > 0.0 {
            (local / self.duration).min(1.0)
        } else {
            1.0
        };
        Some(self.ease.apply(t))
    }

    #[inline]
    pub fn total(&self) -> f32 {
        self.delay + self.duration.max(0.0)
    }
}

struct Tween<K> {
    key: K,
    target: StyleTarget,
    from: VisualState,
    to: VisualState,
    spec: TweenSpec,
    elapsed: f32,
}

struct PlayingTimeline<K> {
    timeline: Timeline<K>,
    elapsed: f32,
}

/// New style for one key and the properties that changed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleWrite<K> {
    pub key: K,
    pub state: VisualState,
    pub mask: StyleMask,
}

/// Everything that changed during one `Tweens::advance` call.
#[derive(Debug)]
pub struct FrameUpdate<K> {
    pub styles: Vec<StyleWrite<K>>,
    pub texts: Vec<(K, String)>,
}

impl<K> Default for FrameUpdate<K> {
    fn default() -> Self {
        Self {
            styles: Vec::new(),
            texts: Vec::new(),
        }
    }
}

impl<K> FrameUpdate<K> {
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty() && self.texts.is_empty()
    }
}

/// Frame-driven animation runtime.
///
/// A new tween on a key supersedes running tweens and timelines on that key
/// that animate any of the same properties. Animations of disjoint
/// properties (a hover scale during a fade) run side by side, and each
/// writes only the properties it animates.
pub struct Tweens<K> {
    states: FnvHashMap<K, VisualState>,
    tweens: Vec<Tween<K>>,
    timelines: Vec<PlayingTimeline<K>>,
    counters: Vec<CountUp<K>>,
}

impl<K> Default for Tweens<K> {
    fn default() -> Self {
        Self {
            states: FnvHashMap::default(),
            tweens: Vec::new(),
            timelines: Vec::new(),
            counters: Vec::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> Tweens<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last written state of `key` (the resting default if never touched).
    pub fn state(&self, key: K) -> VisualState {
        self.states.get(&key).copied().unwrap_or_default()
    }

    fn cancel(&mut self, key: K, target: &StyleTarget) {
        self.tweens.retain(|t| t.key != key || !t.target.overlaps(target));
        for playing in self.timelines.iter_mut() {
            if playing.timeline.animated(key).overlaps(target) {
                playing.timeline.forget(key);
            }
        }
        self.timelines.retain(|p| !p.timeline.is_empty());
    }

    /// Apply `target` immediately, cancelling animations of those properties.
    /// Returns the state the caller should render.
    pub fn set(&mut self, key: K, target: StyleTarget) -> VisualState {
        self.cancel(key, &target);
        let next = self.state(key).merged(&target);
        self.states.insert(key, next);
        next
    }

    /// Animate `key` from its current state towards `target`.
    pub fn to(&mut self, key: K, target: StyleTarget, spec: TweenSpec) {
        self.cancel(key, &target);
        let from = self.state(key);
        self.tweens.push(Tween {
            key,
            target,
            from,
            to: from.merged(&target),
            spec,
            elapsed: 0.0,
        });
    }

    /// Start a number counter rendering into `counter.key`.
    pub fn count(&mut self, counter: CountUp<K>) {
        self.counters.retain(|c| c.key != counter.key);
        self.counters.push(counter);
    }

    /// Play `timeline` from time zero. Tweens of the properties it animates
    /// stop.
    pub fn play(&mut self, timeline: Timeline<K>) {
        for key in timeline.keys() {
            let animated = timeline.animated(key);
            self.tweens.retain(|t| t.key != key || !t.target.overlaps(&animated));
        }
        self.timelines.push(PlayingTimeline {
            timeline,
            elapsed: 0.0,
        });
    }

    pub fn is_idle(&self) -> bool {
        self.tweens.is_empty() && self.timelines.is_empty() && self.counters.is_empty()
    }

    /// Advance every running animation by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> FrameUpdate<K> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut update = FrameUpdate::default();

        for playing in self.timelines.iter_mut() {
            playing.elapsed += dt;
            for (key, sampled) in playing.timeline.sample(playing.elapsed) {
                let animated = playing.timeline.animated(key);
                let current = self.states.get(&key).copied().unwrap_or_default();
                let state = current.merged(&animated.pick(&sampled));
                self.states.insert(key, state);
                update.styles.push(StyleWrite {
                    key,
                    state,
                    mask: animated.mask(),
                });
            }
        }
        self.timelines.retain(|p| p.elapsed < p.timeline.duration());

        for tween in self.tweens.iter_mut() {
            tween.elapsed += dt;
            if let Some(t) = tween.spec.progress(tween.elapsed) {
                let current = self.states.get(&tween.key).copied().unwrap_or_default();
                let lerped = tween.from.lerp(&tween.to, t);
                let state = current.merged(&tween.target.pick(&lerped));
                self.states.insert(tween.key, state);
                update.styles.push(StyleWrite {
                    key: tween.key,
                    state,
                    mask: tween.target.mask(),
                });
            }
        }
        self.tweens.retain(|t| t.elapsed < t.spec.total());

        for counter in self.counters.iter_mut() {
            if let Some(text) = counter.advance(dt) {
                update.texts.push((counter.key, text));
            }
        }
        self.counters.retain(|c| !c.is_finished());

        update
    }
}
