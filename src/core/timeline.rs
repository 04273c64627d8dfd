// Sequenced keyframes over several keys.
//
// A timeline is resolved when it is built: every segment records the state
// its key is in when the segment starts. Sampling is therefore a pure
// function of time, which is what makes scrubbing reversible.

use super::easing::Ease;
use super::tween::{StyleTarget, VisualState};
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::hash::Hash;

/// Where a new group of segments starts, relative to the timeline built so far.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// Right after the current end.
    End,
    /// Current end shifted by the given seconds (negative overlaps).
    FromEnd(f32),
    /// Absolute time in seconds.
    At(f32),
}

#[derive(Clone, Debug)]
struct Segment<K> {
    key: K,
    start: f32,
    duration: f32,
    ease: Ease,
    from: VisualState,
    to: VisualState,
}

#[derive(Clone, Debug)]
pub struct Timeline<K> {
    order: Vec<K>,
    bases: FnvHashMap<K, VisualState>,
    resolved: FnvHashMap<K, VisualState>,
    animated: FnvHashMap<K, StyleTarget>,
    segments: Vec<Segment<K>>,
    end: f32,
}

impl<K> Default for Timeline<K> {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            bases: FnvHashMap::default(),
            resolved: FnvHashMap::default(),
            animated: FnvHashMap::default(),
            segments: Vec::new(),
            end: 0.0,
        }
    }
}

impl<K: Copy + Eq + Hash> Timeline<K> {
    pub fn new() -> Self {
        Self::default()
    }

    fn track(&mut self, key: K, state: VisualState) {
        if !self.bases.contains_key(&key) {
            self.order.push(key);
            self.bases.insert(key, state);
        }
    }

    /// Declare the state `key` is in when the timeline starts.
    pub fn base(&mut self, key: K, state: VisualState) -> &mut Self {
        if !self.bases.contains_key(&key) {
            self.order.push(key);
        }
        self.bases.insert(key, state);
        self.resolved.insert(key, state);
        self
    }

    /// Append a tween of each key in `keys` towards `target`, the n-th key
    /// starting `n * stagger` seconds after `position`. Segments of one key
    /// must be added in start order.
    pub fn to(
        &mut self,
        keys: &[K],
        target: StyleTarget,
        duration: f32,
        ease: Ease,
        stagger: f32,
        position: Position,
    ) -> &mut Self {
        let start = match position {
            Position::End => self.end,
            Position::FromEnd(offset) => (self.end + offset).max(0.0),
            Position::At(t) => t.max(0.0),
        };
        let duration = duration.max(0.0);
        for (i, &key) in keys.iter().enumerate() {
            let from = self.resolved.get(&key).copied().unwrap_or_default();
            self.track(key, from);
            let to = from.merged(&target);
            let seg_start = start + stagger * i as f32;
            self.segments.push(Segment {
                key,
                start: seg_start,
                duration,
                ease,
                from,
                to,
            });
            self.resolved.insert(key, to);
            let animated = self.animated.entry(key).or_default();
            *animated = animated.union(&target);
            self.end = self.end.max(seg_start + duration);
        }
        self
    }

    pub fn duration(&self) -> f32 {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn keys(&self) -> Vec<K> {
        self.order.clone()
    }

    /// Properties the timeline animates on `key`; empty for unknown keys.
    pub fn animated(&self, key: K) -> StyleTarget {
        self.animated.get(&key).copied().unwrap_or_default()
    }

    /// Drop `key` from the timeline so it no longer writes that key.
    pub fn forget(&mut self, key: K) {
        self.order.retain(|k| *k != key);
        self.bases.remove(&key);
        self.resolved.remove(&key);
        self.animated.remove(&key);
        self.segments.retain(|s| s.key != key);
    }

    /// State of `key` at `time` seconds.
    pub fn sample_key(&self, key: K, time: f32) -> Option<VisualState> {
        let mut state = *self.bases.get(&key)?;
        let time = if time.is_nan() { 0.0 } else { time };
        for seg in self.segments.iter().filter(|s| s.key == key) {
            if time < seg.start {
                break;
            }
            let t = if seg.duration > 0.0 {
                ((time - seg.start) / seg.duration).min(1.0)
            } else {
                1.0
            };
            state = seg.from.lerp(&seg.to, seg.ease.apply(t));
        }
        Some(state)
    }

    /// State of every key at `time` seconds, in the order keys were added.
    pub fn sample(&self, time: f32) -> SmallVec<[(K, VisualState); 4]> {
        self.order
            .iter()
            .filter_map(|&key| self.sample_key(key, time).map(|s| (key, s)))
            .collect()
    }
}
