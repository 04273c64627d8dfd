//! Binds the core tween runtime to real elements.

use crate::constants::{MOTION_KEY_ATTR, STAT_NUMBER_SELECTOR, STAT_TARGET_ATTR};
use crate::core::{
    decode_key, encode_key, parse_target, revealed_target, stat_card_spec, CountUp, Orbit,
    ScrubRange, StyleMask, StyleTarget, Timeline, TweenSpec, Tweens,
};
use crate::dom;
use web_sys as web;

/// Every element the page animates, addressed by index.
#[derive(Default)]
pub struct Stage {
    elements: Vec<web::HtmlElement>,
    tweens: Tweens<usize>,
}

impl Stage {
    /// Index of `el`, adding it on first sight. The index is stamped on the
    /// element so later lookups are a single attribute read.
    pub fn key_of(&mut self, el: &web::HtmlElement) -> usize {
        let raw = el.get_attribute(MOTION_KEY_ATTR);
        let node: &web::Node = el;
        if let Some(key) = decode_key(raw.as_deref(), self.elements.len())
            .filter(|&k| self.elements[k].is_same_node(Some(node)))
        {
            return key;
        }
        let key = self.elements.len();
        _ = el.set_attribute(MOTION_KEY_ATTR, &encode_key(key));
        self.elements.push(el.clone());
        key
    }

    pub fn element(&self, key: usize) -> Option<&web::HtmlElement> {
        self.elements.get(key)
    }

    pub fn set(&mut self, key: usize, target: StyleTarget) {
        let state = self.tweens.set(key, target);
        if let Some(el) = self.elements.get(key) {
            dom::apply_visual(el, &state, target.mask());
        }
    }

    pub fn to(&mut self, key: usize, target: StyleTarget, spec: TweenSpec) {
        self.tweens.to(key, target, spec);
    }

    pub fn play(&mut self, timeline: Timeline<usize>) {
        // Render the starting frame now so nothing flashes before the first tick.
        for (key, state) in timeline.sample(0.0) {
            if let Some(el) = self.elements.get(key) {
                dom::apply_visual(el, &state, timeline.animated(key).mask());
            }
        }
        self.tweens.play(timeline);
    }

    pub fn count(&mut self, counter: CountUp<usize>) {
        self.tweens.count(counter);
    }

    /// Advance all animations by `dt` seconds and write the results.
    pub fn tick(&mut self, dt: f32) {
        if self.tweens.is_idle() {
            return;
        }
        let update = self.tweens.advance(dt);
        for write in &update.styles {
            if let Some(el) = self.elements.get(write.key) {
                dom::apply_visual(el, &write.state, write.mask);
            }
        }
        for (key, text) in &update.texts {
            if let Some(el) = self.elements.get(*key) {
                el.set_text_content(Some(text.as_str()));
            }
        }
    }

    /// Reveal a stat card and count its number up from zero.
    pub fn animate_stat(&mut self, card: usize) {
        self.to(card, revealed_target(), stat_card_spec());

        let Some(card_el) = self.elements.get(card).cloned() else {
            return;
        };
        let Some(number_el) = dom::query_all(&card_el, STAT_NUMBER_SELECTOR).into_iter().next()
        else {
            log::warn!("[stats] card without {}", STAT_NUMBER_SELECTOR);
            return;
        };
        let raw = number_el.get_attribute(STAT_TARGET_ATTR).unwrap_or_default();
        match parse_target(&raw) {
            Some(target) => {
                let key = self.key_of(&number_el);
                self.count(CountUp::new(key, target));
            }
            None => log::warn!("[stats] unusable {}={:?}", STAT_TARGET_ATTR, raw),
        }
    }
}

/// An orb's ring and the scrubbed timeline bound to it.
pub struct OrbitBinding {
    orb: web::HtmlElement,
    orbit: Orbit<usize>,
}

impl OrbitBinding {
    pub fn new(window: &web::Window, orb: web::HtmlElement, ring_key: usize) -> Self {
        let range = Self::measure(window, &orb);
        Self {
            orb,
            orbit: Orbit::new(ring_key, range),
        }
    }

    fn measure(window: &web::Window, orb: &web::HtmlElement) -> Option<ScrubRange> {
        let (top, height) = dom::document_rect(window, orb);
        ScrubRange::for_orb(top, height, dom::viewport_height(window))
    }

    /// Recompute the scroll range after layout changes.
    pub fn remeasure(&mut self, window: &web::Window) {
        self.orbit.range = Self::measure(window, &self.orb);
    }

    /// Write the ring's state for the current scroll offset.
    pub fn scrub(&self, stage: &Stage, scroll_offset: f32) {
        if let Some(ring) = stage.element(self.orbit.ring) {
            dom::apply_visual(ring, &self.orbit.sample(scroll_offset), StyleMask::ALL);
        }
    }
}
