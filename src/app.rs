//! Page-wide state shared by every event handler.

use crate::audio::Sounds;
use crate::constants::*;
use crate::core::constants::{CARD_HOVER_DURATION_SEC, CARD_HOVER_SCALE};
use crate::core::scroll::{parallax_offset, progress_percent};
use crate::core::{
    armed_target, hero_timeline, page_reset_target, page_reveal_spec, revealed_target,
    scroll_reveal_spec, ClickTarget, Ease, FabStyle, IntersectionSample, PageSwitcher,
    RevealKind, RevealRegistry, StyleTarget, SwitchError, TweenSpec, UiController,
};
use crate::dom;
use crate::motion::{OrbitBinding, Stage};
use crate::observer::BrowserObserver;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct App {
    pub stage: Stage,
    pub reveals: RevealRegistry<usize>,
    pub observer: BrowserObserver,
    pub controller: UiController,
    pub sounds: Sounds,
    pages: Vec<web::HtmlElement>,
    fab_wrapper: Option<web::HtmlElement>,
    progress_bar: Option<web::HtmlElement>,
    hero_image: Option<web::HtmlElement>,
    orbits: Vec<OrbitBinding>,
}

fn kind_of(el: &web::Element) -> RevealKind {
    if el.class_list().contains(STAT_CARD_CLASS) {
        RevealKind::Stat
    } else {
        RevealKind::Fade
    }
}

impl App {
    /// Read the page structure from markup. Missing optional elements are
    /// tolerated; the handlers that need them become no-ops.
    pub fn new(document: &web::Document) -> App {
        let pages = dom::query_document(document, PAGE_SELECTOR);
        let ids: Vec<String> = pages.iter().map(|p| p.id()).collect();
        let active = pages
            .iter()
            .position(|p| p.class_list().contains(ACTIVE_CLASS));
        let controller = UiController::new(PageSwitcher::new(ids, active));
        log::info!(
            "[pages] {} sections, active={:?}",
            controller.pages().len(),
            controller.state().active_page
        );

        let fab_wrapper = dom::query_one(document, FAB_WRAPPER_SELECTOR);
        if fab_wrapper.is_none() {
            log::debug!("[fab] no {} in markup", FAB_WRAPPER_SELECTOR);
        }
        let progress_bar = document
            .get_element_by_id(SCROLL_PROGRESS_ID)
            .and_then(|e| e.dyn_into::<web::HtmlElement>().ok());

        App {
            stage: Stage::default(),
            reveals: RevealRegistry::new(),
            observer: BrowserObserver::default(),
            controller,
            sounds: Sounds::load(),
            pages,
            fab_wrapper,
            progress_bar,
            hero_image: dom::query_one(document, HERO_IMAGE_SELECTOR),
            orbits: Vec::new(),
        }
    }

    /// Start the hero entrance timeline.
    pub fn play_hero(&mut self, document: &web::Document) {
        let text: Vec<usize> = dom::query_document(document, HERO_TEXT_SELECTOR)
            .iter()
            .map(|el| self.stage.key_of(el))
            .collect();
        let fade: Vec<usize> = dom::query_document(document, HERO_FADE_SELECTOR)
            .iter()
            .map(|el| self.stage.key_of(el))
            .collect();
        let timeline = hero_timeline(&text, &fade);
        log::info!(
            "[hero] {} text, {} fade, {:.2}s",
            text.len(),
            fade.len(),
            timeline.duration()
        );
        self.stage.play(timeline);
    }

    /// Hide and arm every scroll-reveal element. The observer must already
    /// be attached.
    pub fn arm_reveals(&mut self, document: &web::Document) {
        for el in dom::query_document(document, REVEAL_SELECTOR) {
            let key = self.stage.key_of(&el);
            self.stage.set(key, armed_target());
            self.observer.register(key, &el);
            self.reveals.arm(key, kind_of(&el), &mut self.observer);
        }
        log::info!("[reveal] armed {}", self.reveals.len());
    }

    pub fn on_intersections(&mut self, samples: Vec<IntersectionSample<web::Element>>) {
        let keyed: Vec<IntersectionSample<usize>> = samples
            .into_iter()
            .filter_map(|s| {
                self.observer.key_of(&s.key).map(|key| IntersectionSample {
                    key,
                    is_intersecting: s.is_intersecting,
                    ratio: s.ratio,
                    root_fill: s.root_fill,
                })
            })
            .collect();
        let fired = self.reveals.on_intersections(keyed, &mut self.observer);
        for reveal in fired {
            self.reveal(reveal.key, reveal.kind, false);
        }
    }

    fn reveal(&mut self, key: usize, kind: RevealKind, page_entrance: bool) {
        match kind {
            RevealKind::Stat => self.stage.animate_stat(key),
            RevealKind::Fade => {
                let spec = if page_entrance {
                    page_reveal_spec()
                } else {
                    scroll_reveal_spec()
                };
                self.stage.to(key, revealed_target(), spec);
            }
        }
    }

    /// Bind every orb that has a ring to its scroll range.
    pub fn bind_orbits(&mut self, window: &web::Window, document: &web::Document) {
        let offset = dom::scroll_y(window);
        for orb in dom::query_document(document, ORB_SELECTOR) {
            let Some(ring) = dom::query_all(&orb, ORB_RING_SELECTOR).into_iter().next() else {
                continue;
            };
            let ring_key = self.stage.key_of(&ring);
            dom::set_style(&ring, "transform-origin", "50% 50%");
            let binding = OrbitBinding::new(window, orb, ring_key);
            binding.scrub(&self.stage, offset);
            self.orbits.push(binding);
        }
        log::info!("[orbit] {} rings bound", self.orbits.len());
    }

    pub fn remeasure_orbits(&mut self, window: &web::Window) {
        let offset = dom::scroll_y(window);
        for orbit in self.orbits.iter_mut() {
            orbit.remeasure(window);
            orbit.scrub(&self.stage, offset);
        }
    }

    /// Everything that follows the scroll position.
    pub fn on_scroll(&self, window: &web::Window, document: &web::Document) {
        let offset = dom::scroll_y(window);

        if let Some(bar) = &self.progress_bar {
            let (scroll_height, client_height) = dom::scroll_extent(document);
            let pct = progress_percent(offset, scroll_height, client_height);
            dom::set_style(bar, "width", &format!("{pct}%"));
        }

        if let Some(img) = &self.hero_image {
            dom::set_style(
                img,
                "transform",
                &format!("translateY({}px)", parallax_offset(offset)),
            );
        }

        if let Some(fab) = &self.fab_wrapper {
            let style = FabStyle::for_scroll(offset);
            dom::set_style(fab, "opacity", &style.opacity.to_string());
            dom::set_style(fab, "pointer-events", style.css_pointer_events());
            dom::set_style(fab, "transform", &style.css_transform());
        }

        for orbit in &self.orbits {
            orbit.scrub(&self.stage, offset);
        }
    }

    /// Route a click to the sub-menu and mirror the result on the wrapper.
    pub fn click(&mut self, target: ClickTarget) {
        let open = self.controller.click(target);
        self.sync_sub_menu(open);
    }

    fn sync_sub_menu(&self, open: bool) {
        if let Some(fab) = &self.fab_wrapper {
            let cl = fab.class_list();
            _ = if open {
                cl.add_1(ACTIVE_CLASS)
            } else {
                cl.remove_1(ACTIVE_CLASS)
            };
        }
    }

    /// Show page `section`, replay its entrance and close the sub-menu.
    pub fn switch_page(&mut self, window: &web::Window, section: Option<&str>) {
        let transition = match self.controller.navigate(section) {
            Ok(t) => t,
            Err(SwitchError::MissingTarget) => return,
            Err(e) => {
                log::warn!("[pages] {e}; staying on {:?}", self.controller.state().active_page);
                return;
            }
        };

        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&opts);

        for page in &self.pages {
            _ = page.class_list().remove_1(ACTIVE_CLASS);
        }
        let Some(page) = self.pages.get(transition.to).cloned() else {
            return;
        };
        _ = page.class_list().add_1(ACTIVE_CLASS);
        log::info!("[pages] {:?} -> {}", transition.from, page.id());

        for el in dom::query_all(&page, PAGE_REVEAL_SELECTOR) {
            let key = self.stage.key_of(&el);
            let replay = self.reveals.replay(key, kind_of(&el), &mut self.observer);
            self.stage.set(key, page_reset_target());
            self.reveal(replay.key, replay.kind, true);
        }

        self.sync_sub_menu(self.controller.state().sub_menu_open);
        // Orbs on a page that was hidden had no layout to measure.
        self.remeasure_orbits(window);
    }

    /// Scale a card up (`hovered`) or back to rest.
    pub fn hover_card(&mut self, card: &web::HtmlElement, hovered: bool) {
        let key = self.stage.key_of(card);
        let scale = if hovered { CARD_HOVER_SCALE } else { 1.0 };
        self.stage.to(
            key,
            StyleTarget::default().scale(scale),
            TweenSpec::new(CARD_HOVER_DURATION_SEC, Ease::Power2Out),
        );
    }
}
