use crate::constants::{MOTION_KEY_ATTR, OBSERVER_ROOT_MARGIN};
use crate::core::constants::REVEAL_OBSERVER_THRESHOLDS;
use crate::core::{decode_key, IntersectionSample, IntersectionSource};
use fnv::FnvHashMap;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// `IntersectionObserver` keyed by stage index.
///
/// Elements must be `register`ed before they can be observed, and the
/// browser observer must be `attach`ed before anything is armed.
#[derive(Default)]
pub struct BrowserObserver {
    observer: Option<web::IntersectionObserver>,
    elements: FnvHashMap<usize, web::Element>,
}

impl BrowserObserver {
    pub fn register(&mut self, key: usize, el: &web::Element) {
        self.elements.entry(key).or_insert_with(|| el.clone());
    }

    /// Create the browser observer with the reveal threshold and margin.
    /// `on_entries` receives the samples of each callback.
    pub fn attach(
        &mut self,
        mut on_entries: impl FnMut(Vec<IntersectionSample<web::Element>>) + 'static,
    ) -> anyhow::Result<()> {
        let callback = Closure::wrap(Box::new(move |entries: Array, _obs: JsValue| {
            let samples = entries
                .iter()
                .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                .map(|entry| IntersectionSample {
                    root_fill: root_fill(&entry),
                    key: entry.target(),
                    is_intersecting: entry.is_intersecting(),
                    ratio: entry.intersection_ratio() as f32,
                })
                .collect();
            on_entries(samples);
        }) as Box<dyn FnMut(Array, JsValue)>);

        let init = web::IntersectionObserverInit::new();
        let thresholds: Array = REVEAL_OBSERVER_THRESHOLDS
            .iter()
            .map(|&t| JsValue::from_f64(t as f64))
            .collect();
        init.set_threshold(&thresholds);
        init.set_root_margin(OBSERVER_ROOT_MARGIN);
        let observer = web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
        .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
        callback.forget();
        self.observer = Some(observer);
        Ok(())
    }

    /// Stage key of an observed element, read back from its key attribute.
    pub fn key_of(&self, el: &web::Element) -> Option<usize> {
        let raw = el.get_attribute(MOTION_KEY_ATTR);
        let key = decode_key(raw.as_deref(), usize::MAX)?;
        let node: &web::Node = el;
        self.elements
            .get(&key)
            .filter(|known| known.is_same_node(Some(node)))
            .map(|_| key)
    }
}

/// Share of the root's height covered by the visible part of the target.
fn root_fill(entry: &web::IntersectionObserverEntry) -> f32 {
    let visible = entry.intersection_rect().height();
    match entry.root_bounds() {
        Some(root) if root.height() > 0.0 => (visible / root.height()) as f32,
        _ => 0.0,
    }
}

impl IntersectionSource<usize> for BrowserObserver {
    fn observe(&mut self, key: usize) {
        match (&self.observer, self.elements.get(&key)) {
            (Some(obs), Some(el)) => obs.observe(el),
            (None, Some(_)) => log::debug!("[reveal] observer not attached, key {} ignored", key),
            (_, None) => log::warn!("[reveal] observe of unregistered key {}", key),
        }
    }

    fn unobserve(&mut self, key: usize) {
        if let (Some(obs), Some(el)) = (&self.observer, self.elements.get(&key)) {
            obs.unobserve(el);
        }
    }
}
