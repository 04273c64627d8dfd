use crate::core::{StyleMask, VisualState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements matching `selector` under `root`, as `HtmlElement`s.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    match root.query_selector_all(selector) {
        Ok(list) => collect_html(&list),
        Err(e) => {
            log::warn!("[dom] bad selector {selector}: {:?}", e);
            Vec::new()
        }
    }
}

pub fn query_document(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    match document.query_selector_all(selector) {
        Ok(list) => collect_html(&list),
        Err(e) => {
            log::warn!("[dom] bad selector {selector}: {:?}", e);
            Vec::new()
        }
    }
}

fn collect_html(list: &web::NodeList) -> Vec<web::HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn query_one(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Write the parts of an animatable state named by `mask` as inline
/// opacity and transform. Unmasked properties are left to the stylesheet.
pub fn apply_visual(el: &web::HtmlElement, state: &VisualState, mask: StyleMask) {
    if mask.opacity {
        set_style(el, "opacity", &state.opacity.to_string());
    }
    if mask.transform {
        set_style(el, "transform", &state.css_transform());
    }
}

/// Current vertical scroll offset in CSS px.
pub fn scroll_y(window: &web::Window) -> f32 {
    if let Ok(y) = window.scroll_y() {
        return y as f32;
    }
    window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_top() as f32)
        .unwrap_or(0.0)
}

/// (scrollHeight, clientHeight) of the root element.
pub fn scroll_extent(document: &web::Document) -> (f32, f32) {
    document
        .document_element()
        .map(|e| (e.scroll_height() as f32, e.client_height() as f32))
        .unwrap_or((0.0, 0.0))
}

pub fn viewport_height(window: &web::Window) -> f32 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32
}

/// Document-relative top and height of an element.
pub fn document_rect(window: &web::Window, el: &web::Element) -> (f32, f32) {
    let rect = el.get_bounding_client_rect();
    (rect.top() as f32 + scroll_y(window), rect.height() as f32)
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}
