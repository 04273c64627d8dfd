use crate::app::App;
use crate::constants::*;
use crate::core::ClickTarget;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

const FIRST_GESTURE_EVENTS: [&str; 2] = ["click", "touchstart"];

/// Nav triggers switch pages instead of following their href.
pub fn wire_nav_triggers(window: &web::Window, document: &web::Document, app: &Rc<RefCell<App>>) {
    for trigger in dom::query_document(document, NAV_TRIGGER_SELECTOR) {
        let app = app.clone();
        let win = window.clone();
        let el = trigger.clone();
        dom::listen(&trigger, "click", move |ev: web::MouseEvent| {
            ev.prevent_default();
            let section = el.get_attribute(NAV_SECTION_ATTR);
            app.borrow_mut().switch_page(&win, section.as_deref());
        });
    }
}

/// Soft click sound on every interactive element.
pub fn wire_click_sounds(document: &web::Document, app: &Rc<RefCell<App>>) {
    let targets = dom::query_document(document, CLICK_SOUND_SELECTOR);
    log::info!("[audio] click sound on {} elements", targets.len());
    for el in targets {
        let app = app.clone();
        dom::listen(&el, "click", move |_: web::MouseEvent| {
            app.borrow().sounds.click();
        });
    }
}

/// Main floating button toggles the sub-menu; any other click closes it.
pub fn wire_fab(document: &web::Document, app: &Rc<RefCell<App>>) {
    if let Some(main) = dom::query_one(document, FAB_MAIN_SELECTOR) {
        let app = app.clone();
        dom::listen(&main, "click", move |ev: web::MouseEvent| {
            // Keeps the document-level close below from undoing the toggle.
            ev.stop_propagation();
            app.borrow_mut().click(ClickTarget::MainButton);
        });
    } else {
        log::debug!("[fab] no {} in markup", FAB_MAIN_SELECTOR);
    }

    let app = app.clone();
    dom::listen(document, "click", move |_: web::MouseEvent| {
        app.borrow_mut().click(ClickTarget::Elsewhere);
    });
}

/// Start the ambient loop on the first click or touch, then stop listening.
pub fn wire_first_gesture(document: &web::Document, app: &Rc<RefCell<App>>) {
    let handler: Rc<RefCell<Option<Closure<dyn FnMut(web::Event)>>>> =
        Rc::new(RefCell::new(None));
    let handler_inner = handler.clone();
    let doc = document.clone();
    let app = app.clone();
    *handler.borrow_mut() = Some(Closure::wrap(Box::new(move |_: web::Event| {
        {
            let mut app = app.borrow_mut();
            if app.controller.take_first_gesture() {
                log::info!("[audio] first gesture, starting ambient");
                app.sounds.start_ambient();
            }
        }
        if let Some(cb) = handler_inner.borrow().as_ref() {
            for event in FIRST_GESTURE_EVENTS {
                _ = doc.remove_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut(web::Event)>));

    if let Some(cb) = handler.borrow().as_ref() {
        for event in FIRST_GESTURE_EVENTS {
            _ = document.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
        }
    };
}

/// Cards grow slightly while hovered.
pub fn wire_card_hover(document: &web::Document, app: &Rc<RefCell<App>>) {
    for card in dom::query_document(document, INIT_CARD_SELECTOR) {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let app = app.clone();
            let el = card.clone();
            dom::listen(&card, event, move |_: web::MouseEvent| {
                app.borrow_mut().hover_card(&el, hovered);
            });
        }
    }
}
