#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod app;
mod audio;
mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod icons;
mod motion;
mod observer;

use app::App;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("page-motion starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_: web::Event| run_init());
    } else {
        run_init();
    }
    Ok(())
}

fn run_init() {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return;
    }
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    match icons::create_icons(&window) {
        Ok(n) => log::info!("[icons] {} registered", n),
        Err(e) => log::warn!("[icons] skipped: {e}"),
    }

    let app = Rc::new(RefCell::new(App::new(&document)));

    app.borrow_mut().play_hero(&document);

    // The observer callback needs the shared app, so attach it before arming.
    {
        let app_cb = app.clone();
        let attached = app.borrow_mut().observer.attach(move |samples| {
            app_cb.borrow_mut().on_intersections(samples);
        });
        match attached {
            Ok(()) => app.borrow_mut().arm_reveals(&document),
            Err(e) => log::warn!("[reveal] {e}; scroll reveals disabled"),
        }
    }

    app.borrow_mut().bind_orbits(&window, &document);

    events::wire_nav_triggers(&window, &document, &app);
    events::wire_click_sounds(&document, &app);
    events::wire_fab(&document, &app);
    events::wire_first_gesture(&document, &app);
    events::wire_card_hover(&document, &app);
    events::wire_scroll(&window, &document, app.clone());

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext::new(app))));
    Ok(())
}
