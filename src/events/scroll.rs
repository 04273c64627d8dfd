use crate::app::App;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Progress bar, parallax, floating button and orbit rings on every scroll;
/// orbit ranges are remeasured on resize and once images have loaded.
pub fn wire_scroll(window: &web::Window, document: &web::Document, app: Rc<RefCell<App>>) {
    // Bring everything in line with wherever the page was restored to.
    app.borrow().on_scroll(window, document);

    {
        let app = app.clone();
        let win = window.clone();
        let doc = document.clone();
        dom::listen(window, "scroll", move |_: web::Event| {
            app.borrow().on_scroll(&win, &doc);
        });
    }

    for event in ["resize", "load"] {
        let app = app.clone();
        let win = window.clone();
        let doc = document.clone();
        dom::listen(window, event, move |_: web::Event| {
            log::debug!("[orbit] remeasure on {}", event);
            let mut app = app.borrow_mut();
            app.remeasure_orbits(&win);
            app.on_scroll(&win, &doc);
        });
    }
}
