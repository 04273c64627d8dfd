use crate::app::App;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Long pauses (background tab) are clamped so tweens resume instead of jumping to the end.
const MAX_FRAME_DT_SEC: f32 = 0.1;

pub struct FrameContext {
    pub app: Rc<RefCell<App>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(app: Rc<RefCell<App>>) -> Self {
        Self {
            app,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        // Skip the frame rather than panic if a handler is mid-borrow.
        if let Ok(mut app) = self.app.try_borrow_mut() {
            app.stage.tick(dt_sec);
        }
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` for the life of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    };
}
