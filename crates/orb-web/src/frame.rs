use crate::render::CanvasPainter;
use crate::ui;
use orb_core::{Affordance, InstantClock, OrbApp, Runner};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub app: Rc<RefCell<OrbApp>>,
    pub canvas: web::HtmlCanvasElement,
    pub painter: CanvasPainter,
    pub runner: Runner<InstantClock>,
    pub shown_affordance: Option<Affordance>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let hint = {
            let mut app = self.app.borrow_mut();
            self.runner.tick(&mut app, &mut self.painter)
        };
        if self.shown_affordance != Some(hint) {
            ui::apply_affordance(&self.canvas, hint);
            self.shown_affordance = Some(hint);
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
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame error: {:?}", e);
        }
    }
}
