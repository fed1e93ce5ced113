pub mod controls;
pub mod pointer;
pub mod touch;

use crate::dom;
use orb_core::{InputEvent, OrbApp, Outcome};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub use controls::wire_mode_buttons;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub app: Rc<RefCell<OrbApp>>,
}

impl InputWiring {
    #[inline]
    fn dispatch(&self, event: InputEvent) -> Outcome {
        self.app.borrow_mut().handle(event)
    }
}

pub fn wire_input_handlers(w: InputWiring) {
    pointer::wire_mousedown(&w);
    pointer::wire_mousemove(&w);
    pointer::wire_mouseup(&w);
    pointer::wire_wheel(&w);
    touch::wire_touchstart(&w);
    touch::wire_touchmove(&w);
    touch::wire_touchend(&w);
    wire_resize(&w);
}

fn wire_resize(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else {
            return;
        };
        match dom::window_viewport(&window) {
            Ok(viewport) => {
                dom::sync_canvas_backing_size(&w.canvas, &w.ctx, &viewport);
                w.dispatch(InputEvent::Resize(viewport));
            }
            Err(e) => log::warn!("[resize] skipped: {:?}", e),
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
