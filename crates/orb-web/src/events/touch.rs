use super::InputWiring;
use crate::input;
use orb_core::{InputEvent, Outcome};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_touchstart(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        w.dispatch(InputEvent::TouchStart(input::touch_points(&ev)));
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_touchmove(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let touches = input::touch_points(&ev);
        let pinching = touches.len() == 2;
        let outcome = w.dispatch(InputEvent::TouchMove(touches));
        // Keep the browser from zooming the page while the orb is pinched.
        if pinching || outcome == Outcome::DragMoved {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    // Non-passive so prevent_default is honored.
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas_for_listener.add_event_listener_with_callback_and_add_event_listener_options(
        "touchmove",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

pub fn wire_touchend(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        w.dispatch(InputEvent::TouchEnd);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
