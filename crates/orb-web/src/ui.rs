use orb_core::{Affordance, Mode};
use wasm_bindgen::JsValue;
use web_sys as web;

const ACTIVE_CLASS: &str = "active";
const TOUCH_SCROLL_LABEL: &str =
    "Scroll <span class=\"mobile-only-text\" style=\"display:inline;\">(gestures)</span>";

/// Mark the button for `mode` active and the other one inactive.
pub fn sync_mode_buttons(document: &web::Document, mode: Mode) {
    for m in [Mode::Color, Mode::Move] {
        if let Some(el) = document.get_element_by_id(m.button_id()) {
            let cl = el.class_list();
            if m == mode {
                _ = cl.add_1(ACTIVE_CLASS);
            } else {
                _ = cl.remove_1(ACTIVE_CLASS);
            }
        }
    }
}

#[inline]
pub fn apply_affordance(canvas: &web::HtmlCanvasElement, hint: Affordance) {
    canvas.set_class_name(hint.class_name());
}

pub fn is_touch_device(window: &web::Window) -> bool {
    let target: &js_sys::Object = window.as_ref();
    let has_ontouchstart =
        js_sys::Reflect::has(target, &JsValue::from_str("ontouchstart")).unwrap_or(false);
    has_ontouchstart || window.navigator().max_touch_points() > 0
}

/// Swap the scroll hint for a gesture hint on touch devices.
pub fn adapt_scroll_label(window: &web::Window, document: &web::Document) {
    if !is_touch_device(window) {
        return;
    }
    if let Some(label) = document.get_element_by_id("label-scroll") {
        label.set_inner_html(TOUCH_SCROLL_LABEL);
        log::info!("[ui] touch device detected; showing gesture hint");
    }
}
