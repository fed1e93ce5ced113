use crate::{dom, ui};
use orb_core::{InputEvent, Mode, OrbApp, Outcome};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Hook the color/move toggle buttons to the interaction mode.
pub fn wire_mode_buttons(document: &web::Document, app: &Rc<RefCell<OrbApp>>) {
    for mode in [Mode::Color, Mode::Move] {
        let app = app.clone();
        let doc = document.clone();
        dom::add_click_listener(document, mode.button_id(), move || {
            let outcome = app.borrow_mut().handle(InputEvent::SetMode(mode));
            if let Outcome::ModeChanged(m) = outcome {
                ui::sync_mode_buttons(&doc, m);
                log::info!("[mode] {:?}", m);
            }
        });
    }
    ui::sync_mode_buttons(document, app.borrow().interaction.mode);
}
