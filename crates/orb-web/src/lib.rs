#![cfg(target_arch = "wasm32")]
use orb_core::{InstantClock, OrbApp, OrbParams, Runner, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod input;
mod render;
mod ui;

const CANVAS_ID: &str = "c";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orb-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    ui::adapt_scroll_label(&window, &document);

    // A hidden or zero-sized window starts with a placeholder; the resize
    // listener replaces it once the window has a real size.
    let viewport = match dom::window_viewport(&window) {
        Ok(viewport) => viewport,
        Err(e) => {
            log::warn!("[orb] no usable viewport yet, starting at 1x1: {:?}", e);
            Viewport::new(1.0, 1.0, 1.0)?
        }
    };
    dom::sync_canvas_backing_size(&canvas, &ctx, &viewport);

    let seed: u64 = rand::random();
    let app = Rc::new(RefCell::new(OrbApp::new(
        viewport,
        OrbParams::default(),
        seed,
    )));
    {
        let a = app.borrow();
        log::info!(
            "[orb] viewport={}x{} @{}x particles={} blobs={}",
            viewport.width(),
            viewport.height(),
            viewport.dpr(),
            a.scene.particles.len(),
            a.scene.blobs.len()
        );
    }

    events::wire_mode_buttons(&document, &app);
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        ctx: ctx.clone(),
        app: app.clone(),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app,
        canvas,
        painter: render::CanvasPainter::new(ctx),
        runner: Runner::new(InstantClock::new()),
        shown_affordance: None,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
