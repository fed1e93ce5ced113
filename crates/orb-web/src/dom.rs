use orb_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach a click handler to the element with `element_id`, if present.
/// The click does not propagate to the canvas underneath.
#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            ev.stop_propagation();
            handler();
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Current window size in CSS pixels together with the device pixel ratio.
pub fn window_viewport(window: &web::Window) -> anyhow::Result<Viewport> {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or_else(|| anyhow::anyhow!("window.innerWidth unavailable"))?;
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or_else(|| anyhow::anyhow!("window.innerHeight unavailable"))?;
    let dpr = window.device_pixel_ratio();
    let dpr = if dpr > 0.0 { dpr } else { 1.0 };
    Ok(Viewport::new(width as f32, height as f32, dpr)?)
}

/// Size the canvas backing store for `viewport` and scale the 2D context so
/// drawing happens in CSS pixels.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    viewport: &Viewport,
) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let dpr = viewport.dpr();
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
}
