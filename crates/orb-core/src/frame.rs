use crate::affordance::{affordance, Affordance};
use crate::color::{wrap_hue, Color};
use crate::constants::*;
use crate::painter::Painter;
use crate::state::OrbApp;
use glam::Vec2;
use std::f32::consts::TAU;
use std::f64::consts::TAU as TAU_F64;

/// Advance `app` by one frame and draw it through `painter`.
///
/// `elapsed_ms` is the session clock in milliseconds; it drives the particle
/// pulse, blob pulse and hue drift. Returns the cursor hint for this frame.
pub fn step<P: Painter + ?Sized>(app: &mut OrbApp, elapsed_ms: f64, painter: &mut P) -> Affordance {
    let vp = app.viewport;
    let (w, h) = (vp.width(), vp.height());
    let t = pulse_wave(elapsed_ms, 1.0);
    let blob_t = pulse_wave(elapsed_ms, BLOB_PULSE_RATE as f64);
    let hue = app.scene.hue_base;

    app.orb.ease(&vp, EASE_FACTOR);

    painter.clear(w, h);
    painter.fill_rect(Vec2::ZERO, Vec2::new(w, h), Color::Hex(BACKGROUND_COLOR));

    draw_horizon(painter, w, h, hue);

    painter.set_blur(Some(BLOB_BLUR_PX));
    for blob in &mut app.scene.blobs {
        blob.advance(&vp);
        painter.fill_radial_circle(
            blob.pos,
            0.0,
            blob.pulsed_size(blob_t),
            Color::hsla(hue, 60.0, 20.0, 0.15),
            Color::Transparent,
        );
    }
    painter.set_blur(None);

    let main_radius = app.main_radius();
    let halo_radius = main_radius * app.orb.scale * HALO_RADIUS_FACTOR;
    painter.fill_radial_circle(
        app.orb.pos,
        halo_radius * HALO_INNER_FACTOR,
        halo_radius,
        Color::white(0.0),
        Color::white(0.05),
    );

    draw_particles(app, painter, t, elapsed_ms, main_radius);

    let hovering = app.pointer_over_orb();
    let hint = affordance(app.interaction.mode, hovering, app.interaction.dragging);

    app.rotation = (app.rotation + app.params.rotation_speed).rem_euclid(TAU);
    hint
}

/// Cursor proximity factor: 1 at the point, falling linearly to 0 at
/// `0.25 * min_side` and beyond.
#[inline]
pub fn cursor_influence(pointer: Vec2, point: Vec2, min_side: f32) -> f32 {
    let reach = min_side * INFLUENCE_RADIUS_FACTOR;
    if reach <= 0.0 {
        return 0.0;
    }
    (1.0 - pointer.distance(point) / reach).max(0.0)
}

/// Pulse phase at `elapsed_ms` for a wave running `rate` times the base pulse
/// speed, reduced to `[0, TAU)` in f64 so long sessions keep full precision.
#[inline]
pub fn pulse_wave(elapsed_ms: f64, rate: f64) -> f32 {
    (elapsed_ms * PULSE_TIME_PER_MS as f64 * rate).rem_euclid(TAU_F64) as f32
}

/// Particle hue with the global drift applied, wrapped into `[0, 360)`.
#[inline]
pub fn particle_hue(hue_base: f32, hue_offset: f32, hue_drift: f32, elapsed_ms: f64) -> f32 {
    let drift = (hue_drift as f64 * elapsed_ms * 0.01).rem_euclid(360.0) as f32;
    wrap_hue(hue_base + hue_offset + drift)
}

// --- helpers private to frame ---

fn draw_horizon<P: Painter + ?Sized>(painter: &mut P, w: f32, h: f32, hue: f32) {
    let horizon_y = h * HORIZON_FRACTION;
    painter.fill_vertical_gradient(
        Vec2::new(0.0, horizon_y - HORIZON_BAND_HEIGHT),
        Vec2::new(w, HORIZON_BAND_HEIGHT),
        Color::Transparent,
        Color::hsla(hue, 50.0, 15.0, 0.3),
    );
    painter.stroke_line(
        Vec2::new(0.0, horizon_y),
        Vec2::new(w, horizon_y),
        1.0,
        Color::hsla(hue, 40.0, 30.0, 0.4),
    );
}

fn draw_particles<P: Painter + ?Sized>(
    app: &OrbApp,
    painter: &mut P,
    t: f32,
    elapsed_ms: f64,
    main_radius: f32,
) {
    let min_side = app.min_side();
    let scale = app.orb.scale;
    let pointer = app.interaction.pointer;
    for p in &app.scene.particles {
        let a = p.angle + app.rotation;
        let dist = p.dist_factor * main_radius * scale;
        let pos = app.orb.pos + Vec2::new(a.cos(), a.sin()) * dist;
        let infl = cursor_influence(pointer, pos, min_side);
        let hue = particle_hue(app.scene.hue_base, p.hue_offset, app.params.hue_drift, elapsed_ms);
        let r = p.size_factor
            * min_side
            * (0.8 + 0.2 * (t + p.pulse_phase).sin())
            * (1.0 + INFLUENCE_RADIUS_BOOST * infl)
            * scale;
        let light = p.lightness + INFLUENCE_LIGHTNESS_BOOST * infl;
        let alpha = p.alpha + INFLUENCE_ALPHA_BOOST * infl;
        painter.fill_radial_circle(
            pos,
            0.0,
            r,
            Color::hsla(hue, p.saturation, light, alpha),
            Color::TRANSPARENT_BLACK,
        );
    }
}
