//! Canvas2D backend for the frame step.

use glam::Vec2;
use orb_core::{Color, Painter};
use std::f64::consts::TAU;
use web_sys as web;

pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
    blurred: bool,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self {
            ctx,
            blurred: false,
        }
    }

    fn fill_circle(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.fill();
        }
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_vertical_gradient(&mut self, origin: Vec2, size: Vec2, top: Color, bottom: Color) {
        let grad = self.ctx.create_linear_gradient(
            0.0,
            origin.y as f64,
            0.0,
            (origin.y + size.y) as f64,
        );
        _ = grad.add_color_stop(0.0, &top.css());
        _ = grad.add_color_stop(1.0, &bottom.css());
        self.ctx.set_fill_style_canvas_gradient(&grad);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, line_width: f32, color: Color) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn set_blur(&mut self, radius_px: Option<f32>) {
        match radius_px {
            Some(px) => {
                if !self.blurred {
                    self.ctx.save();
                }
                self.ctx.set_filter(&format!("blur({}px)", px));
                self.blurred = true;
            }
            None => {
                if self.blurred {
                    self.ctx.restore();
                    self.blurred = false;
                }
            }
        }
    }

    fn fill_radial_circle(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        inner: Color,
        outer: Color,
    ) {
        // Canvas rejects negative radii and draws nothing for zero.
        if outer_radius.is_nan() || outer_radius <= 0.0 {
            return;
        }
        let (x, y) = (center.x as f64, center.y as f64);
        let grad = match self.ctx.create_radial_gradient(
            x,
            y,
            inner_radius.max(0.0) as f64,
            x,
            y,
            outer_radius as f64,
        ) {
            Ok(g) => g,
            Err(e) => {
                log::warn!("radial gradient error: {:?}", e);
                return;
            }
        };
        _ = grad.add_color_stop(0.0, &inner.css());
        _ = grad.add_color_stop(1.0, &outer.css());
        self.ctx.set_fill_style_canvas_gradient(&grad);
        self.fill_circle(center, outer_radius);
    }
}
