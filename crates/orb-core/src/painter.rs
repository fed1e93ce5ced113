//! Drawing seam between the frame step and a concrete backend.
//!
//! The web front-end implements [`Painter`] over a Canvas2D context. Host-side
//! code and tests use [`RecordingPainter`], which stores every call as a
//! [`DrawCommand`] so frame output can be inspected without a display.

use crate::color::Color;
use glam::Vec2;

pub trait Painter {
    /// Clear the whole logical surface.
    fn clear(&mut self, width: f32, height: f32);

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);

    /// Fill a rectangle with a top-to-bottom linear gradient.
    fn fill_vertical_gradient(&mut self, origin: Vec2, size: Vec2, top: Color, bottom: Color);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, line_width: f32, color: Color);

    /// Apply a blur to subsequent fills until called again with `None`.
    fn set_blur(&mut self, radius_px: Option<f32>);

    /// Fill a circle of `outer_radius` with a radial gradient running from
    /// `inner` at `inner_radius` to `outer` at `outer_radius`.
    fn fill_radial_circle(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        inner: Color,
        outer: Color,
    );
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    FillRect {
        origin: Vec2,
        size: Vec2,
        color: Color,
    },
    FillVerticalGradient {
        origin: Vec2,
        size: Vec2,
        top: Color,
        bottom: Color,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        line_width: f32,
        color: Color,
    },
    SetBlur(Option<f32>),
    FillRadialCircle {
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        inner: Color,
        outer: Color,
    },
}

#[derive(Clone, Debug, Default)]
pub struct RecordingPainter {
    pub commands: Vec<DrawCommand>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn radial_circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillRadialCircle { .. }))
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
        self.commands
            .push(DrawCommand::FillRect { origin, size, color });
    }

    fn fill_vertical_gradient(&mut self, origin: Vec2, size: Vec2, top: Color, bottom: Color) {
        self.commands.push(DrawCommand::FillVerticalGradient {
            origin,
            size,
            top,
            bottom,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, line_width: f32, color: Color) {
        self.commands.push(DrawCommand::StrokeLine {
            from,
            to,
            line_width,
            color,
        });
    }

    fn set_blur(&mut self, radius_px: Option<f32>) {
        self.commands.push(DrawCommand::SetBlur(radius_px));
    }

    fn fill_radial_circle(
        &mut self,
        center: Vec2,
        inner_radius: f32,
        outer_radius: f32,
        inner: Color,
        outer: Color,
    ) {
        self.commands.push(DrawCommand::FillRadialCircle {
            center,
            inner_radius,
            outer_radius,
            inner,
            outer,
        });
    }
}
