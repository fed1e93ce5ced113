//! Viewport model and point clamping.

use crate::error::OrbError;
use glam::Vec2;

/// Logical (CSS pixel) size of the drawing surface plus its device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
    dpr: f64,
}

impl Viewport {
    pub fn new(width: f32, height: f32, dpr: f64) -> Result<Self, OrbError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(OrbError::InvalidViewport { width, height });
        }
        if !(dpr.is_finite() && dpr > 0.0) {
            return Err(OrbError::InvalidPixelRatio(dpr));
        }
        Ok(Self { width, height, dpr })
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn dpr(&self) -> f64 {
        self.dpr
    }

    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Backing store size in physical pixels, never below 1x1.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.width as f64 * self.dpr) as u32;
        let h = (self.height as f64 * self.dpr) as u32;
        (w.max(1), h.max(1))
    }

    /// Clamp a point into `[0, width] x [0, height]`.
    #[inline]
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

#[inline]
pub fn clamp_scale(scale: f32) -> f32 {
    scale.clamp(crate::constants::SCALE_MIN, crate::constants::SCALE_MAX)
}
