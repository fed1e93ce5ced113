use crate::color::wrap_hue;
use crate::constants::*;
use crate::geometry::Viewport;
use crate::random::{biased_unit, rand_angle, rand_range};
use crate::state::OrbParams;
use glam::Vec2;
use rand::Rng;

/// One glowing point orbiting the orb center. Fixed for the lifetime of a form.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub angle: f32,
    pub dist_factor: f32,
    pub size_factor: f32,
    pub pulse_phase: f32,
    pub lightness: f32,
    pub alpha: f32,
    pub hue_offset: f32,
    pub saturation: f32,
}

impl Particle {
    fn random<R: Rng + ?Sized>(rng: &mut R, layer_scale: f32) -> Self {
        Self {
            angle: rand_angle(rng),
            dist_factor: biased_unit(rng, DIST_BIAS_EXPONENT),
            size_factor: rand_range(rng, 0.01, 0.06) * layer_scale,
            pulse_phase: rand_angle(rng),
            lightness: 70.0 - biased_unit(rng, DIST_BIAS_EXPONENT) * 40.0,
            alpha: rand_range(rng, 0.03, 0.08),
            hue_offset: rand_range(rng, -30.0, 30.0),
            saturation: rand_range(rng, 50.0, 80.0),
        }
    }
}

/// Large blurred blob drifting across the background.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundBlob {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub phase: f32,
}

impl BackgroundBlob {
    fn random<R: Rng + ?Sized>(rng: &mut R, viewport: &Viewport) -> Self {
        Self {
            pos: Vec2::new(
                rand_range(rng, 0.0, viewport.width()),
                rand_range(rng, 0.0, viewport.height()),
            ),
            size: rand_range(rng, BLOB_SIZE_MIN, BLOB_SIZE_MAX),
            vel: Vec2::new(
                rand_range(rng, -BLOB_SPEED_MAX, BLOB_SPEED_MAX),
                rand_range(rng, -BLOB_SPEED_MAX, BLOB_SPEED_MAX),
            ),
            phase: rand_angle(rng),
        }
    }

    /// Move one frame and flip the velocity on any axis that left the viewport.
    pub fn advance(&mut self, viewport: &Viewport) {
        self.pos += self.vel;
        if self.pos.x < 0.0 || self.pos.x > viewport.width() {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0.0 || self.pos.y > viewport.height() {
            self.vel.y = -self.vel.y;
        }
    }

    /// Radius after the slow sinusoidal pulse; `wave` is the blob pulse phase
    /// for the current frame.
    #[inline]
    pub fn pulsed_size(&self, wave: f32) -> f32 {
        self.size * (0.8 + 0.2 * (wave + self.phase).sin())
    }
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub hue_base: f32,
    pub particles: Vec<Particle>,
    pub blobs: Vec<BackgroundBlob>,
}

/// Number of particles in layer `layer` for a given `min_side`.
#[inline]
pub fn layer_particle_count(layer: usize, min_side: f32) -> usize {
    let nominal = LAYER_BASE_COUNT as f64 + LAYER_COUNT_STEP as f64 * layer as f64;
    (nominal * (min_side as f64 / REFERENCE_MIN_SIDE as f64)).floor().max(0.0) as usize
}

impl Scene {
    /// Pick a new base hue and, unless `only_colors`, rebuild every particle
    /// layer and background blob for `viewport`.
    pub fn generate_form<R: Rng + ?Sized>(
        &mut self,
        only_colors: bool,
        viewport: &Viewport,
        params: &OrbParams,
        rng: &mut R,
    ) {
        self.hue_base = wrap_hue(rand_range(rng, 0.0, 360.0));
        if only_colors {
            log::debug!("[form] recolored hue_base={:.1}", self.hue_base);
            return;
        }

        let min_side = viewport.min_side();
        let layers = params.layer_count.max(1);
        self.particles.clear();
        for l in 0..layers {
            let count = layer_particle_count(l, min_side);
            let layer_scale = (l + 1) as f32 / layers as f32;
            self.particles
                .extend((0..count).map(|_| Particle::random(rng, layer_scale)));
        }

        self.blobs.clear();
        self.blobs.extend(
            (0..params.blob_count).map(|_| BackgroundBlob::random(rng, viewport)),
        );

        log::debug!(
            "[form] regenerated particles={} blobs={} hue_base={:.1}",
            self.particles.len(),
            self.blobs.len(),
            self.hue_base
        );
    }
}
