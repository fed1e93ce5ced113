//! Orb, interaction and application state.
//!
//! [`OrbApp`] gathers everything the frame step and the input handlers share.
//! It is plain owned data: the web front-end keeps one instance behind an
//! `Rc<RefCell<_>>`, host tests own it directly.

use crate::constants::*;
use crate::geometry::{clamp_scale, Viewport};
use crate::scene::Scene;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Runtime knobs for a session.
#[derive(Clone, Debug)]
pub struct OrbParams {
    pub start_scale: f32,
    pub rotation_speed: f32,
    pub hue_drift: f32,
    pub layer_count: usize,
    pub blob_count: usize,
}

impl Default for OrbParams {
    fn default() -> Self {
        Self {
            start_scale: START_SCALE,
            rotation_speed: ROTATION_SPEED,
            hue_drift: HUE_DRIFT,
            layer_count: LAYER_COUNT,
            blob_count: BLOB_COUNT,
        }
    }
}

/// What a press on the orb does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Press recolors the form.
    #[default]
    Color,
    /// Press starts dragging the orb.
    Move,
}

impl Mode {
    /// DOM id of the toggle button for this mode.
    pub fn button_id(self) -> &'static str {
        match self {
            Mode::Color => "btn-color",
            Mode::Move => "btn-move",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbState {
    pub pos: Vec2,
    pub target: Vec2,
    pub scale: f32,
    pub target_scale: f32,
}

impl OrbState {
    pub fn centered(viewport: &Viewport, scale: f32) -> Self {
        let c = viewport.center();
        let scale = clamp_scale(scale);
        Self {
            pos: c,
            target: c,
            scale,
            target_scale: scale,
        }
    }

    /// Clamp the target into `viewport` and ease position and scale toward
    /// their targets by `factor`.
    pub fn ease(&mut self, viewport: &Viewport, factor: f32) {
        self.target = viewport.clamp_point(self.target);
        self.pos += (self.target - self.pos) * factor;
        self.scale += (self.target_scale - self.scale) * factor;
    }

    pub fn set_target_scale(&mut self, scale: f32) {
        self.target_scale = clamp_scale(scale);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InteractionState {
    pub mode: Mode,
    pub dragging: bool,
    pub moved_manually: bool,
    pub pointer: Vec2,
    pub last_pinch_distance: Option<f32>,
}

pub struct OrbApp {
    pub viewport: Viewport,
    pub params: OrbParams,
    pub orb: OrbState,
    pub interaction: InteractionState,
    pub scene: Scene,
    pub rotation: f32,
    rng: StdRng,
}

impl OrbApp {
    /// Build a session centered in `viewport` with a freshly generated form.
    pub fn new(viewport: Viewport, params: OrbParams, seed: u64) -> Self {
        let orb = OrbState::centered(&viewport, params.start_scale);
        let mut app = Self {
            viewport,
            params,
            orb,
            interaction: InteractionState::default(),
            scene: Scene::default(),
            rotation: 0.0,
            rng: StdRng::seed_from_u64(seed),
        };
        app.generate_form(false);
        app
    }

    #[inline]
    pub fn min_side(&self) -> f32 {
        self.viewport.min_side()
    }

    /// Radius of the orb body before scaling.
    #[inline]
    pub fn main_radius(&self) -> f32 {
        self.min_side() * MAIN_RADIUS_FACTOR
    }

    pub fn generate_form(&mut self, only_colors: bool) {
        self.scene
            .generate_form(only_colors, &self.viewport, &self.params, &mut self.rng);
    }

    /// Whether the last known pointer position lies over the scaled orb body.
    pub fn pointer_over_orb(&self) -> bool {
        self.interaction.pointer.distance(self.orb.pos) < self.main_radius() * self.orb.scale
    }

    /// Whether `p` is close enough to the orb center to grab it.
    pub fn within_grab_radius(&self, p: Vec2) -> bool {
        p.distance(self.orb.pos) < self.min_side() * GRAB_RADIUS_FACTOR * self.orb.scale
    }
}
