//! Input intents and the single step that applies them to [`OrbApp`].

use crate::constants::WHEEL_SCALE_PER_DELTA;
use crate::geometry::Viewport;
use crate::state::{Mode, OrbApp, OrbState};
use glam::Vec2;
use smallvec::SmallVec;

/// Active touch points, in logical pixels. Two inline slots cover pinches.
pub type Touches = SmallVec<[Vec2; 2]>;

#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown(Vec2),
    PointerMove(Vec2),
    PointerUp,
    TouchStart(Touches),
    TouchMove(Touches),
    TouchEnd,
    Wheel { delta_y: f32 },
    Resize(Viewport),
    SetMode(Mode),
}

/// What applying an event changed, for front-ends that mirror state in the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    PointerMoved,
    DragStarted,
    DragMoved,
    DragEnded,
    Recolored,
    Scaled,
    Resized,
    ModeChanged(Mode),
}

#[inline]
pub fn pinch_distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

impl OrbApp {
    pub fn handle(&mut self, event: InputEvent) -> Outcome {
        match event {
            InputEvent::PointerDown(p) => self.press(p),
            InputEvent::PointerMove(p) => {
                self.interaction.pointer = p;
                self.drag_to(p).unwrap_or(Outcome::PointerMoved)
            }
            InputEvent::TouchStart(touches) => match touches.as_slice() {
                [p] => self.press(*p),
                _ => Outcome::Ignored,
            },
            InputEvent::TouchMove(touches) => match touches.as_slice() {
                [p] if self.dragging_in_move_mode() => {
                    self.interaction.pointer = *p;
                    self.drag_to(*p).unwrap_or(Outcome::Ignored)
                }
                [a, b] => self.pinch(pinch_distance(*a, *b)),
                _ => Outcome::Ignored,
            },
            InputEvent::PointerUp | InputEvent::TouchEnd => self.release(),
            InputEvent::Wheel { delta_y } => {
                let next = self.orb.target_scale - delta_y * WHEEL_SCALE_PER_DELTA;
                self.orb.set_target_scale(next);
                Outcome::Scaled
            }
            InputEvent::Resize(viewport) => {
                self.resize(viewport);
                Outcome::Resized
            }
            InputEvent::SetMode(mode) => {
                if self.interaction.mode != mode {
                    log::debug!("[mode] {:?} -> {:?}", self.interaction.mode, mode);
                }
                self.interaction.mode = mode;
                Outcome::ModeChanged(mode)
            }
        }
    }

    fn dragging_in_move_mode(&self) -> bool {
        self.interaction.dragging && self.interaction.mode == Mode::Move
    }

    fn press(&mut self, p: Vec2) -> Outcome {
        self.interaction.pointer = p;
        if !self.within_grab_radius(p) {
            return Outcome::Ignored;
        }
        match self.interaction.mode {
            Mode::Move => {
                self.interaction.dragging = true;
                self.interaction.moved_manually = true;
                log::debug!("[drag] begin at ({:.1},{:.1})", p.x, p.y);
                Outcome::DragStarted
            }
            Mode::Color => {
                self.generate_form(true);
                Outcome::Recolored
            }
        }
    }

    fn drag_to(&mut self, p: Vec2) -> Option<Outcome> {
        if !self.dragging_in_move_mode() {
            return None;
        }
        // Clamped on the next frame step.
        self.orb.target = p;
        Some(Outcome::DragMoved)
    }

    fn pinch(&mut self, distance: f32) -> Outcome {
        let outcome = match self.interaction.last_pinch_distance {
            Some(prev) if prev > 0.0 => {
                let next = self.orb.target_scale * (distance / prev);
                self.orb.set_target_scale(next);
                Outcome::Scaled
            }
            _ => Outcome::Ignored,
        };
        self.interaction.last_pinch_distance = Some(distance);
        outcome
    }

    fn release(&mut self) -> Outcome {
        let was_dragging = self.interaction.dragging;
        self.interaction.dragging = false;
        self.interaction.last_pinch_distance = None;
        if was_dragging {
            log::debug!("[drag] end");
            Outcome::DragEnded
        } else {
            Outcome::Ignored
        }
    }

    /// Adopt a new viewport: recenter unless the orb was placed by hand, in
    /// which case it is only pulled back inside, then rebuild the whole form.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if self.interaction.moved_manually {
            let p = viewport.clamp_point(self.orb.target);
            self.orb.target = p;
            self.orb.pos = p;
        } else {
            let scale = self.orb.scale;
            let target_scale = self.orb.target_scale;
            self.orb = OrbState {
                scale,
                target_scale,
                ..OrbState::centered(&viewport, scale)
            };
        }
        log::info!(
            "[resize] {}x{} @{}x min_side={}",
            viewport.width(),
            viewport.height(),
            viewport.dpr(),
            viewport.min_side()
        );
        self.generate_form(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::OrbParams;
    use smallvec::smallvec;

    fn app() -> OrbApp {
        OrbApp::new(
            Viewport::new(1000.0, 800.0, 1.0).unwrap(),
            OrbParams::default(),
            3,
        )
    }

    #[test]
    fn press_outside_grab_radius_is_ignored() {
        let mut app = app();
        app.handle(InputEvent::SetMode(Mode::Move));
        assert_eq!(app.handle(InputEvent::PointerDown(Vec2::new(5.0, 5.0))), Outcome::Ignored);
        assert!(!app.interaction.dragging);
        assert!(!app.interaction.moved_manually);
    }

    #[test]
    fn pinch_needs_a_previous_distance() {
        let mut app = app();
        let start = app.orb.target_scale;
        let first: Touches = smallvec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)];
        assert_eq!(app.handle(InputEvent::TouchMove(first)), Outcome::Ignored);
        assert_eq!(app.orb.target_scale, start);
        let second: Touches = smallvec![Vec2::new(0.0, 0.0), Vec2::new(110.0, 0.0)];
        assert_eq!(app.handle(InputEvent::TouchMove(second)), Outcome::Scaled);
        assert!((app.orb.target_scale - start * 1.1).abs() < 1e-5);
    }

    #[test]
    fn release_resets_pinch_tracking() {
        let mut app = app();
        let t: Touches = smallvec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)];
        app.handle(InputEvent::TouchMove(t));
        assert!(app.interaction.last_pinch_distance.is_some());
        app.handle(InputEvent::TouchEnd);
        assert_eq!(app.interaction.last_pinch_distance, None);
    }

    #[test]
    fn single_touch_move_without_drag_keeps_pointer() {
        let mut app = app();
        let before = app.interaction.pointer;
        let t: Touches = smallvec![Vec2::new(10.0, 10.0)];
        assert_eq!(app.handle(InputEvent::TouchMove(t)), Outcome::Ignored);
        assert_eq!(app.interaction.pointer, before);
    }

    #[test]
    fn two_finger_touch_start_does_not_press() {
        let mut app = app();
        app.handle(InputEvent::SetMode(Mode::Move));
        let c = app.orb.pos;
        let t: Touches = smallvec![c, c + Vec2::new(5.0, 0.0)];
        assert_eq!(app.handle(InputEvent::TouchStart(t)), Outcome::Ignored);
        assert!(!app.interaction.dragging);
    }
}
