//! Frame clock and the run-until-stopped loop.
//!
//! On the web the host drives [`Runner::tick`] from `requestAnimationFrame`.
//! Host-side callers use [`Runner::run_until`] with a [`ManualClock`] to step
//! the same update deterministically.

use crate::affordance::Affordance;
use crate::frame;
use crate::painter::Painter;
use crate::state::OrbApp;
use instant::Instant;

pub trait Clock {
    /// Milliseconds since the clock was started.
    fn now_ms(&self) -> f64;

    /// Called once after every frame.
    fn on_frame(&mut self) {}
}

/// Wall clock; `performance.now()` on wasm via `instant`.
pub struct InstantClock {
    start: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock that only moves when told to, optionally by a fixed step per frame.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now_ms: f64,
    step_ms: f64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_step(step_ms: f64) -> Self {
        Self {
            now_ms: 0.0,
            step_ms,
        }
    }

    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
    }

    pub fn set(&mut self, ms: f64) {
        self.now_ms = ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn on_frame(&mut self) {
        self.now_ms += self.step_ms;
    }
}

pub struct Runner<C: Clock> {
    clock: C,
    frames: u64,
    last_affordance: Affordance,
}

impl<C: Clock> Runner<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            frames: 0,
            last_affordance: Affordance::None,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run exactly one frame.
    pub fn tick<P: Painter + ?Sized>(&mut self, app: &mut OrbApp, painter: &mut P) -> Affordance {
        let hint = frame::step(app, self.clock.now_ms(), painter);
        if hint != self.last_affordance {
            log::trace!("[frame {}] affordance {:?}", self.frames, hint);
        }
        self.last_affordance = hint;
        self.frames += 1;
        self.clock.on_frame();
        hint
    }

    /// Tick until `stop` returns true; `stop` is checked before every frame.
    /// Returns the number of frames run.
    pub fn run_until<P, F>(&mut self, app: &mut OrbApp, painter: &mut P, mut stop: F) -> u64
    where
        P: Painter + ?Sized,
        F: FnMut(&OrbApp, u64) -> bool,
    {
        let start = self.frames;
        while !stop(app, self.frames - start) {
            self.tick(app, painter);
        }
        self.frames - start
    }
}
