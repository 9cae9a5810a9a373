//! Trail orchestration: the line pool, pointer target, hue cycling and the
//! start/pause/resize/teardown state machine.

use crate::config::TrailConfig;
use crate::input::PointerSample;
use crate::line::{ChainParams, Line};
use crate::oscillator::{Oscillator, OscillatorParams};
use crate::scheduler::{FrameScheduler, FrameSlot};
use crate::surface::{BlendMode, Hsla, StrokeStyle, Surface};
use glam::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrailState {
    /// Constructed; no surface attached yet (or none available).
    Uninitialized,
    /// Mounted and waiting for the first pointer position.
    Idle,
    /// Frame loop active.
    Running,
    /// Frame loop suspended, pool retained.
    Paused,
    /// Torn down; every operation is a no-op.
    Destroyed,
}

pub struct TrailSystem<S: Surface, F: FrameScheduler> {
    config: TrailConfig,
    state: TrailState,
    surface: Option<S>,
    frames: FrameSlot<F>,
    rng: StdRng,
    hue: Oscillator,
    lines: Vec<Line>,
    target: Vec2,
    origin: Vec2,
    focused: bool,
    rendered: u64,
}

impl<S: Surface, F: FrameScheduler> TrailSystem<S, F> {
    /// `surface` may be `None` when the host could not obtain one; the
    /// system then never leaves `Uninitialized`. An invalid `config` is
    /// replaced by the defaults.
    pub fn new(config: TrailConfig, surface: Option<S>, scheduler: F, seed: u64) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("[trail] invalid config ({}); using defaults", e);
                TrailConfig::default()
            }
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let hue = Oscillator::new(OscillatorParams {
            phase: Some(rng.gen_range(0.0..TAU)),
            amplitude: Some(config.hue.amplitude),
            frequency: Some(config.hue.frequency),
            offset: Some(config.hue.offset),
        });
        Self {
            config,
            state: TrailState::Uninitialized,
            surface,
            frames: FrameSlot::new(scheduler),
            rng,
            hue,
            lines: Vec::new(),
            target: Vec2::ZERO,
            origin: Vec2::ZERO,
            focused: true,
            rendered: 0,
        }
    }

    pub fn state(&self) -> TrailState {
        self.state
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn scheduler(&self) -> &F {
        self.frames.scheduler()
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        self.frames.scheduler_mut()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.rendered
    }

    pub fn has_pending_frame(&self) -> bool {
        self.frames.is_pending()
    }

    /// Uninitialized -> Idle. Without a surface the system stays
    /// Uninitialized for good.
    pub fn mount(&mut self) -> TrailState {
        if self.state != TrailState::Uninitialized {
            return self.state;
        }
        if self.surface.is_none() {
            log::warn!("[trail] no drawing surface; effect disabled");
            return self.state;
        }
        self.transition(TrailState::Idle);
        self.state
    }

    /// Offset subtracted from every pointer sample (the surface's top-left
    /// corner in viewport coordinates).
    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    /// Feed one pointer event. Only stores the latest target; drawing happens
    /// on the next frame. The first usable event builds the pool.
    pub fn on_pointer(&mut self, sample: &PointerSample) {
        match sample.normalize(self.origin) {
            Some(p) => self.on_pointer_move(p.x, p.y),
            None => log::trace!("[trail] ignored pointer sample {:?}", sample),
        }
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        match self.state {
            TrailState::Uninitialized | TrailState::Destroyed => {}
            TrailState::Idle => {
                self.target = Vec2::new(x, y);
                self.build_pool();
                if self.focused {
                    self.transition(TrailState::Running);
                    self.frames.schedule();
                } else {
                    self.transition(TrailState::Paused);
                }
            }
            TrailState::Running | TrailState::Paused => {
                self.target = Vec2::new(x, y);
            }
        }
    }

    /// Window lost focus: stop scheduling frames entirely.
    pub fn pause(&mut self) {
        match self.state {
            TrailState::Running => {
                self.frames.cancel();
                self.transition(TrailState::Paused);
            }
            TrailState::Idle => self.focused = false,
            _ => {}
        }
    }

    /// Window regained focus. Never schedules a second frame while one is
    /// already pending.
    pub fn resume(&mut self) {
        match self.state {
            TrailState::Paused => {
                self.focused = true;
                self.transition(TrailState::Running);
                self.frames.schedule();
            }
            TrailState::Idle => self.focused = true,
            _ => {}
        }
    }

    /// Resize the surface. Line state is left untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.state == TrailState::Destroyed {
            return;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(width, height);
            log::debug!("[trail] surface resized to {}x{}", width, height);
        }
    }

    /// Throw away the pool and rebuild it collapsed at the current target.
    pub fn reinit(&mut self) {
        if matches!(self.state, TrailState::Running | TrailState::Paused) {
            self.build_pool();
        }
    }

    /// Draw one frame and, while running, schedule the next one. A stale
    /// callback arriving in any other state does nothing.
    pub fn render_frame(&mut self) {
        self.frames.fired();
        if self.state != TrailState::Running {
            return;
        }
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        surface.set_blend(BlendMode::SourceOver);
        surface.clear();
        surface.set_blend(BlendMode::Lighter);
        let tint = &self.config.hue;
        surface.set_stroke(&StrokeStyle {
            color: Hsla {
                hue: self.hue.advance().round(),
                saturation: tint.saturation,
                lightness: tint.lightness,
                alpha: tint.alpha,
            },
            line_width: self.config.line_width,
        });

        let chain = ChainParams {
            dampening: self.config.dampening,
            tension: self.config.tension,
        };
        let target = self.target;
        for line in self.lines.iter_mut() {
            line.update(target, chain);
            line.draw(surface);
        }
        self.rendered += 1;
        self.frames.schedule();
    }

    /// Tear down: cancel the pending frame and drop the pool. Safe to call
    /// more than once.
    pub fn destroy(&mut self) {
        if self.state == TrailState::Destroyed {
            return;
        }
        self.frames.cancel();
        self.lines.clear();
        self.transition(TrailState::Destroyed);
    }

    fn build_pool(&mut self) {
        let cfg = &self.config;
        let anchor = self.target;
        let mut lines = Vec::with_capacity(cfg.trails);
        for i in 0..cfg.trails {
            lines.push(Line::jittered(
                cfg.spring_for(i),
                cfg.friction,
                cfg.spring_jitter,
                cfg.friction_jitter,
                cfg.size,
                anchor,
                &mut self.rng,
            ));
        }
        self.lines = lines;
        log::debug!(
            "[trail] pool built: {} lines x {} nodes at ({:.1},{:.1})",
            cfg.trails,
            cfg.size,
            anchor.x,
            anchor.y
        );
    }

    fn transition(&mut self, next: TrailState) {
        log::debug!("[trail] {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

impl<S: Surface, F: FrameScheduler> Drop for TrailSystem<S, F> {
    fn drop(&mut self) {
        self.destroy();
    }
}
