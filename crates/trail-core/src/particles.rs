//! Ambient rising particle field, frame-rate capped independently of the
//! display refresh.

use crate::config::ParticleConfig;
use crate::constants::PARTICLE_RESPAWN_MARGIN;
use crate::scheduler::{FrameScheduler, FrameSlot};
use crate::surface::{BlendMode, Rgba, Surface};
use glam::Vec2;
use rand::{rngs::StdRng, Rng, SeedableRng};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// px per accepted frame; `y` is negative (particles rise).
    pub vel: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub fade: f32,
}

pub struct ParticleField {
    config: ParticleConfig,
    bounds: Vec2,
    rng: StdRng,
    particles: Vec<Particle>,
    last_frame_ms: f64,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, width: u32, height: u32, seed: u64) -> Self {
        let mut field = Self {
            config,
            bounds: Vec2::new(width as f32, height as f32),
            rng: StdRng::seed_from_u64(seed),
            particles: Vec::new(),
            last_frame_ms: 0.0,
        };
        let count = field.config.count;
        let particles = (0..count).map(|_| field.spawn()).collect();
        field.particles = particles;
        field
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Update the bounds new particles spawn in. Live particles are kept.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.bounds = Vec2::new(width as f32, height as f32);
    }

    /// Accept the frame at `now_ms` if enough time passed since the last
    /// accepted one, stepping the simulation. Returns whether it stepped.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_frame_ms < self.config.frame_interval_ms() {
            return false;
        }
        self.last_frame_ms = now_ms;
        self.step();
        true
    }

    /// One simulation step: drift, fade, recycle spent particles at the
    /// bottom edge.
    pub fn step(&mut self) {
        let mut particles = std::mem::take(&mut self.particles);
        for p in particles.iter_mut() {
            p.pos += p.vel;
            p.opacity -= p.fade;
            if p.opacity <= 0.0 || p.pos.y < -PARTICLE_RESPAWN_MARGIN {
                *p = self.respawn_at_bottom();
            }
        }
        self.particles = particles;
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.set_blend(BlendMode::SourceOver);
        surface.clear();
        let cfg = &self.config;
        for p in &self.particles {
            surface.fill_circle(p.pos, p.size, Rgba::from_rgb(cfg.color, p.opacity));
            surface.fill_circle(
                p.pos,
                p.size * cfg.glow_scale,
                Rgba::from_rgb(cfg.color, p.opacity * cfg.glow_alpha),
            );
        }
    }

    fn respawn_at_bottom(&mut self) -> Particle {
        let mut fresh = self.spawn();
        fresh.pos.y = self.bounds.y + PARTICLE_RESPAWN_MARGIN;
        fresh.opacity = self.sample(self.config.opacity);
        fresh
    }

    fn spawn(&mut self) -> Particle {
        let ParticleConfig {
            size,
            speed_x,
            rise,
            opacity,
            fade,
            ..
        } = self.config;
        Particle {
            pos: Vec2::new(
                self.rng.gen::<f32>() * self.bounds.x,
                self.rng.gen::<f32>() * self.bounds.y,
            ),
            size: self.sample(size),
            vel: Vec2::new(self.sample(speed_x), -self.sample(rise)),
            opacity: self.sample(opacity),
            fade: self.sample(fade),
        }
    }

    fn sample(&mut self, [lo, hi]: [f32; 2]) -> f32 {
        lo + self.rng.gen::<f32>() * (hi - lo)
    }
}

/// A particle field bound to a surface and a frame scheduler. Runs until
/// destroyed; unlike the trail it does not pause on blur.
pub struct ParticleLayer<S: Surface, F: FrameScheduler> {
    field: ParticleField,
    surface: S,
    frames: FrameSlot<F>,
    running: bool,
}

impl<S: Surface, F: FrameScheduler> ParticleLayer<S, F> {
    pub fn new(config: ParticleConfig, surface: S, scheduler: F, seed: u64) -> Self {
        let (w, h) = surface.size();
        Self {
            field: ParticleField::new(config, w, h, seed),
            surface,
            frames: FrameSlot::new(scheduler),
            running: false,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        self.frames.scheduler_mut()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.frames.schedule();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.field.resize(width, height);
    }

    /// Frame callback. Draws only when the frame cap lets the field step.
    pub fn render_frame(&mut self, now_ms: f64) {
        self.frames.fired();
        if !self.running {
            return;
        }
        if self.field.advance(now_ms) {
            self.field.draw(&mut self.surface);
        }
        self.frames.schedule();
    }

    pub fn destroy(&mut self) {
        self.running = false;
        self.frames.cancel();
    }
}

impl<S: Surface, F: FrameScheduler> Drop for ParticleLayer<S, F> {
    fn drop(&mut self) {
        self.destroy();
    }
}
