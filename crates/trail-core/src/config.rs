//! Effect configuration.
//!
//! Every struct deserializes with `#[serde(default)]`, so a host may supply a
//! partial JSON document and only override what it cares about.

use crate::constants::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("trail pool must hold at least one line")]
    NoTrails,
    #[error("a line needs at least 2 nodes, got {0}")]
    TooFewNodes(usize),
    #[error("{name} must lie in (0, 1), got {value}")]
    OutOfUnitRange { name: &'static str, value: f32 },
    #[error("{name} range is empty or reversed: [{lo}, {hi})")]
    BadRange { name: &'static str, lo: f32, hi: f32 },
    #[error("particle field must hold at least one particle")]
    NoParticles,
    #[error("particle fps must be positive, got {0}")]
    BadFps(f32),
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HueConfig {
    pub amplitude: f32,
    pub frequency: f32,
    pub offset: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl Default for HueConfig {
    fn default() -> Self {
        Self {
            amplitude: HUE_AMPLITUDE,
            frequency: HUE_FREQUENCY,
            offset: HUE_OFFSET,
            saturation: HUE_SATURATION,
            lightness: HUE_LIGHTNESS,
            alpha: HUE_ALPHA,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    pub trails: usize,
    pub size: usize,
    pub friction: f32,
    pub dampening: f32,
    pub tension: f32,
    pub base_spring: f32,
    pub spring_spread: f32,
    pub spring_jitter: [f32; 2],
    pub friction_jitter: [f32; 2],
    pub line_width: f32,
    pub viewport_gutter: u32,
    pub hue: HueConfig,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            trails: TRAIL_COUNT,
            size: NODES_PER_LINE,
            friction: FRICTION,
            dampening: DAMPENING,
            tension: TENSION,
            base_spring: BASE_SPRING,
            spring_spread: SPRING_SPREAD,
            spring_jitter: SPRING_JITTER,
            friction_jitter: FRICTION_JITTER,
            line_width: LINE_WIDTH,
            viewport_gutter: VIEWPORT_GUTTER_PX,
            hue: HueConfig::default(),
        }
    }
}

impl TrailConfig {
    /// Base spring for line `index` of the pool, before per-line jitter.
    pub fn spring_for(&self, index: usize) -> f32 {
        self.base_spring + (index as f32 / self.trails.max(1) as f32) * self.spring_spread
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trails == 0 {
            return Err(ConfigError::NoTrails);
        }
        if self.size < 2 {
            return Err(ConfigError::TooFewNodes(self.size));
        }
        unit_range("friction", self.friction)?;
        unit_range("dampening", self.dampening)?;
        unit_range("tension", self.tension)?;
        unit_range("base_spring", self.base_spring)?;
        ordered("spring_jitter", self.spring_jitter)?;
        ordered("friction_jitter", self.friction_jitter)?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub fps: f32,
    pub color: [u8; 3],
    pub glow_scale: f32,
    pub glow_alpha: f32,
    pub size: [f32; 2],
    pub speed_x: [f32; 2],
    pub rise: [f32; 2],
    pub opacity: [f32; 2],
    pub fade: [f32; 2],
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: PARTICLE_COUNT,
            fps: PARTICLE_FPS,
            color: PARTICLE_COLOR,
            glow_scale: PARTICLE_GLOW_SCALE,
            glow_alpha: PARTICLE_GLOW_ALPHA,
            size: PARTICLE_SIZE,
            speed_x: PARTICLE_SPEED_X,
            rise: PARTICLE_RISE,
            opacity: PARTICLE_OPACITY,
            fade: PARTICLE_FADE,
        }
    }
}

impl ParticleConfig {
    /// Minimum spacing between accepted frames.
    pub fn frame_interval_ms(&self) -> f64 {
        1000.0 / self.fps as f64
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::NoParticles);
        }
        if !(self.fps.is_finite() && self.fps > 0.0) {
            return Err(ConfigError::BadFps(self.fps));
        }
        ordered("particle size", self.size)?;
        ordered("particle speed_x", self.speed_x)?;
        ordered("particle rise", self.rise)?;
        ordered("particle opacity", self.opacity)?;
        ordered("particle fade", self.fade)?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowerConfig {
    pub min_ease: f32,
    pub max_ease: f32,
    pub ease_per_px: f32,
    pub ring_radius: f32,
    pub dot_radius: f32,
    pub hover_scale: f32,
    pub press_scale: f32,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            min_ease: FOLLOWER_MIN_EASE,
            max_ease: FOLLOWER_MAX_EASE,
            ease_per_px: FOLLOWER_EASE_PER_PX,
            ring_radius: FOLLOWER_RING_RADIUS,
            dot_radius: FOLLOWER_DOT_RADIUS,
            hover_scale: FOLLOWER_HOVER_SCALE,
            press_scale: FOLLOWER_PRESS_SCALE,
        }
    }
}

impl FollowerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        unit_range("follower min_ease", self.min_ease)?;
        unit_range("follower max_ease", self.max_ease)?;
        if self.min_ease > self.max_ease {
            return Err(ConfigError::BadRange {
                name: "follower ease",
                lo: self.min_ease,
                hi: self.max_ease,
            });
        }
        Ok(())
    }
}

/// Top-level configuration for all three effects.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    /// Fixed seed for every random source; `None` lets the host pick one.
    pub seed: Option<u64>,
    pub trail: TrailConfig,
    pub particles: ParticleConfig,
    pub follower: FollowerConfig,
}

impl EffectsConfig {
    /// Parse and validate a (possibly partial) JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.trail.validate()?;
        self.particles.validate()?;
        self.follower.validate()
    }
}

fn unit_range(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}

fn ordered(name: &'static str, [lo, hi]: [f32; 2]) -> Result<(), ConfigError> {
    if lo.is_finite() && hi.is_finite() && lo < hi {
        Ok(())
    } else {
        Err(ConfigError::BadRange { name, lo, hi })
    }
}
