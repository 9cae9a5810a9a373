//! Ring-and-dot cursor: the dot sits on the pointer, the ring eases after it.

use crate::config::FollowerConfig;
use glam::Vec2;

/// Top-left offsets for the two cursor elements plus the ring's scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FollowerFrame {
    pub ring: Vec2,
    pub dot: Vec2,
    pub ring_scale: f32,
}

#[derive(Clone, Debug)]
pub struct CursorFollower {
    config: FollowerConfig,
    pointer: Vec2,
    ring: Vec2,
    hovering: bool,
    pressed: bool,
}

impl CursorFollower {
    pub fn new(config: FollowerConfig) -> Self {
        Self {
            config,
            pointer: Vec2::ZERO,
            ring: Vec2::ZERO,
            hovering: false,
            pressed: false,
        }
    }

    pub fn set_pointer(&mut self, p: Vec2) {
        if p.is_finite() {
            self.pointer = p;
        }
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn ring_center(&self) -> Vec2 {
        self.ring
    }

    /// Easing factor for the current gap: faster catch-up when far behind.
    pub fn ease(&self) -> f32 {
        let gap = self.pointer.distance(self.ring);
        (self.config.min_ease + gap * self.config.ease_per_px).min(self.config.max_ease)
    }

    pub fn ring_scale(&self) -> f32 {
        if self.pressed {
            self.config.press_scale
        } else if self.hovering {
            self.config.hover_scale
        } else {
            1.0
        }
    }

    /// Move the ring one frame closer and report where both elements go.
    pub fn step(&mut self) -> FollowerFrame {
        let t = self.ease();
        self.ring = self.ring.lerp(self.pointer, t);
        FollowerFrame {
            ring: self.ring - Vec2::splat(self.config.ring_radius),
            dot: self.pointer - Vec2::splat(self.config.dot_radius),
            ring_scale: self.ring_scale(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_is_capped_when_far_and_floored_when_close() {
        let mut f = CursorFollower::new(FollowerConfig::default());
        assert!((f.ease() - 0.08).abs() < 1e-6);
        f.set_pointer(Vec2::new(1000.0, 0.0));
        assert!((f.ease() - 0.2).abs() < 1e-6);
        f.set_pointer(Vec2::new(50.0, 0.0));
        assert!((f.ease() - 0.13).abs() < 1e-6);
    }

    #[test]
    fn ring_closes_in_on_pointer() {
        let mut f = CursorFollower::new(FollowerConfig::default());
        f.set_pointer(Vec2::new(300.0, 200.0));
        let mut gap = f.ring_center().distance(Vec2::new(300.0, 200.0));
        for _ in 0..200 {
            let frame = f.step();
            assert_eq!(frame.dot, Vec2::new(296.0, 196.0));
            let g = f.ring_center().distance(Vec2::new(300.0, 200.0));
            assert!(g < gap || g < 1e-3);
            gap = g;
        }
        assert!(gap < 0.01);
    }

    #[test]
    fn pressed_wins_over_hover() {
        let mut f = CursorFollower::new(FollowerConfig::default());
        assert_eq!(f.ring_scale(), 1.0);
        f.set_hovering(true);
        assert_eq!(f.ring_scale(), 1.5);
        f.set_pressed(true);
        assert_eq!(f.ring_scale(), 0.75);
    }
}
