//! Spring-chain trail lines.
//!
//! A [`Line`] is a fixed-length chain of [`Node`]s. The head is pulled toward
//! the pointer target; every following node is pulled toward its predecessor
//! and inherits part of its velocity. The spring used for each link decays by
//! `tension` per node index, which gives the trail its whip-like tail.

use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

/// One point of a line: position and velocity in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Node {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Chain-wide constants shared by every line of a pool.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChainParams {
    pub dampening: f32,
    pub tension: f32,
}

#[derive(Clone, Debug)]
pub struct Line {
    spring: f32,
    friction: f32,
    nodes: Vec<Node>,
}

impl Line {
    /// Build a line with exact constants, all nodes collapsed at `anchor`.
    pub fn new(spring: f32, friction: f32, size: usize, anchor: Vec2) -> Self {
        Self {
            spring,
            friction,
            nodes: vec![
                Node {
                    pos: anchor,
                    vel: Vec2::ZERO,
                };
                size
            ],
        }
    }

    /// Build a line whose spring and friction are offset by a random amount
    /// drawn from the half-open jitter ranges, so lines fed the same target
    /// drift apart visually.
    pub fn jittered<R: Rng + ?Sized>(
        base_spring: f32,
        base_friction: f32,
        spring_jitter: [f32; 2],
        friction_jitter: [f32; 2],
        size: usize,
        anchor: Vec2,
        rng: &mut R,
    ) -> Self {
        let spring = base_spring + sample(rng, spring_jitter);
        let friction = base_friction + sample(rng, friction_jitter);
        Self::new(spring, friction, size, anchor)
    }

    pub fn spring(&self) -> f32 {
        self.spring
    }

    pub fn friction(&self) -> f32 {
        self.friction
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn head(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn tail(&self) -> Option<&Node> {
        self.nodes.last()
    }

    /// Advance the chain one tick toward `target` (semi-implicit Euler).
    pub fn update(&mut self, target: Vec2, chain: ChainParams) {
        let mut spring = self.spring;
        let friction = self.friction;

        if let Some(head) = self.nodes.first_mut() {
            head.vel += (target - head.pos) * spring;
        }

        let mut prev: Option<Node> = None;
        for node in self.nodes.iter_mut() {
            if let Some(p) = prev {
                node.vel += (p.pos - node.pos) * spring;
                node.vel += p.vel * chain.dampening;
            }
            node.vel *= friction;
            node.pos += node.vel;
            spring *= chain.tension;
            prev = Some(*node);
        }
    }

    /// Stroke a smoothed path through the nodes: quadratic segments through
    /// the midpoints of consecutive nodes, ending exactly on the tail node.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let n = self.nodes.len();
        if n < 2 {
            return;
        }
        surface.begin_path();
        surface.move_to(self.nodes[0].pos);
        for pair in self.nodes[1..n - 1].windows(2) {
            let (curr, next) = (pair[0].pos, pair[1].pos);
            surface.quadratic_curve_to(curr, (curr + next) * 0.5);
        }
        surface.quadratic_curve_to(self.nodes[n - 2].pos, self.nodes[n - 1].pos);
        surface.stroke();
    }
}

/// Uniform in `[lo, hi)`; collapses to `lo` for an empty range instead of
/// panicking.
fn sample<R: Rng + ?Sized>(rng: &mut R, [lo, hi]: [f32; 2]) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}
