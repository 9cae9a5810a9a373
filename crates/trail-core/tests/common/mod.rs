// Shared helpers for host-side integration tests.

#![allow(dead_code)]
use glam::Vec2;
use trail_core::*;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Resize(u32, u32),
    Clear,
    Blend(BlendMode),
    Stroke(StrokeStyle),
    BeginPath,
    MoveTo(Vec2),
    Quad(Vec2, Vec2),
    StrokePath,
    Circle(Vec2, f32, Rgba),
}

/// Surface that records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.ops.push(Op::Resize(width, height));
    }
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
    fn set_blend(&mut self, mode: BlendMode) {
        self.ops.push(Op::Blend(mode));
    }
    fn set_stroke(&mut self, style: &StrokeStyle) {
        self.ops.push(Op::Stroke(*style));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, p: Vec2) {
        self.ops.push(Op::MoveTo(p));
    }
    fn quadratic_curve_to(&mut self, ctrl: Vec2, end: Vec2) {
        self.ops.push(Op::Quad(ctrl, end));
    }
    fn stroke(&mut self) {
        self.ops.push(Op::StrokePath);
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(Op::Circle(center, radius, color));
    }
}

pub type Trail = TrailSystem<RecordingSurface, ManualScheduler>;

pub fn trail_with(config: TrailConfig, seed: u64) -> Trail {
    let mut t = TrailSystem::new(
        config,
        Some(RecordingSurface::new(800, 600)),
        ManualScheduler::new(),
        seed,
    );
    t.mount();
    t
}

/// Fire the next pending frame, if any. Returns whether a frame ran.
pub fn pump(t: &mut Trail) -> bool {
    if t.scheduler_mut().fire().is_some() {
        t.render_frame();
        true
    } else {
        false
    }
}

pub fn snapshot(t: &Trail) -> Vec<Vec<Node>> {
    t.lines().iter().map(|l| l.nodes().to_vec()).collect()
}

/// Assert the lag profile of one line `ticks` into a chase that started
/// `start` away from the target. The tail is the furthest node, and the mean
/// of each 10-node block grows along the chain. Far-tail nodes that the pull
/// has not reached yet still sit at the anchor, so their blocks saturate at
/// `start` and may tie.
pub fn assert_lag_grows(distances: &[f32], start: f32, context: &str) {
    let head = distances[0];
    let tail = distances[distances.len() - 1];
    assert!(tail > head, "{context}: tail {tail} not behind head {head}");
    assert!(
        distances.iter().all(|&d| d <= tail + 1e-3),
        "{context}: a node trails further than the tail: {distances:?}"
    );
    let blocks: Vec<f32> = distances
        .chunks(10)
        .map(|c| c.iter().sum::<f32>() / c.len() as f32)
        .collect();
    for w in blocks.windows(2) {
        if w[1] < start - 1e-2 {
            assert!(w[0] < w[1], "{context}: lag not growing: {blocks:?}");
        } else {
            assert!(w[0] <= w[1] + 1e-3, "{context}: lag shrank: {blocks:?}");
        }
    }
}
