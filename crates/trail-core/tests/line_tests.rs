// Host-side tests for the spring-chain physics.

mod common;

use common::Op;
use glam::Vec2;
use trail_core::*;

const CHAIN: ChainParams = ChainParams {
    dampening: 0.25,
    tension: 0.98,
};

const TARGET: Vec2 = Vec2::new(500.0, 500.0);

fn head_distance(line: &Line) -> f32 {
    line.head().unwrap().pos.distance(TARGET)
}

// Spring/friction pairs covering every line a default pool can produce.
fn operating_range() -> impl Iterator<Item = (f32, f32)> {
    (0..=10).flat_map(|k| {
        let spring = 0.38 + 0.0125 * k as f32;
        [0.498_f32, 0.5, 0.503, 0.508]
            .into_iter()
            .map(move |friction| (spring, friction))
    })
}

#[test]
fn head_converges_for_any_unit_spring_and_friction() {
    let grid = [0.1_f32, 0.3, 0.5, 0.7, 0.9];
    for &spring in &grid {
        for &friction in &grid {
            // The head never reads the rest of the chain, so one node suffices.
            let mut line = Line::new(spring, friction, 1, Vec2::ZERO);
            let start = head_distance(&line);
            for tick in 0..5000 {
                line.update(TARGET, CHAIN);
                let d = head_distance(&line);
                assert!(
                    d.is_finite() && d <= start,
                    "spring={spring} friction={friction} tick={tick}: head at {d}"
                );
            }
            assert!(
                head_distance(&line) < 0.01,
                "spring={spring} friction={friction} did not settle"
            );
        }
    }
}

#[test]
fn head_overshoots_shrink_tick_over_tick_envelope() {
    // Under-damped: the head may pass the target, but each overshoot peak is
    // smaller than the one before.
    let mut line = Line::new(0.4, 0.5, 50, Vec2::ZERO);
    let mut peaks = Vec::new();
    let mut prev = head_distance(&line);
    let mut rising = false;
    for _ in 0..40 {
        line.update(TARGET, CHAIN);
        let d = head_distance(&line);
        if d > prev {
            rising = true;
        } else if rising {
            peaks.push(prev);
            rising = false;
        }
        prev = d;
    }
    assert!(peaks.len() >= 2, "expected oscillation, got peaks {peaks:?}");
    for w in peaks.windows(2) {
        assert!(w[1] < w[0], "overshoot grew: {peaks:?}");
    }
}

#[test]
fn whole_chain_stays_bounded_and_settles_in_operating_range() {
    for (spring, friction) in operating_range() {
        let mut line = Line::new(spring, friction, 50, Vec2::ZERO);
        let start = TARGET.length();
        for _ in 0..500 {
            line.update(TARGET, CHAIN);
            for n in line.nodes() {
                let d = n.pos.distance(TARGET);
                assert!(
                    d.is_finite() && d < start * 1.5,
                    "spring={spring} friction={friction}: node blew up to {d}"
                );
            }
        }
        for n in line.nodes() {
            assert!(n.pos.distance(TARGET) < 1.0);
        }
    }
}

#[test]
fn tail_lags_behind_head_early_on() {
    for (spring, friction) in operating_range() {
        let mut line = Line::new(spring, friction, 50, Vec2::ZERO);
        for _ in 0..10 {
            line.update(TARGET, CHAIN);
        }
        let d: Vec<f32> = line.nodes().iter().map(|n| n.pos.distance(TARGET)).collect();
        // Individual nodes ripple, but lag grows steadily along the chain.
        common::assert_lag_grows(
            &d,
            TARGET.length(),
            &format!("spring={spring} friction={friction}"),
        );
    }
}

#[test]
fn far_tail_is_still_at_the_anchor_after_ten_ticks() {
    let mut line = Line::new(0.38, 0.498, 50, Vec2::ZERO);
    for _ in 0..10 {
        line.update(TARGET, CHAIN);
    }
    let tail = line.tail().unwrap().pos;
    assert!(tail.length() < 1e-2, "tail already moved to {tail}");
    assert!(line.head().unwrap().pos.length() > 100.0);
}

#[test]
fn spring_decays_with_tension_along_the_chain() {
    // Drive with tension 1 and tension 0.5 and compare how far the second
    // node moved on the first tick.
    let mut stiff = Line::new(0.4, 0.5, 2, Vec2::ZERO);
    let mut soft = Line::new(0.4, 0.5, 2, Vec2::ZERO);
    stiff.update(
        TARGET,
        ChainParams {
            dampening: 0.0,
            tension: 1.0,
        },
    );
    soft.update(
        TARGET,
        ChainParams {
            dampening: 0.0,
            tension: 0.5,
        },
    );
    let moved = |l: &Line| l.nodes()[1].pos.length();
    assert!((moved(&soft) * 2.0 - moved(&stiff)).abs() < 1e-3);
    assert_eq!(stiff.nodes()[0], soft.nodes()[0]);
}

#[test]
fn draw_emits_one_smoothed_path() {
    let mut surface = common::RecordingSurface::new(100, 100);
    let mut line = Line::new(0.4, 0.5, 6, Vec2::ZERO);
    for _ in 0..3 {
        line.update(Vec2::new(60.0, 20.0), CHAIN);
    }
    line.draw(&mut surface);
    let nodes = line.nodes();
    assert_eq!(surface.ops[0], Op::BeginPath);
    assert_eq!(surface.ops[1], Op::MoveTo(nodes[0].pos));
    // n - 3 midpoint segments plus the closing segment onto the tail
    let quads: Vec<_> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Quad(c, e) => Some((*c, *e)),
            _ => None,
        })
        .collect();
    assert_eq!(quads.len(), 4);
    assert_eq!(quads[0], (nodes[1].pos, (nodes[1].pos + nodes[2].pos) * 0.5));
    assert_eq!(quads[3], (nodes[4].pos, nodes[5].pos));
    assert_eq!(surface.ops.last(), Some(&Op::StrokePath));
    assert_eq!(surface.count(|op| matches!(op, Op::Clear)), 0);
}

#[test]
fn two_node_line_draws_a_single_segment() {
    let mut surface = common::RecordingSurface::new(10, 10);
    let line = Line::new(0.4, 0.5, 2, Vec2::ONE);
    line.draw(&mut surface);
    assert_eq!(surface.count(|op| matches!(op, Op::Quad(..))), 1);
}

