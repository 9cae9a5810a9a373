// Host-side tests for tuning constants and their relationships.

use trail_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn physics_constants_are_damping() {
    // Friction, dampening and tension below 1 keep the chain from gaining energy.
    assert!(FRICTION > 0.0 && FRICTION < 1.0);
    assert!(DAMPENING > 0.0 && DAMPENING < 1.0);
    assert!(TENSION > 0.0 && TENSION < 1.0);
    assert!(FRICTION + FRICTION_JITTER[1] < 1.0);
    assert!(BASE_SPRING + SPRING_SPREAD + SPRING_JITTER[1] < 1.0);
    assert!(BASE_SPRING + SPRING_JITTER[0] > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn jitter_ranges_are_ordered() {
    assert!(SPRING_JITTER[0] < SPRING_JITTER[1]);
    assert!(FRICTION_JITTER[0] < FRICTION_JITTER[1]);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hue_band_stays_visible() {
    assert!(HUE_AMPLITUDE > 0.0 && HUE_AMPLITUDE < 180.0);
    assert!(HUE_FREQUENCY > 0.0);
    assert!(HUE_ALPHA > 0.0 && HUE_ALPHA <= 1.0);
    assert!(OSC_DEFAULT_FREQUENCY > 0.0 && OSC_DEFAULT_AMPLITUDE > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_sane() {
    for [lo, hi] in [
        PARTICLE_SIZE,
        PARTICLE_SPEED_X,
        PARTICLE_RISE,
        PARTICLE_OPACITY,
        PARTICLE_FADE,
    ] {
        assert!(lo < hi);
    }
    assert!(PARTICLE_RISE[0] > 0.0);
    assert!(PARTICLE_OPACITY[1] <= 1.0);
    assert!(PARTICLE_FPS > 0.0 && PARTICLE_FPS <= 60.0);
    assert!(PARTICLE_GLOW_SCALE > 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn follower_easing_is_bounded() {
    assert!(FOLLOWER_MIN_EASE > 0.0);
    assert!(FOLLOWER_MIN_EASE < FOLLOWER_MAX_EASE);
    assert!(FOLLOWER_MAX_EASE < 1.0);
    assert!(FOLLOWER_DOT_RADIUS < FOLLOWER_RING_RADIUS);
    assert!(FOLLOWER_PRESS_SCALE < 1.0 && FOLLOWER_HOVER_SCALE > 1.0);
}
