// Host-side tests for DOM anchor constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct_and_bare() {
    let ids = [
        TRAIL_CANVAS_ID,
        PARTICLE_CANVAS_ID,
        CURSOR_RING_ID,
        CURSOR_DOT_ID,
        CONFIG_SCRIPT_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty() && !a.starts_with('#'));
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn hover_selector_covers_links_and_buttons() {
    let parts: Vec<&str> = HOVER_SELECTOR.split(',').map(str::trim).collect();
    assert!(parts.contains(&"a"));
    assert!(parts.contains(&"button"));
    assert!(parts.contains(&".hoverable"));
}

#[test]
fn trail_listens_to_mouse_and_touch() {
    assert!(TRAIL_POINTER_EVENTS.contains(&"mousemove"));
    assert!(TRAIL_POINTER_EVENTS.contains(&"touchstart"));
    assert!(TRAIL_POINTER_EVENTS.contains(&"touchmove"));
}
