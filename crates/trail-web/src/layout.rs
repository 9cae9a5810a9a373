// Pure sizing and styling helpers shared by the DOM bindings.
// Kept free of web-sys so they can be exercised on the host.

use glam::Vec2;

/// Backing size for a canvas that covers the viewport minus a right-hand
/// gutter. Never smaller than 1x1 so the 2D context stays valid.
pub fn gutter_canvas_size(inner_width: f64, inner_height: f64, gutter: u32) -> (u32, u32) {
    let w = to_px(inner_width - gutter as f64);
    let h = to_px(inner_height);
    (w, h)
}

/// Backing size for a canvas that covers the whole viewport.
pub fn full_canvas_size(inner_width: f64, inner_height: f64) -> (u32, u32) {
    gutter_canvas_size(inner_width, inner_height, 0)
}

fn to_px(v: f64) -> u32 {
    if v.is_finite() && v >= 1.0 {
        v.floor().min(u32::MAX as f64) as u32
    } else {
        1
    }
}

/// CSS transform placing an element at a top-left offset with a scale.
pub fn transform_css(offset: Vec2, scale: f32) -> String {
    format!(
        "translate3d({:.2}px, {:.2}px, 0) scale({})",
        offset.x, offset.y, scale
    )
}

/// Mix a base seed into an independent per-effect seed.
pub fn derive_seed(base: u64, effect: u64, stride: u64) -> u64 {
    base ^ effect.wrapping_mul(stride)
}
