use glam::Vec2;
use trail_core::{PointerSample, TouchPoints};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn mouse_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Page coordinates of every active touch.
pub fn touch_points(ev: &web::TouchEvent) -> TouchPoints {
    let list = ev.touches();
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| Vec2::new(t.page_x() as f32, t.page_y() as f32))
        .collect()
}

/// Convert a DOM pointer event into an engine sample; `None` for event
/// types the trail does not consume.
pub fn pointer_sample(ev: &web::Event) -> Option<PointerSample> {
    match ev.type_().as_str() {
        "mousemove" => ev
            .dyn_ref::<web::MouseEvent>()
            .map(|m| PointerSample::Mouse {
                client: mouse_client(m),
            }),
        "touchstart" => ev
            .dyn_ref::<web::TouchEvent>()
            .map(|t| PointerSample::TouchStart {
                touches: touch_points(t),
            }),
        "touchmove" => ev
            .dyn_ref::<web::TouchEvent>()
            .map(|t| PointerSample::TouchMove {
                touches: touch_points(t),
            }),
        _ => None,
    }
}
