use glam::Vec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use trail_core::{CursorFollower, FollowerConfig, FrameSlot};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{CURSOR_DOT_ID, CURSOR_RING_ID, HOVER_SELECTOR};
use crate::dom;
use crate::frame::RafScheduler;
use crate::input;
use crate::layout;
use crate::listeners::ListenerSet;

struct FollowerLoop {
    follower: CursorFollower,
    ring: web::HtmlElement,
    dot: web::HtmlElement,
    frames: FrameSlot<RafScheduler>,
    running: bool,
}

impl FollowerLoop {
    fn render_frame(&mut self) {
        self.frames.fired();
        if !self.running {
            return;
        }
        let frame = self.follower.step();
        place(&self.ring, frame.ring, frame.ring_scale);
        place(&self.dot, frame.dot, 1.0);
        self.frames.schedule();
    }

    fn stop(&mut self) {
        self.running = false;
        self.frames.cancel();
    }
}

fn place(el: &web::HtmlElement, offset: Vec2, scale: f32) {
    _ = el
        .style()
        .set_property("transform", &layout::transform_css(offset, scale));
}

fn is_interactive(target: Option<web::EventTarget>) -> bool {
    target
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(HOVER_SELECTOR).ok().flatten())
        .is_some()
}

/// Listener body that hands the follower and the mouse event to `apply`.
fn mouse_handler(
    state: &Rc<RefCell<FollowerLoop>>,
    apply: fn(&mut CursorFollower, &web::MouseEvent),
) -> impl FnMut(web::Event) + 'static {
    let weak: Weak<_> = Rc::downgrade(state);
    move |ev: web::Event| {
        let (Some(state), Some(m)) = (weak.upgrade(), ev.dyn_ref::<web::MouseEvent>()) else {
            return;
        };
        if let Ok(mut s) = state.try_borrow_mut() {
            apply(&mut s.follower, m);
        }
    }
}

/// Ring-and-dot cursor bound to `#cursor-ring` / `#cursor-dot`.
pub struct FollowerMount {
    state: Rc<RefCell<FollowerLoop>>,
    _listeners: ListenerSet,
}

impl FollowerMount {
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        config: FollowerConfig,
    ) -> anyhow::Result<Self> {
        let ring = dom::element_by_id::<web::HtmlElement>(document, CURSOR_RING_ID)?;
        let dot = dom::element_by_id::<web::HtmlElement>(document, CURSOR_DOT_ID)?;

        let state = Rc::new(RefCell::new(FollowerLoop {
            follower: CursorFollower::new(config),
            ring,
            dot,
            frames: FrameSlot::new(RafScheduler::new(window.clone())),
            running: true,
        }));
        {
            let weak = Rc::downgrade(&state);
            state.borrow().frames.scheduler().set_callback(move |_ts| {
                if let Some(state) = weak.upgrade() {
                    if let Ok(mut s) = state.try_borrow_mut() {
                        s.render_frame();
                    }
                }
            });
        }

        let mut listeners = ListenerSet::new();
        listeners.add(
            document,
            "mousemove",
            mouse_handler(&state, |f, m| f.set_pointer(input::mouse_client(m))),
        )?;
        listeners.add(document, "mousedown", mouse_handler(&state, |f, _| f.set_pressed(true)))?;
        listeners.add(document, "mouseup", mouse_handler(&state, |f, _| f.set_pressed(false)))?;
        listeners.add(
            document,
            "mouseover",
            mouse_handler(&state, |f, m| {
                if is_interactive(m.target()) {
                    f.set_hovering(true);
                }
            }),
        )?;
        listeners.add(
            document,
            "mouseout",
            mouse_handler(&state, |f, m| {
                if is_interactive(m.target()) && !is_interactive(m.related_target()) {
                    f.set_hovering(false);
                }
            }),
        )?;

        state.borrow_mut().frames.schedule();
        log::info!("[cursor] mounted on #{} / #{}", CURSOR_RING_ID, CURSOR_DOT_ID);
        Ok(Self {
            state,
            _listeners: listeners,
        })
    }
}

impl Drop for FollowerMount {
    fn drop(&mut self) {
        if let Ok(mut s) = self.state.try_borrow_mut() {
            s.stop();
        }
        log::info!("[cursor] unmounted");
    }
}
