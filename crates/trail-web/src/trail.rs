use std::cell::RefCell;
use std::rc::{Rc, Weak};
use trail_core::{TrailConfig, TrailState, TrailSystem};
use web_sys as web;

use crate::canvas::CanvasSurface;
use crate::constants::{TRAIL_CANVAS_ID, TRAIL_POINTER_EVENTS};
use crate::dom;
use crate::frame::RafScheduler;
use crate::input;
use crate::layout;
use crate::listeners::ListenerSet;

type WebTrail = TrailSystem<CanvasSurface, RafScheduler>;

/// The pointer trail bound to `#canvas`.
pub struct TrailMount {
    system: Rc<RefCell<WebTrail>>,
    _listeners: ListenerSet,
}

impl TrailMount {
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        config: TrailConfig,
        seed: u64,
    ) -> anyhow::Result<Self> {
        let surface = dom::element_by_id::<web::HtmlCanvasElement>(document, TRAIL_CANVAS_ID)
            .and_then(CanvasSurface::new)
            .map_err(|e| log::warn!("[trail] {}", e))
            .ok();
        let gutter = config.viewport_gutter;
        let scheduler = RafScheduler::new(window.clone());
        let system = Rc::new(RefCell::new(TrailSystem::new(
            config, surface, scheduler, seed,
        )));
        if system.borrow_mut().mount() == TrailState::Uninitialized {
            anyhow::bail!("trail canvas unavailable");
        }
        fit_to_viewport(&system, window, gutter);

        {
            let weak = Rc::downgrade(&system);
            system
                .borrow()
                .scheduler()
                .set_callback(move |_ts| with_system(&weak, |s| s.render_frame()));
        }

        let mut listeners = ListenerSet::new();
        for kind in TRAIL_POINTER_EVENTS {
            let weak = Rc::downgrade(&system);
            listeners.add(document, kind, move |ev| {
                if let Some(sample) = input::pointer_sample(&ev) {
                    with_system(&weak, |s| s.on_pointer(&sample));
                }
            })?;
        }

        let on_resize = {
            let weak = Rc::downgrade(&system);
            let window = window.clone();
            move |_ev: web::Event| {
                if let Some(sys) = weak.upgrade() {
                    fit_to_viewport(&sys, &window, gutter);
                }
            }
        };
        listeners.add(window, "resize", on_resize.clone())?;
        if let Some(body) = document.body() {
            listeners.add(&body, "orientationchange", on_resize)?;
        }

        let weak = Rc::downgrade(&system);
        listeners.add(window, "blur", move |_| with_system(&weak, |s| s.pause()))?;
        let weak = Rc::downgrade(&system);
        listeners.add(window, "focus", move |_| with_system(&weak, |s| s.resume()))?;

        log::info!("[trail] mounted on #{} ({} listeners)", TRAIL_CANVAS_ID, listeners.len());
        Ok(Self {
            system,
            _listeners: listeners,
        })
    }
}

impl Drop for TrailMount {
    fn drop(&mut self) {
        if let Ok(mut s) = self.system.try_borrow_mut() {
            s.destroy();
        }
        log::info!("[trail] unmounted");
    }
}

fn with_system(weak: &Weak<RefCell<WebTrail>>, f: impl FnOnce(&mut WebTrail)) {
    if let Some(sys) = weak.upgrade() {
        if let Ok(mut s) = sys.try_borrow_mut() {
            f(&mut s);
        }
    }
}

fn fit_to_viewport(system: &Rc<RefCell<WebTrail>>, window: &web::Window, gutter: u32) {
    let (iw, ih) = dom::inner_size(window);
    let (w, h) = layout::gutter_canvas_size(iw, ih, gutter);
    if let Ok(mut s) = system.try_borrow_mut() {
        s.resize(w, h);
        if let Some(origin) = s.surface().map(|c| c.client_origin()) {
            s.set_origin(origin);
        }
    }
}
