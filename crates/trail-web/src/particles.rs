use std::cell::RefCell;
use std::rc::Rc;
use trail_core::{ParticleConfig, ParticleLayer, Surface};
use web_sys as web;

use crate::canvas::CanvasSurface;
use crate::constants::PARTICLE_CANVAS_ID;
use crate::dom;
use crate::frame::RafScheduler;
use crate::layout;
use crate::listeners::ListenerSet;

type WebParticles = ParticleLayer<CanvasSurface, RafScheduler>;

/// Rising embers on `#particle-canvas`. Runs regardless of focus.
pub struct ParticleMount {
    layer: Rc<RefCell<WebParticles>>,
    _listeners: ListenerSet,
}

impl ParticleMount {
    pub fn mount(
        window: &web::Window,
        document: &web::Document,
        config: ParticleConfig,
        seed: u64,
    ) -> anyhow::Result<Self> {
        let canvas = dom::element_by_id::<web::HtmlCanvasElement>(document, PARTICLE_CANVAS_ID)?;
        let mut surface = CanvasSurface::new(canvas)?;
        let (iw, ih) = dom::inner_size(window);
        let (w, h) = layout::full_canvas_size(iw, ih);
        surface.resize(w, h);

        let count = config.count;
        let layer = Rc::new(RefCell::new(ParticleLayer::new(
            config,
            surface,
            RafScheduler::new(window.clone()),
            seed,
        )));
        {
            let weak = Rc::downgrade(&layer);
            layer.borrow_mut().scheduler_mut().set_callback(move |ts| {
                if let Some(layer) = weak.upgrade() {
                    if let Ok(mut l) = layer.try_borrow_mut() {
                        l.render_frame(ts);
                    }
                }
            });
        }

        let mut listeners = ListenerSet::new();
        {
            let weak = Rc::downgrade(&layer);
            let win = window.clone();
            listeners.add(window, "resize", move |_| {
                let Some(layer) = weak.upgrade() else { return };
                let (iw, ih) = dom::inner_size(&win);
                let (w, h) = layout::full_canvas_size(iw, ih);
                if let Ok(mut l) = layer.try_borrow_mut() {
                    l.resize(w, h);
                }
            })?;
        }

        layer.borrow_mut().start();
        log::info!("[particles] mounted {} particles on #{}", count, PARTICLE_CANVAS_ID);
        Ok(Self {
            layer,
            _listeners: listeners,
        })
    }
}

impl Drop for ParticleMount {
    fn drop(&mut self) {
        if let Ok(mut l) = self.layer.try_borrow_mut() {
            l.destroy();
        }
        log::info!("[particles] unmounted");
    }
}
