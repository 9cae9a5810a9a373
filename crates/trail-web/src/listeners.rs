use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event subscription that unsubscribes itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let callback: &js_sys::Function = closure.as_ref().unchecked_ref();
        target
            .add_event_listener_with_callback(kind, callback)
            .map_err(|e| anyhow::anyhow!("addEventListener({}) failed: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let callback: &js_sys::Function = self.closure.as_ref().unchecked_ref();
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, callback);
    }
}

/// Every subscription owned by one mounted effect.
#[derive(Default)]
pub struct ListenerSet {
    listeners: Vec<Listener>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<()> {
        self.listeners.push(Listener::new(target, kind, handler)?);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }
}
