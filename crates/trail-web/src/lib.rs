#![cfg(target_arch = "wasm32")]
mod canvas;
mod constants;
mod dom;
mod follower;
mod frame;
mod input;
mod layout;
mod listeners;
mod particles;
mod trail;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use constants::SEED_STRIDE;
use follower::FollowerMount;
use particles::ParticleMount;
use trail::TrailMount;

/// Everything currently mounted on the page. Dropping it tears every
/// effect down (frames cancelled, listeners removed).
struct Effects {
    trail: Option<TrailMount>,
    particles: Option<ParticleMount>,
    follower: Option<FollowerMount>,
}

impl Effects {
    fn summary(&self) -> String {
        format!(
            "trail={} particles={} cursor={}",
            self.trail.is_some(),
            self.particles.is_some(),
            self.follower.is_some()
        )
    }
}

thread_local! {
    static EFFECTS: RefCell<Option<Effects>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("neon-trail starting");
    mount_effects();
    Ok(())
}

/// Mount every effect whose DOM anchor exists. No-op when already mounted.
#[wasm_bindgen]
pub fn mount_effects() {
    if EFFECTS.with(|e| e.borrow().is_some()) {
        log::warn!("[effects] already mounted; ignoring");
        return;
    }
    match init() {
        Ok(effects) => EFFECTS.with(|e| *e.borrow_mut() = Some(effects)),
        Err(e) => log::warn!("[effects] not mounted: {:?}", e),
    }
}

/// Stop every animation loop and remove every listener.
#[wasm_bindgen]
pub fn unmount_effects() {
    let effects = EFFECTS.with(|e| e.borrow_mut().take());
    if effects.is_some() {
        drop(effects);
        log::info!("[effects] unmounted");
    }
}

fn init() -> anyhow::Result<Effects> {
    let (window, document) = dom::window_document()?;
    let config = dom::read_config(&document);
    let seed = config.seed.unwrap_or_else(rand::random::<u64>);
    log::debug!("[effects] seed {}", seed);

    let trail = TrailMount::mount(
        &window,
        &document,
        config.trail,
        layout::derive_seed(seed, 0, SEED_STRIDE),
    )
    .map_err(|e| log::warn!("[trail] not mounted: {:?}", e))
    .ok();
    let particles = ParticleMount::mount(
        &window,
        &document,
        config.particles,
        layout::derive_seed(seed, 1, SEED_STRIDE),
    )
    .map_err(|e| log::warn!("[particles] not mounted: {:?}", e))
    .ok();
    let follower = FollowerMount::mount(&window, &document, config.follower)
        .map_err(|e| log::warn!("[cursor] not mounted: {:?}", e))
        .ok();

    let effects = Effects {
        trail,
        particles,
        follower,
    };
    log::info!("[effects] mounted {}", effects.summary());
    Ok(effects)
}
