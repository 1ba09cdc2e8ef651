#![cfg(target_arch = "wasm32")]
use starfield_core::{preset, ParameterSet, Simulation, DEFAULT_PRESET};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod config;
mod constants;
mod controls;
mod dom;
mod events;
mod frame;
mod surface;

use config::BootConfig;
use constants::GUI_PANEL_ID;

/// Initial parameters: defaults merged with the requested preset, falling
/// back to the default preset for unknown names.
fn boot_params(config: &BootConfig) -> ParameterSet {
    let mut params = ParameterSet::default();
    let requested = config.preset.as_deref().unwrap_or(DEFAULT_PRESET);
    match preset(requested).or_else(|e| {
        log::warn!("{}; using '{}'", e, DEFAULT_PRESET);
        preset(DEFAULT_PRESET)
    }) {
        Ok(p) => params.apply_preset(p),
        Err(e) => log::warn!("{}", e),
    }
    params
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield-web starting");

    if let Err(e) = init() {
        log::warn!("starfield disabled: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let search = window.location().search().unwrap_or_default();
    let config = BootConfig::from_query(&search);

    let canvas = dom::ensure_canvas(&document)?;
    let Some(ctx) = dom::context_2d(&canvas) else {
        log::warn!("no 2d context; starfield not started");
        return Ok(());
    };
    let viewport = dom::fit_canvas(&canvas, &ctx);

    let seed = config.seed.unwrap_or_else(rand::random);
    let params = boot_params(&config);
    log::info!(
        "[boot] preset='{}' seed={} viewport={}x{}",
        params.preset,
        seed,
        viewport.width as u32,
        viewport.height as u32
    );
    let sim = Rc::new(RefCell::new(Simulation::new(viewport, params, seed)));
    sim.borrow_mut().signals.scrolled(dom::scroll_y(), 0.0);

    dom::set_panel_visible(&document, GUI_PANEL_ID, config.show_gui);

    let clock = frame::Clock::start();
    let surface = surface::CanvasSurface::new(ctx);
    events::wire_event_handlers(
        events::EventWiring {
            canvas: canvas.clone(),
            sim: sim.clone(),
            clock,
        },
        &surface,
        &document,
    );
    controls::install(sim.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sim,
        surface,
        clock,
        frames: 0,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
