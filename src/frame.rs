use instant::Instant;
use starfield_core::{FrameStats, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::surface::CanvasSurface;

/// Monotonic page clock in milliseconds, shared by the frame loop and the
/// event adapters so their timestamps are comparable.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub surface: CanvasSurface,
    pub clock: Clock,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) -> FrameStats {
        let now = self.clock.now_ms();
        let stats = self.sim.borrow_mut().step(now, &mut self.surface);
        if self.frames == 0 {
            log::info!(
                "[frame] first frame: sprites={} drawn={}",
                stats.sprites,
                stats.drawn
            );
        }
        self.frames += 1;
        stats
    }
}

fn request_frame(window: &web::Window, tick: &Closure<dyn FnMut()>) {
    if let Err(e) = window.request_animation_frame(tick.as_ref().unchecked_ref()) {
        log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
    }
}

/// Run one frame per display refresh: the frame's work completes before the
/// next one is requested.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            request_frame(&w, cb);
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        request_frame(&w, cb);
    }
}
