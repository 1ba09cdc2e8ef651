use web_sys as web;

use super::{listen_passive, EventWiring};
use crate::dom;

pub fn wire_scroll(w: &EventWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    listen_passive(&window, "scroll", move |_: web::Event| {
        let now = w.clock.now_ms();
        w.sim.borrow_mut().signals.scrolled(dom::scroll_y(), now);
    });
}

/// Refit the backing store and rebuild the pool for the new size.
pub fn wire_resize(w: &EventWiring, ctx: web::CanvasRenderingContext2d) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    listen_passive(&window, "resize", move |_: web::Event| {
        let viewport = dom::fit_canvas(&w.canvas, &ctx);
        log::debug!(
            "[resize] {}x{}",
            viewport.width as u32,
            viewport.height as u32
        );
        w.sim.borrow_mut().resize(viewport);
    });
}
