use glam::Vec2;
use web_sys as web;

use super::{listen_passive, EventWiring};
use crate::dom;

fn record_pointer(w: &EventWiring, client_x: i32, client_y: i32) {
    let (width, height) = dom::css_size(&w.canvas);
    let now = w.clock.now_ms();
    w.sim.borrow_mut().signals.pointer_moved(
        Vec2::new(client_x as f32, client_y as f32),
        Vec2::new(width, height),
        now,
    );
}

pub fn wire_mousemove(w: &EventWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    listen_passive(&window, "mousemove", move |ev: web::MouseEvent| {
        record_pointer(&w, ev.client_x(), ev.client_y());
    });
}

/// First touch only; multi-touch gestures are left to the page.
pub fn wire_touchmove(w: &EventWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    listen_passive(&window, "touchmove", move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            record_pointer(&w, touch.client_x(), touch.client_y());
        }
    });
}
