use starfield_core::Simulation;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::frame::Clock;
use crate::surface::CanvasSurface;

pub mod keyboard;
pub mod pointer;
pub mod viewport;

/// Everything the event adapters write into.
#[derive(Clone)]
pub struct EventWiring {
    pub canvas: web::HtmlCanvasElement,
    pub sim: Rc<RefCell<Simulation>>,
    pub clock: Clock,
}

pub fn wire_event_handlers(w: EventWiring, surface: &CanvasSurface, document: &web::Document) {
    pointer::wire_mousemove(&w);
    pointer::wire_touchmove(&w);
    viewport::wire_scroll(&w);
    viewport::wire_resize(&w, surface.context().clone());
    keyboard::wire_gui_toggle(document);
}

/// Attach a passive listener to `target` for the lifetime of the page.
pub(crate) fn listen_passive<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("[events] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}
