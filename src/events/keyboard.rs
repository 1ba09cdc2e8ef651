use web_sys as web;

use super::listen_passive;
use crate::constants::{GUI_PANEL_ID, GUI_TOGGLE_KEY};
use crate::dom;

#[inline]
pub fn is_gui_toggle(key: &str) -> bool {
    key.eq_ignore_ascii_case(GUI_TOGGLE_KEY)
}

/// `g` shows or hides the tuning panel, unless the user is typing.
pub fn wire_gui_toggle(document: &web::Document) {
    let doc = document.clone();
    listen_passive(document, "keydown", move |ev: web::KeyboardEvent| {
        if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        if !is_gui_toggle(&ev.key()) || is_typing(&ev) {
            return;
        }
        if let Some(visible) = dom::toggle_panel(&doc, GUI_PANEL_ID) {
            log::debug!("[gui] panel visible={}", visible);
        }
    });
}

fn is_typing(ev: &web::KeyboardEvent) -> bool {
    use wasm_bindgen::JsCast;
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| {
            let tag = el.tag_name().to_ascii_uppercase();
            tag == "INPUT" || tag == "TEXTAREA" || tag == "SELECT"
        })
        .unwrap_or(false)
}
