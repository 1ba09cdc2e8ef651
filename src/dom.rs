use anyhow::anyhow;
use starfield_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::config::pixel_ratio;
use crate::constants::{CANVAS_ID, CANVAS_STYLE, MAX_DEVICE_PIXEL_RATIO};

/// Reuse `#bgfx` if the page already has one, otherwise create it as the
/// first child of `<body>`.
pub fn ensure_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    if let Some(el) = document.get_element_by_id(CANVAS_ID) {
        return el
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow!("#{} is not a canvas: {:?}", CANVAS_ID, e));
    }
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    canvas.set_id(CANVAS_ID);
    canvas
        .set_attribute("style", CANVAS_STYLE)
        .map_err(|e| anyhow!("{:?}", e))?;
    canvas
        .set_attribute("aria-hidden", "true")
        .map_err(|e| anyhow!("{:?}", e))?;
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    body.prepend_with_node_1(&canvas)
        .map_err(|e| anyhow!("{:?}", e))?;
    Ok(canvas)
}

/// The 2D context, or `None` when the browser will not hand one out.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// Displayed (CSS pixel) size of the canvas.
pub fn css_size(canvas: &web::HtmlCanvasElement) -> (f32, f32) {
    let rect = canvas.get_bounding_client_rect();
    (rect.width() as f32, rect.height() as f32)
}

/// Size the backing store to the window at up to 2x device pixels and map
/// drawing back to CSS pixels. Returns the logical viewport.
pub fn fit_canvas(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> Viewport {
    let Some(window) = web::window() else {
        return Viewport::default();
    };
    let dpr = pixel_ratio(window.device_pixel_ratio(), MAX_DEVICE_PIXEL_RATIO);
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    canvas.set_width((width * dpr).floor().max(1.0) as u32);
    canvas.set_height((height * dpr).floor().max(1.0) as u32);
    if let Err(e) = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0) {
        log::warn!("[dom] set_transform failed: {:?}", e);
    }
    Viewport::new(width as f32, height as f32)
}

pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Show or hide an element by id. Missing elements are ignored.
pub fn set_panel_visible(document: &web::Document, element_id: &str, visible: bool) {
    let Some(el) = document.get_element_by_id(element_id) else {
        return;
    };
    if let Ok(html) = el.dyn_into::<web::HtmlElement>() {
        let value = if visible { "" } else { "none" };
        _ = html.style().set_property("display", value);
    }
}

/// Flip an element's visibility. Returns the new state, or `None` when the
/// element does not exist.
pub fn toggle_panel(document: &web::Document, element_id: &str) -> Option<bool> {
    let el = document
        .get_element_by_id(element_id)?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    let style = el.style();
    let hidden = style
        .get_property_value("display")
        .map(|d| d == "none")
        .unwrap_or(false);
    let value = if hidden { "" } else { "none" };
    _ = style.set_property("display", value);
    Some(hidden)
}
