use starfield_core::{preset_names, Error, ParamKey, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

use crate::constants::CONTROLS_GLOBAL;

/// Live tuning handle, reachable from the console as `window.starfield`.
///
/// Numeric writes are clamped to each control's range and take effect on the
/// next frame; `density`, `dominantWeight` and `edgeMargin` rebuild the pool.
#[wasm_bindgen]
pub struct Controls {
    sim: Rc<RefCell<Simulation>>,
}

impl Controls {
    pub fn new(sim: Rc<RefCell<Simulation>>) -> Self {
        Self { sim }
    }
}

fn to_js_error(e: Error) -> JsValue {
    log::warn!("[controls] {}", e);
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
impl Controls {
    /// Current value of a control. `"preset"` yields the active preset name;
    /// unknown names yield `undefined`.
    pub fn get(&self, name: &str) -> JsValue {
        let sim = self.sim.borrow();
        if name == "preset" {
            return JsValue::from_str(&sim.params().preset);
        }
        match sim.params().get_by_name(name) {
            Ok(v) => JsValue::from_f64(v as f64),
            Err(e) => {
                log::warn!("[controls] {}", e);
                JsValue::UNDEFINED
            }
        }
    }

    /// Write a numeric control and return the value actually stored.
    pub fn set(&self, name: &str, value: f64) -> Result<f64, JsValue> {
        self.sim
            .borrow_mut()
            .set_param_by_name(name, value as f32)
            .map(f64::from)
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = applyPreset)]
    pub fn apply_preset(&self, name: &str) -> Result<(), JsValue> {
        self.sim
            .borrow_mut()
            .apply_preset(name)
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = presetNames)]
    pub fn preset_names(&self) -> js_sys::Array {
        preset_names().map(JsValue::from_str).collect()
    }

    #[wasm_bindgen(js_name = paramNames)]
    pub fn param_names(&self) -> js_sys::Array {
        ParamKey::ALL
            .iter()
            .map(|k| JsValue::from_str(k.name()))
            .collect()
    }

    pub fn reseed(&self) {
        self.sim.borrow_mut().reseed();
    }
}

/// Expose a handle on `window`. Failure only costs the console surface.
pub fn install(sim: Rc<RefCell<Simulation>>) {
    let Some(window) = web::window() else {
        return;
    };
    let handle = JsValue::from(Controls::new(sim));
    if let Err(e) = js_sys::Reflect::set(&window, &JsValue::from_str(CONTROLS_GLOBAL), &handle) {
        log::warn!("[controls] could not install window.{}: {:?}", CONTROLS_GLOBAL, e);
    }
}
