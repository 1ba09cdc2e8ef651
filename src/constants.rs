// DOM and front-end constants.
//
// Kept free of crate imports so host tests can `include!` this file.
// Element ids
pub const CANVAS_ID: &str = "bgfx";
pub const GUI_PANEL_ID: &str = "bgfx-gui";

// Property the tuning handle is installed under on `window`
pub const CONTROLS_GLOBAL: &str = "starfield";

// Backing store never exceeds 2x the CSS size
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Fixed full-viewport layer behind the page content
pub const CANVAS_STYLE: &str =
    "position:fixed;inset:0;width:100vw;height:100vh;z-index:-1;pointer-events:none;display:block";

// Key that toggles the tuning panel (case-insensitive)
pub const GUI_TOGGLE_KEY: &str = "g";

