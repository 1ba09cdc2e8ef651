// Simulation and drawing constants that are not exposed as live controls.

// Particle count derivation
pub const AREA_PER_PARTICLE: f32 = 2800.0; // logical px^2 per particle before clamping
pub const MIN_BASE_COUNT: usize = 220;
pub const MAX_BASE_COUNT: usize = 1200;

// Spawn ranges (min, span)
pub const DEPTH_MIN: f32 = 0.2;
pub const DEPTH_SPAN: f32 = 1.0;
pub const RADIUS_MIN: f32 = 0.6;
pub const RADIUS_SPAN: f32 = 1.6;
pub const DRIFT_X_MIN: f32 = 0.05;
pub const DRIFT_X_SPAN: f32 = 0.3;
pub const DRIFT_Y_MIN: f32 = 0.03;
pub const DRIFT_Y_SPAN: f32 = 0.2;
pub const ALPHA_MIN: f32 = 0.35;
pub const ALPHA_SPAN: f32 = 0.35;

// Frame timing
pub const MAX_FRAME_DT_MS: f64 = 50.0; // bounds displacement after tab-switch stalls

// Input smoothing
pub const POINTER_SMOOTHING: f32 = 0.06; // fraction of the remaining distance per frame
pub const SWIRL_ACTIVITY_MS: f64 = 800.0; // swirl fades out linearly over this long after a move
pub const SWIRL_ACTIVITY_MIN: f32 = 0.01;

// Force model
pub const DRIFT_SCALE: f32 = 0.15;
pub const PARALLAX_DEPTH_BASE: f32 = 1.8;
pub const PARALLAX_X: f32 = 8.0;
pub const PARALLAX_Y: f32 = 6.0;
pub const SCROLL_DEPTH_BASE: f32 = 1.4;
pub const SWIRL_DEPTH_BASE: f32 = 0.6;
pub const SWIRL_DEPTH_SPAN: f32 = 0.4;
pub const SWIRL_MIN_DIST: f32 = 0.0001; // below this the tangent is undefined

// Compositor
pub const GLOW_RADIUS_MULT: f32 = 3.2;
pub const GLOW_ALPHA_MULT: f32 = 0.18;
pub const MIN_VISIBLE_ALPHA: f32 = 0.02;

// Vignette geometry, as fractions of the viewport
pub const VIGNETTE_INNER_X: f32 = 0.8;
pub const VIGNETTE_INNER_Y: f32 = 0.2;
pub const VIGNETTE_INNER_RADIUS: f32 = 0.1; // of min(w, h)
pub const VIGNETTE_SCROLL_SHIFT: f32 = 0.025;
pub const VIGNETTE_INNER_RGBA: ([u8; 3], f32) = ([14, 19, 26], 0.30);
pub const VIGNETTE_OUTER_RGBA: ([u8; 3], f32) = ([11, 13, 16], 0.0);

// Default palette: mostly yellows, repeats weight the pick
pub const DOMINANT_HEX: [&str; 7] = [
    "#F5DF9A", "#F5DF9A", "#F5DF9A", "#F3F59A", "#F3F59A", "#F0EF75", "#F0EF75",
];
pub const ACCENT_HEX: [&str; 2] = ["#F47A27", "#A4F3F5"];
