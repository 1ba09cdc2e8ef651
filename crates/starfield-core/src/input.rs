use glam::Vec2;

use crate::constants::{POINTER_SMOOTHING, SWIRL_ACTIVITY_MS};

/// Latest pointer and scroll readings, written by the event adapters and read
/// once per frame.
///
/// Times are absolute milliseconds on the same clock the frame loop uses.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputSignals {
    /// Raw pointer position in client (CSS px) space.
    pub pointer: Vec2,
    /// Pointer position normalized to `[-1, 1]`, y pointing up.
    pub pointer_norm: Vec2,
    /// `pointer_norm` eased toward each frame; drives cursor parallax.
    pub pointer_smoothed: Vec2,
    /// `None` until the first pointer move; no swirl runs before it.
    pub last_pointer_ms: Option<f64>,
    pub scroll_target: f32,
    /// `scroll_target` eased toward each frame; drives scroll parallax.
    pub scroll_offset: f32,
    pub last_scroll_ms: f64,
}

impl InputSignals {
    /// Record a pointer or single-touch move. `surface_size` is the displayed
    /// (CSS) size of the canvas used for normalization.
    pub fn pointer_moved(&mut self, client: Vec2, surface_size: Vec2, now_ms: f64) {
        self.pointer = client;
        self.pointer_norm = normalize_pointer(client, surface_size);
        self.last_pointer_ms = Some(now_ms);
    }

    pub fn scrolled(&mut self, offset_px: f32, now_ms: f64) {
        if offset_px.is_finite() {
            self.scroll_target = offset_px;
        }
        self.last_scroll_ms = now_ms;
    }

    /// Per-frame easing of the parallax inputs.
    pub fn smooth(&mut self, scroll_damp: f32) {
        self.pointer_smoothed += (self.pointer_norm - self.pointer_smoothed) * POINTER_SMOOTHING;
        self.scroll_offset += (self.scroll_target - self.scroll_offset) * scroll_damp;
    }

    pub fn last_activity_ms(&self) -> f64 {
        self.last_pointer_ms
            .map_or(self.last_scroll_ms, |p| p.max(self.last_scroll_ms))
    }

    /// 1 right after a pointer move, falling linearly to 0 over 800 ms. Zero
    /// before any pointer move.
    pub fn swirl_activity(&self, now_ms: f64) -> f32 {
        let Some(last) = self.last_pointer_ms else {
            return 0.0;
        };
        (1.0 - (now_ms - last) / SWIRL_ACTIVITY_MS).clamp(0.0, 1.0) as f32
    }

    /// 0 while the user is active, ramping to 1 over `fade_ms` once `delay_ms`
    /// has passed since the last pointer move or scroll.
    pub fn idle_factor(&self, now_ms: f64, delay_ms: f32, fade_ms: f32) -> f32 {
        let since = now_ms - self.last_activity_ms() - delay_ms as f64;
        if fade_ms <= 0.0 {
            return if since >= 0.0 { 1.0 } else { 0.0 };
        }
        (since / fade_ms as f64).clamp(0.0, 1.0) as f32
    }
}

/// Map a client position to `[-1, 1]` per axis, y up. A degenerate surface
/// maps everything to the centre.
pub fn normalize_pointer(client: Vec2, surface_size: Vec2) -> Vec2 {
    if surface_size.x <= 0.0 || surface_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client.x / surface_size.x) * 2.0 - 1.0,
        -((client.y / surface_size.y) * 2.0 - 1.0),
    )
}
