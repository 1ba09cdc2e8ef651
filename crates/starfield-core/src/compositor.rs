//! Frame painting.
//!
//! The compositor never touches a platform API. It paints through
//! [`Surface`], which the web front-end implements for a 2D canvas context.
//! Draw order:
//! 1. Full clear
//! 2. Radial vignette, nudged by scroll
//! 3. Every sprite in pool order under additive blending, glow then core

use glam::Vec2;

use crate::color::Rgb;
use crate::constants::*;
use crate::particle::Viewport;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgb,
    pub alpha: f32,
}

/// Two-circle radial gradient, as a canvas `createRadialGradient` takes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialGradient {
    pub inner: Circle,
    pub outer: Circle,
    pub stops: [ColorStop; 2],
}

/// A particle resolved for this frame: draw-space position, pulsed radius and
/// final opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub color: Rgb,
}

/// Drawing target. Coordinates are logical (CSS) pixels.
pub trait Surface {
    fn clear(&mut self, viewport: Viewport);
    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, viewport: Viewport);
    /// Everything until [`Surface::end_additive`] blends with "lighter".
    fn begin_additive(&mut self);
    fn end_additive(&mut self);
    fn fill_circle(&mut self, circle: Circle, color: Rgb, alpha: f32);
}

/// Background vignette: off-centre toward the top right, shifted down a
/// little with scroll, fading to transparent at `max(w, h) * outer_mult`.
pub fn vignette(viewport: Viewport, scroll_offset: f32, outer_mult: f32) -> RadialGradient {
    let (w, h) = (viewport.width, viewport.height);
    let shift = scroll_offset * VIGNETTE_SCROLL_SHIFT;
    let ([r0, g0, b0], a0) = VIGNETTE_INNER_RGBA;
    let ([r1, g1, b1], a1) = VIGNETTE_OUTER_RGBA;
    RadialGradient {
        inner: Circle {
            center: Vec2::new(w * VIGNETTE_INNER_X, h * VIGNETTE_INNER_Y + shift),
            radius: viewport.min_dim() * VIGNETTE_INNER_RADIUS,
        },
        outer: Circle {
            center: Vec2::new(w * 0.5, h * 0.5 + shift),
            radius: viewport.max_dim() * outer_mult,
        },
        stops: [
            ColorStop {
                offset: 0.0,
                color: Rgb::new(r0, g0, b0),
                alpha: a0,
            },
            ColorStop {
                offset: 1.0,
                color: Rgb::new(r1, g1, b1),
                alpha: a1,
            },
        ],
    }
}

/// Glow then core. Returns false when the sprite is too faint to draw.
pub fn draw_sprite<S: Surface + ?Sized>(surface: &mut S, sprite: &Sprite) -> bool {
    if sprite.alpha.is_nan() || sprite.alpha < MIN_VISIBLE_ALPHA {
        return false;
    }
    surface.fill_circle(
        Circle {
            center: sprite.pos,
            radius: sprite.radius * GLOW_RADIUS_MULT,
        },
        sprite.color,
        sprite.alpha * GLOW_ALPHA_MULT,
    );
    surface.fill_circle(
        Circle {
            center: sprite.pos,
            radius: sprite.radius,
        },
        sprite.color,
        sprite.alpha,
    );
    true
}

/// Paint one frame. Returns the number of sprites actually drawn.
pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    viewport: Viewport,
    scroll_offset: f32,
    vignette_outer: f32,
    sprites: &[Sprite],
) -> usize {
    surface.clear(viewport);
    if viewport.is_empty() {
        return 0;
    }
    surface.fill_radial_gradient(&vignette(viewport, scroll_offset, vignette_outer), viewport);

    surface.begin_additive();
    let mut drawn = 0;
    for sprite in sprites {
        if draw_sprite(surface, sprite) {
            drawn += 1;
        }
    }
    surface.end_additive();
    drawn
}
