use std::f64::consts::PI;

use starfield_core::{Circle, RadialGradient, Rgb, Surface, Viewport};
use web_sys as web;

/// [`Surface`] over a 2D canvas context already scaled to CSS pixels.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    pub fn context(&self) -> &web::CanvasRenderingContext2d {
        &self.ctx
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, viewport: Viewport) {
        let (a, b) = (gradient.inner, gradient.outer);
        let Ok(g) = self.ctx.create_radial_gradient(
            a.center.x as f64,
            a.center.y as f64,
            a.radius.max(0.0) as f64,
            b.center.x as f64,
            b.center.y as f64,
            b.radius.max(0.0) as f64,
        ) else {
            return;
        };
        for stop in &gradient.stops {
            _ = g.add_color_stop(stop.offset, &stop.color.to_css_rgba(stop.alpha));
        }
        #[allow(deprecated)]
        self.ctx.set_fill_style(&g);
        self.ctx
            .fill_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn begin_additive(&mut self) {
        self.ctx.save();
        _ = self.ctx.set_global_composite_operation("lighter");
    }

    fn end_additive(&mut self) {
        self.ctx.restore();
    }

    fn fill_circle(&mut self, circle: Circle, color: Rgb, alpha: f32) {
        self.ctx.set_fill_style_str(&color.to_css_rgba(alpha));
        self.ctx.begin_path();
        _ = self.ctx.arc(
            circle.center.x as f64,
            circle.center.y as f64,
            circle.radius.max(0.0) as f64,
            0.0,
            PI * 2.0,
        );
        self.ctx.fill();
    }
}
