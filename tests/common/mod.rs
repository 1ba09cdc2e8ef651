// Shared helpers for the host-side tests.

#![allow(dead_code)]
use rand::RngCore;
use starfield_core::{Circle, RadialGradient, Rgb, Surface, Viewport};

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(Viewport),
    Gradient(RadialGradient),
    BeginAdditive,
    EndAdditive,
    Circle(Circle, Rgb, f32),
}

#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn circles(&self) -> Vec<(Circle, Rgb, f32)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Circle(c, rgb, a) => Some((*c, *rgb, *a)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, viewport: Viewport) {
        self.ops.push(Op::Clear(viewport));
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, _viewport: Viewport) {
        self.ops.push(Op::Gradient(*gradient));
    }

    fn begin_additive(&mut self) {
        self.ops.push(Op::BeginAdditive);
    }

    fn end_additive(&mut self) {
        self.ops.push(Op::EndAdditive);
    }

    fn fill_circle(&mut self, circle: Circle, color: Rgb, alpha: f32) {
        self.ops.push(Op::Circle(circle, color, alpha));
    }
}

/// Rng that always yields the same word, for pinning Bernoulli outcomes.
pub struct FixedRng(pub u64);

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for (i, b) in dest.iter_mut().enumerate() {
            *b = (self.0 >> ((i % 8) * 8)) as u8;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-5 * (1.0 + a.abs().max(b.abs()))
}
