// Host-side tests for the input signals and the per-particle force model.

mod common;

use common::approx;
use glam::Vec2;
use starfield_core::*;
use std::f64::consts::FRAC_PI_2;

fn particle_at(pos: Vec2, z: f32) -> Particle {
    Particle {
        pos,
        z,
        radius: 1.0,
        drift: Vec2::ZERO,
        vel: Vec2::ZERO,
        alpha: 0.5,
        color: Rgb::WHITE,
        twinkle_until: None,
    }
}

#[test]
fn pointer_normalization_flips_y() {
    let size = Vec2::new(800.0, 600.0);
    assert_eq!(normalize_pointer(Vec2::new(0.0, 0.0), size), Vec2::new(-1.0, 1.0));
    assert_eq!(normalize_pointer(Vec2::new(800.0, 600.0), size), Vec2::new(1.0, -1.0));
    assert_eq!(normalize_pointer(Vec2::new(400.0, 300.0), size), Vec2::ZERO);
    assert_eq!(normalize_pointer(Vec2::new(10.0, 10.0), Vec2::ZERO), Vec2::ZERO);
}

#[test]
fn smoothing_eases_toward_targets() {
    let mut s = InputSignals::default();
    s.pointer_moved(Vec2::new(800.0, 300.0), Vec2::new(800.0, 600.0), 0.0);
    s.scrolled(100.0, 0.0);
    s.smooth(0.1);
    assert!(approx(s.pointer_smoothed.x, 0.06));
    assert!(approx(s.pointer_smoothed.y, 0.0));
    assert!(approx(s.scroll_offset, 10.0));
    s.smooth(0.1);
    assert!(approx(s.scroll_offset, 19.0));
}

#[test]
fn non_finite_scroll_is_ignored() {
    let mut s = InputSignals::default();
    s.scrolled(40.0, 1.0);
    s.scrolled(f32::NAN, 2.0);
    assert_eq!(s.scroll_target, 40.0);
    assert_eq!(s.last_scroll_ms, 2.0);
}

#[test]
fn no_swirl_before_the_first_pointer_move() {
    let s = InputSignals::default();
    assert_eq!(s.last_pointer_ms, None);
    assert_eq!(s.swirl_activity(0.0), 0.0);
    assert_eq!(s.swirl_activity(400.0), 0.0);
}

#[test]
fn swirl_activity_decays_over_800ms() {
    let mut s = InputSignals::default();
    s.pointer_moved(Vec2::ZERO, Vec2::new(100.0, 100.0), 1000.0);
    assert_eq!(s.swirl_activity(1000.0), 1.0);
    assert!(approx(s.swirl_activity(1400.0), 0.5));
    assert_eq!(s.swirl_activity(1800.0), 0.0);
    assert_eq!(s.swirl_activity(9000.0), 0.0);
}

#[test]
fn idle_factor_ramps_after_delay() {
    let mut s = InputSignals::default();
    s.scrolled(0.0, 1000.0);
    assert_eq!(s.idle_factor(1500.0, 1200.0, 800.0), 0.0);
    assert!(approx(s.idle_factor(2600.0, 1200.0, 800.0), 0.5));
    assert_eq!(s.idle_factor(3000.0, 1200.0, 800.0), 1.0);
    // pointer activity resets the clock too
    s.pointer_moved(Vec2::ZERO, Vec2::ONE, 2900.0);
    assert_eq!(s.idle_factor(3000.0, 1200.0, 800.0), 0.0);
    // zero fade is a step
    assert_eq!(s.idle_factor(4099.0, 1200.0, 0.0), 0.0);
    assert_eq!(s.idle_factor(4100.0, 1200.0, 0.0), 1.0);
}

#[test]
fn swirl_falloff_endpoints() {
    assert_eq!(swirl_falloff(0.0, 200.0, 2.0), 1.0);
    assert_eq!(swirl_falloff(200.0, 200.0, 2.0), 0.0);
    assert_eq!(swirl_falloff(350.0, 200.0, 2.0), 0.0);
    assert!(approx(swirl_falloff(100.0, 200.0, 2.0), 0.25));
}

#[test]
fn swirl_is_zero_outside_radius_and_decreasing_inside() {
    let swirl = Swirl {
        radius: 200.0,
        strength: 0.1,
        falloff: 2.0,
        activity: 1.0,
    };
    assert_eq!(swirl.impulse(Vec2::new(200.0, 0.0), 0.7), Vec2::ZERO);
    assert_eq!(swirl.impulse(Vec2::new(0.0, -260.0), 0.7), Vec2::ZERO);

    let mut last = f32::INFINITY;
    for d in [1.0, 10.0, 50.0, 100.0, 150.0, 199.0] {
        let m = swirl.impulse(Vec2::new(d, 0.0), 0.7).length();
        assert!(m < last, "not decreasing at {}", d);
        assert!(m > 0.0);
        last = m;
    }
}

#[test]
fn swirl_impulse_is_tangential() {
    let swirl = Swirl {
        radius: 200.0,
        strength: 0.1,
        falloff: 2.0,
        activity: 1.0,
    };
    let offset = Vec2::new(30.0, 40.0);
    let impulse = swirl.impulse(offset, 1.0);
    assert!(impulse.dot(offset).abs() < 1e-5);
    // strength * falloff * depth response * activity
    let expected = 0.1 * (1.0f32 - 50.0 / 200.0).powf(2.0) * (0.6 + 0.4);
    assert!(approx(impulse.length(), expected));
}

#[test]
fn swirl_needs_recent_pointer_activity() {
    let swirl = Swirl {
        radius: 200.0,
        strength: 0.1,
        falloff: 2.0,
        activity: 0.005,
    };
    assert!(!swirl.is_active());
    assert_eq!(swirl.impulse(Vec2::new(10.0, 0.0), 1.0), Vec2::ZERO);
    let at_pointer = Swirl {
        activity: 1.0,
        ..swirl
    };
    assert_eq!(at_pointer.impulse(Vec2::ZERO, 1.0), Vec2::ZERO);
}

#[test]
fn integrate_adds_drift_and_damps_velocity() {
    let mut p = particle_at(Vec2::new(10.0, 10.0), 1.0);
    p.drift = Vec2::new(0.2, -0.1);
    p.vel = Vec2::new(1.0, 0.0);
    integrate(&mut p, 0.9);
    assert!(approx(p.pos.x, 11.03));
    assert!(approx(p.pos.y, 9.985));
    assert!(approx(p.vel.x, 0.9));
}

#[test]
fn wrap_reenters_at_the_opposite_edge() {
    assert_eq!(wrap_axis(-81.0, 800.0, 80.0), 880.0);
    assert_eq!(wrap_axis(881.0, 800.0, 80.0), -80.0);
    assert_eq!(wrap_axis(-80.0, 800.0, 80.0), -80.0);
    assert_eq!(wrap_axis(400.0, 800.0, 80.0), 400.0);
    let v = Viewport::new(800.0, 600.0);
    assert_eq!(wrap(Vec2::new(-100.0, 700.0), v, 80.0), Vec2::new(880.0, -80.0));
}

#[test]
fn parallax_offsets() {
    let near = cursor_parallax(Vec2::new(1.0, 1.0), 0.8);
    assert!(approx(near.x, 8.0) && approx(near.y, 6.0));
    assert_eq!(cursor_parallax(Vec2::ZERO, 0.3), Vec2::ZERO);
    assert!(approx(scroll_parallax(100.0, 0.1, 0.4), 10.0));
    // nearer particles move more
    assert!(scroll_parallax(100.0, 0.1, 0.2) > scroll_parallax(100.0, 0.1, 1.2));
}

#[test]
fn rotation_rate_blends_between_active_and_idle() {
    let (active, idle) = (0.000_003, 0.000_010);
    assert!((rotation_rate(active, idle, 0.0) - active as f64).abs() < 1e-12);
    assert!((rotation_rate(active, idle, 1.0) - idle as f64).abs() < 1e-12);
    let mid = rotation_rate(active, idle, 0.5);
    assert!(mid > active as f64 && mid < idle as f64);
}

#[test]
fn rotation_turns_points_about_the_center() {
    let mut rot = Rotation::default();
    assert_eq!(rot.rotor(), Vec2::new(1.0, 0.0));
    rot.advance(FRAC_PI_2 / 100.0, 100.0);
    assert!((rot.angle() - FRAC_PI_2).abs() < 1e-12);
    let p = rotate_about(Vec2::new(110.0, 100.0), Vec2::new(100.0, 100.0), rot.rotor());
    assert!((p - Vec2::new(100.0, 110.0)).length() < 1e-4);
}

#[test]
fn rotation_angle_keeps_growing_past_a_full_turn() {
    let mut rot = Rotation::default();
    for _ in 0..10 {
        rot.advance(1.0, 1.0);
    }
    assert!((rot.angle() - 10.0).abs() < 1e-12);
    let r = rot.rotor();
    assert!(approx(r.x, 10.0f32.cos()) && approx(r.y, 10.0f32.sin()));
}

#[test]
fn force_field_keeps_particles_in_bounds() {
    let params = ParameterSet::default();
    let viewport = Viewport::new(640.0, 480.0);
    let mut signals = InputSignals::default();
    let m = params.edge_margin;
    let mut particles: Vec<Particle> = (0..50)
        .map(|i| {
            let pos = Vec2::new(i as f32 * 12.0, i as f32 * 9.0);
            let mut p = particle_at(pos, 0.2 + i as f32 / 50.0);
            p.drift = Vec2::new(0.3, -0.2);
            p
        })
        .collect();
    let rotation = Rotation::default();
    for frame in 0..2000 {
        let now = frame as f64 * 16.0;
        signals.pointer_moved(Vec2::new(320.0, 240.0), Vec2::new(640.0, 480.0), now);
        signals.smooth(params.scroll_damp);
        let field = ForceField::new(&params, &signals, viewport, &rotation, now);
        for p in &mut particles {
            field.advance(p);
            assert!(p.pos.x >= -m && p.pos.x <= viewport.width + m);
            assert!(p.pos.y >= -m && p.pos.y <= viewport.height + m);
        }
    }
}

#[test]
fn draw_position_includes_parallax_and_rotation_but_persists_neither() {
    let params = ParameterSet::default();
    let viewport = Viewport::new(800.0, 600.0);
    let mut signals = InputSignals::default();
    signals.pointer_smoothed = Vec2::new(1.0, 0.0);
    let mut rotation = Rotation::default();
    rotation.advance(FRAC_PI_2, 1.0);
    let field = ForceField::new(&params, &signals, viewport, &rotation, 0.0);
    let mut p = particle_at(Vec2::new(400.0, 300.0), 0.8);
    let draw = field.advance(&mut p);
    assert_eq!(p.pos, Vec2::new(400.0, 300.0));
    // (8, 0) of parallax, then a quarter turn about the centre
    assert!((draw - Vec2::new(400.0, 308.0)).length() < 1e-3);
}
