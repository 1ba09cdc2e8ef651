// Host-side tests for twinkle scheduling and the pulse curve.

mod common;

use common::{approx, FixedRng};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield_core::*;

fn particles(n: usize) -> Vec<Particle> {
    (0..n)
        .map(|i| Particle {
            pos: Vec2::new(i as f32, 0.0),
            z: 1.0,
            radius: 1.0,
            drift: Vec2::ZERO,
            vel: Vec2::ZERO,
            alpha: 0.5,
            color: Rgb::WHITE,
            twinkle_until: None,
        })
        .collect()
}

#[test]
fn bell_shape() {
    assert!(bell(0.0).abs() < 1e-6);
    assert!(bell(1.0).abs() < 1e-6);
    assert!(approx(bell(0.5), 1.0));
    assert!(bell(0.25) < bell(0.5));
    // clamped outside [0, 1]
    assert!(bell(-3.0).abs() < 1e-6);
    assert!(bell(7.0).abs() < 1e-6);
}

#[test]
fn expected_starts_is_rate_times_count_times_seconds() {
    assert!((expected_starts(1000, 0.08, 16.0) - 1.28).abs() < 1e-6);
    assert_eq!(expected_starts(1000, 0.08, 0.0), 0.0);
    assert_eq!(expected_starts(0, 0.08, 16.0), 0.0);
}

#[test]
fn stochastic_rounding_adds_one_with_the_fractional_probability() {
    // a zero word draws 0.0, which is below any positive fraction
    assert_eq!(round_stochastic(1.28, &mut FixedRng(0)), 2);
    // an all-ones word draws just under 1.0
    assert_eq!(round_stochastic(1.28, &mut FixedRng(u64::MAX)), 1);
    assert_eq!(round_stochastic(3.0, &mut FixedRng(0)), 3);
    assert_eq!(round_stochastic(0.0, &mut FixedRng(0)), 0);
    assert_eq!(round_stochastic(f64::NAN, &mut FixedRng(0)), 0);
}

#[test]
fn stochastic_rounding_has_the_right_mean() {
    let mut rng = StdRng::seed_from_u64(1234);
    let n = 20_000;
    let total: usize = (0..n).map(|_| round_stochastic(0.3, &mut rng)).sum();
    let mean = total as f64 / n as f64;
    assert!((mean - 0.3).abs() < 0.02, "mean {}", mean);
}

#[test]
fn start_twinkles_marks_particles_with_a_deadline() {
    let mut ps = particles(800);
    let mut params = ParameterSet::default();
    params.twinkle_rate = 0.125;
    params.twinkle_ms = 1000.0;
    let mut rng = StdRng::seed_from_u64(8);
    let started = start_twinkles(&mut ps, &params, 5000.0, 40.0, &mut rng);
    assert_eq!(started, 4);
    let marked: Vec<_> = ps.iter().filter_map(|p| p.twinkle_until).collect();
    assert!(!marked.is_empty() && marked.len() <= 4);
    assert!(marked.iter().all(|&t| t == 6000.0));
}

#[test]
fn no_twinkles_without_time_or_particles() {
    let params = ParameterSet::default();
    let mut rng = StdRng::seed_from_u64(8);
    let mut ps = particles(500);
    assert_eq!(start_twinkles(&mut ps, &params, 0.0, 0.0, &mut rng), 0);
    assert!(ps.iter().all(|p| p.twinkle_until.is_none()));
    assert_eq!(start_twinkles(&mut [], &params, 0.0, 50.0, &mut rng), 0);
}

#[test]
fn pulse_peaks_mid_twinkle() {
    let params = ParameterSet::default();
    let now = 10_000.0;
    let half = params.twinkle_ms as f64 / 2.0;

    let mid = Pulse::at(Some(now + half), now, &params);
    assert!(approx(mid.alpha_mul, 1.0 - params.twinkle_depth));
    assert!(approx(mid.size_mul, 1.0 + params.twinkle_size_pulse));

    let start = Pulse::at(Some(now + params.twinkle_ms as f64), now, &params);
    assert!(approx(start.alpha_mul, 1.0));
    assert!(approx(start.size_mul, 1.0));
}

#[test]
fn expired_or_unset_twinkles_do_nothing() {
    let params = ParameterSet::default();
    assert_eq!(Pulse::at(None, 100.0, &params), Pulse::NONE);
    assert_eq!(Pulse::at(Some(100.0), 100.0, &params), Pulse::NONE);
    assert_eq!(Pulse::at(Some(50.0), 100.0, &params), Pulse::NONE);
}
