// Host-side tests for the shared exponential interpolator.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod interp {
    include!("../src/core/interp.rs");
}

use interp::*;

fn between(x: f32, a: f32, b: f32) -> bool {
    x >= a.min(b) && x <= a.max(b)
}

#[test]
fn step_stays_between_current_and_target() {
    let rates = [0.5_f32, 1.0, 3.0, 10.0];
    let dts = [0.0_f32, 0.001, 1.0 / 60.0, 0.05, 0.1, 0.3];
    let pairs = [(0.0_f32, 1.0_f32), (1.0, 0.0), (0.37, 0.81), (-2.0, 5.0)];
    for &rate in &rates {
        for &dt in &dts {
            if rate * dt > 1.0 {
                continue;
            }
            for &(c, t) in &pairs {
                let next = step(c, t, rate, dt);
                assert!(between(next, c, t), "step({c},{t},{rate},{dt}) = {next}");
            }
        }
    }
}

#[test]
fn step_saturates_to_target_when_rate_dt_exceeds_one() {
    assert_eq!(step(0.0, 1.0, 3.0, 0.5), 1.0);
    assert_eq!(step(0.9, 0.0, 100.0, 1.0), 0.0);
}

#[test]
fn zero_or_negative_dt_is_no_motion() {
    assert_eq!(step(0.25, 1.0, 3.0, 0.0), 0.25);
    assert_eq!(step(0.25, 1.0, 3.0, -0.5), 0.25);
    assert_eq!(blend_factor(3.0, -1.0), 0.0);
}

#[test]
fn repeated_steps_converge_monotonically() {
    let target = 1.0_f32;
    let mut x = 0.0_f32;
    let start_distance = (target - x).abs();
    let mut prev = start_distance;
    for _ in 0..2000 {
        x = step(x, target, 3.0, 1.0 / 60.0);
        let d = (target - x).abs();
        assert!(d <= start_distance);
        // below a few ulps the increment rounds away
        if prev > 1e-5 {
            assert!(d < prev, "distance did not shrink: {prev} -> {d}");
        }
        prev = d;
    }
    assert!(prev < 1e-5);
}

#[test]
fn blend_factor_is_clamped_to_unit_interval() {
    assert!((blend_factor(3.0, 0.1) - 0.3).abs() < 1e-6);
    assert_eq!(blend_factor(3.0, 2.0), 1.0);
    assert_eq!(blend_factor(0.0, 0.1), 0.0);
}
