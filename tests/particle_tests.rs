// Host-side tests for the note emitter and its particle pool.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use crate::core::particles::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn emitter() -> NoteEmitter {
    NoteEmitter::seeded(EmitterParams::default(), 7)
}

#[test]
fn closed_gate_spawns_nothing() {
    for (playing, open) in [(false, false), (false, true), (true, false)] {
        let mut e = emitter();
        let mut now = 0.0;
        for _ in 0..600 {
            now += 1.0 / 60.0;
            let frame = e.update(now, playing, open);
            assert!(frame.spawned.is_empty());
        }
        assert!(e.is_empty());
    }
}

#[test]
fn one_burst_after_exactly_one_interval() {
    let mut e = emitter();
    let frame = e.update(0.8, true, true);
    assert_eq!(frame.spawned.len(), 4);
    assert_eq!(e.len(), 4);

    let curves: Vec<MotionCurve> = frame
        .spawned
        .iter()
        .map(|id| e.get(*id).expect("spawned particle").curve)
        .collect();
    assert!(curves.iter().all(|c| *c == curves[0]));
    assert!(curves[0].id() <= 2);
    assert_eq!(MotionCurve::from_id(curves[0].id()), Some(curves[0]));
}

#[test]
fn nothing_spawns_before_the_interval() {
    let mut e = emitter();
    assert!(e.update(0.5, true, true).spawned.is_empty());
    assert!(e.update(0.79, true, true).spawned.is_empty());
    assert_eq!(e.update(0.8, true, true).spawned.len(), 4);
    assert!(e.update(1.2, true, true).spawned.is_empty());
}

#[test]
fn frame_summed_clock_hits_interval_boundary() {
    // 0.1 summed eight times is slightly below 0.8 in f64
    let mut e = emitter();
    let mut now = 0.0_f64;
    let mut spawned_at = None;
    for i in 1..=8 {
        now += 0.1;
        if !e.update(now, true, true).spawned.is_empty() {
            spawned_at = Some(i);
        }
    }
    assert_eq!(spawned_at, Some(8));
}

#[test]
fn bursts_are_four_and_spaced_by_interval_for_any_frame_sequence() {
    let mut jitter = StdRng::seed_from_u64(99);
    for _ in 0..20 {
        let mut e = emitter();
        let mut now = 0.0_f64;
        let mut bursts = Vec::new();
        while now < 20.0 {
            now += jitter.gen_range(0.001..0.25);
            let frame = e.update(now, true, true);
            if !frame.spawned.is_empty() {
                assert_eq!(frame.spawned.len(), 4);
                bursts.push(now);
            }
        }
        for pair in bursts.windows(2) {
            assert!(pair[1] - pair[0] >= 0.8 - 1e-6);
            // the next frame after the interval always fires
            assert!(pair[1] - pair[0] < 0.8 + 0.25);
        }
        assert!(bursts.len() >= 18 && bursts.len() <= 25, "{} bursts", bursts.len());
    }
}

#[test]
fn particles_expire_three_seconds_after_spawn() {
    let mut e = emitter();
    let mut now = 0.0_f64;
    let mut first_burst = Vec::new();
    let mut removed_at = None;
    for _ in 0..60 {
        now += 0.1;
        let frame = e.update(now, true, true);
        if first_burst.is_empty() && !frame.spawned.is_empty() {
            first_burst = frame.spawned.to_vec();
        }
        if removed_at.is_none() && frame.expired.iter().any(|id| first_burst.contains(id)) {
            assert_eq!(frame.expired.len(), 4);
            removed_at = Some(now);
        }
    }
    let removed_at = removed_at.expect("first burst expired");
    assert!((removed_at - 3.8).abs() < 1e-6, "removed at {removed_at}");
}

#[test]
fn expiry_ignores_later_gate_changes() {
    let mut e = emitter();
    let spawned = e.update(0.8, true, true).spawned;
    assert_eq!(spawned.len(), 4);
    // playback stops and the curtain closes right away
    assert!(e.update(1.0, false, false).expired.is_empty());
    assert!(e.update(3.79, false, false).expired.is_empty());
    assert_eq!(e.len(), 4);
    let frame = e.update(3.8, false, false);
    assert_eq!(frame.expired.as_slice(), spawned.as_slice());
    assert!(e.is_empty());
}

#[test]
fn burst_layout_follows_grid_with_jitter() {
    let mut e = emitter();
    let params = *e.params();
    let frame = e.update(0.8, true, true);
    for (slot, id) in frame.spawned.iter().enumerate() {
        let p = e.get(*id).expect("particle");
        assert_eq!(p.slot, slot);
        let cell_x = (slot % 2) as f32 * 80.0;
        let cell_y = (slot / 2) as f32 * 40.0;
        assert!((p.position.x - cell_x).abs() <= params.jitter.x);
        assert!((p.position.y - cell_y).abs() <= params.jitter.y);
        assert!((p.curve_delay_sec - slot as f32 * 0.1).abs() < 1e-6);
        assert!(p.curve_duration_sec >= 3.0 && p.curve_duration_sec < 4.0);
        assert_eq!(p.spawned_at, 0.8);
    }
}

#[test]
fn same_seed_gives_same_notes() {
    let mut a = emitter();
    let mut b = emitter();
    for i in 1..=10 {
        let now = i as f64 * 0.8;
        let fa = a.update(now, true, true);
        let fb = b.update(now, true, true);
        assert_eq!(fa, fb);
        for id in &fa.spawned {
            assert_eq!(a.get(*id), b.get(*id));
        }
    }
}

#[test]
fn ids_are_unique_and_increasing() {
    let mut e = emitter();
    let mut last = None;
    for i in 1..=5 {
        for id in e.update(i as f64 * 0.8, true, true).spawned {
            if let Some(prev) = last {
                assert!(id > prev);
            }
            last = Some(id);
        }
    }
}

#[test]
fn css_keyframes_name_each_curve() {
    for curve in MotionCurve::ALL {
        let css = curve.css_keyframes();
        assert!(css.starts_with(&format!("@keyframes note-float-{}", curve.id())));
        assert!(css.contains("0%"));
        assert!(css.contains("100%"));
        assert_eq!(curve.keyframes().first().map(|k| k.opacity), Some(1.0));
        assert_eq!(curve.keyframes().last().map(|k| k.opacity), Some(0.0));
    }
}

#[test]
fn palette_and_glyphs_are_distinct() {
    let colors: Vec<&str> = NoteColor::ALL.iter().map(|c| c.css()).collect();
    for (i, c) in colors.iter().enumerate() {
        assert!(c.starts_with('#') && c.len() == 7);
        assert!(!colors[i + 1..].contains(c));
    }
    let glyphs: Vec<&str> = Glyph::ALL.iter().map(|g| g.symbol()).collect();
    assert_eq!(glyphs.len(), 4);
    for (i, g) in glyphs.iter().enumerate() {
        assert!(!glyphs[i + 1..].contains(g));
    }
}
