// Host-side tests for the curtain open/close controller.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod interp {
        include!("../src/core/interp.rs");
    }
    pub mod curtain {
        include!("../src/core/curtain.rs");
    }
}

use crate::core::curtain::*;

const DT: f32 = 1.0 / 60.0;

fn run(c: &mut CurtainMotion, playing: bool, seconds: f32, reports: &mut Vec<bool>) {
    let frames = (seconds / DT).round() as usize;
    for _ in 0..frames {
        if let Some(open) = c.update(playing, DT) {
            reports.push(open);
        }
    }
}

#[test]
fn opening_from_rest_reports_open_exactly_once() {
    let mut c = CurtainMotion::new(CurtainParams::default(), false);
    assert_eq!(c.progress(), 0.0);
    let mut reports = Vec::new();
    run(&mut c, true, 2.0, &mut reports);
    assert!(c.progress() > 0.8, "progress {}", c.progress());
    assert_eq!(reports, vec![true]);
}

#[test]
fn no_report_without_a_threshold_crossing() {
    let mut c = CurtainMotion::new(CurtainParams::default(), false);
    let mut reports = Vec::new();
    run(&mut c, false, 5.0, &mut reports);
    // a short play burst that never reaches 0.8
    run(&mut c, true, 0.2, &mut reports);
    run(&mut c, false, 3.0, &mut reports);
    assert!(c.progress() < 0.8);
    assert!(reports.is_empty(), "unexpected reports {:?}", reports);
}

#[test]
fn reports_alternate_once_per_crossing() {
    let mut c = CurtainMotion::new(CurtainParams::default(), false);
    let mut reports = Vec::new();
    for _ in 0..3 {
        run(&mut c, true, 3.0, &mut reports);
        run(&mut c, false, 3.0, &mut reports);
    }
    assert_eq!(reports, vec![true, false, true, false, true, false]);
    for pair in reports.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn rapid_toggling_keeps_progress_in_unit_interval() {
    let mut c = CurtainMotion::new(CurtainParams::default(), false);
    let pattern = [true, false, true, true, false, true];
    // 6 samples at 1/60 s is 0.1 s of simulated time
    for playing in pattern {
        c.update(playing, DT);
        assert!((0.0..=1.0).contains(&c.progress()));
    }
    // and with large frame gaps
    for playing in pattern {
        c.update(playing, 0.5);
        assert!((0.0..=1.0).contains(&c.progress()));
    }
}

#[test]
fn panel_offsets_are_mirror_symmetric() {
    let params = CurtainParams::default();
    for i in 0..=100 {
        let p = i as f32 / 100.0;
        let (left, right) = panel_offsets(&params, p);
        assert_eq!(left, -right);
        assert!(right >= params.base_offset);
    }
    assert_eq!(panel_offsets(&params, 0.0), (-2.0, 2.0));
    assert_eq!(panel_offsets(&params, 1.0), (-27.0, 27.0));
}

#[test]
fn starting_while_playing_reports_open_on_first_update() {
    let mut c = CurtainMotion::new(CurtainParams::default(), true);
    assert_eq!(c.progress(), 1.0);
    assert!(c.is_open());
    assert_eq!(c.update(true, DT), Some(true));
    assert_eq!(c.update(true, DT), None);
    assert_eq!(c.reported_open(), Some(true));
}

#[test]
fn threshold_is_inclusive() {
    let params = CurtainParams {
        rate: 1.0,
        ..CurtainParams::default()
    };
    let mut c = CurtainMotion::new(params, false);
    // rate * dt = 0.8 lands exactly on the threshold
    assert_eq!(c.update(true, 0.8), Some(true));
    assert!((c.progress() - 0.8).abs() < 1e-6);
}

#[test]
fn target_follows_playing_flag() {
    let mut c = CurtainMotion::new(CurtainParams::default(), false);
    c.update(true, DT);
    assert_eq!(c.target(), 1.0);
    c.update(false, DT);
    assert_eq!(c.target(), 0.0);
}
