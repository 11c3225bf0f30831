// Host-side tests for the scene graph, model library and stage composer.

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
    pub mod oscillators {
        include!("../src/core/oscillators.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod params {
        include!("../src/core/params.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod models {
        include!("../src/core/models.rs");
    }
    pub mod stage {
        include!("../src/core/stage.rs");
    }
}

use crate::core::curtain::CurtainParams;
use crate::core::models::*;
use crate::core::oscillators::{string_offset, InstrumentParams, Pose};
use crate::core::params::StageParams;
use crate::core::scene::*;
use crate::core::stage::*;
use glam::{Mat4, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DT: f32 = 1.0 / 60.0;

fn stage(params: &StageParams, playing: bool) -> StageScene<StdRng> {
    StageScene::new(params, &stage_library(), StdRng::seed_from_u64(1), playing)
        .expect("stage models registered")
}

fn input(frame: u32, playing: bool) -> FrameInput {
    FrameInput {
        elapsed: frame as f64 / 60.0,
        dt: DT,
        playing,
    }
}

fn string_poses(node: &SceneNode) -> Vec<(Pose, Option<Pose>)> {
    let mut out = Vec::new();
    node.traverse(&mut |n| {
        if n.tags.string {
            out.push((n.transform.pose(), n.tags.rest));
        }
    });
    out
}

#[test]
fn library_instantiates_independent_shadowed_clones() {
    let lib = stage_library();
    assert!(lib.contains(INSTRUMENT_MODEL_URL));
    assert!(lib.contains(PROP_MODEL_URL));

    let mut a = lib.instantiate(INSTRUMENT_MODEL_URL).expect("guitar");
    let b = lib.instantiate(INSTRUMENT_MODEL_URL).expect("guitar");
    a.transform.translation.x = 5.0;
    assert_eq!(b.transform.translation.x, 0.0);

    a.traverse(&mut |n| {
        if n.mesh.is_some() {
            assert!(n.cast_shadow && n.receive_shadow, "{} not shadowed", n.name);
        }
    });
}

#[test]
fn unknown_model_is_an_error() {
    let lib = ModelLibrary::default();
    match lib.instantiate("models/missing.glb") {
        Err(SceneError::MissingModel(url)) => assert_eq!(url, "models/missing.glb"),
        Ok(_) => panic!("expected MissingModel"),
    }
    let result = StageScene::new(
        &StageParams::default(),
        &lib,
        StdRng::seed_from_u64(0),
        false,
    );
    assert!(result.is_err());
}

#[test]
fn rest_poses_are_captured_for_every_string() {
    let s = stage(&StageParams::default(), false);
    let strings = string_poses(s.instrument());
    assert_eq!(strings.len(), 6);
    for (pose, rest) in strings {
        assert_eq!(Some(pose), rest);
    }
    assert!(s.instrument().find("string_5").is_some());
    assert!(s.instrument().find("body").is_some());
}

#[test]
fn untagged_parts_are_left_alone() {
    let mut s = stage(&StageParams::default(), true);
    let neck_before = s.instrument().find("neck").map(|n| n.transform);
    for i in 1..=30 {
        s.update(input(i, true));
    }
    assert_eq!(s.instrument().find("neck").map(|n| n.transform), neck_before);
}

#[test]
fn string_offsets_do_not_accumulate() {
    let mut s = stage(&StageParams::default(), true);
    let last = 240;
    for i in 1..=last {
        s.update(input(i, true));
    }
    let offset = string_offset(&InstrumentParams::default(), last as f32 / 60.0);
    for (pose, rest) in string_poses(s.instrument()) {
        let rest = rest.expect("rest pose");
        assert_eq!(pose, rest.offset_by(offset));
    }
}

#[test]
fn paused_instrument_keeps_its_last_pose() {
    let mut s = stage(&StageParams::default(), true);
    for i in 1..=10 {
        s.update(input(i, true));
    }
    let frozen = s.instrument().transform;
    let strings = string_poses(s.instrument());
    for i in 11..=100 {
        s.update(input(i, false));
    }
    assert_eq!(s.instrument().transform, frozen);
    assert_eq!(string_poses(s.instrument()), strings);
}

#[test]
fn emitter_sees_curtain_state_of_the_same_frame() {
    let params = StageParams {
        curtain: CurtainParams {
            rate: 1.0,
            ..CurtainParams::default()
        },
        ..StageParams::default()
    };
    let mut s = stage(&params, false);
    let mut opened_at = None;
    for i in 1..=200 {
        let out = s.update(input(i, true));
        if out.curtain_edge == Some(true) {
            opened_at = Some(i);
            assert!(out.curtain_open);
            // elapsed is past the spawn interval, so the burst lands now
            assert_eq!(out.notes.spawned.len(), 4);
            break;
        }
        assert!(out.notes.spawned.is_empty());
    }
    assert!(opened_at.is_some());
}

#[test]
fn no_notes_while_paused_or_closed() {
    let mut s = stage(&StageParams::default(), false);
    for i in 1..=600 {
        let out = s.update(input(i, false));
        assert!(out.notes.spawned.is_empty());
        assert_eq!(out.curtain_edge, None);
        assert!(!out.curtain_open);
    }
    assert!(s.emitter().is_empty());
}

#[test]
fn closing_the_curtain_stops_new_notes() {
    let mut s = stage(&StageParams::default(), false);
    let mut frame = 0;
    for _ in 0..240 {
        frame += 1;
        s.update(input(frame, true));
    }
    assert!(s.curtain_open());
    assert!(!s.emitter().is_empty());

    let mut closed = false;
    for _ in 0..600 {
        frame += 1;
        let out = s.update(input(frame, false));
        if out.curtain_edge == Some(false) {
            closed = true;
        }
        assert!(out.notes.spawned.is_empty());
    }
    assert!(closed);
    // all notes expired three seconds after their spawn
    assert!(s.emitter().is_empty());
}

#[test]
fn curtain_panels_track_progress() {
    let mut s = stage(&StageParams::default(), false);
    let [left, right] = s.curtain_panels();
    assert_eq!(left.transform.translation.x, -2.0);
    assert_eq!(right.transform.translation.x, 2.0);
    for i in 1..=120 {
        s.update(input(i, true));
        let [left, right] = s.curtain_panels();
        assert_eq!(left.transform.translation.x, -right.transform.translation.x);
        let (l, r) = s.curtain().panel_offsets();
        assert_eq!((left.transform.translation.x, right.transform.translation.x), (l, r));
    }
    assert!(s.curtain_panels()[1].transform.translation.x > 20.0);
}

#[test]
fn prop_rests_at_paused_pose() {
    let params = StageParams::default();
    let mut s = stage(&params, false);
    for i in 1..=10 {
        s.update(input(i, false));
    }
    assert_eq!(s.prop().transform.pose(), params.prop.paused);
    assert_eq!(s.prop().transform.scale, Vec3::splat(5.0));
}

#[test]
fn draw_list_covers_panels_and_models() {
    let s = stage(&StageParams::default(), false);
    let mut draws = Vec::new();
    s.collect_draws(&mut draws);
    // 2 panels + guitar (body, hole, neck, headstock, 6 strings) + sandal (sole, strap)
    assert_eq!(draws.len(), 14);
    let fabric = draws
        .iter()
        .filter(|d| matches!(d.material, Material::Fabric(_)))
        .count();
    assert_eq!(fabric, 2);
    assert!(draws
        .iter()
        .filter(|d| matches!(d.material, Material::Solid(_)))
        .all(|d| d.receive_shadow));

    // collecting again replaces rather than appends
    s.collect_draws(&mut draws);
    assert_eq!(draws.len(), 14);
}

#[test]
fn transform_matrix_composes_scale_rotation_translation() {
    let t = Transform::from_translation(Vec3::new(1.0, 2.0, 3.0))
        .with_rotation(Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2))
        .with_scale(Vec3::splat(2.0));
    let p = t.matrix().transform_point3(Vec3::X);
    assert!((p - Vec3::new(1.0, 4.0, 3.0)).length() < 1e-5);

    let child = SceneNode::mesh(
        "child",
        Transform::from_translation(Vec3::X),
        Mesh::cuboid(Vec3::ONE, [1.0, 1.0, 1.0]),
    );
    let parent = SceneNode::group("parent", t).with_child(child);
    let mut out = Vec::new();
    parent.collect_draws(Mat4::IDENTITY, &mut out);
    assert_eq!(out.len(), 1);
    let centre = out[0].world.transform_point3(Vec3::ZERO);
    assert!((centre - Vec3::new(1.0, 4.0, 3.0)).length() < 1e-5);
}
