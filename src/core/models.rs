use super::scene::{Mesh, ModelLibrary, SceneNode, Transform};
use glam::Vec3;

pub const INSTRUMENT_MODEL_URL: &str = "models/guitar.glb";
pub const PROP_MODEL_URL: &str = "models/sandal.glb";

const WOOD: [f32; 3] = [0.72, 0.42, 0.18];
const WOOD_DARK: [f32; 3] = [0.33, 0.17, 0.07];
const SOUND_HOLE: [f32; 3] = [0.05, 0.03, 0.02];
const STRING_STEEL: [f32; 3] = [0.85, 0.85, 0.8];
const SOLE: [f32; 3] = [0.2, 0.45, 0.75];
const STRAP: [f32; 3] = [0.95, 0.95, 0.95];

const STRING_COUNT: usize = 6;
const STRING_SPACING: f32 = 0.01;

/// Acoustic guitar lying along -x (neck) in model space, strings on +z.
pub fn guitar() -> SceneNode {
    let mut root = SceneNode::group("guitar", Transform::default())
        .with_child(SceneNode::mesh(
            "body",
            Transform::from_translation(Vec3::new(0.3, 0.0, 0.0)),
            Mesh::cuboid(Vec3::new(0.5, 0.42, 0.1), WOOD),
        ))
        .with_child(SceneNode::mesh(
            "sound_hole",
            Transform::from_translation(Vec3::new(0.2, 0.0, 0.051)),
            Mesh::cuboid(Vec3::new(0.1, 0.1, 0.002), SOUND_HOLE),
        ))
        .with_child(SceneNode::mesh(
            "neck",
            Transform::from_translation(Vec3::new(-0.25, 0.0, 0.02)),
            Mesh::cuboid(Vec3::new(0.6, 0.06, 0.04), WOOD_DARK),
        ))
        .with_child(SceneNode::mesh(
            "headstock",
            Transform::from_translation(Vec3::new(-0.61, 0.0, 0.02))
                .with_rotation(Vec3::new(0.0, 0.15, 0.0)),
            Mesh::cuboid(Vec3::new(0.12, 0.08, 0.03), WOOD_DARK),
        ));

    let mut strings = SceneNode::group("strings", Transform::default());
    let half = (STRING_COUNT as f32 - 1.0) * 0.5;
    for i in 0..STRING_COUNT {
        let y = (i as f32 - half) * STRING_SPACING;
        strings.children.push(
            SceneNode::mesh(
                format!("string_{i}"),
                Transform::from_translation(Vec3::new(-0.1, y, 0.055)),
                Mesh::cuboid(Vec3::new(0.9, 0.002, 0.002), STRING_STEEL),
            )
            .tagged_string(),
        );
    }
    root.children.push(strings);
    root
}

/// Flip-flop sole with a strap, roughly 0.1 long in model units.
pub fn sandal() -> SceneNode {
    SceneNode::group("sandal", Transform::default())
        .with_child(SceneNode::mesh(
            "sole",
            Transform::default(),
            Mesh::cuboid(Vec3::new(0.04, 0.012, 0.1), SOLE),
        ))
        .with_child(SceneNode::mesh(
            "strap",
            Transform::from_translation(Vec3::new(0.0, 0.012, 0.015)),
            Mesh::cuboid(Vec3::new(0.042, 0.01, 0.008), STRAP),
        ))
}

/// Library holding both stage models.
pub fn stage_library() -> ModelLibrary {
    let mut lib = ModelLibrary::default();
    lib.register(INSTRUMENT_MODEL_URL, guitar());
    lib.register(PROP_MODEL_URL, sandal());
    lib
}
