use super::oscillators::Pose;
use fnv::FnvHashMap;
use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("no model registered for {0}")]
    MissingModel(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    /// XYZ euler angles in radians.
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Default::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        let q = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, q, self.translation)
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.translation, self.rotation)
    }

    pub fn set_pose(&mut self, pose: Pose) {
        self.translation = pose.position;
        self.rotation = pose.rotation;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    Solid([f32; 3]),
    /// Tinted by the procedural curtain fabric texture.
    Fabric([f32; 3]),
}

/// Axis-aligned unit-cube based geometry. Planes are cubes with a thin z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mesh {
    pub size: Vec3,
    pub material: Material,
}

impl Mesh {
    pub fn cuboid(size: Vec3, color: [f32; 3]) -> Self {
        Self {
            size,
            material: Material::Solid(color),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeTags {
    /// Part of the instrument that vibrates while playing.
    pub string: bool,
    /// Pose captured at mount, reference for additive offsets.
    pub rest: Option<Pose>,
}

#[derive(Clone, Debug, Default)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    pub mesh: Option<Mesh>,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub tags: NodeTags,
    pub children: Vec<SceneNode>,
}

/// One flattened mesh ready for the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawItem {
    pub world: Mat4,
    pub material: Material,
    pub receive_shadow: bool,
}

impl SceneNode {
    pub fn group(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            transform,
            ..Default::default()
        }
    }

    pub fn mesh(name: impl Into<String>, transform: Transform, mesh: Mesh) -> Self {
        Self {
            name: name.into(),
            transform,
            mesh: Some(mesh),
            ..Default::default()
        }
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn tagged_string(mut self) -> Self {
        self.tags.string = true;
        self
    }

    pub fn traverse(&self, f: &mut impl FnMut(&SceneNode)) {
        f(self);
        for c in &self.children {
            c.traverse(f);
        }
    }

    pub fn traverse_mut(&mut self, f: &mut impl FnMut(&mut SceneNode)) {
        f(self);
        for c in &mut self.children {
            c.traverse_mut(f);
        }
    }

    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(name))
    }

    /// Mark every mesh in the subtree as casting and receiving shadows.
    pub fn enable_shadows(&mut self) {
        self.traverse_mut(&mut |n| {
            if n.mesh.is_some() {
                n.cast_shadow = true;
                n.receive_shadow = true;
            }
        });
    }

    /// Snapshot the current pose of every string-tagged node. Returns how many
    /// rest poses were captured.
    pub fn capture_rest_poses(&mut self) -> usize {
        let mut captured = 0;
        self.traverse_mut(&mut |n| {
            if n.tags.string {
                n.tags.rest = Some(n.transform.pose());
                captured += 1;
            }
        });
        captured
    }

    /// Append world-space draw items for this subtree.
    pub fn collect_draws(&self, parent: Mat4, out: &mut Vec<DrawItem>) {
        let world = parent * self.transform.matrix();
        if let Some(mesh) = &self.mesh {
            out.push(DrawItem {
                world: world * Mat4::from_scale(mesh.size),
                material: mesh.material,
                receive_shadow: self.receive_shadow,
            });
        }
        for c in &self.children {
            c.collect_draws(world, out);
        }
    }
}

/// URL-keyed model prototypes. Every instantiation is an independent clone.
#[derive(Default)]
pub struct ModelLibrary {
    prototypes: FnvHashMap<String, SceneNode>,
}

impl ModelLibrary {
    pub fn register(&mut self, url: impl Into<String>, prototype: SceneNode) {
        self.prototypes.insert(url.into(), prototype);
    }

    pub fn contains(&self, url: &str) -> bool {
        self.prototypes.contains_key(url)
    }

    pub fn instantiate(&self, url: &str) -> Result<SceneNode, SceneError> {
        let mut node = self
            .prototypes
            .get(url)
            .cloned()
            .ok_or_else(|| SceneError::MissingModel(url.to_string()))?;
        node.enable_shadows();
        Ok(node)
    }
}
