use super::constants::*;
use super::curtain::CurtainMotion;
use super::models::{INSTRUMENT_MODEL_URL, PROP_MODEL_URL};
use super::oscillators::{InstrumentMotion, PropMotion};
use super::params::StageParams;
use super::particles::{EmitterFrame, NoteEmitter};
use super::scene::{DrawItem, Material, Mesh, ModelLibrary, SceneError, SceneNode, Transform};
use glam::{Mat4, Vec3};
use rand::Rng;

/// Per-frame clock sample supplied by the render loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    /// Seconds since the loop started.
    pub elapsed: f64,
    /// Seconds since the previous frame.
    pub dt: f32,
    pub playing: bool,
}

/// What changed during one stage update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StageFrame {
    /// `Some` only on the frame the curtain crossed its open threshold.
    pub curtain_edge: Option<bool>,
    pub curtain_open: bool,
    pub notes: EmitterFrame,
}

/// The whole animated stage: curtain, instrument, hand prop and notes.
///
/// The main group is always mounted behind the curtain so captured rest poses
/// and motion state survive any number of open/close cycles.
pub struct StageScene<R: Rng> {
    curtain: CurtainMotion,
    curtain_panels: [SceneNode; 2],
    instrument_motion: InstrumentMotion,
    instrument: SceneNode,
    prop_motion: PropMotion,
    prop: SceneNode,
    emitter: NoteEmitter<R>,
    curtain_open: bool,
}

impl<R: Rng> StageScene<R> {
    pub fn new(
        params: &StageParams,
        library: &ModelLibrary,
        rng: R,
        playing: bool,
    ) -> Result<Self, SceneError> {
        let mut instrument = SceneNode::group(
            "instrument",
            Transform::from_translation(INSTRUMENT_POSITION)
                .with_rotation(Vec3::new(0.0, 0.0, params.instrument.base_roll))
                .with_scale(Vec3::splat(INSTRUMENT_SCALE)),
        )
        .with_child(library.instantiate(INSTRUMENT_MODEL_URL)?);
        let strings = instrument.capture_rest_poses();
        log::info!("[stage] instrument mounted, {} string parts", strings);

        let prop = SceneNode::group(
            "prop",
            Transform::from_translation(params.prop.paused.position)
                .with_rotation(params.prop.paused.rotation)
                .with_scale(Vec3::splat(PROP_SCALE)),
        )
        .with_child(library.instantiate(PROP_MODEL_URL)?);

        let curtain = CurtainMotion::new(params.curtain, playing);
        let (left_x, right_x) = curtain.panel_offsets();
        Ok(Self {
            curtain_open: curtain.reported_open().unwrap_or(false),
            curtain,
            curtain_panels: [
                curtain_panel("curtain_left", left_x),
                curtain_panel("curtain_right", right_x),
            ],
            instrument_motion: InstrumentMotion::new(params.instrument),
            instrument,
            prop_motion: PropMotion::new(params.prop, playing),
            prop,
            emitter: NoteEmitter::new(params.emitter, rng),
        })
    }

    /// Run every motion component for one frame. The curtain goes first so the
    /// emitter sees the open state of this very frame.
    pub fn update(&mut self, input: FrameInput) -> StageFrame {
        let t = input.elapsed as f32;

        let edge = self.curtain.update(input.playing, input.dt);
        if let Some(open) = edge {
            self.curtain_open = open;
            log::info!("[curtain] fully_open={}", open);
        }
        let (left_x, right_x) = self.curtain.panel_offsets();
        self.curtain_panels[0].transform.translation.x = left_x;
        self.curtain_panels[1].transform.translation.x = right_x;

        if let Some(frame) = self.instrument_motion.update(t, input.playing) {
            self.instrument.transform.rotation.z = frame.roll;
            self.instrument.traverse_mut(&mut |n| {
                if let (true, Some(rest)) = (n.tags.string, n.tags.rest) {
                    n.transform.set_pose(rest.offset_by(frame.string_offset));
                }
            });
        }

        let pose = self.prop_motion.update(t, input.dt, input.playing);
        self.prop.transform.set_pose(pose);

        let notes = self
            .emitter
            .update(input.elapsed, input.playing, self.curtain_open);

        StageFrame {
            curtain_edge: edge,
            curtain_open: self.curtain_open,
            notes,
        }
    }

    /// Flatten the whole stage into world-space draw items.
    pub fn collect_draws(&self, out: &mut Vec<DrawItem>) {
        out.clear();
        for panel in &self.curtain_panels {
            panel.collect_draws(Mat4::IDENTITY, out);
        }
        self.instrument.collect_draws(Mat4::IDENTITY, out);
        self.prop.collect_draws(Mat4::IDENTITY, out);
    }

    pub fn curtain(&self) -> &CurtainMotion {
        &self.curtain
    }

    pub fn curtain_open(&self) -> bool {
        self.curtain_open
    }

    pub fn emitter(&self) -> &NoteEmitter<R> {
        &self.emitter
    }

    pub fn instrument(&self) -> &SceneNode {
        &self.instrument
    }

    pub fn prop(&self) -> &SceneNode {
        &self.prop
    }

    pub fn curtain_panels(&self) -> &[SceneNode; 2] {
        &self.curtain_panels
    }
}

fn curtain_panel(name: &str, x: f32) -> SceneNode {
    SceneNode::mesh(
        name,
        Transform::from_translation(Vec3::new(x, 0.0, CURTAIN_Z)),
        Mesh {
            size: CURTAIN_PANEL_SIZE.extend(0.02),
            material: Material::Fabric(CURTAIN_COLOR),
        },
    )
}
