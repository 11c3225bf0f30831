use super::constants::*;
use super::interp;
use glam::Vec3;

/// Position plus XYZ euler rotation of an animated part.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Pose {
    pub const fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    /// Rest pose plus an additive offset. Offsets never accumulate.
    #[inline]
    pub fn offset_by(self, offset: TransformOffset) -> Self {
        Self {
            position: self.position + offset.position_delta,
            rotation: self.rotation + offset.rotation_delta,
        }
    }
}

/// Per-frame additive perturbation, recomputed from elapsed time every frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformOffset {
    pub position_delta: Vec3,
    pub rotation_delta: Vec3,
}

const WEIGHT_SETTLE_EPSILON: f32 = 1e-4;

#[inline]
fn wave(t: f32, (freq, amp): (f32, f32)) -> f32 {
    (t * freq).sin() * amp
}

// ---------------- Instrument ----------------

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstrumentParams {
    pub base_roll: f32,
    pub wobble_freq: f32,
    pub wobble_amp: f32,
    pub string_pos_x: (f32, f32),
    pub string_pos_y: (f32, f32),
    pub string_rot_x: (f32, f32),
    pub string_rot_y: (f32, f32),
}

impl Default for InstrumentParams {
    fn default() -> Self {
        Self {
            base_roll: INSTRUMENT_BASE_ROLL,
            wobble_freq: INSTRUMENT_WOBBLE_FREQ,
            wobble_amp: INSTRUMENT_WOBBLE_AMP,
            string_pos_x: STRING_POS_X,
            string_pos_y: STRING_POS_Y,
            string_rot_x: STRING_ROT_X,
            string_rot_y: STRING_ROT_Y,
        }
    }
}

/// What the instrument should look like this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstrumentFrame {
    /// Z rotation of the whole instrument group.
    pub roll: f32,
    /// Offset added to each string's rest pose.
    pub string_offset: TransformOffset,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct InstrumentMotion {
    params: InstrumentParams,
}

impl InstrumentMotion {
    pub fn new(params: InstrumentParams) -> Self {
        Self { params }
    }

    /// Only animates while playing; when paused the last applied pose is left
    /// untouched.
    pub fn update(&self, t: f32, playing: bool) -> Option<InstrumentFrame> {
        playing.then(|| InstrumentFrame {
            roll: instrument_roll(&self.params, t),
            string_offset: string_offset(&self.params, t),
        })
    }
}

#[inline]
pub fn instrument_roll(p: &InstrumentParams, t: f32) -> f32 {
    p.base_roll + wave(t, (p.wobble_freq, p.wobble_amp))
}

#[inline]
pub fn string_offset(p: &InstrumentParams, t: f32) -> TransformOffset {
    TransformOffset {
        position_delta: Vec3::new(wave(t, p.string_pos_x), wave(t, p.string_pos_y), 0.0),
        rotation_delta: Vec3::new(wave(t, p.string_rot_x), wave(t, p.string_rot_y), 0.0),
    }
}

// ---------------- Hand prop ----------------

/// How the prop moves between the playing and paused regimes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PoseTransition {
    /// Jump straight to the regime's pose.
    Snap,
    /// Blend between regimes with a weight driven by [`interp::step`].
    Smooth { rate: f32 },
}

impl Default for PoseTransition {
    fn default() -> Self {
        Self::Smooth {
            rate: PROP_BLEND_RATE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropParams {
    pub playing_base: Pose,
    pub position_waves: [(f32, f32); 3],
    pub rotation_waves: [(f32, f32); 3],
    pub paused: Pose,
    pub transition: PoseTransition,
}

impl Default for PropParams {
    fn default() -> Self {
        Self {
            playing_base: Pose::new(PROP_PLAYING_BASE_POSITION, PROP_PLAYING_BASE_ROTATION),
            position_waves: PROP_POSITION_WAVES,
            rotation_waves: PROP_ROTATION_WAVES,
            paused: Pose::new(PROP_PAUSED_POSITION, PROP_PAUSED_ROTATION),
            transition: PoseTransition::default(),
        }
    }
}

/// Strumming pose at time `t`.
pub fn prop_playing_pose(p: &PropParams, t: f32) -> Pose {
    let pw = &p.position_waves;
    let rw = &p.rotation_waves;
    p.playing_base.offset_by(TransformOffset {
        position_delta: Vec3::new(wave(t, pw[0]), wave(t, pw[1]), wave(t, pw[2])),
        rotation_delta: Vec3::new(wave(t, rw[0]), wave(t, rw[1]), wave(t, rw[2])),
    })
}

/// Hand prop driver.
///
/// With [`PoseTransition::Smooth`] a regime weight (0 = paused, 1 = playing)
/// moves through [`interp::step`] and the displayed pose is the weighted mix of
/// the paused pose and the live strumming pose, so the oscillation keeps its
/// full amplitude once the weight has settled.
#[derive(Clone, Debug)]
pub struct PropMotion {
    params: PropParams,
    weight: f32,
}

impl PropMotion {
    pub fn new(params: PropParams, playing: bool) -> Self {
        Self {
            params,
            weight: if playing { 1.0 } else { 0.0 },
        }
    }

    pub fn update(&mut self, t: f32, dt: f32, playing: bool) -> Pose {
        let target = if playing { 1.0 } else { 0.0 };
        self.weight = match self.params.transition {
            PoseTransition::Snap => target,
            PoseTransition::Smooth { rate } => {
                let w = interp::step(self.weight, target, rate, dt);
                // settle instead of creeping through denormals
                if (w - target).abs() < WEIGHT_SETTLE_EPSILON {
                    target
                } else {
                    w
                }
            }
        };
        if self.weight <= 0.0 {
            return self.params.paused;
        }
        let live = prop_playing_pose(&self.params, t);
        if self.weight >= 1.0 {
            return live;
        }
        let rest = self.params.paused;
        Pose {
            position: rest.position.lerp(live.position, self.weight),
            rotation: rest.rotation.lerp(live.rotation, self.weight),
        }
    }

    /// Regime weight, 0 = paused pose, 1 = strumming.
    pub fn weight(&self) -> f32 {
        self.weight
    }
}
