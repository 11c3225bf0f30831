use super::constants::*;
use fnv::FnvHashMap;
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;

// Absorbs f64 accumulation error in frame-summed clocks (0.1 * 8 != 0.8).
const TIME_EPSILON: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Glyph {
    MusicalNote,
    MultipleNotes,
    EighthNote,
    BeamedEighths,
}

impl Glyph {
    pub const ALL: [Glyph; 4] = [
        Glyph::MusicalNote,
        Glyph::MultipleNotes,
        Glyph::EighthNote,
        Glyph::BeamedEighths,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::MusicalNote => "🎵",
            Glyph::MultipleNotes => "🎶",
            Glyph::EighthNote => "♪",
            Glyph::BeamedEighths => "♫",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoteColor {
    Gold,
    Coral,
    Teal,
    Orange,
    Violet,
}

impl NoteColor {
    pub const ALL: [NoteColor; 5] = [
        NoteColor::Gold,
        NoteColor::Coral,
        NoteColor::Teal,
        NoteColor::Orange,
        NoteColor::Violet,
    ];

    pub fn css(self) -> &'static str {
        match self {
            NoteColor::Gold => "#FFD700",
            NoteColor::Coral => "#FF6B6B",
            NoteColor::Teal => "#4ECDC4",
            NoteColor::Orange => "#FF9F43",
            NoteColor::Violet => "#9B59B6",
        }
    }
}

/// One keyframe of a motion curve. `at` is the fraction of the animation
/// duration, translation is in CSS pixels (negative y floats upwards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframe {
    pub at: f32,
    pub translate: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

const fn kf(at: f32, x: f32, y: f32, scale: f32, opacity: f32) -> Keyframe {
    Keyframe {
        at,
        translate: Vec2::new(x, y),
        scale,
        opacity,
    }
}

const DRIFT: [Keyframe; 3] = [
    kf(0.0, 0.0, 0.0, 1.0, 1.0),
    kf(0.5, 20.0, -75.0, 0.8, 0.8),
    kf(1.0, -10.0, -150.0, 0.5, 0.0),
];

const SWAY: [Keyframe; 4] = [
    kf(0.0, 0.0, 0.0, 1.0, 1.0),
    kf(0.33, -25.0, -50.0, 1.1, 0.9),
    kf(0.66, 15.0, -100.0, 0.7, 0.6),
    kf(1.0, 5.0, -150.0, 0.4, 0.0),
];

const FLUTTER: [Keyframe; 4] = [
    kf(0.0, 0.0, 0.0, 1.0, 1.0),
    kf(0.25, 30.0, -40.0, 0.9, 1.0),
    kf(0.75, -20.0, -110.0, 0.6, 0.7),
    kf(1.0, 25.0, -150.0, 0.3, 0.0),
];

/// Canned float-away paths shared by every note in a burst.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionCurve {
    Drift,
    Sway,
    Flutter,
}

impl MotionCurve {
    pub const ALL: [MotionCurve; 3] = [MotionCurve::Drift, MotionCurve::Sway, MotionCurve::Flutter];

    pub fn id(self) -> u8 {
        match self {
            MotionCurve::Drift => 0,
            MotionCurve::Sway => 1,
            MotionCurve::Flutter => 2,
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    pub fn keyframes(self) -> &'static [Keyframe] {
        match self {
            MotionCurve::Drift => &DRIFT,
            MotionCurve::Sway => &SWAY,
            MotionCurve::Flutter => &FLUTTER,
        }
    }

    pub fn css_name(self) -> String {
        format!("note-float-{}", self.id())
    }

    /// `@keyframes` rule for this curve.
    pub fn css_keyframes(self) -> String {
        let mut css = format!("@keyframes {} {{", self.css_name());
        for k in self.keyframes() {
            css.push_str(&format!(
                " {}% {{ transform: translateY({}px) translateX({}px) scale({}); opacity: {}; }}",
                (k.at * 100.0).round(),
                k.translate.y,
                k.translate.x,
                k.scale,
                k.opacity
            ));
        }
        css.push_str(" }");
        css
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub glyph: Glyph,
    pub color: NoteColor,
    /// Grid cell position plus jitter, in overlay pixels.
    pub position: Vec2,
    pub curve: MotionCurve,
    /// Index within its burst.
    pub slot: usize,
    pub spawned_at: f64,
    /// Length of the float animation. May outlast the particle's lifetime.
    pub curve_duration_sec: f32,
    pub curve_delay_sec: f32,
}

impl Particle {
    #[inline]
    pub fn age(&self, now: f64) -> f64 {
        now - self.spawned_at
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmitterParams {
    pub interval_sec: f64,
    pub burst_size: usize,
    pub lifetime_sec: f64,
    pub cell: Vec2,
    pub columns: usize,
    pub jitter: Vec2,
    pub stagger_sec: f32,
    pub curve_base_sec: f32,
    pub curve_extra_sec: f32,
}

impl Default for EmitterParams {
    fn default() -> Self {
        Self {
            interval_sec: NOTE_SPAWN_INTERVAL_SEC,
            burst_size: NOTE_BURST_SIZE,
            lifetime_sec: NOTE_LIFETIME_SEC,
            cell: NOTE_GRID_CELL,
            columns: NOTE_GRID_COLUMNS,
            jitter: NOTE_JITTER,
            stagger_sec: NOTE_STAGGER_SEC,
            curve_base_sec: NOTE_CURVE_BASE_SEC,
            curve_extra_sec: NOTE_CURVE_EXTRA_SEC,
        }
    }
}

/// Pool changes produced by one emitter update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmitterFrame {
    pub spawned: SmallVec<[ParticleId; NOTE_BURST_SIZE]>,
    pub expired: SmallVec<[ParticleId; 8]>,
}

impl EmitterFrame {
    pub fn is_empty(&self) -> bool {
        self.spawned.is_empty() && self.expired.is_empty()
    }
}

/// Timer-gated note spawner backed by an id-keyed particle pool.
///
/// Expiry is a sweep over the pool on every update, independent of the gate:
/// a particle always disappears `lifetime_sec` after it was spawned, even if
/// playback stopped or the curtain closed in between.
pub struct NoteEmitter<R: Rng = StdRng> {
    params: EmitterParams,
    rng: R,
    last_spawn: f64,
    next_id: u64,
    pool: FnvHashMap<ParticleId, Particle>,
}

impl NoteEmitter<StdRng> {
    pub fn seeded(params: EmitterParams, seed: u64) -> Self {
        Self::new(params, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> NoteEmitter<R> {
    pub fn new(params: EmitterParams, rng: R) -> Self {
        Self {
            params,
            rng,
            last_spawn: 0.0,
            next_id: 0,
            pool: FnvHashMap::default(),
        }
    }

    /// Advance to elapsed time `now` (seconds). Spawns at most one burst.
    pub fn update(&mut self, now: f64, playing: bool, curtain_open: bool) -> EmitterFrame {
        let mut frame = EmitterFrame::default();
        self.sweep(now, &mut frame);

        if playing && curtain_open && now - self.last_spawn + TIME_EPSILON >= self.params.interval_sec
        {
            self.spawn_burst(now, &mut frame);
            self.last_spawn = now;
        }
        frame
    }

    fn sweep(&mut self, now: f64, frame: &mut EmitterFrame) {
        let lifetime = self.params.lifetime_sec;
        let mut expired: SmallVec<[ParticleId; 8]> = self
            .pool
            .values()
            .filter(|p| p.age(now) + TIME_EPSILON >= lifetime)
            .map(|p| p.id)
            .collect();
        expired.sort_unstable();
        for id in &expired {
            self.pool.remove(id);
        }
        frame.expired = expired;
    }

    fn spawn_burst(&mut self, now: f64, frame: &mut EmitterFrame) {
        let p = self.params;
        let curve = MotionCurve::ALL[self.rng.gen_range(0..MotionCurve::ALL.len())];
        let columns = p.columns.max(1);
        for slot in 0..p.burst_size {
            let cell = Vec2::new((slot % columns) as f32, (slot / columns) as f32) * p.cell;
            let jitter = Vec2::new(
                symmetric(&mut self.rng, p.jitter.x),
                symmetric(&mut self.rng, p.jitter.y),
            );
            let glyph = Glyph::ALL[self.rng.gen_range(0..Glyph::ALL.len())];
            let color = NoteColor::ALL[self.rng.gen_range(0..NoteColor::ALL.len())];
            let extra = self.rng.gen::<f32>() * p.curve_extra_sec;
            let id = ParticleId(self.next_id);
            self.next_id += 1;
            self.pool.insert(
                id,
                Particle {
                    id,
                    glyph,
                    color,
                    position: cell + jitter,
                    curve,
                    slot,
                    spawned_at: now,
                    curve_duration_sec: p.curve_base_sec + extra,
                    curve_delay_sec: slot as f32 * p.stagger_sec,
                },
            );
            frame.spawned.push(id);
        }
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.pool.get(&id)
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    pub fn params(&self) -> &EmitterParams {
        &self.params
    }
}

#[inline]
fn symmetric<R: Rng>(rng: &mut R, half_width: f32) -> f32 {
    if half_width > 0.0 {
        rng.gen_range(-half_width..half_width)
    } else {
        0.0
    }
}
