use glam::{Vec2, Vec3};

// Shared animation/visual tuning constants for the stage scene.

// Curtain
pub const CURTAIN_RATE: f32 = 3.0; // damping rate of the open/close lerp (1/s)
pub const CURTAIN_BASE_OFFSET: f32 = 2.0; // panel x offset when fully closed
pub const CURTAIN_MAX_TRAVEL: f32 = 25.0; // extra x travel at progress = 1
pub const CURTAIN_OPEN_THRESHOLD: f32 = 0.8; // progress at which the stage counts as open
pub const CURTAIN_PANEL_SIZE: Vec2 = Vec2::new(35.0, 25.0);
pub const CURTAIN_Z: f32 = 1.0;
pub const CURTAIN_COLOR: [f32; 3] = [0.545, 0.0, 0.0]; // theatre red, #8B0000

// Curtain fabric texture
pub const FABRIC_TEXTURE_SIZE: u32 = 512;
pub const FABRIC_REPEAT: Vec2 = Vec2::new(4.0, 8.0);
pub const FABRIC_FOLD_SPACING: u32 = 25;
pub const FABRIC_ACCENT_SPACING: u32 = 50;

// Instrument (whole group)
pub const INSTRUMENT_POSITION: Vec3 = Vec3::new(0.0, 0.0, -2.0);
pub const INSTRUMENT_SCALE: f32 = 2.2;
pub const INSTRUMENT_BASE_ROLL: f32 = -std::f32::consts::FRAC_PI_2; // neck pointing up
pub const INSTRUMENT_WOBBLE_FREQ: f32 = 1.5;
pub const INSTRUMENT_WOBBLE_AMP: f32 = 0.02;

// Instrument string vibration: (frequency rad/s, amplitude)
pub const STRING_POS_X: (f32, f32) = (20.0, 0.005);
pub const STRING_POS_Y: (f32, f32) = (25.0, 0.003);
pub const STRING_ROT_X: (f32, f32) = (15.0, 0.01);
pub const STRING_ROT_Y: (f32, f32) = (18.0, 0.008);

// Hand prop
pub const PROP_SCALE: f32 = 5.0;
pub const PROP_PLAYING_BASE_POSITION: Vec3 = Vec3::new(0.5, -0.5, -0.4);
pub const PROP_PLAYING_BASE_ROTATION: Vec3 = Vec3::new(0.3, 0.4, 0.0);
// per axis (frequency rad/s, amplitude)
pub const PROP_POSITION_WAVES: [(f32, f32); 3] = [(6.0, 0.05), (8.0, 0.4), (4.0, 0.1)];
pub const PROP_ROTATION_WAVES: [(f32, f32); 3] = [(10.0, 0.1), (5.0, 0.1), (8.0, 0.2)];
pub const PROP_PAUSED_POSITION: Vec3 = Vec3::new(0.5, 0.1, -1.2);
pub const PROP_PAUSED_ROTATION: Vec3 = Vec3::new(0.2, 0.3, 0.0);
pub const PROP_BLEND_RATE: f32 = 3.0; // same rate as the curtain

// Note emitter
pub const NOTE_SPAWN_INTERVAL_SEC: f64 = 0.8;
pub const NOTE_BURST_SIZE: usize = 4;
pub const NOTE_LIFETIME_SEC: f64 = 3.0;
pub const NOTE_GRID_CELL: Vec2 = Vec2::new(80.0, 40.0); // px
pub const NOTE_GRID_COLUMNS: usize = 2;
pub const NOTE_JITTER: Vec2 = Vec2::new(15.0, 10.0); // +/- px
pub const NOTE_STAGGER_SEC: f32 = 0.1; // css animation delay per slot
pub const NOTE_CURVE_BASE_SEC: f32 = 3.0;
pub const NOTE_CURVE_EXTRA_SEC: f32 = 1.0; // random extra on top of the base duration
pub const NOTE_OVERLAY_ANCHOR: Vec3 = Vec3::new(1.5, 0.2, -1.0);

// Lights
pub const AMBIENT_INTENSITY: f32 = 0.4;
pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 8.0, 3.0);
pub const KEY_LIGHT_INTENSITY: f32 = 1.5;
pub const SPOT_LIGHT_POSITION: Vec3 = Vec3::new(0.0, 6.0, 3.0);
pub const SPOT_LIGHT_INTENSITY: f32 = 1.2;
pub const SPOT_LIGHT_ANGLE: f32 = 0.8;
pub const SPOT_LIGHT_PENUMBRA: f32 = 0.3;
pub const FILL_LIGHT_POSITION: Vec3 = Vec3::new(-3.0, 3.0, 2.0);
pub const FILL_LIGHT_INTENSITY: f32 = 0.6;
pub const FILL_LIGHT_COLOR: [f32; 3] = [1.0, 0.647, 0.0]; // #FFA500

// Camera
pub const SMALL_SCREEN_MAX_WIDTH: f32 = 480.0;
pub const TABLET_MAX_WIDTH: f32 = 768.0;
pub const LAPTOP_MAX_WIDTH: f32 = 1024.0;
pub const PORTRAIT_ASPECT: f32 = 0.8;
pub const PORTRAIT_EXTRA_Z: f32 = 3.0;
pub const PORTRAIT_EXTRA_FOV_DEG: f32 = 20.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const ORBIT_RADIANS_PER_PX: f32 = 0.005;
pub const ORBIT_ZOOM_PER_WHEEL_UNIT: f32 = 0.01;

// Transport
pub const DEFAULT_TRACK_DURATION_SEC: f64 = 337.0; // 05:37, used until metadata loads
pub const CUE_TIMESTAMPS_SEC: [u32; 6] = [0, 12, 144, 240, 312, 324];
pub const CUE_DISPLAY_SEC: f64 = 3.0;
