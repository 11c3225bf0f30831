// Browser-side constants: element ids, asset URLs and overlay styling.
//
// Scene tuning lives in `core::constants`; everything here only matters to
// the DOM wiring.

// Elements expected in index.html
pub const CANVAS_ID: &str = "stage-canvas";
pub const NOTES_LAYER_ID: &str = "notes-layer";
pub const PLAY_BUTTON_ID: &str = "play-button";
pub const PROGRESS_BAR_ID: &str = "progress-bar";
pub const PROGRESS_FILL_ID: &str = "progress-fill";
pub const TIME_CURRENT_ID: &str = "time-current";
pub const TIME_TOTAL_ID: &str = "time-total";
// Shown and hidden together by the cue track
pub const CUE_IMAGE_IDS: [&str; 2] = ["cue-left", "cue-right"];

pub const AUDIO_URL: &str = "assets/track.mp3";
pub const AUDIO_VOLUME: f64 = 0.7;

pub const PLAY_ICON: &str = "▶";
pub const PAUSE_ICON: &str = "⏸";

// Glyph element offset so the symbol centre sits on the slot position
pub const NOTE_GLYPH_OFFSET_X: f32 = 40.0;
// Note container, centred on the projected anchor
pub const NOTES_LAYER_SIZE_PX: (u32, u32) = (300, 200);
pub const NOTE_FONT: &str = "28px serif";
pub const NOTE_SHADOW: &str = "0 0 8px rgba(255, 255, 255, 0.6)";
