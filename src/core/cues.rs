use super::constants::{CUE_DISPLAY_SEC, CUE_TIMESTAMPS_SEC};

/// Image cue shown for a few seconds whenever playback passes one of the
/// hand-authored track timestamps.
#[derive(Clone, Debug, PartialEq)]
pub struct CueTrack {
    timestamps: Vec<u32>,
    display_sec: f64,
    visible_until: Option<f64>,
}

impl Default for CueTrack {
    fn default() -> Self {
        Self::new(CUE_TIMESTAMPS_SEC.to_vec(), CUE_DISPLAY_SEC)
    }
}

impl CueTrack {
    pub fn new(timestamps: Vec<u32>, display_sec: f64) -> Self {
        Self {
            timestamps,
            display_sec,
            visible_until: None,
        }
    }

    /// Feed a playback position (`track_time`) observed at wall time `now`.
    /// Returns true when this observation (re)armed the cue.
    pub fn observe(&mut self, track_time: f64, now: f64) -> bool {
        if !track_time.is_finite() || track_time < 0.0 {
            return false;
        }
        let second = track_time.floor() as u32;
        if !self.timestamps.contains(&second) {
            return false;
        }
        let until = now + self.display_sec;
        self.visible_until = Some(self.visible_until.map_or(until, |u| u.max(until)));
        true
    }

    /// Shown only while armed and while the stage is open.
    pub fn is_visible(&self, now: f64, curtain_open: bool) -> bool {
        curtain_open && self.visible_until.is_some_and(|u| now < u)
    }
}
