use super::constants::{
    CURTAIN_BASE_OFFSET, CURTAIN_MAX_TRAVEL, CURTAIN_OPEN_THRESHOLD, CURTAIN_RATE,
};
use super::interp;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurtainParams {
    pub rate: f32,
    pub base_offset: f32,
    pub max_travel: f32,
    pub open_threshold: f32,
}

impl Default for CurtainParams {
    fn default() -> Self {
        Self {
            rate: CURTAIN_RATE,
            base_offset: CURTAIN_BASE_OFFSET,
            max_travel: CURTAIN_MAX_TRAVEL,
            open_threshold: CURTAIN_OPEN_THRESHOLD,
        }
    }
}

/// Open/close progress of the two curtain panels.
///
/// `progress` is 0 when closed and 1 when fully retracted. It only ever moves
/// through [`interp::step`], so it stays inside `[0, 1]` and never overshoots
/// its target.
#[derive(Clone, Debug)]
pub struct CurtainMotion {
    params: CurtainParams,
    progress: f32,
    target: f32,
    last_reported_open: Option<bool>,
}

impl CurtainMotion {
    /// Start at rest in the state matching `playing`. The listener is assumed
    /// to believe the stage is closed, so a curtain that starts open reports
    /// `true` on its first update.
    pub fn new(params: CurtainParams, playing: bool) -> Self {
        let seed = target_for(playing);
        Self {
            params,
            progress: seed,
            target: seed,
            last_reported_open: Some(false),
        }
    }

    /// Advance one frame. Returns `Some(open)` only on the frame where the
    /// thresholded open state differs from the last reported one.
    pub fn update(&mut self, playing: bool, dt: f32) -> Option<bool> {
        self.target = target_for(playing);
        self.progress = interp::step(self.progress, self.target, self.params.rate, dt);

        let open = self.is_open();
        if self.last_reported_open == Some(open) {
            return None;
        }
        self.last_reported_open = Some(open);
        Some(open)
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn params(&self) -> &CurtainParams {
        &self.params
    }

    pub fn is_open(&self) -> bool {
        self.progress >= self.params.open_threshold
    }

    /// Last value handed to the listener.
    pub fn reported_open(&self) -> Option<bool> {
        self.last_reported_open
    }

    /// Horizontal offsets of the (left, right) panels at the current progress.
    pub fn panel_offsets(&self) -> (f32, f32) {
        panel_offsets(&self.params, self.progress)
    }
}

#[inline]
fn target_for(playing: bool) -> f32 {
    if playing {
        1.0
    } else {
        0.0
    }
}

/// Mirror-symmetric panel x offsets for a given progress.
#[inline]
pub fn panel_offsets(params: &CurtainParams, progress: f32) -> (f32, f32) {
    let travel = params.base_offset + params.max_travel * progress;
    (-travel, travel)
}
