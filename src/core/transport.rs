use super::constants::DEFAULT_TRACK_DURATION_SEC;

/// Playback state as seen by the scene.
///
/// `Pending` covers the gap between asking the audio element to play and the
/// element confirming it; the scene treats it as not playing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackStatus {
    #[default]
    Stopped,
    Pending,
    Playing,
}

/// What the host must do to the audio element after a toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransportCommand {
    Play,
    Pause,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transport {
    status: PlaybackStatus,
    current_time: f64,
    duration: f64,
}

impl Default for Transport {
    fn default() -> Self {
        Self {
            status: PlaybackStatus::Stopped,
            current_time: 0.0,
            duration: DEFAULT_TRACK_DURATION_SEC,
        }
    }
}

impl Transport {
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// The single signal that drives curtain, instrument, prop and notes.
    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    /// Play/pause button semantics. A pending start counts as "on", so a
    /// second press cancels it.
    pub fn toggle(&mut self) -> TransportCommand {
        match self.status {
            PlaybackStatus::Stopped => {
                self.status = PlaybackStatus::Pending;
                TransportCommand::Play
            }
            PlaybackStatus::Pending | PlaybackStatus::Playing => {
                self.status = PlaybackStatus::Stopped;
                TransportCommand::Pause
            }
        }
    }

    /// The audio element reported that playback actually started.
    pub fn confirm_playing(&mut self) {
        if self.status == PlaybackStatus::Pending {
            self.status = PlaybackStatus::Playing;
        }
    }

    /// The play request was rejected (autoplay policy, decode error, ...).
    pub fn play_failed(&mut self) {
        if self.status == PlaybackStatus::Pending {
            self.status = PlaybackStatus::Stopped;
        }
    }

    /// The audio element paused on its own (e.g. media session controls).
    /// Ignored while a play request is pending: a `pause` event queued by an
    /// earlier toggle can arrive after the next play call.
    pub fn paused_externally(&mut self) {
        if self.status == PlaybackStatus::Playing {
            self.status = PlaybackStatus::Stopped;
        }
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn set_current_time(&mut self, t: f64) {
        if t.is_finite() && t >= 0.0 {
            self.current_time = t;
        }
    }

    /// Ignores the NaN/Infinity an audio element reports before metadata
    /// is known.
    pub fn set_duration(&mut self, d: f64) {
        if d.is_finite() && d > 0.0 {
            self.duration = d;
        }
    }

    /// Seek to a fraction of the track. Returns the new time, or `None` when
    /// the duration is unknown.
    pub fn seek_fraction(&mut self, fraction: f64) -> Option<f64> {
        if self.duration <= 0.0 || fraction.is_nan() {
            return None;
        }
        let t = fraction.clamp(0.0, 1.0) * self.duration;
        self.current_time = t;
        Some(t)
    }

    /// Playback position in `[0, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current_time / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

/// `MM:SS`, both fields floored and zero padded.
pub fn format_time(seconds: f64) -> String {
    let s = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let mins = (s / 60.0).floor() as u64;
    let secs = (s % 60.0).floor() as u64;
    format!("{:02}:{:02}", mins, secs)
}
