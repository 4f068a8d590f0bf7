//! Fade transition between views

use super::app_state::View;
use std::time::{Duration, Instant};

/// Fade duration before the target view is swapped in
pub const FADE_DURATION: Duration = Duration::from_millis(400);

/// A pending navigation waiting for its fade to finish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTransition {
    pub target: View,
    pub started: Instant,
}

impl NavTransition {
    pub fn new(target: View, now: Instant) -> Self {
        Self {
            target,
            started: now,
        }
    }

    /// Fade progress, 0.0 to 1.0
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32()).min(1.0)
    }

    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= FADE_DURATION
    }
}
