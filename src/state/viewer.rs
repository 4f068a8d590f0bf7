//! Fullscreen interior viewer: state, stepping arithmetic and input gating

use crate::catalog::ProjectId;
use std::time::{Duration, Instant};

/// Default cooldown between wheel or drag steps
pub const DEFAULT_STEP_COOLDOWN: Duration = Duration::from_millis(300);

/// Default minimum vertical drag distance (pixels) for a step
pub const DEFAULT_DRAG_THRESHOLD: f32 = 24.0;

/// Stepping direction through an interior list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn offset(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Whether the fullscreen viewer is showing, and for which project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewerState {
    #[default]
    Closed,
    Open { project: ProjectId },
}

impl ViewerState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    pub fn project(&self) -> Option<ProjectId> {
        match self {
            Self::Open { project } => Some(*project),
            Self::Closed => None,
        }
    }
}

/// Next position when stepping through a list of `len` entries.
///
/// `current` of `None` behaves as index -1, so forward lands on 0 and
/// backward lands on `len - 1`. Returns `None` for an empty list.
pub fn next_index(current: Option<usize>, direction: Direction, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let len = len as isize;
    let current = current.map(|i| i as isize).unwrap_or(-1);
    Some(((current + direction.offset() + len).rem_euclid(len)) as usize)
}

/// Fixed cooldown window between accepted inputs
#[derive(Debug, Clone)]
pub struct InputCooldown {
    window: Duration,
    last_fired: Option<Instant>,
}

impl InputCooldown {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired: None,
        }
    }

    /// Accept the input if the window has passed since the last accepted one
    pub fn try_fire(&mut self, now: Instant) -> bool {
        let ready = self
            .last_fired
            .map_or(true, |last| now.saturating_duration_since(last) >= self.window);
        if ready {
            self.last_fired = Some(now);
        }
        ready
    }

    pub fn reset(&mut self) {
        self.last_fired = None;
    }
}

/// Tracks a vertical drag gesture
#[derive(Debug, Clone)]
pub struct DragTracker {
    origin: Option<f32>,
    threshold: f32,
}

impl DragTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            origin: None,
            threshold,
        }
    }

    pub fn begin(&mut self, y: f32) {
        self.origin = Some(y);
    }

    /// Direction implied by moving to `y`, once past the threshold.
    /// Dragging upward steps forward.
    pub fn pending(&self, y: f32) -> Option<Direction> {
        let origin = self.origin?;
        let travelled = origin - y;
        if travelled >= self.threshold {
            Some(Direction::Forward)
        } else if travelled <= -self.threshold {
            Some(Direction::Backward)
        } else {
            None
        }
    }

    /// Restart measurement from `y` after a step fired
    pub fn rebase(&mut self, y: f32) {
        if self.origin.is_some() {
            self.origin = Some(y);
        }
    }

    pub fn end(&mut self) {
        self.origin = None;
    }
}

/// Tuning for viewer input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerInputConfig {
    pub cooldown: Duration,
    pub drag_threshold: f32,
}

impl Default for ViewerInputConfig {
    fn default() -> Self {
        Self {
            cooldown: DEFAULT_STEP_COOLDOWN,
            drag_threshold: DEFAULT_DRAG_THRESHOLD,
        }
    }
}

/// Turns raw wheel and drag input into gated step directions
#[derive(Debug, Clone)]
pub struct ViewerInput {
    wheel: InputCooldown,
    drag_cooldown: InputCooldown,
    drag: DragTracker,
}

impl ViewerInput {
    pub fn new(config: ViewerInputConfig) -> Self {
        Self {
            wheel: InputCooldown::new(config.cooldown),
            drag_cooldown: InputCooldown::new(config.cooldown),
            drag: DragTracker::new(config.drag_threshold),
        }
    }

    /// Positive delta steps forward, negative backward, zero is ignored
    pub fn wheel(&mut self, delta: f32, now: Instant) -> Option<Direction> {
        let direction = if delta > 0.0 {
            Direction::Forward
        } else if delta < 0.0 {
            Direction::Backward
        } else {
            return None;
        };
        self.wheel.try_fire(now).then_some(direction)
    }

    pub fn drag_start(&mut self, y: f32) {
        self.drag.begin(y);
    }

    pub fn drag_move(&mut self, y: f32, now: Instant) -> Option<Direction> {
        let direction = self.drag.pending(y)?;
        if self.drag_cooldown.try_fire(now) {
            self.drag.rebase(y);
            Some(direction)
        } else {
            None
        }
    }

    pub fn drag_end(&mut self) {
        self.drag.end();
    }

    /// Forget gesture state; used when the viewer closes
    pub fn reset(&mut self) {
        self.wheel.reset();
        self.drag_cooldown.reset();
        self.drag.end();
    }
}

impl Default for ViewerInput {
    fn default() -> Self {
        Self::new(ViewerInputConfig::default())
    }
}
