//! Gallery carousel with timed auto-advance

use super::viewer::{next_index, Direction};
use std::time::{Duration, Instant};

/// Default time each slide stays up
pub const DEFAULT_SLIDE_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct GalleryCarousel {
    len: usize,
    index: usize,
    interval: Duration,
    last_advance: Instant,
}

impl GalleryCarousel {
    pub fn new(len: usize, interval: Duration, now: Instant) -> Self {
        Self {
            len,
            index: 0,
            interval,
            last_advance: now,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance when the interval has elapsed. While paused the timer is
    /// held at `now` so resuming starts a full interval.
    pub fn tick(&mut self, now: Instant, paused: bool) -> bool {
        if paused {
            self.last_advance = now;
            return false;
        }
        if now.saturating_duration_since(self.last_advance) < self.interval {
            return false;
        }
        self.step(Direction::Forward, now)
    }

    /// Manual navigation; restarts the interval
    pub fn step(&mut self, direction: Direction, now: Instant) -> bool {
        match next_index(Some(self.index), direction, self.len) {
            Some(index) => {
                self.index = index;
                self.last_advance = now;
                true
            }
            None => false,
        }
    }
}
