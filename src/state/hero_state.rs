//! Hero intro animation state

use std::time::{Duration, Instant};

/// Animation phase for the hero intro
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroPhase {
    /// Title held still before the reveal
    Hold,
    /// Subtitle sliding into place
    Reveal,
    /// Animation finished
    Settled,
}

/// Hero intro animation state
#[derive(Debug)]
pub struct HeroState {
    /// When the intro started (shifted forward while paused)
    pub start_time: Instant,
    /// Current animation phase
    pub phase: HeroPhase,
    /// Reveal progress, eased, 0.0 to 1.0
    pub reveal: f32,
    paused_at: Option<Instant>,
}

impl HeroState {
    /// Hold duration before the reveal starts
    const HOLD_DURATION: Duration = Duration::from_millis(900);
    /// Duration of the reveal animation
    const REVEAL_DURATION: Duration = Duration::from_millis(800);

    pub fn new(now: Instant) -> Self {
        Self {
            start_time: now,
            phase: HeroPhase::Hold,
            reveal: 0.0,
            paused_at: None,
        }
    }

    /// Update animation state for the current time
    pub fn update(&mut self, now: Instant) {
        if self.paused_at.is_some() || self.phase == HeroPhase::Settled {
            return;
        }

        let elapsed = now.saturating_duration_since(self.start_time);
        if elapsed < Self::HOLD_DURATION {
            self.phase = HeroPhase::Hold;
            self.reveal = 0.0;
        } else if elapsed < Self::HOLD_DURATION + Self::REVEAL_DURATION {
            self.phase = HeroPhase::Reveal;
            let progress = (elapsed - Self::HOLD_DURATION).as_secs_f32()
                / Self::REVEAL_DURATION.as_secs_f32();
            // Cubic ease-out for smooth deceleration
            self.reveal = simple_easing::cubic_out(progress);
        } else {
            self.phase = HeroPhase::Settled;
            self.reveal = 1.0;
        }
    }

    /// Freeze the timeline
    pub fn pause(&mut self, now: Instant) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    /// Resume, shifting the start so no progress is lost or skipped
    pub fn resume(&mut self, now: Instant) {
        if let Some(paused_at) = self.paused_at.take() {
            self.start_time += now.saturating_duration_since(paused_at);
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    /// Jump to the end (user scrolled or pressed a key)
    pub fn skip(&mut self) {
        self.phase = HeroPhase::Settled;
        self.reveal = 1.0;
    }

    pub fn is_settled(&self) -> bool {
        self.phase == HeroPhase::Settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_in_hold_phase() {
        let state = HeroState::new(Instant::now());
        assert_eq!(state.phase, HeroPhase::Hold);
        assert_eq!(state.reveal, 0.0);
        assert!(!state.is_settled());
    }

    #[test]
    fn test_update_during_hold() {
        let start = Instant::now();
        let mut state = HeroState::new(start);
        state.update(start + Duration::from_millis(100));
        assert_eq!(state.phase, HeroPhase::Hold);
        assert_eq!(state.reveal, 0.0);
    }

    #[test]
    fn test_update_during_reveal() {
        let start = Instant::now();
        let mut state = HeroState::new(start);
        state.update(start + Duration::from_millis(1300));
        assert_eq!(state.phase, HeroPhase::Reveal);
        assert!(state.reveal > 0.0 && state.reveal < 1.0);
    }

    #[test]
    fn test_update_settles() {
        let start = Instant::now();
        let mut state = HeroState::new(start);
        state.update(start + Duration::from_secs(5));
        assert!(state.is_settled());
        assert_eq!(state.reveal, 1.0);
    }

    #[test]
    fn test_skip_settles_immediately() {
        let mut state = HeroState::new(Instant::now());
        state.skip();
        state.skip();
        assert!(state.is_settled());
        assert_eq!(state.reveal, 1.0);
    }

    #[test]
    fn test_paused_timeline_does_not_advance() {
        let start = Instant::now();
        let mut state = HeroState::new(start);
        state.pause(start + Duration::from_millis(100));
        state.update(start + Duration::from_secs(5));
        assert_eq!(state.phase, HeroPhase::Hold);
        assert!(state.is_paused());
    }

    #[test]
    fn test_resume_shifts_start() {
        let start = Instant::now();
        let mut state = HeroState::new(start);
        state.pause(start + Duration::from_millis(100));
        state.resume(start + Duration::from_secs(10));
        assert!(!state.is_paused());
        // 10.1s wall clock, but only 200ms of unpaused time
        state.update(start + Duration::from_millis(10_100));
        assert_eq!(state.phase, HeroPhase::Hold);
    }
}
