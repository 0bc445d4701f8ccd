//! Per-question countdown
//!
//! A single owned timer handle with explicit arm/freeze/cancel, in place of
//! a callback re-armed on every tick. Cancelling on a phase change means a
//! stale expiry can never fire against a new question.

use serde::{Deserialize, Serialize};

/// What a tick observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerSignal {
    /// Not armed: never armed, cancelled, or already expired.
    Idle,
    /// Counting down (or frozen).
    Running,
    /// The countdown just reached zero. Fires once per arm.
    Expired,
}

/// Countdown for the active question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionTimer {
    remaining: f32,
    limit: f32,
    armed: bool,
    /// Seconds left in the active freeze window; 0 = not frozen
    freeze_left: f32,
}

impl QuestionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh countdown from `limit` seconds. Clears any freeze.
    pub fn arm(&mut self, limit: f32) {
        self.remaining = limit;
        self.limit = limit;
        self.armed = true;
        self.freeze_left = 0.0;
    }

    /// Suspend the countdown for `duration` seconds without resetting the
    /// remaining time. A second freeze replaces the active window rather
    /// than stacking on top of it.
    pub fn freeze(&mut self, duration: f32) {
        if self.armed {
            self.freeze_left = duration.max(0.0);
        }
    }

    /// Stop ticking. Subsequent ticks are no-ops until re-armed.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.freeze_left = 0.0;
    }

    /// Advance by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> TimerSignal {
        if !self.armed {
            return TimerSignal::Idle;
        }
        if self.freeze_left > 0.0 {
            self.freeze_left = (self.freeze_left - dt).max(0.0);
            return TimerSignal::Running;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.armed = false;
            return TimerSignal::Expired;
        }
        TimerSignal::Running
    }

    /// Seconds left on the countdown.
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// The limit this countdown was armed with.
    pub fn limit(&self) -> f32 {
        self.limit
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn is_frozen(&self) -> bool {
        self.armed && self.freeze_left > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TIMER_TICK;

    #[test]
    fn test_counts_down_and_expires_once() {
        let mut timer = QuestionTimer::new();
        timer.arm(0.3);
        assert_eq!(timer.tick(TIMER_TICK), TimerSignal::Running);
        assert_eq!(timer.tick(TIMER_TICK), TimerSignal::Running);
        assert_eq!(timer.tick(TIMER_TICK), TimerSignal::Expired);
        // Expiry is edge-triggered; later ticks are idle.
        assert_eq!(timer.tick(TIMER_TICK), TimerSignal::Idle);
        assert_eq!(timer.remaining(), 0.0);
    }

    #[test]
    fn test_cancel_stops_ticking() {
        let mut timer = QuestionTimer::new();
        timer.arm(1.0);
        timer.cancel();
        assert_eq!(timer.tick(10.0), TimerSignal::Idle);
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_freeze_suspends_without_resetting() {
        let mut timer = QuestionTimer::new();
        timer.arm(1.0);
        timer.tick(0.5);
        timer.freeze(0.2);
        assert!(timer.is_frozen());

        // Frozen ticks burn the freeze window, not the countdown.
        assert_eq!(timer.tick(TIMER_TICK), TimerSignal::Running);
        assert_eq!(timer.tick(TIMER_TICK), TimerSignal::Running);
        assert!((timer.remaining() - 0.5).abs() < 1e-6);
        assert!(!timer.is_frozen());

        // Countdown resumes from where it left off.
        assert_eq!(timer.tick(TIMER_TICK), TimerSignal::Running);
        assert!((timer.remaining() - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_second_freeze_replaces_window() {
        let mut timer = QuestionTimer::new();
        timer.arm(5.0);
        timer.freeze(100.0);
        timer.freeze(0.1);
        // The long window is gone; one tick ends the freeze.
        timer.tick(TIMER_TICK);
        assert!(!timer.is_frozen());
        timer.tick(TIMER_TICK);
        assert!(timer.remaining() < 5.0);
    }

    #[test]
    fn test_freeze_when_unarmed_is_a_no_op() {
        let mut timer = QuestionTimer::new();
        timer.freeze(10.0);
        assert!(!timer.is_frozen());
        assert_eq!(timer.tick(TIMER_TICK), TimerSignal::Idle);
    }

    #[test]
    fn test_rearm_clears_freeze() {
        let mut timer = QuestionTimer::new();
        timer.arm(1.0);
        timer.freeze(50.0);
        timer.arm(2.0);
        assert!(!timer.is_frozen());
        timer.tick(TIMER_TICK);
        assert!((timer.remaining() - 1.9).abs() < 1e-6);
    }
}
