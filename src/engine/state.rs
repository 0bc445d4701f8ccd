//! Run state and summary types
//!
//! One `RunState` is created per run, mutated in place by the engine, and
//! discarded on game over. Only the best-run record survives across runs.

use serde::{Deserialize, Serialize};

use super::powerup::PowerUpKind;
use super::scoring::{Multiplier, multiplier_for};
use crate::consts::*;

/// Current phase of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Waiting for the start command
    Ready,
    /// Active question with a live countdown
    Playing,
    /// A reward offer is pending the player's choice
    PowerUpSelect,
    /// Run ended; only a fresh start leaves this phase
    GameOver,
}

/// Distance milestones surfaced on the game-over card.
pub const MILESTONES: [(u32, &str); 3] = [(100, "100m"), (500, "500m"), (1000, "1000m")];

/// Mutable state for one run, owned exclusively by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunState {
    pub phase: RunPhase,
    /// Remaining lives, always within 0..=MAX_LIVES
    pub lives: u8,
    /// Cumulative score in meters; never decreases during a run
    pub distance: u32,
    /// Consecutive correct answers since the last miss
    pub streak: u32,
    /// Running maximum of `streak` within the run
    pub longest_streak: u32,
    pub questions_answered: u32,
    pub correct_count: u32,
    pub power_ups_used: u32,
    /// Owned, unspent power-ups in pickup order
    pub inventory: Vec<PowerUpKind>,
    /// Correct answers since the last reward offer (or miss)
    pub consecutive_since_power_up: u32,
    /// The pending reward choice while in PowerUpSelect
    pub offer: Option<[PowerUpKind; 2]>,
    /// Option indices hidden on the current question
    pub eliminated: Vec<usize>,
    /// Index into the active question batch
    pub question_index: usize,
    /// Seconds left on the current countdown (mirrors the timer for display)
    pub time_left: f32,
    /// The limit the current countdown was armed with
    pub time_limit: f32,
    /// Whether this run beat the stored best; set at game over
    pub is_new_best: bool,
}

impl RunState {
    /// Fresh state for a new run.
    pub fn new() -> Self {
        Self {
            phase: RunPhase::Ready,
            lives: STARTING_LIVES,
            distance: 0,
            streak: 0,
            longest_streak: 0,
            questions_answered: 0,
            correct_count: 0,
            power_ups_used: 0,
            inventory: Vec::new(),
            consecutive_since_power_up: 0,
            offer: None,
            eliminated: Vec::new(),
            question_index: 0,
            time_left: BASE_TIME_LIMIT,
            time_limit: BASE_TIME_LIMIT,
            is_new_best: false,
        }
    }

    /// Current streak multiplier tier.
    pub fn multiplier(&self) -> Multiplier {
        multiplier_for(self.streak)
    }

    /// Correct answers as a rounded percentage of questions answered.
    pub fn accuracy(&self) -> u32 {
        if self.questions_answered == 0 {
            0
        } else {
            (self.correct_count * 100 + self.questions_answered / 2) / self.questions_answered
        }
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

/// Final stats surfaced when a run ends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub distance: u32,
    pub questions_answered: u32,
    /// Rounded percentage
    pub accuracy: u32,
    pub longest_streak: u32,
    pub power_ups_used: u32,
    pub is_new_best: bool,
}

impl RunSummary {
    pub fn from_state(state: &RunState) -> Self {
        Self {
            distance: state.distance,
            questions_answered: state.questions_answered,
            accuracy: state.accuracy(),
            longest_streak: state.longest_streak,
            power_ups_used: state.power_ups_used,
            is_new_best: state.is_new_best,
        }
    }

    /// Milestone labels earned this run.
    pub fn milestones(&self) -> Vec<&'static str> {
        MILESTONES
            .iter()
            .filter(|(distance, _)| self.distance >= *distance)
            .map(|(_, label)| *label)
            .collect()
    }

    /// Plain-text result line for sharing.
    pub fn share_text(&self) -> String {
        format!(
            "\u{1F3C3} Scholar Sprint\n\u{1F4CF} {}m\n\u{1F3AF} {}% accuracy\n\u{1F525} {} best streak",
            self.distance, self.accuracy, self.longest_streak
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_defaults() {
        let state = RunState::new();
        assert_eq!(state.phase, RunPhase::Ready);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.distance, 0);
        assert!(state.inventory.is_empty());
        assert_eq!(state.multiplier().value, 1);
    }

    #[test]
    fn test_accuracy_rounding() {
        let mut state = RunState::new();
        assert_eq!(state.accuracy(), 0);
        state.questions_answered = 3;
        state.correct_count = 2;
        assert_eq!(state.accuracy(), 67);
        state.questions_answered = 8;
        state.correct_count = 8;
        assert_eq!(state.accuracy(), 100);
    }

    #[test]
    fn test_summary_milestones() {
        let mut state = RunState::new();
        state.distance = 640;
        let summary = RunSummary::from_state(&state);
        assert_eq!(summary.milestones(), vec!["100m", "500m"]);

        state.distance = 40;
        assert!(RunSummary::from_state(&state).milestones().is_empty());
    }
}
