//! Run controller
//!
//! Orchestrates the phase state machine: `Ready → Playing ↔ PowerUpSelect`,
//! terminating in `GameOver` when lives run out. Wires the question
//! supplier, countdown timer, scoring table, power-up economy, and best-run
//! persistence together. Exactly one logical writer mutates the run state;
//! callers on a threaded runtime must serialize access themselves.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::powerup::{PowerUpKind, draw_offer_pair, fifty_fifty_picks};
use super::scoring::{distance_gain, multiplier_for, time_limit_for};
use super::state::{RunPhase, RunState, RunSummary};
use super::timer::{QuestionTimer, TimerSignal};
use crate::consts::*;
use crate::error::EngineError;
use crate::persistence::{BestRun, BestRunStore};
use crate::question::{Question, QuestionSupplier};

/// What an `answer` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerVerdict {
    /// Correct: distance gained after the streak multiplier.
    Correct { gained: u32 },
    /// Wrong: carries the index that would have been correct.
    Wrong { correct_index: usize },
    /// Guarded off: not playing, option eliminated, or index out of range.
    Ignored,
}

/// What a `tick` call observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Countdown advanced (or is frozen); nothing notable happened.
    Running,
    /// The countdown expired; handled as a miss with no selected option.
    TimedOut,
    /// Tick outside of Playing; no-op.
    Idle,
}

/// Single-owner run controller.
pub struct RunEngine<S, P> {
    state: RunState,
    timer: QuestionTimer,
    questions: Vec<Question>,
    supplier: S,
    store: P,
    rng: Pcg32,
}

impl<S: QuestionSupplier, P: BestRunStore> RunEngine<S, P> {
    /// Build an engine. `seed` drives every random draw the engine makes
    /// (offer pairs, 50/50 elimination), so runs are reproducible.
    pub fn new(seed: u64, supplier: S, store: P) -> Self {
        Self {
            state: RunState::new(),
            timer: QuestionTimer::new(),
            questions: Vec::new(),
            supplier,
            store,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn timer(&self) -> &QuestionTimer {
        &self.timer
    }

    /// The active question, if the run has one.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.state.question_index)
    }

    /// Stored best run, fresh from the store.
    pub fn best(&self) -> BestRun {
        self.store.load()
    }

    /// Final stats; meaningful once the run reaches GameOver.
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_state(&self.state)
    }

    /// Start a fresh run. Valid from any phase; the previous run's state
    /// (including unspent inventory) is discarded.
    pub fn start(&mut self) -> Result<(), EngineError> {
        self.timer.cancel();
        self.state = RunState::new();
        self.questions = self.draw_batch()?;
        self.state.phase = RunPhase::Playing;
        self.arm_timer();
        log::info!("run started");
        Ok(())
    }

    /// Advance the countdown by `dt` seconds. Expiry is treated identically
    /// to a wrong answer, except no option is marked selected.
    pub fn tick(&mut self, dt: f32) -> Result<TickOutcome, EngineError> {
        if self.state.phase != RunPhase::Playing {
            return Ok(TickOutcome::Idle);
        }
        match self.timer.tick(dt) {
            TimerSignal::Expired => {
                self.state.time_left = 0.0;
                self.state.questions_answered += 1;
                self.miss()?;
                Ok(TickOutcome::TimedOut)
            }
            TimerSignal::Running => {
                self.state.time_left = self.timer.remaining();
                Ok(TickOutcome::Running)
            }
            TimerSignal::Idle => Ok(TickOutcome::Idle),
        }
    }

    /// Answer the current question with option `index`. Accepting an answer
    /// pre-empts the countdown, so a same-window expiry can no longer fire.
    pub fn answer(&mut self, index: usize) -> Result<AnswerVerdict, EngineError> {
        if self.state.phase != RunPhase::Playing {
            return Ok(AnswerVerdict::Ignored);
        }
        let Some(question) = self.questions.get(self.state.question_index) else {
            return Ok(AnswerVerdict::Ignored);
        };
        if index >= question.options.len() || self.state.eliminated.contains(&index) {
            return Ok(AnswerVerdict::Ignored);
        }

        self.timer.cancel();
        let correct_index = question.correct_index;
        self.state.questions_answered += 1;

        if index == correct_index {
            let gained = self.score_correct();
            if self.state.consecutive_since_power_up >= POWER_UP_TRIGGER {
                self.open_offer();
            } else {
                self.advance()?;
            }
            Ok(AnswerVerdict::Correct { gained })
        } else {
            self.miss()?;
            Ok(AnswerVerdict::Wrong { correct_index })
        }
    }

    /// Take one of the two offered power-ups. Ignored unless an offer is
    /// pending and `kind` is part of it; the unchosen kind is discarded.
    pub fn select_power_up(&mut self, kind: PowerUpKind) -> Result<bool, EngineError> {
        if self.state.phase != RunPhase::PowerUpSelect {
            return Ok(false);
        }
        let Some(offer) = self.state.offer else {
            return Ok(false);
        };
        if !offer.contains(&kind) {
            return Ok(false);
        }

        self.state.inventory.push(kind);
        self.state.offer = None;
        self.state.phase = RunPhase::Playing;
        self.advance()?;
        Ok(true)
    }

    /// Spend one owned power-up. Returns false when none of `kind` is owned
    /// or the phase forbids spending.
    pub fn use_power_up(&mut self, kind: PowerUpKind) -> Result<bool, EngineError> {
        if self.state.phase != RunPhase::Playing {
            return Ok(false);
        }
        let Some(slot) = self.state.inventory.iter().position(|&k| k == kind) else {
            return Ok(false);
        };
        self.state.inventory.remove(slot);
        self.state.power_ups_used += 1;

        match kind {
            PowerUpKind::Skip => {
                // No penalty, no reward; streak, distance and lives untouched.
                self.timer.cancel();
                self.advance()?;
            }
            PowerUpKind::FiftyFifty => {
                if let Some(question) = self.questions.get(self.state.question_index) {
                    let picks = fifty_fifty_picks(question, &self.state.eliminated, &mut self.rng);
                    self.state.eliminated.extend(picks);
                }
            }
            PowerUpKind::ExtraLife => {
                self.state.lives = (self.state.lives + 1).min(MAX_LIVES);
            }
            PowerUpKind::TimeFreeze => {
                self.timer.freeze(TIME_FREEZE_SECS);
            }
        }
        Ok(true)
    }

    fn draw_batch(&mut self) -> Result<Vec<Question>, EngineError> {
        let batch = self.supplier.draw_batch(QUESTION_BATCH_SIZE);
        if batch.is_empty() {
            return Err(EngineError::EmptyBatch);
        }
        Ok(batch)
    }

    /// Apply a correct answer: streak up, tier from the new streak, gain.
    fn score_correct(&mut self) -> u32 {
        self.state.streak += 1;
        self.state.longest_streak = self.state.longest_streak.max(self.state.streak);
        self.state.correct_count += 1;
        let gained = distance_gain(multiplier_for(self.state.streak));
        self.state.distance += gained;
        self.state.consecutive_since_power_up += 1;
        gained
    }

    /// Apply a wrong answer or timeout.
    fn miss(&mut self) -> Result<(), EngineError> {
        self.state.streak = 0;
        self.state.consecutive_since_power_up = 0;
        self.state.lives = self.state.lives.saturating_sub(1);
        if self.state.lives == 0 {
            self.finish();
            Ok(())
        } else {
            self.advance()
        }
    }

    /// Move to the next question, pulling a new batch when the current one
    /// runs out so the stream stays uninterrupted.
    fn advance(&mut self) -> Result<(), EngineError> {
        self.state.eliminated.clear();
        let next = self.state.question_index + 1;
        if next >= self.questions.len() {
            self.questions = self.draw_batch()?;
            self.state.question_index = 0;
        } else {
            self.state.question_index = next;
        }
        self.arm_timer();
        Ok(())
    }

    fn arm_timer(&mut self) {
        let limit = time_limit_for(self.state.distance);
        self.state.time_limit = limit;
        self.state.time_left = limit;
        self.timer.arm(limit);
    }

    /// Enough correct answers since the last offer: draw a distinct pair
    /// and pause the run for the choice. Ignored if an offer is already
    /// pending.
    fn open_offer(&mut self) {
        if self.state.phase == RunPhase::PowerUpSelect {
            return;
        }
        self.state.consecutive_since_power_up = 0;
        self.state.offer = Some(draw_offer_pair(&mut self.rng));
        self.state.phase = RunPhase::PowerUpSelect;
        self.timer.cancel();
    }

    /// Terminal life loss: finalize counters and persist the best run.
    /// A failed write is logged by the store; the in-memory new-best signal
    /// stands either way.
    fn finish(&mut self) {
        self.state.phase = RunPhase::GameOver;
        self.state.offer = None;
        self.timer.cancel();

        let candidate = BestRun {
            distance: self.state.distance,
            questions_answered: self.state.questions_answered,
            longest_streak: self.state.longest_streak,
            date: chrono::Utc::now().to_rfc3339(),
        };
        self.state.is_new_best = candidate.distance > self.store.load().distance;
        self.store.save_if_better(&candidate);
        log::info!(
            "run over: {}m over {} questions, best streak {}{}",
            self.state.distance,
            self.state.questions_answered,
            self.state.longest_streak,
            if self.state.is_new_best { " (new best)" } else { "" }
        );
    }
}
