//! Scholar Sprint - endless speed-quiz run engine
//!
//! Core modules:
//! - `engine`: deterministic run state machine (scoring, timer, power-ups)
//! - `question`: question supplier boundary
//! - `persistence`: best-run storage
//!
//! The engine is single-threaded and event-driven: all state mutation happens
//! in response to a timer tick, a player answer, or a power-up command, one
//! at a time.

pub mod engine;
pub mod error;
pub mod persistence;
pub mod question;

pub use engine::{
    AnswerVerdict, Multiplier, MultiplierTier, PowerUpKind, QuestionTimer, RunEngine, RunPhase,
    RunState, RunSummary, TickOutcome, TimerSignal,
};
pub use error::EngineError;
pub use persistence::{BestRun, BestRunStore, JsonFileStore, MemoryStore};
pub use question::{BankSupplier, Question, QuestionSupplier};

/// Gameplay tuning constants
pub mod consts {
    /// Lives at the start of a run
    pub const STARTING_LIVES: u8 = 3;
    /// Hard cap on lives (ExtraLife cannot exceed this)
    pub const MAX_LIVES: u8 = 5;

    /// Distance gained per correct answer, before the streak multiplier
    pub const BASE_DISTANCE_PER_QUESTION: u32 = 10;

    /// Countdown for the very first question (seconds)
    pub const BASE_TIME_LIMIT: f32 = 15.0;
    /// The countdown never drops below this (seconds)
    pub const MIN_TIME_LIMIT: f32 = 5.0;
    /// One second is shaved off the limit per this much distance
    pub const TIME_RAMP_INTERVAL: u32 = 200;
    /// Reference timer tick resolution (seconds)
    pub const TIMER_TICK: f32 = 0.1;

    /// Consecutive correct answers that earn a power-up offer
    pub const POWER_UP_TRIGGER: u32 = 10;
    /// How long TimeFreeze suspends the countdown (seconds)
    pub const TIME_FREEZE_SECS: f32 = 10.0;

    /// Questions pulled from the supplier per batch
    pub const QUESTION_BATCH_SIZE: usize = 50;
}
