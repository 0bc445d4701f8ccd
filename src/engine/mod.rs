//! Deterministic run engine
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Discrete events and fixed-resolution timer ticks only
//! - Seeded RNG only
//! - Exactly one logical writer of the run state
//! - No rendering or platform dependencies

pub mod powerup;
pub mod run;
pub mod scoring;
pub mod state;
pub mod timer;

pub use powerup::{ALL_POWER_UPS, PowerUpKind, draw_offer_pair, fifty_fifty_picks};
pub use run::{AnswerVerdict, RunEngine, TickOutcome};
pub use scoring::{Multiplier, MultiplierTier, distance_gain, multiplier_for, time_limit_for};
pub use state::{MILESTONES, RunPhase, RunState, RunSummary};
pub use timer::{QuestionTimer, TimerSignal};
