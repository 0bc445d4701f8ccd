//! Distance scoring and the difficulty ramp
//!
//! Pure helpers mapping streak length to a multiplier tier and run distance
//! to the next question's time limit. The breakpoints are a tuned table,
//! not a derived formula.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Named multiplier bracket determined by streak length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiplierTier {
    Base,
    Gold,
    Flame,
    Rainbow,
}

impl MultiplierTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            MultiplierTier::Base => "base",
            MultiplierTier::Gold => "gold",
            MultiplierTier::Flame => "flame",
            MultiplierTier::Rainbow => "rainbow",
        }
    }
}

/// Streak multiplier: scales the distance gained per correct answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Multiplier {
    pub value: u32,
    pub tier: MultiplierTier,
}

/// Multiplier for a streak, from the fixed threshold table.
pub fn multiplier_for(streak: u32) -> Multiplier {
    match streak {
        10.. => Multiplier {
            value: 5,
            tier: MultiplierTier::Rainbow,
        },
        6.. => Multiplier {
            value: 3,
            tier: MultiplierTier::Flame,
        },
        3.. => Multiplier {
            value: 2,
            tier: MultiplierTier::Gold,
        },
        _ => Multiplier {
            value: 1,
            tier: MultiplierTier::Base,
        },
    }
}

/// Countdown for the next question at a given distance. Non-increasing in
/// distance, floored so the game stays theoretically answerable.
pub fn time_limit_for(distance: u32) -> f32 {
    (BASE_TIME_LIMIT - (distance / TIME_RAMP_INTERVAL) as f32).max(MIN_TIME_LIMIT)
}

/// Distance gained for one correct answer under `multiplier`.
pub fn distance_gain(multiplier: Multiplier) -> u32 {
    BASE_DISTANCE_PER_QUESTION * multiplier.value
}
