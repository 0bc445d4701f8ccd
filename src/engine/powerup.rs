//! Power-up catalog and economy helpers
//!
//! A reward offer of two distinct power-ups appears every
//! `consts::POWER_UP_TRIGGER` consecutive correct answers. The run engine
//! owns the trigger counter and inventory; the pure pieces live here.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::question::Question;

/// Consumable power-up types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PowerUpKind {
    /// Discard the current question without penalty or reward
    Skip,
    /// Eliminate two wrong options on the current question
    FiftyFifty,
    /// +1 life, capped at `consts::MAX_LIVES`
    ExtraLife,
    /// Freeze the countdown for `consts::TIME_FREEZE_SECS`
    TimeFreeze,
}

/// Every power-up kind, in catalog order.
pub const ALL_POWER_UPS: [PowerUpKind; 4] = [
    PowerUpKind::Skip,
    PowerUpKind::FiftyFifty,
    PowerUpKind::ExtraLife,
    PowerUpKind::TimeFreeze,
];

impl PowerUpKind {
    pub fn name(&self) -> &'static str {
        match self {
            PowerUpKind::Skip => "Skip",
            PowerUpKind::FiftyFifty => "50/50",
            PowerUpKind::ExtraLife => "Extra Life",
            PowerUpKind::TimeFreeze => "Time Freeze",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PowerUpKind::Skip => "Skip this question",
            PowerUpKind::FiftyFifty => "Remove 2 wrong answers",
            PowerUpKind::ExtraLife => "+1 life (max 5)",
            PowerUpKind::TimeFreeze => "Pause timer for 10s",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PowerUpKind::Skip => "⏭️",
            PowerUpKind::FiftyFifty => "✂️",
            PowerUpKind::ExtraLife => "❤️",
            PowerUpKind::TimeFreeze => "❄️",
        }
    }
}

/// Draw two distinct kinds for a reward offer. The unchosen one is discarded
/// by the caller, not returned to any pool.
pub fn draw_offer_pair(rng: &mut impl Rng) -> [PowerUpKind; 2] {
    let mut pool = ALL_POWER_UPS;
    pool.shuffle(rng);
    [pool[0], pool[1]]
}

/// Pick up to two not-yet-eliminated wrong options to hide for a 50/50.
/// Never returns the correct option; returns fewer than two picks when
/// fewer wrong options remain.
pub fn fifty_fifty_picks(
    question: &Question,
    eliminated: &[usize],
    rng: &mut impl Rng,
) -> Vec<usize> {
    let mut wrong: Vec<usize> = question
        .wrong_indices()
        .filter(|i| !eliminated.contains(i))
        .collect();
    wrong.shuffle(rng);
    wrong.truncate(2);
    wrong
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn four_option_question() -> Question {
        Question {
            id: "q".to_string(),
            text: "pick one".to_string(),
            options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct_index: 2,
            explanation: None,
            subject: None,
        }
    }

    #[test]
    fn test_catalog_metadata() {
        assert_eq!(PowerUpKind::FiftyFifty.name(), "50/50");
        assert_eq!(PowerUpKind::ExtraLife.description(), "+1 life (max 5)");
        assert_eq!(ALL_POWER_UPS.len(), 4);
    }

    #[test]
    fn test_fifty_fifty_with_one_wrong_option_left() {
        let question = four_option_question();
        let mut rng = Pcg32::seed_from_u64(9);
        // Two of the three wrong options already hidden.
        let picks = fifty_fifty_picks(&question, &[0, 1], &mut rng);
        assert_eq!(picks, vec![3]);

        // Nothing left to hide.
        let picks = fifty_fifty_picks(&question, &[0, 1, 3], &mut rng);
        assert!(picks.is_empty());
    }

    proptest! {
        #[test]
        fn prop_offer_pair_distinct(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let [first, second] = draw_offer_pair(&mut rng);
            prop_assert_ne!(first, second);
        }

        #[test]
        fn prop_fifty_fifty_never_hits_correct(seed in any::<u64>()) {
            let question = four_option_question();
            let mut rng = Pcg32::seed_from_u64(seed);
            let picks = fifty_fifty_picks(&question, &[], &mut rng);
            prop_assert_eq!(picks.len(), 2);
            prop_assert!(!picks.contains(&question.correct_index));
            prop_assert_ne!(picks[0], picks[1]);
        }
    }
}
