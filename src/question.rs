//! Question supply boundary
//!
//! The engine consumes an effectively infinite stream of shuffled questions
//! in batches and has no knowledge of where they originate (fixed bank,
//! remote fetch, generator).

use rand::{Rng, SeedableRng};
use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// A multiple-choice question supplied externally. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    /// Answer options, at least 2
    pub options: Vec<String>,
    pub correct_index: usize,
    /// Shown after a miss, if present
    #[serde(default)]
    pub explanation: Option<String>,
    /// Topic tag for display
    #[serde(default)]
    pub subject: Option<String>,
}

impl Question {
    /// Whether the engine can safely run this question: two or more options
    /// and an in-range correct index.
    pub fn is_well_formed(&self) -> bool {
        self.options.len() >= 2 && self.correct_index < self.options.len()
    }

    /// Indices of the wrong answer options.
    pub fn wrong_indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.options.len()).filter(|&i| i != self.correct_index)
    }
}

/// Produces batches of shuffled questions for the engine.
pub trait QuestionSupplier {
    /// Return up to `n` questions. An empty result is a hard failure for
    /// the engine, so implementations should only return empty when they
    /// genuinely have nothing.
    fn draw_batch(&mut self, n: usize) -> Vec<Question>;
}

/// Supplier backed by a fixed bank, reshuffled per pass and cycled so the
/// stream never runs dry.
pub struct BankSupplier {
    bank: Vec<Question>,
    rng: Pcg32,
    /// Id of the last question handed out, to avoid an immediate repeat
    /// across batch boundaries.
    last_drawn: Option<String>,
}

impl BankSupplier {
    /// Build a supplier over `bank`, dropping malformed entries up front so
    /// the engine never sees them.
    pub fn new(bank: Vec<Question>, seed: u64) -> Self {
        let total = bank.len();
        let bank: Vec<Question> = bank.into_iter().filter(Question::is_well_formed).collect();
        let dropped = total - bank.len();
        if dropped > 0 {
            log::warn!("dropped {dropped} malformed question(s) from bank");
        }
        Self {
            bank,
            rng: Pcg32::seed_from_u64(seed),
            last_drawn: None,
        }
    }

    pub fn len(&self) -> usize {
        self.bank.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bank.is_empty()
    }
}

impl QuestionSupplier for BankSupplier {
    fn draw_batch(&mut self, n: usize) -> Vec<Question> {
        if self.bank.is_empty() || n == 0 {
            return Vec::new();
        }

        let mut batch: Vec<Question> = Vec::with_capacity(n);
        while batch.len() < n {
            let mut pass = self.bank.clone();
            pass.shuffle(&mut self.rng);

            // Keep the seam between passes from repeating a question.
            let prev = batch
                .last()
                .map(|q| q.id.clone())
                .or_else(|| self.last_drawn.clone());
            if pass.len() > 1 {
                if let Some(prev) = prev {
                    if pass[0].id == prev {
                        let swap = self.rng.random_range(1..pass.len());
                        pass.swap(0, swap);
                    }
                }
            }
            batch.extend(pass);
        }

        batch.truncate(n);
        self.last_drawn = batch.last().map(|q| q.id.clone());
        batch
    }
}
