//! Engine error type
//!
//! Almost everything the engine hits at runtime is recoverable locally
//! (storage failures fall back to defaults, malformed questions are filtered
//! at the supplier boundary, redundant commands are ignored). The one hard
//! failure is a supplier that produces nothing at all.

use thiserror::Error;

/// Errors that abort an operation rather than the run.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The supplier returned no questions. The caller should retry or fix
    /// the supplier; the engine cannot continue without a question stream.
    #[error("question supplier returned an empty batch")]
    EmptyBatch,
}
