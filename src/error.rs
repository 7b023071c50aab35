//! Error types for scoring.

use thiserror::Error;

/// Errors raised by the scoring engine.
///
/// All variants are terminal for the call that raised them: there is no
/// retry and no partial result. Failure policy (fallback scores, retries)
/// belongs to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    /// Scoring was attempted on a scorer that was never given a model.
    #[error("scorer not initialized: construct it with Scorer::new before scoring")]
    Uninitialized,

    /// A branch decision referenced a child node id absent from the current
    /// node's children. The model is malformed; the whole scoring call is
    /// aborted since the ensemble sum is only meaningful when complete.
    #[error("invalid model: missing node id {nodeid}")]
    NodeNotFound {
        /// The unresolvable child identifier.
        nodeid: u32,
    },

    /// The top-level scoring input was neither a record nor a sequence of
    /// records, or a feature value was not numeric.
    #[error("invalid input to score: expected an object or an array of objects, got {got}")]
    InvalidInput {
        /// Description of what was found instead.
        got: String,
    },
}
