//! Error types for seed generation.

use thiserror::Error;

/// Errors that can occur while generating a seed dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The requested dataset is larger than the generator supports.
    #[error("user count {requested} exceeds the maximum of {max}")]
    TooManyUsers {
        /// Number of users requested by the seed definition.
        requested: usize,
        /// Largest supported dataset.
        max: usize,
    },

    /// No unused username could be produced within the retry budget.
    #[error("failed to generate a unique username after {max_attempts} attempts")]
    UsernameSpaceExhausted {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },
}
