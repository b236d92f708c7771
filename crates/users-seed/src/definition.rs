//! Seed definitions naming a reproducible dataset.

/// RNG seed used when no override is configured.
pub const DEFAULT_SEED: u64 = 0x5EED_0001;

/// Number of users installed when no override is configured.
pub const DEFAULT_USER_COUNT: usize = 200;

/// Largest dataset the generator will produce.
pub const MAX_USER_COUNT: usize = 10_000;

/// Parameters identifying a deterministic dataset.
///
/// # Example
///
/// ```
/// use users_seed::{DEFAULT_USER_COUNT, SeedDefinition};
///
/// let definition = SeedDefinition::default();
/// assert_eq!(definition.user_count(), DEFAULT_USER_COUNT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedDefinition {
    seed: u64,
    user_count: usize,
}

impl SeedDefinition {
    /// Build a definition from an RNG seed and a user count.
    #[must_use]
    pub const fn new(seed: u64, user_count: usize) -> Self {
        Self { seed, user_count }
    }

    /// RNG seed driving username generation.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of usernames in the dataset.
    #[must_use]
    pub const fn user_count(&self) -> usize {
        self.user_count
    }
}

impl Default for SeedDefinition {
    fn default() -> Self {
        Self::new(DEFAULT_SEED, DEFAULT_USER_COUNT)
    }
}
