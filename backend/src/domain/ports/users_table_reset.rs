//! Port for rebuilding the users table to a known seed state.

use async_trait::async_trait;

use super::UsersStoreError;
use crate::domain::Username;

/// Bulk reset of the users table, used by test setup and tooling.
///
/// Implementations drop all rows, restart id assignment at 1, and insert
/// `seed` in order so the n-th username receives id n. Running the reset
/// twice with the same seed yields the same state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersTableReset: Send + Sync {
    /// Rebuild the table and return how many rows were inserted.
    async fn reset(&self, seed: &[Username]) -> Result<usize, UsersStoreError>;
}
