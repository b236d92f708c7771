//! Reset hook restoring the users table to its seed state.
//!
//! Test setup and tooling call [`UsersTableResetService::reset_users_table`]
//! before mutating data so each independent run observes the same rows. The
//! HTTP handlers never call it.

use std::sync::Arc;

use tracing::{error, info};
use users_seed::{SeedDefinition, generate_usernames};

use crate::domain::ports::{UsersStoreError, UsersTableReset};
use crate::domain::{Error, Username};

/// Installs a fixed username dataset through a [`UsersTableReset`] port.
#[derive(Clone)]
pub struct UsersTableResetService {
    reset: Arc<dyn UsersTableReset>,
    seed: Arc<[Username]>,
}

impl UsersTableResetService {
    /// Build a service that installs `seed` on every reset.
    pub fn new(reset: Arc<dyn UsersTableReset>, seed: Vec<Username>) -> Self {
        Self {
            reset,
            seed: seed.into(),
        }
    }

    /// Build a service whose seed is generated from `definition`.
    ///
    /// # Errors
    /// Returns [`crate::domain::ErrorCode::InternalError`] when the generator
    /// rejects the definition or yields an unusable username.
    pub fn from_definition(
        reset: Arc<dyn UsersTableReset>,
        definition: &SeedDefinition,
    ) -> Result<Self, Error> {
        let seed = generate_usernames(definition)
            .map_err(|err| Error::internal(format!("failed to generate seed users: {err}")))?
            .into_iter()
            .map(Username::new)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| Error::internal(format!("generated invalid seed username: {err}")))?;
        Ok(Self::new(reset, seed))
    }

    /// Usernames installed by each reset, in id order.
    #[must_use]
    pub fn seed(&self) -> &[Username] {
        &self.seed
    }

    /// Drop and rebuild the users table with the fixed dataset.
    ///
    /// Returns the number of rows inserted.
    pub async fn reset_users_table(&self) -> Result<usize, Error> {
        let inserted = self.reset.reset(&self.seed).await.map_err(|err| {
            error!(error = %err, "users table reset failed");
            match err {
                UsersStoreError::Connection { message } => {
                    Error::service_unavailable(format!("users store unavailable: {message}"))
                }
                UsersStoreError::Query { message } => {
                    Error::internal(format!("users table reset failed: {message}"))
                }
            }
        })?;
        info!(inserted, "users table reset");
        Ok(inserted)
    }
}
