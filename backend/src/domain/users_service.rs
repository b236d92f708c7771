//! Users domain service.
//!
//! Implements the driving ports over a [`UsersStore`], turning absent rows
//! into not-found errors and store failures into service errors.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::domain::ports::{UsersCommand, UsersQuery, UsersStore, UsersStoreError};
use crate::domain::{Error, User, UserId, Username, UsersFilter};

/// Not-found error for a user id, naming the id as requested.
///
/// # Examples
/// ```
/// use users_backend::domain::user_not_found;
///
/// assert_eq!(user_not_found(7).message(), "No user with ID 7 was found");
/// ```
pub fn user_not_found(id: impl fmt::Display) -> Error {
    Error::not_found(format!("No user with ID {id} was found"))
}

/// Users service implementing [`UsersQuery`] and [`UsersCommand`].
#[derive(Clone)]
pub struct UsersService<S> {
    store: Arc<S>,
}

impl<S> UsersService<S> {
    /// Create a new service over the given store.
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

impl<S> UsersService<S>
where
    S: UsersStore,
{
    fn map_store_error(error: UsersStoreError) -> Error {
        match error {
            UsersStoreError::Connection { message } => {
                warn!(%message, "users store unavailable");
                Error::service_unavailable(format!("users store unavailable: {message}"))
            }
            UsersStoreError::Query { message } => {
                error!(%message, "users store query failed");
                Error::internal(format!("users store error: {message}"))
            }
        }
    }
}

#[async_trait]
impl<S> UsersQuery for UsersService<S>
where
    S: UsersStore,
{
    async fn list_users(&self, filter: &UsersFilter) -> Result<Vec<User>, Error> {
        let users = self
            .store
            .find_all(filter)
            .await
            .map_err(Self::map_store_error)?;
        debug!(count = users.len(), filtered = filter.username().is_some(), "listed users");
        Ok(users)
    }

    async fn fetch_user(&self, id: UserId) -> Result<User, Error> {
        self.store
            .find_by_id(id)
            .await
            .map_err(Self::map_store_error)?
            .ok_or_else(|| user_not_found(id))
    }
}

#[async_trait]
impl<S> UsersCommand for UsersService<S>
where
    S: UsersStore,
{
    async fn create_user(&self, username: Username) -> Result<User, Error> {
        let user = self
            .store
            .insert(&username)
            .await
            .map_err(Self::map_store_error)?;
        debug!(user_id = %user.id(), "created user");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> Result<User, Error> {
        let deleted = self
            .store
            .delete_by_id(id)
            .await
            .map_err(Self::map_store_error)?
            .ok_or_else(|| user_not_found(id))?;
        debug!(user_id = %id, "deleted user");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests;
