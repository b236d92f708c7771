//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId, Username};

/// Domain use-case port for creating and deleting users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Persist a new user and return it with its assigned id.
    async fn create_user(&self, username: Username) -> Result<User, Error>;

    /// Delete a user, returning the row as it was before removal.
    async fn delete_user(&self, id: UserId) -> Result<User, Error>;
}
