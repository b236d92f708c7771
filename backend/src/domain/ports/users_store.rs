//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{User, UserId, Username, UsersFilter};

/// Persistence errors raised by users store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsersStoreError {
    /// Store connection could not be established or was lost.
    #[error("users store connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("users store query failed: {message}")]
    Query { message: String },
}

impl UsersStoreError {
    /// Build a [`UsersStoreError::Connection`].
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Build a [`UsersStoreError::Query`].
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Row-level access to the `users` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersStore: Send + Sync {
    /// Every user matching `filter`, ordered by ascending id.
    async fn find_all(&self, filter: &UsersFilter) -> Result<Vec<User>, UsersStoreError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UsersStoreError>;

    /// Insert a row and return it with its freshly assigned id.
    async fn insert(&self, username: &Username) -> Result<User, UsersStoreError>;

    /// Remove a row, returning its prior state when it existed.
    async fn delete_by_id(&self, id: UserId) -> Result<Option<User>, UsersStoreError>;
}
