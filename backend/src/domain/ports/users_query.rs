//! Driving port for user lookups.
//!
//! Inbound adapters (HTTP handlers) use this port to read users without
//! importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId, UsersFilter};

/// Domain use-case port for listing and fetching users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Users matching `filter`. An empty match set is not an error.
    async fn list_users(&self, filter: &UsersFilter) -> Result<Vec<User>, Error>;

    /// A single user, or a not-found error naming `id`.
    async fn fetch_user(&self, id: UserId) -> Result<User, Error>;
}
