//! In-process users store.
//!
//! [`InMemoryUsersStore`] implements the same driven ports as the Diesel
//! adapter over a mutex-guarded map. The server falls back to it when no
//! database is configured, and tests substitute it for PostgreSQL.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UsersStore, UsersStoreError, UsersTableReset};
use crate::domain::{User, UserId, Username, UsersFilter};

#[derive(Debug)]
struct State {
    rows: BTreeMap<UserId, Username>,
    next_id: i32,
}

impl State {
    const fn empty() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    fn allocate_id(&mut self) -> Result<UserId, UsersStoreError> {
        let id = UserId::new(self.next_id)
            .map_err(|err| UsersStoreError::query(format!("id allocation failed: {err}")))?;
        self.next_id = self
            .next_id
            .checked_add(1)
            .ok_or_else(|| UsersStoreError::query("user id space exhausted"))?;
        Ok(id)
    }

    fn insert(&mut self, username: &Username) -> Result<User, UsersStoreError> {
        let id = self.allocate_id()?;
        self.rows.insert(id, username.clone());
        Ok(User::new(id, username.clone()))
    }
}

/// Mutex-guarded users table with a monotonic id counter.
///
/// Ids are never reissued after deletion; only [`UsersTableReset::reset`]
/// restarts the counter at 1.
///
/// # Examples
/// ```
/// use users_backend::domain::ports::UsersStore;
/// use users_backend::domain::{Username, UsersFilter};
/// use users_backend::outbound::memory::InMemoryUsersStore;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let store = InMemoryUsersStore::new();
/// let ada = store
///     .insert(&Username::new("ada").expect("valid username"))
///     .await
///     .expect("insert");
/// assert_eq!(ada.id().get(), 1);
/// assert_eq!(store.find_all(&UsersFilter::all()).await.expect("list").len(), 1);
/// # });
/// ```
#[derive(Debug)]
pub struct InMemoryUsersStore {
    state: Mutex<State>,
}

impl Default for InMemoryUsersStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryUsersStore {
    /// Create an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(State::empty()),
        }
    }

    /// Create a store holding `seed`, with ids assigned from 1 in order.
    ///
    /// # Errors
    /// Returns [`UsersStoreError::Query`] if the seed exceeds the id range.
    pub fn with_seed(seed: &[Username]) -> Result<Self, UsersStoreError> {
        let mut state = State::empty();
        for username in seed {
            state.insert(username)?;
        }
        Ok(Self {
            state: Mutex::new(state),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, UsersStoreError> {
        self.state
            .lock()
            .map_err(|_| UsersStoreError::query("users store lock poisoned"))
    }
}

#[async_trait]
impl UsersStore for InMemoryUsersStore {
    async fn find_all(&self, filter: &UsersFilter) -> Result<Vec<User>, UsersStoreError> {
        let state = self.lock()?;
        Ok(state
            .rows
            .iter()
            .map(|(id, username)| User::new(*id, username.clone()))
            .filter(|user| filter.matches(user))
            .collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UsersStoreError> {
        let state = self.lock()?;
        Ok(state
            .rows
            .get(&id)
            .map(|username| User::new(id, username.clone())))
    }

    async fn insert(&self, username: &Username) -> Result<User, UsersStoreError> {
        self.lock()?.insert(username)
    }

    async fn delete_by_id(&self, id: UserId) -> Result<Option<User>, UsersStoreError> {
        let mut state = self.lock()?;
        Ok(state
            .rows
            .remove(&id)
            .map(|username| User::new(id, username)))
    }
}

#[async_trait]
impl UsersTableReset for InMemoryUsersStore {
    async fn reset(&self, seed: &[Username]) -> Result<usize, UsersStoreError> {
        let mut rebuilt = State::empty();
        for username in seed {
            rebuilt.insert(username)?;
        }
        let mut state = self.lock()?;
        *state = rebuilt;
        Ok(seed.len())
    }
}
