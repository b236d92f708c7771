//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! [`DieselUsersStore`] implements the driven users ports over a `bb8` pool
//! of `diesel-async` connections. Row structs (`models.rs`) and table
//! definitions (`schema.rs`) stay private to this module; only domain types
//! cross the boundary.
//!
//! # Example
//!
//! ```rust,no_run
//! use users_backend::outbound::persistence::{DbPool, DieselUsersStore, PoolConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/users")).await?;
//! let store = DieselUsersStore::new(pool);
//! # let _ = store;
//! # Ok(())
//! # }
//! ```

mod diesel_users_store;
mod models;
mod pool;
mod schema;

pub use diesel_users_store::DieselUsersStore;
pub use pool::{DbPool, PoolConfig, PoolError};
