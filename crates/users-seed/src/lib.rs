//! Deterministic seed usernames for the users table.
//!
//! The reset routine rebuilds the `users` table from a fixed dataset so every
//! isolated test run observes the same rows. This crate produces that dataset
//! from a named [`SeedDefinition`]: the same definition always yields the
//! same usernames in the same order, and every username in a dataset is
//! unique so filtering by any seeded username matches exactly one row.
//!
//! It has no dependency on the backend so tooling can generate datasets
//! without pulling in the web or persistence stack.
//!
//! # Example
//!
//! ```
//! use users_seed::{SeedDefinition, generate_usernames};
//!
//! let definition = SeedDefinition::new(7, 5);
//! let first = generate_usernames(&definition).expect("generation succeeds");
//! let second = generate_usernames(&definition).expect("generation succeeds");
//!
//! assert_eq!(first.len(), 5);
//! assert_eq!(first, second);
//! ```

mod definition;
mod error;
mod generator;

pub use definition::{DEFAULT_SEED, DEFAULT_USER_COUNT, MAX_USER_COUNT, SeedDefinition};
pub use error::GenerationError;
pub use generator::generate_usernames;
