//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`UsersQuery`, `UsersCommand`) are called by inbound
//! adapters. Driven ports (`UsersStore`, `UsersTableReset`) are implemented by
//! outbound adapters and report failures as [`UsersStoreError`].

mod users_command;
mod users_query;
mod users_store;
mod users_table_reset;

pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_query::UsersQuery;
#[cfg(test)]
pub use users_query::MockUsersQuery;
#[cfg(test)]
pub use users_store::MockUsersStore;
pub use users_store::{UsersStore, UsersStoreError};
#[cfg(test)]
pub use users_table_reset::MockUsersTableReset;
pub use users_table_reset::UsersTableReset;
