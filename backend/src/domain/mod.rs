//! Domain primitives, ports, and services for the users resource.
//!
//! Purpose: define the strongly typed user entity, the transport agnostic
//! error payload, and the rules governing lookup, filtering, creation, and
//! deletion. Inbound adapters call the driving ports in [`ports`]; outbound
//! adapters implement the driven ports.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — failure category plus human-readable reason.
//! - User (alias to `user::User`) — store-assigned id and username.
//! - UsersService — implements `UsersQuery` and `UsersCommand` over a `UsersStore`.
//! - UsersTableResetService — the no-argument reset hook used by test setup.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
mod users_reset;
mod users_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{USERNAME_MAX, User, UserId, UserValidationError, Username, UsersFilter};
pub use self::users_reset::UsersTableResetService;
pub use self::users_service::{UsersService, user_not_found};
