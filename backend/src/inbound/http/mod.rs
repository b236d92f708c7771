//! HTTP inbound adapter exposing the `/users` resource.

pub mod envelope;
pub mod error;
pub mod schemas;
pub mod state;
pub mod users;

pub use error::{ApiResult, unmatched_route};
