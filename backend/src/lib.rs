//! Users resource service.
//!
//! A hexagonal actix-web service exposing CRUD over a single `users` table.
//! The [`domain`] owns the rules, [`inbound::http`] translates requests, and
//! [`outbound`] provides PostgreSQL and in-memory stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
