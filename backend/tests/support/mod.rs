//! Shared helpers for backend integration tests.

pub mod database_skip;

pub use database_skip::test_database_url;
