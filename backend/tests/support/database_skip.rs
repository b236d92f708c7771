//! Helpers for controlling PostgreSQL-backed test behaviour.
//!
//! Suites that need a real database read its URL from
//! `USERS_TEST_DATABASE_URL`. When the variable is unset or blank the suite
//! prints a skip marker and returns early, so the default test run needs no
//! database.

/// Environment variable naming the disposable test database.
pub const TEST_DATABASE_URL_ENV: &str = "USERS_TEST_DATABASE_URL";

/// Returns the test database URL, or prints a skip marker and returns `None`.
///
/// The database is rebuilt by the reset hook, so never point this at data you
/// want to keep.
pub fn test_database_url(suite: &str) -> Option<String> {
    match std::env::var(TEST_DATABASE_URL_ENV) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => {
            eprintln!("SKIP-TEST-DATABASE: {suite} requires {TEST_DATABASE_URL_ENV}");
            None
        }
    }
}
