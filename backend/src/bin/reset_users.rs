//! Rebuild the `users` table and install the deterministic seed dataset.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::io;
use std::sync::Arc;

use clap::Parser;
use tokio::runtime::Builder;
use users_backend::domain::UsersTableResetService;
use users_backend::outbound::persistence::{DbPool, DieselUsersStore, PoolConfig};
use users_seed::{DEFAULT_SEED, DEFAULT_USER_COUNT, SeedDefinition};

/// `reset-users` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "reset-users",
    about = "Drop, recreate, and reseed the users table",
    version
)]
struct CliArgs {
    /// Database connection URL. Falls back to `DATABASE_URL` when omitted.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
    /// Seed for deterministic username generation.
    #[arg(long = "seed", value_name = "u64", default_value_t = DEFAULT_SEED)]
    seed: u64,
    /// Number of users to insert.
    #[arg(long = "user-count", value_name = "count", default_value_t = DEFAULT_USER_COUNT)]
    user_count: usize,
}

fn main() -> io::Result<()> {
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let database_url = resolve_database_url(args.database_url)?;
    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(1))
        .await
        .map_err(|error| io::Error::other(format!("create database pool: {error}")))?;

    let store = Arc::new(DieselUsersStore::new(pool));
    let definition = SeedDefinition::new(args.seed, args.user_count);
    let service = UsersTableResetService::from_definition(store, &definition)
        .map_err(|error| io::Error::other(format!("prepare seed dataset: {error}")))?;

    let inserted = service
        .reset_users_table()
        .await
        .map_err(|error| io::Error::other(format!("reset users table: {error}")))?;

    println!("seed={}", definition.seed());
    println!("inserted_rows={inserted}");

    Ok(())
}

fn resolve_database_url(explicit: Option<String>) -> io::Result<String> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "--database-url must not be empty when provided",
            ));
        }
        return Ok(value);
    }

    let from_env = env::var("DATABASE_URL").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "database URL missing: set --database-url or DATABASE_URL",
        )
    })?;
    if from_env.trim().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "DATABASE_URL must not be empty",
        ));
    }
    Ok(from_env)
}

#[cfg(test)]
mod tests {
    //! Unit tests for CLI parsing helpers.

    use clap::Parser;
    use rstest::rstest;

    use super::{CliArgs, resolve_database_url};

    #[rstest]
    fn resolve_database_url_rejects_empty_explicit() {
        let error = resolve_database_url(Some("   ".to_owned())).expect_err("empty should fail");
        assert_eq!(error.kind(), std::io::ErrorKind::InvalidInput);
    }

    #[rstest]
    fn resolve_database_url_prefers_explicit_value() {
        let url = resolve_database_url(Some("postgres://localhost/users".to_owned()))
            .expect("explicit url");
        assert_eq!(url, "postgres://localhost/users");
    }

    #[rstest]
    fn cli_defaults_to_standard_seed() {
        let args = CliArgs::try_parse_from(["reset-users"]).expect("parse defaults");
        assert_eq!(args.seed, users_seed::DEFAULT_SEED);
        assert_eq!(args.user_count, users_seed::DEFAULT_USER_COUNT);
        assert!(args.database_url.is_none());
    }

    #[rstest]
    fn cli_accepts_overrides() {
        let args = CliArgs::try_parse_from([
            "reset-users",
            "--database-url",
            "postgres://db/users",
            "--seed",
            "9",
            "--user-count",
            "25",
        ])
        .expect("parse overrides");
        assert_eq!(args.database_url.as_deref(), Some("postgres://db/users"));
        assert_eq!(args.seed, 9);
        assert_eq!(args.user_count, 25);
    }
}
