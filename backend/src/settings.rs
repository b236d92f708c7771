//! Service configuration loaded via OrthoConfig.
//!
//! Values are layered from CLI flags, `USERS_*` environment variables, and
//! configuration files. Unset values fall back to the defaults below.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use users_seed::{DEFAULT_SEED, DEFAULT_USER_COUNT, SeedDefinition};

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;
/// Default listen address.
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
/// Default upper bound on pooled database connections.
pub const DEFAULT_POOL_MAX_SIZE: u32 = 10;
/// Environment variable consulted when no database URL is configured.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Configuration values for the users service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS")]
pub struct ServiceSettings {
    /// Address to bind the HTTP listener to.
    pub host: Option<IpAddr>,
    /// Port to bind the HTTP listener to.
    pub port: Option<u16>,
    /// PostgreSQL connection URL; the in-memory store is used when absent.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub pool_max_size: Option<u32>,
    /// Rebuild the users table with the seed dataset before serving.
    #[ortho_config(default = false)]
    pub reset_on_startup: bool,
    /// Override for the seed driving username generation.
    pub seed: Option<u64>,
    /// Override for the number of seeded users.
    pub seed_user_count: Option<usize>,
}

impl ServiceSettings {
    /// Socket address the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Configured database URL, falling back to `DATABASE_URL`.
    ///
    /// Blank values are treated as unset.
    #[must_use]
    pub fn database_url(&self) -> Option<String> {
        self.database_url
            .clone()
            .or_else(|| std::env::var(DATABASE_URL_ENV).ok())
            .filter(|url| !url.trim().is_empty())
    }

    /// Maximum pooled connections, falling back to the default.
    #[must_use]
    pub fn pool_max_size(&self) -> u32 {
        self.pool_max_size.unwrap_or(DEFAULT_POOL_MAX_SIZE)
    }

    /// Seed dataset definition installed by the reset hook.
    #[must_use]
    pub fn seed_definition(&self) -> SeedDefinition {
        SeedDefinition::new(
            self.seed.unwrap_or(DEFAULT_SEED),
            self.seed_user_count.unwrap_or(DEFAULT_USER_COUNT),
        )
    }
}
