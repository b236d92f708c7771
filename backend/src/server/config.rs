//! HTTP server configuration object.

use std::net::SocketAddr;

use users_backend::outbound::persistence::DbPool;
use users_seed::SeedDefinition;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) seed: SeedDefinition,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a configuration without a database pool.
    #[must_use]
    pub const fn new(bind_addr: SocketAddr, seed: SeedDefinition) -> Self {
        Self {
            bind_addr,
            seed,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for the Diesel users store.
    ///
    /// Without a pool the server serves a seeded in-memory store.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
