//! Backend entry-point: loads settings, wires the users store, and serves the
//! `/users` resource.

mod server;

use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, build_users_backend, create_server};
use users_backend::outbound::persistence::{DbPool, PoolConfig};
use users_backend::settings::ServiceSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let mut config = ServerConfig::new(settings.bind_addr(), settings.seed_definition());
    if let Some(database_url) = settings.database_url() {
        let pool_config = PoolConfig::new(database_url).with_max_size(settings.pool_max_size());
        let pool = DbPool::new(pool_config)
            .await
            .map_err(|e| std::io::Error::other(format!("database pool setup failed: {e}")))?;
        config = config.with_db_pool(pool);
    }

    let backend = build_users_backend(&config).await?;
    if settings.reset_on_startup {
        let inserted = backend
            .reset
            .reset_users_table()
            .await
            .map_err(|e| std::io::Error::other(format!("users table reset failed: {e}")))?;
        info!(inserted, "reset users table on startup");
    }

    info!(addr = %config.bind_addr(), "starting users service");
    create_server(backend, &config)?.await
}
