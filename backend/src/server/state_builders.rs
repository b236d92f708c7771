//! Builders wiring users store adapters into HTTP state and the reset hook.

use std::sync::Arc;

use tracing::warn;

use users_backend::domain::ports::{UsersStore, UsersTableReset};
use users_backend::domain::{Error, UsersService, UsersTableResetService};
use users_backend::inbound::http::state::HttpState;
use users_backend::outbound::memory::InMemoryUsersStore;
use users_backend::outbound::persistence::DieselUsersStore;

use super::ServerConfig;

/// HTTP state plus the reset hook, both backed by the same store.
pub struct UsersBackend {
    pub http_state: HttpState,
    pub reset: UsersTableResetService,
}

fn setup_error(err: &Error) -> std::io::Error {
    std::io::Error::other(format!("users backend setup failed: {err}"))
}

fn assemble<S>(store: Arc<S>, config: &ServerConfig) -> std::io::Result<UsersBackend>
where
    S: UsersStore + UsersTableReset + 'static,
{
    let reset_port: Arc<dyn UsersTableReset> = store.clone();
    let reset = UsersTableResetService::from_definition(reset_port, &config.seed)
        .map_err(|err| setup_error(&err))?;
    let service = Arc::new(UsersService::new(store));
    Ok(UsersBackend {
        http_state: HttpState::new(service.clone(), service),
        reset,
    })
}

/// Build the users backend from configuration.
///
/// Uses the Diesel store when a pool is configured. Otherwise an in-memory
/// store is reset to the seed dataset so the API is usable without a
/// database.
///
/// # Errors
/// Returns [`std::io::Error`] when the seed dataset cannot be generated or
/// installed.
pub async fn build_users_backend(config: &ServerConfig) -> std::io::Result<UsersBackend> {
    match &config.db_pool {
        Some(pool) => assemble(Arc::new(DieselUsersStore::new(pool.clone())), config),
        None => {
            warn!("no database configured; serving users from an in-memory store");
            let backend = assemble(Arc::new(InMemoryUsersStore::new()), config)?;
            backend
                .reset
                .reset_users_table()
                .await
                .map_err(|err| setup_error(&err))?;
            Ok(backend)
        }
    }
}
