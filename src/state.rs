use std::sync::Arc;

use chrono::Duration;

use crate::auth::{PasswordHasher, TokenService};
use crate::config::Config;
use crate::store::{CredentialStore, TaskStore};

/// Read-only state shared by every worker.
///
/// Built once at startup and never mutated; handlers receive it through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn CredentialStore>,
    pub tasks: Arc<dyn TaskStore>,
    pub tokens: TokenService,
    pub hasher: PasswordHasher,
}

impl AppState {
    pub fn new(
        users: Arc<dyn CredentialStore>,
        tasks: Arc<dyn TaskStore>,
        tokens: TokenService,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            users,
            tasks,
            tokens,
            hasher,
        }
    }

    /// Wires a single store that implements both traits using the configured secrets.
    pub fn from_config<S>(store: Arc<S>, config: &Config) -> Self
    where
        S: CredentialStore + TaskStore + 'static,
    {
        Self::new(
            store.clone(),
            store,
            TokenService::new(&config.jwt_secret, Duration::seconds(config.token_ttl_secs)),
            PasswordHasher::new(config.bcrypt_cost),
        )
    }
}
