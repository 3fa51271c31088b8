//! Application state management
//!
//! This module provides the shared application state that is passed
//! to all request handlers via Axum's state extraction.
//!
//! The stores are trait objects so the same router runs against Postgres in
//! production and against the in-memory stores in tests.

use crate::auth::PasswordService;
use crate::config::AppConfig;
use crate::repositories::{
    HistoryRepository, InMemoryHistoryRepository, InMemoryUserRepository, PgHistoryRepository,
    PgUserRepository, UserRepository,
};
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state
///
/// All fields are Arc'd or `Copy`, so cloning per request is O(1).
#[derive(Clone)]
pub struct AppState {
    /// Credential store
    pub users: Arc<dyn UserRepository>,
    /// History store
    pub history: Arc<dyn HistoryRepository>,
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// bcrypt hasher at the configured cost
    pub passwords: PasswordService,
}

impl AppState {
    /// Create a new application state from explicit stores
    pub fn new(
        users: Arc<dyn UserRepository>,
        history: Arc<dyn HistoryRepository>,
        config: AppConfig,
    ) -> Self {
        let passwords = PasswordService::new(config.auth.bcrypt_cost);

        Self {
            users,
            history,
            config: Arc::new(config),
            passwords,
        }
    }

    /// State backed by Postgres stores sharing one pool
    pub fn postgres(pool: PgPool, config: AppConfig) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgHistoryRepository::new(pool)),
            config,
        )
    }

    /// State backed by fresh, empty in-memory stores
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryHistoryRepository::new()),
            config,
        )
    }

    #[inline]
    pub fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }

    #[inline]
    pub fn history(&self) -> &dyn HistoryRepository {
        self.history.as_ref()
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn passwords(&self) -> &PasswordService {
        &self.passwords
    }
}
