//! Environment configuration for the `PostgreSQL` task store.

use super::TaskPgPool;
use crate::task::ports::{RemoteStoreError, RemoteStoreResult};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use thiserror::Error;

/// Environment variable holding the database URL.
pub const DATABASE_URL_VAR: &str = "TASKBOARD_DATABASE_URL";

/// Environment variable holding the connection pool size.
pub const POOL_SIZE_VAR: &str = "TASKBOARD_PG_POOL_SIZE";

const DEFAULT_POOL_SIZE: u32 = 4;

/// Errors returned while reading store configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostgresConfigError {
    /// A required variable is unset or not valid Unicode.
    #[error("environment variable {0} is not set")]
    MissingVariable(&'static str),

    /// The pool size is not a positive integer.
    #[error("invalid pool size '{0}', expected a positive integer")]
    InvalidPoolSize(String),
}

/// Connection settings for [`PostgresRemoteTaskStore`](super::PostgresRemoteTaskStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresStoreConfig {
    /// `postgres://` connection URL.
    pub database_url: String,
    /// Maximum pooled connections.
    pub pool_max_size: u32,
}

impl PostgresStoreConfig {
    /// Creates settings for `database_url` with the default pool size.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            pool_max_size: DEFAULT_POOL_SIZE,
        }
    }

    /// Reads settings from `TASKBOARD_DATABASE_URL` and the optional
    /// `TASKBOARD_PG_POOL_SIZE`.
    ///
    /// # Errors
    ///
    /// Returns [`PostgresConfigError`] when the URL is missing or the pool
    /// size is malformed.
    pub fn from_env() -> Result<Self, PostgresConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`PostgresConfigError`] when the URL is missing or the pool
    /// size is malformed.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, PostgresConfigError> {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(PostgresConfigError::MissingVariable(DATABASE_URL_VAR))?;
        let pool_max_size = match lookup(POOL_SIZE_VAR) {
            Some(raw) => parse_pool_size(&raw)?,
            None => DEFAULT_POOL_SIZE,
        };
        Ok(Self {
            database_url,
            pool_max_size,
        })
    }

    /// Builds a connection pool from these settings.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteStoreError::Persistence`] when the pool cannot be
    /// built.
    pub fn connect(&self) -> RemoteStoreResult<TaskPgPool> {
        let manager = ConnectionManager::<PgConnection>::new(self.database_url.as_str());
        Pool::builder()
            .max_size(self.pool_max_size)
            .build(manager)
            .map_err(RemoteStoreError::persistence)
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, PostgresConfigError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|size| *size > 0)
        .ok_or_else(|| PostgresConfigError::InvalidPoolSize(raw.to_owned()))
}
