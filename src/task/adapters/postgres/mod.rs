//! `PostgreSQL` adapter for the remote task table.

mod config;
mod models;
mod schema;
mod store;

pub use config::{DATABASE_URL_VAR, POOL_SIZE_VAR, PostgresConfigError, PostgresStoreConfig};
pub use store::{PostgresRemoteTaskStore, TaskPgPool};
