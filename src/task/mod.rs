//! Task board core.
//!
//! The [`services::TaskStore`] is the only writer of the task collection.
//! It waits for the remote store's authoritative row after every mutation
//! and publishes a fresh snapshot, from which the board columns, drag
//! transitions, detail lookup, and dashboard statistics are derived. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
