//! Taskboard: client-side task store and board synchronisation engine.
//!
//! This crate owns the in-memory task collection of a single-board task
//! tracker, mediates every mutation against a remote row store, and derives
//! the board, detail, and dashboard views from immutable snapshots of the
//! collection.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Task entity, validated fields, and status enumeration
//! - **Ports**: Remote row store contract and outcome notifications
//! - **Adapters**: In-memory and `PostgreSQL` stores, notifier sinks
//! - **Services**: Task store, board reconciler, detail resolver, dashboard
//!
//! # Modules
//!
//! - [`task`]: Task board core

pub mod task;
