//! Tasklist: local to-do list core.
//!
//! This crate provides the persistence, first-run seeding, and list
//! reconciliation logic behind a to-do list client. Presentation is left to
//! the host application.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Task values and validation with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for storage, seeding, and reminders
//! - **Adapters**: Concrete implementations of ports (`SQLite`, HTTP, bundle)
//!
//! # Modules
//!
//! - [`task`]: Task storage, seed fetching, and list coordination
//! - [`config`]: File-backed configuration
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod task;
pub mod telemetry;
