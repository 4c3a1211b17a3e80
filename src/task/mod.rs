//! Task list management.
//!
//! This module keeps a durable collection of tasks, seeds it from a remote
//! or bundled todo list on first run, and maintains the in-memory list and
//! search-filtered view shown to the user. It follows hexagonal
//! architecture:
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
