//! Step definitions for task list behaviour tests.

pub mod given;
pub mod then;
pub mod world;
