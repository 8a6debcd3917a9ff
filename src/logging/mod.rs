// file: src/logging/mod.rs
// version: 1.0.0
// guid: f120e692-c2d4-4a81-808c-a0cc34c58850

//! Logging system for the Docker command reference

pub mod logger;

pub use logger::{init_logger, with_operation_span};
