// file: src/config/mod.rs
// version: 1.0.0
// guid: bf5272c8-ddab-45d2-893f-aa7c0b9e7f21

//! Configuration module for the Docker command reference
//!
//! Handles loading of command data files and of the user settings file.

pub mod loader;
pub mod settings;

pub use loader::{parse_registry, ConfigLoader, SourceFormat};
pub use settings::{ColorChoice, DisplaySettings, Settings, SourceSettings};
