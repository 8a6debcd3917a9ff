// file: src/cli/mod.rs
// version: 1.0.0
// guid: 5bbc308f-cce3-4052-8b5c-0fb05a1583c0

//! Command line interface for the Docker command reference

pub mod args;
pub mod commands;

pub use args::Cli;
pub use commands::*;
