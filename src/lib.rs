// file: src/lib.rs
// version: 1.0.0
// guid: ffb6621d-7e6b-426f-a1e0-c8859379d5ae

//! # Docker Command Reference
//!
//! An ordered table of Docker command descriptions rendered into display-ready
//! cards, then written out as terminal text, JSON or Markdown.
//!
//! ```
//! use docker_reference::{CommandDescription, CommandListView, CommandRegistry};
//!
//! let registry = CommandRegistry::from_records(vec![
//!     CommandDescription::new("Build", "docker build -t app ."),
//! ]);
//! let list = CommandListView::new().render(&registry).unwrap();
//! assert_eq!(list.cards()[0].snippet, "docker build -t app .");
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod surface;

pub use catalog::{CommandDescription, CommandRegistry};
pub use error::{ReferenceError, Result};
pub use render::{CommandCardRenderer, CommandListView, RenderedCard, RenderedList};
