// file: src/render/mod.rs
// version: 1.0.0
// guid: f44598fa-544f-4d93-b277-058e0ed2105c

//! Rendering pipeline: registry → list view → card renderer

pub mod card;
pub mod list;

pub use card::{CommandCardRenderer, RenderedCard};
pub use list::{CardGroup, CommandListView, RenderedList, UNCATEGORIZED};
